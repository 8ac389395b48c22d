mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{store, utils};
pub use interfaces::repositories;

use errors::AppError;
use settings::AppConfig;
use store::json_file::JsonFileStore;
use use_cases::resumes::ResumeHandler;

pub type AppResumeHandler = ResumeHandler<JsonFileStore>;

/// Composition root: one handler over the configured file store, built once
/// per session.
pub struct AppState {
    pub resume_handler: AppResumeHandler,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let store = JsonFileStore::open(config.store_path())?;
        tracing::info!(
            app = %config.name,
            env = %config.env,
            store = %store.path().display(),
            "opened resume store"
        );

        Ok(AppState {
            resume_handler: ResumeHandler::new(store),
        })
    }
}
