use crate::{
    entities::resume::{NewResume, Resume, ResumePatch},
    errors::AppError,
};

/// Durable CRUD over the résumé collection.
///
/// Not-found is a normal outcome (`None` / `false`), never an error; `Err`
/// is reserved for persistence failures. Implementations must never
/// partially persist: a failed write leaves the stored collection as it was.
#[cfg_attr(test, mockall::automock)]
pub trait ResumeRepository: Send + Sync {
    /// All persisted résumés in insertion order. An empty or unreadable
    /// store yields an empty collection.
    fn list_all(&self) -> Result<Vec<Resume>, AppError>;

    fn get_by_id(&self, id: &str) -> Result<Option<Resume>, AppError>;

    /// Assigns a fresh id and timestamps, appends and persists.
    fn create(&self, data: NewResume) -> Result<Resume, AppError>;

    /// Shallow-merges `patch` over the stored record and bumps `updatedAt`.
    /// `id` and `createdAt` are immutable.
    fn update(&self, id: &str, patch: ResumePatch) -> Result<Option<Resume>, AppError>;

    /// True if a record was removed, false if the id was absent (no-op).
    fn remove(&self, id: &str) -> Result<bool, AppError>;

    /// Deep copy with a new id, " (Copy)" title and fresh timestamps.
    fn duplicate(&self, id: &str) -> Result<Option<Resume>, AppError>;
}
