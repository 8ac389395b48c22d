use crate::{
    entities::resume::{NewResume, Resume, ResumePatch},
    repositories::resume::ResumeRepository,
};

// Fixed per-operation messages surfaced through the error slot.
const FETCH_RESUMES_FAILED: &str = "Failed to fetch resumes";
const RESUME_NOT_FOUND: &str = "Resume not found";
const FETCH_RESUME_FAILED: &str = "Failed to fetch resume";
const CREATE_RESUME_FAILED: &str = "Failed to create resume";
const UPDATE_RESUME_FAILED: &str = "Failed to update resume";
const NO_RESUME_SELECTED: &str = "No resume selected";
const DELETE_RESUME_FAILED: &str = "Failed to delete resume";
const DUPLICATE_RESUME_FAILED: &str = "Failed to duplicate resume";

/// Session-level orchestration over the résumé store.
///
/// Holds the in-memory collection, the currently edited résumé, a loading
/// flag and a single error slot. Operations are synchronous and run one at
/// a time; the in-memory state only changes with values the store returned,
/// so a failed persistence call leaves it consistent with what is on disk.
pub struct ResumeHandler<R>
where
    R: ResumeRepository,
{
    store: R,
    resumes: Vec<Resume>,
    current: Option<Resume>,
    loading: bool,
    error: Option<String>,
}

impl<R> ResumeHandler<R>
where
    R: ResumeRepository,
{
    /// Builds a handler and loads the persisted collection into memory.
    pub fn new(store: R) -> Self {
        let mut handler = ResumeHandler {
            store,
            resumes: Vec::new(),
            current: None,
            loading: false,
            error: None,
        };
        handler.fetch_resumes();
        handler
    }

    // ───── State Accessors ───────────────────────────────────────────

    pub fn resumes(&self) -> &[Resume] {
        &self.resumes
    }

    pub fn current(&self) -> Option<&Resume> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed operation, cleared by the next
    /// successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ───── Operations ────────────────────────────────────────────────

    /// Reloads the in-memory collection from the store.
    pub fn fetch_resumes(&mut self) {
        self.loading = true;
        match self.store.list_all() {
            Ok(resumes) => {
                self.resumes = resumes;
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch resumes");
                self.error = Some(FETCH_RESUMES_FAILED.into());
            }
        }
        self.loading = false;
    }

    /// Loads one résumé into the `current` slot.
    pub fn fetch_resume_by_id(&mut self, id: &str) {
        self.loading = true;
        match self.store.get_by_id(id) {
            Ok(Some(resume)) => {
                self.current = Some(resume);
                self.error = None;
            }
            Ok(None) => {
                self.error = Some(RESUME_NOT_FOUND.into());
            }
            Err(e) => {
                tracing::error!(error = %e, id, "failed to fetch resume");
                self.error = Some(FETCH_RESUME_FAILED.into());
            }
        }
        self.loading = false;
    }

    /// Persists a new résumé, appends it to the collection and makes it
    /// current. Payloads are stored as given; field requirements are the
    /// caller's concern.
    pub fn create_new_resume(&mut self, data: NewResume) {
        self.loading = true;
        match self.store.create(data) {
            Ok(resume) => {
                self.resumes.push(resume.clone());
                self.current = Some(resume);
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create resume");
                self.error = Some(CREATE_RESUME_FAILED.into());
            }
        }
        self.loading = false;
    }

    /// Applies a partial update to the current résumé and syncs the
    /// in-memory collection with the updated record.
    pub fn update_current_resume(&mut self, patch: ResumePatch) {
        let Some(current) = &self.current else {
            self.error = Some(NO_RESUME_SELECTED.into());
            return;
        };
        let id = current.id.clone();

        self.loading = true;
        match self.store.update(&id, patch) {
            Ok(Some(updated)) => {
                if let Some(entry) = self.resumes.iter_mut().find(|r| r.id == updated.id) {
                    *entry = updated.clone();
                }
                self.current = Some(updated);
                self.error = None;
            }
            Ok(None) => {
                self.error = Some(UPDATE_RESUME_FAILED.into());
            }
            Err(e) => {
                tracing::error!(error = %e, id, "failed to update resume");
                self.error = Some(UPDATE_RESUME_FAILED.into());
            }
        }
        self.loading = false;
    }

    /// Deletes a résumé; clears `current` when it pointed at the deleted
    /// record.
    pub fn remove_resume(&mut self, id: &str) {
        self.loading = true;
        match self.store.remove(id) {
            Ok(true) => {
                self.resumes.retain(|resume| resume.id != id);
                if self.current.as_ref().is_some_and(|c| c.id == id) {
                    self.current = None;
                }
                self.error = None;
            }
            Ok(false) => {
                self.error = Some(DELETE_RESUME_FAILED.into());
            }
            Err(e) => {
                tracing::error!(error = %e, id, "failed to delete resume");
                self.error = Some(DELETE_RESUME_FAILED.into());
            }
        }
        self.loading = false;
    }

    /// Duplicates a résumé and appends the copy to the collection.
    pub fn duplicate_resume_by_id(&mut self, id: &str) {
        self.loading = true;
        match self.store.duplicate(id) {
            Ok(Some(copy)) => {
                self.resumes.push(copy);
                self.error = None;
            }
            Ok(None) => {
                self.error = Some(DUPLICATE_RESUME_FAILED.into());
            }
            Err(e) => {
                tracing::error!(error = %e, id, "failed to duplicate resume");
                self.error = Some(DUPLICATE_RESUME_FAILED.into());
            }
        }
        self.loading = false;
    }

    pub fn set_current_resume(&mut self, resume: Option<Resume>) {
        self.current = resume;
    }

    /// Replaces `current` with a fresh unsaved draft. Nothing is persisted
    /// until the caller explicitly creates it.
    pub fn reset_to_empty(&mut self) {
        self.current = Some(Resume::draft());
    }
}
