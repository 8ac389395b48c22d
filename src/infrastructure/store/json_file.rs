use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;

use crate::{
    entities::resume::{NewResume, Resume, ResumePatch},
    errors::AppError,
    repositories::resume::ResumeRepository,
};

/// File-backed résumé store. The whole collection lives in one JSON array,
/// rewritten on every mutation, mirroring the single-key layout of the
/// browser-storage payloads this crate stays compatible with.
///
/// The mutex serializes read-modify-write cycles so overlapping mutations
/// from one process cannot lose updates. Writes go to a sibling temp file
/// renamed over the target, so a failed write never leaves a half-written
/// collection behind.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a store at `path`, creating parent directories as needed. The
    /// collection file itself is created lazily on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(JsonFileStore {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection. A missing file or a corrupt payload is an
    /// empty collection, not an error.
    fn load_collection(&self) -> Result<Vec<Resume>, AppError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&raw) {
            Ok(resumes) => Ok(resumes),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "unreadable resume collection, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn persist_collection(&self, resumes: &[Resume]) -> Result<(), AppError> {
        let payload = serde_json::to_vec(resumes)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, payload)?;
        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            count = resumes.len(),
            "persisted resume collection"
        );
        Ok(())
    }
}

impl ResumeRepository for JsonFileStore {
    fn list_all(&self) -> Result<Vec<Resume>, AppError> {
        self.load_collection()
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Resume>, AppError> {
        let resumes = self.load_collection()?;
        Ok(resumes.into_iter().find(|resume| resume.id == id))
    }

    fn create(&self, data: NewResume) -> Result<Resume, AppError> {
        let _guard = self.write_lock.lock();

        let mut resumes = self.load_collection()?;
        let new_resume = data.prepare_for_insert();
        resumes.push(new_resume.clone());
        self.persist_collection(&resumes)?;

        Ok(new_resume)
    }

    fn update(&self, id: &str, patch: ResumePatch) -> Result<Option<Resume>, AppError> {
        let _guard = self.write_lock.lock();

        let mut resumes = self.load_collection()?;
        let Some(resume) = resumes.iter_mut().find(|resume| resume.id == id) else {
            return Ok(None);
        };

        resume.apply_patch(patch);
        let updated = resume.clone();
        self.persist_collection(&resumes)?;

        Ok(Some(updated))
    }

    fn remove(&self, id: &str) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock();

        let mut resumes = self.load_collection()?;
        let before = resumes.len();
        resumes.retain(|resume| resume.id != id);

        if resumes.len() == before {
            return Ok(false);
        }

        self.persist_collection(&resumes)?;
        Ok(true)
    }

    fn duplicate(&self, id: &str) -> Result<Option<Resume>, AppError> {
        let _guard = self.write_lock.lock();

        let mut resumes = self.load_collection()?;
        let Some(original) = resumes.iter().find(|resume| resume.id == id) else {
            return Ok(None);
        };

        let copy = original.duplicated();
        resumes.push(copy.clone());
        self.persist_collection(&resumes)?;

        Ok(Some(copy))
    }
}
