
use resume_builder::{
    entities::resume::ResumePatch, repositories::resume::ResumeRepository,
    store::json_file::JsonFileStore, use_cases::resumes::ResumeHandler,
};
use tempfile::TempDir;
use test_utils::*;

#[test]
fn full_session_against_a_real_store() {
    let (store, _dir) = spawn_store();
    let mut handler = ResumeHandler::new(store);
    assert!(handler.resumes().is_empty());

    handler.create_new_resume(sample_new_resume());
    assert!(handler.last_error().is_none());
    let id = handler.current().unwrap().id.clone();
    assert_eq!(handler.resumes().len(), 1);

    handler.update_current_resume(ResumePatch::title("Senior Dev Resume"));
    assert!(handler.last_error().is_none());
    assert_eq!(handler.current().unwrap().title, "Senior Dev Resume");
    assert_eq!(handler.resumes()[0].title, "Senior Dev Resume");

    handler.duplicate_resume_by_id(&id);
    assert_eq!(handler.resumes().len(), 2);
    assert_eq!(handler.resumes()[1].title, "Senior Dev Resume (Copy)");

    handler.remove_resume(&id);
    assert_eq!(handler.resumes().len(), 1);
    assert!(handler.current().is_none());
    assert!(handler.last_error().is_none());
}

#[test]
fn handler_state_matches_the_store_after_each_operation() {
    let (store, dir) = spawn_store();
    let mut handler = ResumeHandler::new(store);

    handler.create_new_resume(sample_new_resume());
    handler.create_new_resume(filled_new_resume());

    // A second store over the same file sees exactly what the handler holds.
    let verifier = JsonFileStore::open(dir.path().join("resume_builder_data.json")).unwrap();
    let persisted = verifier.list_all().unwrap();
    assert_eq!(persisted, handler.resumes());
}

#[test]
fn draft_resume_is_not_persisted_until_created() {
    let (store, dir) = spawn_store();
    let mut handler = ResumeHandler::new(store);

    handler.reset_to_empty();
    assert!(handler.current().unwrap().is_draft());

    let verifier = JsonFileStore::open(dir.path().join("resume_builder_data.json")).unwrap();
    assert!(verifier.list_all().unwrap().is_empty());
}

#[test]
fn unwritable_store_surfaces_a_fixed_error_message() {
    // Pointing the store at a directory makes every read and write fail.
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();
    assert!(store.list_all().is_err());

    let mut handler = ResumeHandler::new(store);
    assert_eq!(handler.last_error(), Some("Failed to fetch resumes"));

    handler.create_new_resume(sample_new_resume());
    assert_eq!(handler.last_error(), Some("Failed to create resume"));
    assert!(handler.resumes().is_empty());
    assert!(handler.current().is_none());
}

#[test]
fn operating_on_missing_ids_reports_per_operation_errors() {
    let (store, _dir) = spawn_store();
    let mut handler = ResumeHandler::new(store);

    handler.fetch_resume_by_id("missing");
    assert_eq!(handler.last_error(), Some("Resume not found"));

    handler.remove_resume("missing");
    assert_eq!(handler.last_error(), Some("Failed to delete resume"));

    handler.duplicate_resume_by_id("missing");
    assert_eq!(handler.last_error(), Some("Failed to duplicate resume"));

    handler.update_current_resume(ResumePatch::title("X"));
    assert_eq!(handler.last_error(), Some("No resume selected"));
}
