use std::time::Duration;

use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, FileCategory};
use store::case_files::CaseFileCabinet;
use uuid::Uuid;

use crate::common;

#[test]
fn test_search_by_name_and_category() {
    let state = common::demo_state();
    let cabinet = &state.case_files;

    assert_eq!(cabinet.search("", None).len(), 3);
    assert_eq!(cabinet.search("DEED", None)[0].name, "Property Deed - Final");
    assert_eq!(cabinet.search("", Some(FileCategory::Statements)).len(), 1);
    assert!(cabinet.search("deed", Some(FileCategory::Agreements)).is_empty());
}

#[test]
fn test_delete_removes_only_that_file() {
    let mut state = common::demo_state();
    let id = state.case_files.files()[1].id;

    let removed = state.case_files.delete(id).unwrap();

    assert_eq!(removed.name, "Statement of Witness");
    assert_eq!(state.case_files.files().len(), 2);
    assert!(state.case_files.delete(id).unwrap_err().is_not_found());
    assert!(state.case_files.delete(Uuid::new_v4()).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_upload_waits_then_lists_file_first() {
    let mut cabinet = CaseFileCabinet::new(Vec::new(), Duration::from_millis(1000));
    let started = tokio::time::Instant::now();

    let file = cabinet
        .upload("rent_agreement.docx", FileCategory::Agreements, 52_000)
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(file.kind, "DOCX");
    assert_eq!(file.category, FileCategory::Agreements);
    assert_eq!(cabinet.files()[0].id, file.id);
    assert!(!cabinet.is_uploading());
}

#[tokio::test(start_paused = true)]
async fn test_upload_requires_a_name() {
    let mut state = common::demo_state();

    let err = state
        .case_files
        .upload("  ", FileCategory::Evidence, 10)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(state.case_files.files().len(), 3);
}

#[test]
fn test_category_parses_label_or_key() {
    assert_eq!(FileCategory::from_str_opt("Court Documents"), Some(FileCategory::CourtDocuments));
    assert_eq!(FileCategory::from_str_opt("court_documents"), Some(FileCategory::CourtDocuments));
    assert_eq!(FileCategory::from_str_opt("receipts"), None);
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_upload_clears_uploading() {
    let mut cabinet = CaseFileCabinet::new(Vec::new(), Duration::from_millis(1000));

    let result = tokio::time::timeout(
        Duration::from_millis(10),
        cabinet.upload("Affidavit.pdf", FileCategory::Statements, 2048),
    )
    .await;

    assert!(result.is_err(), "upload should still be pending");
    assert!(!cabinet.is_uploading());
    assert!(cabinet.files().is_empty());
}

#[test]
fn test_uploading_is_visible_between_begin_and_finish() {
    let mut state = common::demo_state();

    assert!(state.case_files.begin_upload("   ").is_err());
    assert!(!state.case_files.is_uploading());

    let delay = state.case_files.begin_upload("Lease.docx").unwrap();
    assert_eq!(delay, Duration::from_millis(1000));
    assert!(state.case_files.is_uploading());

    let file = state
        .case_files
        .finish_upload("Lease.docx", FileCategory::Agreements, 4096)
        .unwrap();
    assert!(!state.case_files.is_uploading());
    assert_eq!(state.case_files.files()[0].id, file.id);
    assert_eq!(state.case_files.files().len(), 4);
}
