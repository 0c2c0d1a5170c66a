//! Tests for ClipmarkError type

use super::*;

#[test]
fn test_corrupt_bookmark_file_display() {
    let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    let error = ClipmarkError::CorruptBookmarkFile {
        path: PathBuf::from("/tmp/bookmarks.json"),
        source,
    };
    let msg = error.to_string();
    assert!(msg.contains("/tmp/bookmarks.json"));
    assert!(msg.contains("corrupt"));
}

#[test]
fn test_corrupt_bookmark_file_exposes_source() {
    use std::error::Error as _;

    let source = serde_json::from_str::<Vec<String>>("[1]").unwrap_err();
    let error = ClipmarkError::CorruptBookmarkFile {
        path: PathBuf::from("b.json"),
        source,
    };
    assert!(error.source().is_some());
}

#[test]
fn test_index_out_of_range_display() {
    let error = ClipmarkError::IndexOutOfRange { index: 4, len: 2 };
    let msg = error.to_string();
    assert!(msg.contains("index 4"));
    assert!(msg.contains("have 2"));
}

#[test]
fn test_external_process_failure_display() {
    let error = ClipmarkError::process("xdg-open /nope", "no default handler");
    assert_eq!(
        error.to_string(),
        "Could not run 'xdg-open /nope': no default handler"
    );
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test error");
    let err = ClipmarkError::from(io_err);
    assert!(matches!(err, ClipmarkError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = ClipmarkError::IndexOutOfRange { index: 0, len: 0 };
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("IndexOutOfRange"));
}
