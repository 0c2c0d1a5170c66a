//! Tests for clipboard/backend

use super::*;

#[test]
fn test_osc52_backend_write_always_succeeds() {
    let mut clipboard = SystemClipboard::new(ClipboardBackend::Osc52);
    assert!(clipboard.set_text("test").is_ok());
}

#[test]
fn test_system_backend_write() {
    // System clipboard may or may not be available depending on environment
    let mut clipboard = SystemClipboard::new(ClipboardBackend::System);
    let result = clipboard.set_text("test");
    assert!(
        result.is_ok()
            || matches!(
                result,
                Err(ClipboardError::SystemUnavailable | ClipboardError::WriteError)
            )
    );
}

#[test]
fn test_auto_backend_falls_back() {
    // Auto mode always succeeds because it falls back to OSC 52
    let mut clipboard = SystemClipboard::new(ClipboardBackend::Auto);
    assert!(clipboard.set_text("test").is_ok());
}

#[test]
fn test_auto_backend_unicode() {
    let mut clipboard = SystemClipboard::new(ClipboardBackend::Auto);
    assert!(clipboard.set_text("日本語 🎉").is_ok());
}

#[test]
fn test_backend_is_kept() {
    let clipboard = SystemClipboard::new(ClipboardBackend::System);
    assert_eq!(clipboard.backend(), ClipboardBackend::System);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ClipboardError::SystemUnavailable.to_string(),
        "system clipboard is not available"
    );
    assert_eq!(
        ClipboardError::WriteError.to_string(),
        "could not write to clipboard"
    );
}
