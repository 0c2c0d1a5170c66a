//! System clipboard backend
//!
//! Provides clipboard access via the operating system's native clipboard API
//! using the arboard crate. The handle is kept for the life of the process:
//! on X11 the selection is served by the owner, so dropping it right after a
//! write would lose the text.

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

pub struct NativeClipboard {
    inner: Clipboard,
}

impl NativeClipboard {
    /// Fails in headless environments or when no display server is running.
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;
        Ok(Self { inner })
    }

    pub fn copy(&mut self, text: &str) -> ClipboardResult {
        self.inner
            .set_text(text)
            .map_err(|_| ClipboardError::WriteError)
    }

    pub fn paste(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(|e| match e {
            arboard::Error::ClipboardNotSupported => ClipboardError::SystemUnavailable,
            _ => ClipboardError::ReadError,
        })
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod system_tests;
