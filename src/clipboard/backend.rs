//! Clipboard backend selection and error types
//!
//! This module provides the `ClipboardSource` seam the monitor reads through
//! and the default implementation that picks a write path from configuration.

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard writes
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// System clipboard is not available
    #[error("system clipboard is not available")]
    SystemUnavailable,
    /// Clipboard holds no text or could not be read
    #[error("could not read clipboard text")]
    ReadError,
    /// Error writing to clipboard
    #[error("could not write to clipboard")]
    WriteError,
}

/// Anything that can hold clipboard text
pub trait ClipboardSource {
    fn get_text(&mut self) -> Result<String, ClipboardError>;
    fn set_text(&mut self, text: &str) -> ClipboardResult;
}

/// The OS clipboard, with OSC 52 as a write fallback
///
/// # Backend Selection
/// - `System`: Uses only the OS clipboard API (via arboard)
/// - `Osc52`: Writes only through OSC 52 escape sequences; reads still use the OS clipboard
/// - `Auto`: Tries system clipboard first, falls back to OSC 52 if unavailable
pub struct SystemClipboard {
    backend: ClipboardBackend,
    native: Option<system::NativeClipboard>,
}

impl SystemClipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        let native = match system::NativeClipboard::new() {
            Ok(native) => Some(native),
            Err(e) => {
                log::debug!("System clipboard unavailable: {}", e);
                None
            }
        };
        Self { backend, native }
    }

    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }

    fn copy_native(&mut self, text: &str) -> ClipboardResult {
        match self.native.as_mut() {
            Some(native) => native.copy(text),
            None => Err(ClipboardError::SystemUnavailable),
        }
    }
}

impl ClipboardSource for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        match self.native.as_mut() {
            Some(native) => native.paste(),
            None => Err(ClipboardError::SystemUnavailable),
        }
    }

    fn set_text(&mut self, text: &str) -> ClipboardResult {
        match self.backend {
            ClipboardBackend::System => self.copy_native(text),
            ClipboardBackend::Osc52 => osc52::copy(text),
            ClipboardBackend::Auto => self.copy_native(text).or_else(|_| osc52::copy(text)),
        }
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
