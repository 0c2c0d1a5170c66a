//! Clipboard change detection
//!
//! The monitor never schedules itself. The host event loop calls
//! [`ClipboardMonitor::poll`] (or [`ClipboardMonitor::dispatch`]) on its tick.
//! The monitor does not filter repeated content: each change it can observe
//! is reported once.
//!
//! Writes made through [`ClipboardMonitor::set_text`] are known events and
//! always show up as one [`ChangeOrigin::Local`] change on the next poll,
//! identical text included. Changes made by other programs are only visible
//! as a difference between two reads, so an external copy of the text that
//! is already on the clipboard, or A then B then A between two ticks, cannot
//! be seen by polling. Listeners must not write
//! the clipboard from `on_clipboard_change`; with that rule a local write can
//! never feed back into another notification.

use super::backend::{ClipboardResult, ClipboardSource};

/// Who produced a clipboard change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Another program wrote the clipboard
    External,
    /// This process wrote it through `ClipboardMonitor::set_text`
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardChange {
    pub text: String,
    pub origin: ChangeOrigin,
}

/// Receives every observed clipboard change exactly once
pub trait ClipboardListener {
    fn on_clipboard_change(&mut self, change: &ClipboardChange);
}

pub struct ClipboardMonitor {
    source: Box<dyn ClipboardSource>,
    last_seen: Option<String>,
    pending_local: Option<String>,
}

impl ClipboardMonitor {
    /// Primes the monitor with the current clipboard text; that text is not
    /// reported as a change.
    pub fn new(mut source: Box<dyn ClipboardSource>) -> Self {
        let last_seen = source.get_text().ok();
        Self {
            source,
            last_seen,
            pending_local: None,
        }
    }

    /// Current clipboard text, or an empty string if it cannot be read
    pub fn current_text(&mut self) -> String {
        match self.source.get_text() {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Clipboard read failed: {}", e);
                String::new()
            }
        }
    }

    /// Last text the monitor observed, if any
    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    pub fn set_text(&mut self, text: &str) -> ClipboardResult {
        self.source.set_text(text)?;
        self.pending_local = Some(text.to_string());
        Ok(())
    }

    /// Check the clipboard once and report a change if its text moved
    pub fn poll(&mut self) -> Option<ClipboardChange> {
        let text = match self.source.get_text() {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Clipboard poll skipped: {}", e);
                return None;
            }
        };

        // Every write through `set_text` is its own change, even when it
        // puts back the text already there
        let origin = if self.pending_local.as_deref() == Some(text.as_str()) {
            ChangeOrigin::Local
        } else if self.last_seen.as_deref() == Some(text.as_str()) {
            return None;
        } else {
            ChangeOrigin::External
        };
        self.pending_local = None;

        log::debug!("Clipboard changed ({:?}, {} bytes)", origin, text.len());
        self.last_seen = Some(text.clone());
        Some(ClipboardChange { text, origin })
    }

    /// Poll and hand any change to every listener. Returns whether a change
    /// was delivered.
    pub fn dispatch(&mut self, listeners: &mut [&mut dyn ClipboardListener]) -> bool {
        let Some(change) = self.poll() else {
            return false;
        };

        for listener in listeners.iter_mut() {
            listener.on_clipboard_change(&change);
        }
        true
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod monitor_tests;
