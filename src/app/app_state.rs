use std::time::Duration;

use crate::bookmarks::BookmarkStore;
use crate::clipboard::{ClipboardListener, ClipboardMonitor, ClipboardSource};
use crate::config::Config;
use crate::editor::ClipboardEditor;
use crate::history::HistoryList;
use crate::launcher;
use crate::notification::NotificationState;
use crate::transform;

use super::command::Command;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    History,
    Bookmarks,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Editor => Focus::History,
            Focus::History => Focus::Bookmarks,
            Focus::Bookmarks => Focus::Editor,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Editor => Focus::Bookmarks,
            Focus::History => Focus::Editor,
            Focus::Bookmarks => Focus::History,
        }
    }
}

/// Application state
///
/// The one context object of the process: it owns the clipboard monitor and
/// every component that reads or writes the clipboard. All methods run on the
/// event-loop thread.
pub struct App {
    pub(super) monitor: ClipboardMonitor,
    pub(super) editor: ClipboardEditor,
    pub(super) history: HistoryList,
    pub(super) bookmarks: BookmarkStore,
    pub(super) notification: NotificationState,
    pub(super) focus: Focus,
    pub(super) help_visible: bool,
    should_quit: bool,
    poll_interval: Duration,
}

impl App {
    pub fn new(source: Box<dyn ClipboardSource>, bookmarks: BookmarkStore, config: &Config) -> Self {
        let mut monitor = ClipboardMonitor::new(source);
        let editor = ClipboardEditor::new(&monitor.current_text());

        Self {
            monitor,
            editor,
            history: HistoryList::new(),
            bookmarks,
            notification: NotificationState::new(),
            focus: Focus::Editor,
            help_visible: false,
            should_quit: false,
            poll_interval: Duration::from_millis(config.clipboard.poll_interval_ms.max(1)),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn editor(&self) -> &ClipboardEditor {
        &self.editor
    }

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    pub fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    /// Surface a problem found before the UI started (bad config, corrupt file)
    pub fn report_startup_problem(&mut self, message: &str) {
        self.notification.show_error(message);
    }

    /// One event-loop tick: deliver clipboard changes and expire notifications
    pub fn tick(&mut self) {
        self.sync_clipboard();
        self.notification.clear_if_expired();
    }

    pub fn run_command(&mut self, command: Command) {
        log::debug!("Command: {:?}", command);
        match command {
            Command::CopyEditor => {
                let text = self.editor.text();
                self.set_clipboard(&text, "Copied to clipboard");
            }
            Command::NormalizePath => {
                let text = transform::normalize_path(&self.editor.text());
                self.set_clipboard(&text, "Path normalized");
            }
            Command::ToForwardSlashes => {
                let text = transform::to_forward_slashes(&self.editor.text());
                self.set_clipboard(&text, "Converted to /");
            }
            Command::ToBackSlashes => {
                let text = transform::to_back_slashes(&self.editor.text());
                self.set_clipboard(&text, "Converted to \\");
            }
            Command::Execute => match launcher::execute(&self.editor.text()) {
                Ok(pid) => self.notification.show(&format!("Started process {}", pid)),
                Err(e) => self.notification.show_error(&e.to_string()),
            },
            Command::Open => match launcher::open(&self.editor.text()) {
                Ok(_) => self.notification.show("Opened"),
                Err(e) => self.notification.show_error(&e.to_string()),
            },
            Command::AddBookmark => self.add_bookmark(),
            Command::RemoveBookmark => match self.bookmarks.remove_selected() {
                Ok(_) => self.notification.show("Bookmark removed"),
                Err(e) => self.notification.show_error(&e.to_string()),
            },
            Command::ClearHistory => {
                self.history.clear();
                self.notification.show("History cleared");
            }
            Command::CopySelected => self.copy_selected(),
            Command::Quit => self.should_quit = true,
        }
    }

    fn add_bookmark(&mut self) {
        let text = self.editor.text();
        if text.is_empty() {
            self.notification.show("Nothing to bookmark");
            return;
        }

        match self.bookmarks.add(&text) {
            Ok(()) => self.notification.show("Bookmarked"),
            Err(e) => self.notification.show_error(&format!("Bookmark not saved: {}", e)),
        }
    }

    fn copy_selected(&mut self) {
        let selected = match self.focus {
            Focus::Editor => Some(self.editor.text()),
            Focus::History => self.history.selected_entry().map(str::to_string),
            Focus::Bookmarks => self.bookmarks.selected_entry().map(str::to_string),
        };

        if let Some(text) = selected {
            self.set_clipboard(&text, "Copied to clipboard");
        }
    }

    /// Write the clipboard and apply the resulting change right away
    fn set_clipboard(&mut self, text: &str, message: &str) {
        if let Err(e) = self.monitor.set_text(text) {
            self.notification.show_error(&format!("Clipboard: {}", e));
            return;
        }

        // Write-only backends (OSC 52) never show the change to a read, so
        // keep the editor in step ourselves
        if !self.sync_clipboard() && self.editor.text() != text {
            self.editor.set_text(text);
        }
        self.notification.show(message);
    }

    fn sync_clipboard(&mut self) -> bool {
        let mut listeners: [&mut dyn ClipboardListener; 2] = [&mut self.editor, &mut self.history];
        self.monitor.dispatch(&mut listeners)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
