//! The editable text box that mirrors the clipboard

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders},
};
use tui_textarea::{Input, TextArea};

use crate::clipboard::{ChangeOrigin, ClipboardChange, ClipboardListener};
use crate::theme;

pub struct ClipboardEditor {
    textarea: TextArea<'static>,
    /// Set when the user typed since the last clipboard sync
    dirty: bool,
}

impl ClipboardEditor {
    pub fn new(text: &str) -> Self {
        Self {
            textarea: build_textarea(text),
            dirty: false,
        }
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_text(&mut self, text: &str) {
        self.textarea = build_textarea(text);
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Feed a key to the text box. Returns true if the text changed.
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        let changed = self.textarea.input(input);
        if changed {
            self.dirty = true;
        }
        changed
    }

    pub fn render(&mut self, focused: bool, frame: &mut Frame, area: Rect) {
        let border_color = if focused {
            theme::BORDER_FOCUSED
        } else {
            theme::BORDER_UNFOCUSED
        };
        let title = if self.dirty {
            " Clipboard (edited, Ctrl+S to copy) "
        } else {
            " Clipboard "
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );
        if focused {
            self.textarea
                .set_cursor_style(Style::default().add_modifier(ratatui::style::Modifier::REVERSED));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }

        frame.render_widget(&self.textarea, area);
    }
}

impl ClipboardListener for ClipboardEditor {
    fn on_clipboard_change(&mut self, change: &ClipboardChange) {
        if change.origin == ChangeOrigin::External && self.dirty {
            log::debug!("Clipboard changed externally; discarding unsaved edits");
        }
        self.set_text(&change.text);
    }
}

fn build_textarea(text: &str) -> TextArea<'static> {
    let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let mut textarea = TextArea::new(lines);
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod editor_tests;
