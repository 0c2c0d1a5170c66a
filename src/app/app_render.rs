use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::bookmarks::bookmark_render;
use crate::help::{self, KEY_HINTS};
use crate::history::history_render;
use crate::notification::render_notification;
use crate::theme;

use super::app_state::{App, Focus};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Clipboard text on top, the two lists below, key hints at the bottom
        let layout = Layout::vertical([
            Constraint::Percentage(40),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let lists = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[1]);

        self.editor
            .render(self.focus == Focus::Editor, frame, layout[0]);
        history_render::render_pane(&self.history, self.focus == Focus::History, frame, lists[0]);
        bookmark_render::render_pane(
            &self.bookmarks,
            self.focus == Focus::Bookmarks,
            frame,
            lists[1],
        );
        render_key_hints(frame, layout[2]);

        render_notification(frame, &self.notification);

        if self.help_visible {
            help::render_popup(frame);
        }
    }
}

fn render_key_hints(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
    for (key, label) in KEY_HINTS {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(theme::hints::KEY),
        ));
        spans.push(Span::styled(
            format!("{} ", label),
            Style::default().fg(theme::hints::LABEL),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
