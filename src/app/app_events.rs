use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;

use super::app_state::{App, Focus};
use super::command::Command;

impl App {
    /// Wait up to one poll interval for input, handle it, then tick
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval())? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                _ => {}
            }
        }
        self.tick();
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.help_visible {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                self.help_visible = false;
            }
            return;
        }

        if let Some(command) = Command::from_global_key(key) {
            self.run_command(command);
            return;
        }

        if self.focus == Focus::History && self.history.is_filtering() {
            self.handle_history_filter_key(key);
            return;
        }

        match key.code {
            KeyCode::F(1) => {
                self.help_visible = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Editor => {
                self.editor.input(key);
            }
            Focus::History => self.handle_history_key(key),
            Focus::Bookmarks => self.handle_bookmarks_key(key),
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.history.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.history.select_next(),
            KeyCode::Enter => self.run_command(Command::CopySelected),
            KeyCode::Char('/') => self.history.start_filter(),
            KeyCode::Esc => self.history.cancel_filter(),
            KeyCode::Char('?') => self.help_visible = true,
            _ => {}
        }
    }

    fn handle_history_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.history.cancel_filter(),
            KeyCode::Enter => self.history.finish_filter(),
            KeyCode::Backspace => self.history.pop_filter_char(),
            KeyCode::Up => self.history.select_previous(),
            KeyCode::Down => self.history.select_next(),
            KeyCode::Char(c) => self.history.push_filter_char(c),
            _ => {}
        }
    }

    fn handle_bookmarks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.bookmarks.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.bookmarks.select_next(),
            KeyCode::Enter => self.run_command(Command::CopySelected),
            KeyCode::Char('d') | KeyCode::Delete => self.run_command(Command::RemoveBookmark),
            KeyCode::Char('a') => self.run_command(Command::AddBookmark),
            KeyCode::Char('?') => self.help_visible = true,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
