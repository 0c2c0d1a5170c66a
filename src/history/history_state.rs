use crate::clipboard::{ClipboardChange, ClipboardListener};

use super::matcher::HistoryMatcher;

/// In-memory log of clipboard values for the current run
///
/// Entries are kept in insertion order with no deduplication and no cap; only
/// [`HistoryList::clear`] removes them. The display view lists entries newest
/// first, optionally narrowed by a fuzzy filter.
#[derive(Debug, Default)]
pub struct HistoryList {
    entries: Vec<String>,
    matcher: HistoryMatcher,
    filter: String,
    filtering: bool,
    /// Indices into `entries`, in display order
    visible: Vec<usize>,
    selected: usize,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new entry. A selection at the top follows the newest entry;
    /// any other selection stays on the entry it was on.
    pub fn append(&mut self, text: &str) {
        let anchored = match self.selected {
            0 => None,
            pos => self.visible.get(pos).copied(),
        };

        self.entries.push(text.to_string());
        self.refresh();

        if let Some(pos) = anchored.and_then(|idx| self.visible.iter().position(|&v| v == idx)) {
            self.selected = pos;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.refresh();
    }

    /// All entries in insertion order
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as displayed: newest first, filtered
    pub fn visible_entries(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(|&idx| self.entries[idx].as_str())
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&str> {
        self.visible
            .get(self.selected)
            .map(|&idx| self.entries[idx].as_str())
    }

    /// Move selection towards older entries
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    /// Move selection towards newer entries
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn start_filter(&mut self) {
        self.filtering = true;
    }

    /// Leave filter input; the filter text stays applied
    pub fn finish_filter(&mut self) {
        self.filtering = false;
    }

    pub fn cancel_filter(&mut self) {
        self.filtering = false;
        self.filter.clear();
        self.refresh();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.selected = 0;
        self.refresh();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.selected = 0;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = self.matcher.filter(&self.filter, &self.entries);
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }
}

impl ClipboardListener for HistoryList {
    fn on_clipboard_change(&mut self, change: &ClipboardChange) {
        self.append(&change.text);
    }
}

#[cfg(test)]
#[path = "history_state_tests.rs"]
mod history_state_tests;
