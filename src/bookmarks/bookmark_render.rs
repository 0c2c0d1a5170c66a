use ratatui::{Frame, layout::Rect};

use crate::widgets::entry_list::EntryList;

use super::BookmarkStore;

pub fn render_pane(store: &BookmarkStore, focused: bool, frame: &mut Frame, area: Rect) {
    EntryList {
        title: format!(" Bookmarks ({}) ", store.len()),
        entries: store.all().iter().map(String::as_str).collect(),
        selected: store.selected_index(),
        focused,
        empty_hint: "No bookmarks. Ctrl+D saves the clipboard text",
    }
    .render(frame, area);
}
