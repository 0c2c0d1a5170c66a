use ratatui::{Frame, layout::Rect};

use crate::widgets::entry_list::EntryList;

use super::HistoryList;

pub fn render_pane(history: &HistoryList, focused: bool, frame: &mut Frame, area: Rect) {
    let title = if history.is_filtering() || !history.filter().is_empty() {
        let cursor = if history.is_filtering() { "▏" } else { "" };
        format!(
            " History ({}/{}) /{}{} ",
            history.visible_count(),
            history.len(),
            history.filter(),
            cursor
        )
    } else {
        format!(" History ({}) ", history.len())
    };

    let empty_hint = if history.is_empty() {
        "Nothing copied yet"
    } else {
        "No matches"
    };

    EntryList {
        title,
        entries: history.visible_entries().collect(),
        selected: history.selected_index(),
        focused,
        empty_hint,
    }
    .render(frame, area);
}
