use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthChar;

use crate::theme;

/// A bordered, selectable list of text entries
pub struct EntryList<'a> {
    pub title: String,
    pub entries: Vec<&'a str>,
    pub selected: usize,
    pub focused: bool,
    pub empty_hint: &'a str,
}

impl EntryList<'_> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            theme::BORDER_FOCUSED
        } else {
            theme::BORDER_UNFOCUSED
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title)
            .border_style(Style::default().fg(border_color));

        if self.entries.is_empty() {
            let hint = List::new(vec![ListItem::new(Line::from(Span::styled(
                format!(" {}", self.empty_hint),
                Style::default().fg(theme::list::EMPTY_HINT),
            )))])
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        // 2 for borders, 2 for the selection bar
        let max_width = (area.width as usize).saturating_sub(4);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(Span::styled(
                    display_text(entry, max_width),
                    Style::default().fg(theme::list::ITEM_NORMAL_FG),
                )))
            })
            .collect();

        let mut highlight = Style::default().bg(theme::list::ITEM_SELECTED_BG);
        if self.focused {
            highlight = highlight
                .fg(theme::list::ITEM_SELECTED_BAR)
                .add_modifier(theme::list::ITEM_SELECTED_MODIFIER);
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("┃ ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Single-line rendition of an entry that fits in `max_width` columns
pub fn display_text(entry: &str, max_width: usize) -> String {
    let flat: String = entry
        .chars()
        .map(|c| match c {
            '\n' => '⏎',
            '\t' | '\r' => ' ',
            c => c,
        })
        .collect();

    let total: usize = flat.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return flat;
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut truncated = String::new();
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "entry_list_tests.rs"]
mod entry_list_tests;
