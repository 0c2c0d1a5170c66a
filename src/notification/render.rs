use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::theme;
use crate::widgets::popup;

use super::{NotificationKind, NotificationState};

const MAX_WIDTH: u16 = 60;

pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let (fg, bg) = match notification.kind {
        NotificationKind::Info => (theme::notification::INFO_FG, theme::notification::INFO_BG),
        NotificationKind::Error => (
            theme::notification::ERROR_FG,
            theme::notification::ERROR_BG,
        ),
    };

    // 2 for borders, 2 for padding
    let text_width = notification.message.width() as u16;
    let width = text_width.saturating_add(4).min(MAX_WIDTH);
    let inner_width = width.saturating_sub(4).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);
    let area: Rect = popup::top_right_popup(frame.area(), width, lines + 2, 1);

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(fg).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(format!(" {} ", notification.message))
        .style(Style::default().fg(fg).bg(bg))
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
