use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme;
use crate::widgets::popup;

use super::help_content::HELP_SECTIONS;

const KEY_COLUMN_WIDTH: usize = 18;
const POPUP_WIDTH: u16 = 60;

pub fn render_popup(frame: &mut Frame) {
    let mut lines: Vec<Line> = Vec::new();

    for (idx, section) in HELP_SECTIONS.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!(" {}", section.title),
            Style::default()
                .fg(theme::help::SECTION)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {:<width$}", key, width = KEY_COLUMN_WIDTH),
                    Style::default().fg(theme::help::KEY),
                ),
                Span::styled(*description, Style::default().fg(theme::help::DESCRIPTION)),
            ]));
        }
    }

    let height = lines.len() as u16 + 2;
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, height);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Help (F1 or Esc to close) ")
        .border_style(Style::default().fg(theme::help::BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
