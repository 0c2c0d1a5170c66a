//! Colors shared by the panes and popups

use ratatui::style::{Color, Modifier};

pub const BORDER_FOCUSED: Color = Color::Cyan;
pub const BORDER_UNFOCUSED: Color = Color::DarkGray;

pub mod list {
    use super::*;

    pub const ITEM_SELECTED_BG: Color = Color::Rgb(50, 55, 70);
    pub const ITEM_SELECTED_BAR: Color = Color::Cyan;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const ITEM_NORMAL_FG: Color = Color::Gray;
    pub const EMPTY_HINT: Color = Color::DarkGray;
    pub const FILTER_TEXT: Color = Color::Yellow;
}

pub mod notification {
    use super::*;

    pub const INFO_FG: Color = Color::Black;
    pub const INFO_BG: Color = Color::Green;
    pub const ERROR_FG: Color = Color::White;
    pub const ERROR_BG: Color = Color::Red;
}

pub mod help {
    use super::*;

    pub const BORDER: Color = Color::Cyan;
    pub const KEY: Color = Color::Yellow;
    pub const DESCRIPTION: Color = Color::White;
    pub const SECTION: Color = Color::Magenta;
}

pub mod hints {
    use super::*;

    pub const KEY: Color = Color::Cyan;
    pub const LABEL: Color = Color::Gray;
}
