mod help_content;
mod help_popup_render;

pub use help_content::{HELP_SECTIONS, HelpSection, KEY_HINTS};
pub use help_popup_render::render_popup;
