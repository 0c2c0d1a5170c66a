mod app_events;
mod app_render;
mod app_state;
mod command;

pub use app_state::{App, Focus};
pub use command::Command;
