pub mod history_render;
mod history_state;
mod matcher;

pub use history_state::HistoryList;
