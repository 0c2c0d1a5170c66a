//! Clipboard companion: watches the clipboard, keeps a history of what was
//! copied, stores bookmarks on disk and rewrites paths in place.

pub mod app;
pub mod bookmarks;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod help;
pub mod history;
pub mod launcher;
pub mod notification;
pub mod theme;
pub mod transform;
pub mod widgets;


pub use error::{ClipmarkError, Result};
