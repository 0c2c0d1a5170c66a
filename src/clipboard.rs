//! Clipboard access and change monitoring
//!
//! `backend` and its two implementations talk to the outside world;
//! `monitor` turns reads into change notifications for the rest of the app.

pub mod backend;
pub mod monitor;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, ClipboardSource, SystemClipboard};
pub use monitor::{ChangeOrigin, ClipboardChange, ClipboardListener, ClipboardMonitor};
