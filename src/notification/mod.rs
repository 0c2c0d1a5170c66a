//! Notification module for clipmark
//!
//! Provides a reusable notification system that displays transient messages.
//! Any component in the application can use this module to show notifications;
//! every non-fatal error reaches the user this way.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
