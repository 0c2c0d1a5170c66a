use std::time::{Duration, Instant};

const INFO_DURATION: Duration = Duration::from_secs(3);
const ERROR_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

/// Holds at most one notification; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.set(message, NotificationKind::Info, INFO_DURATION);
    }

    pub fn show_error(&mut self, message: &str) {
        log::warn!("{}", message);
        self.set(message, NotificationKind::Error, ERROR_DURATION);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the notification once its time is up. Returns true if one was removed.
    pub fn clear_if_expired(&mut self) -> bool {
        self.clear_if_expired_at(Instant::now())
    }

    pub fn clear_if_expired_at(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if n.is_expired_at(now) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    fn set(&mut self, message: &str, kind: NotificationKind, duration: Duration) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
            duration,
        });
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
