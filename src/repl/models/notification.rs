//! # Notifications
//!
//! Transient messages shown in the status bar after a request settles.

use std::time::{Duration, Instant};

/// How long a notification stays visible
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub level: NotificationLevel,
    pub raised_at: Instant,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, None, NotificationLevel::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, None, NotificationLevel::Error)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn new(title: impl Into<String>, description: Option<String>, level: NotificationLevel) -> Self {
        Self {
            title: title.into(),
            description,
            level,
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= NOTIFICATION_DURATION
    }

    /// Single-line form used by the status bar
    pub fn text(&self) -> String {
        match &self.description {
            Some(description) if !description.is_empty() => {
                format!("{}: {}", self.title, description)
            }
            _ => self.title.clone(),
        }
    }
}
