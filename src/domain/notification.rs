use serde::Serialize;

/// Monotonic identifier assigned by the notification store.
pub type NotificationId = u64;

/// Visual category of a demo page notification.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Success,
    Info,
    Error,
}

/// A transient message shown on the bridge demo page.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub category: NotificationCategory,
    /// Local wall-clock time the notification was created, `HH:MM:SS`.
    pub displayed_at: String,
}

impl Notification {
    #[must_use]
    pub fn new(id: NotificationId, message: String, category: NotificationCategory) -> Self {
        Self {
            id,
            message,
            category,
            displayed_at: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}
