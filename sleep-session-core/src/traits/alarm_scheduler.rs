use crate::models::error::SessionError;

/// Identifier of a scheduled system notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(pub String);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// System notification facility that fires even while the app is suspended.
pub trait AlarmScheduler: Send {
    /// Schedule a one-shot alarm notification `after_secs` seconds from now.
    fn schedule_one_shot(&mut self, after_secs: u64) -> Result<NotificationId, SessionError>;
}
