use thiserror::Error;

/// Errors that can occur while driving a sleep session.
///
/// The `Display` text doubles as the message shown to the user when the
/// controller surfaces a failure through `SessionView::present_alert`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please set an alarm time first")]
    AlarmTimeRequired,

    #[error("audio session setup failed: {0}")]
    AudioSessionFailed(String),

    #[error("playback failed: {0}")]
    PlaybackFailed(String),

    #[error("recording failed: {0}")]
    RecordingFailed(String),

    #[error("alarm notification failed: {0}")]
    NotificationFailed(String),

    #[error("settings cannot change while a session is running")]
    ConfigurationLocked,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("session runtime stopped")]
    RuntimeStopped,

    #[error("failed to start session runtime: {0}")]
    RuntimeSpawnFailed(String),
}
