use crate::models::error::SessionError;

/// Process-wide audio session (category, activation).
pub trait AudioSession: Send {
    /// Configure for simultaneous playback and recording and activate.
    /// Must be safe to call repeatedly.
    fn activate(&mut self) -> Result<(), SessionError>;
}
