use crate::models::error::SessionError;

/// A looping sound asset (ambient sound or alarm tone).
///
/// Implemented by the platform audio engine. `pause` and `stop` on a
/// player that is not playing must be no-ops.
pub trait AmbientPlayer: Send {
    /// Start playback, or continue from the paused position.
    fn play(&mut self, looped: bool) -> Result<(), SessionError>;

    /// Pause playback, keeping the position for a later `play`.
    fn pause(&mut self);

    /// Stop playback and rewind.
    fn stop(&mut self);
}
