use crate::models::error::SessionError;

/// Completion reports sent by a recorder back to the controller.
///
/// Delivered as events through the session queue; a recorder never calls
/// into the controller directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderEvent {
    Started,
    Finished { success: bool },
}

/// Platform capture engine writing microphone audio to a file.
pub trait Recorder: Send {
    /// Start a new capture named `file_name`, or resume the capture this
    /// recorder already holds (in which case `file_name` is ignored).
    fn start(&mut self, file_name: &str) -> Result<(), SessionError>;

    /// Pause the held capture. No-op when nothing is recording.
    fn pause(&mut self);

    /// Finalize and release the held capture. The next `start` begins a
    /// new file. No-op when nothing is held.
    fn stop(&mut self);
}
