use std::time::Duration;

/// The two one-shot timers a session owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Sleep,
    Alarm,
}

/// A request to deliver `TimerFired { kind, generation }` after `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub generation: u64,
    pub after: Duration,
}

/// Delivers timer firings back into the session event queue.
///
/// Scheduling a kind replaces any pending timer of that kind. Cancellation
/// is best effort: the controller discards firings whose generation is
/// stale.
pub trait TimerScheduler: Send {
    fn schedule(&mut self, request: TimerRequest);

    fn cancel(&mut self, kind: TimerKind);
}
