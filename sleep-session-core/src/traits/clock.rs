use chrono::{DateTime, Local};

/// Source of the current instant in the user's local time zone.
///
/// The zone rules travel with the returned value, so wall times derived
/// from it (tomorrow's 07:00) resolve to real instants.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
