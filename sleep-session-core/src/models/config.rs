use chrono::{NaiveTime, Timelike};

use super::error::SessionError;

/// Sleep-timer durations offered to the user, in minutes. `0` (off) is
/// offered separately.
pub const SLEEP_TIMER_CHOICES: [u32; 5] = [1, 5, 10, 15, 20];

/// Per-session settings chosen by the user before pressing play.
///
/// Locked while a session runs; editable again once the controller is
/// back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Alarm time of day (hour and minute only), or `None` if not set.
    pub alarm_time: Option<NaiveTime>,

    /// Minutes of ambient playback before recording starts. `0` disables
    /// the sleep timer and recording starts immediately.
    pub sleep_timer_minutes: u32,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.alarm_time.is_none() {
            return Err(SessionError::AlarmTimeRequired);
        }
        Ok(())
    }

    pub fn sleep_timer_enabled(&self) -> bool {
        self.sleep_timer_minutes > 0
    }

    pub fn sleep_timer_secs(&self) -> u64 {
        u64::from(self.sleep_timer_minutes) * 60
    }

    /// Store an alarm time with its seconds dropped.
    pub fn set_alarm_time(&mut self, time: NaiveTime) {
        self.alarm_time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0);
    }
}

/// Controller-wide settings that do not change between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Loop the ambient sound until the sleep timer stops it (default: true).
    pub ambient_loop: bool,

    /// Loop the alarm sound until dismissed (default: true).
    pub alarm_loop: bool,

    /// File extension used when naming recordings (default: "m4a").
    pub recording_extension: String,
}

impl ControllerSettings {
    pub fn validate(&self) -> Result<(), SessionError> {
        let ext = self.recording_extension.as_str();
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SessionError::InvalidConfiguration(format!(
                "unsupported recording extension: {:?}",
                self.recording_extension
            )));
        }
        Ok(())
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            ambient_loop: true,
            alarm_loop: true,
            recording_extension: "m4a".into(),
        }
    }
}

/// One entry in the sleep-timer picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepTimerOption {
    pub minutes: u32,
    pub label: String,
}

/// Picker entries in presentation order: the fixed choices, then "Off".
pub fn sleep_timer_options() -> Vec<SleepTimerOption> {
    SLEEP_TIMER_CHOICES
        .iter()
        .copied()
        .chain(std::iter::once(0))
        .map(|minutes| SleepTimerOption {
            minutes,
            label: crate::models::display::sleep_timer_label(minutes),
        })
        .collect()
}
