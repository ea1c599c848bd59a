use chrono::NaiveTime;
use serde::Serialize;

use super::config::SessionConfig;
use super::state::SessionState;

/// Everything the view needs to render the session screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayModel {
    pub state_label: &'static str,
    pub sleep_timer_label: String,
    pub alarm_label: String,
    pub action_label: &'static str,
}

impl DisplayModel {
    pub fn derive(state: SessionState, config: &SessionConfig) -> Self {
        Self {
            state_label: state.label(),
            sleep_timer_label: sleep_timer_label(config.sleep_timer_minutes),
            alarm_label: alarm_label(config.alarm_time),
            action_label: action_label(state),
        }
    }
}

pub fn sleep_timer_label(minutes: u32) -> String {
    if minutes == 0 {
        "Off".to_string()
    } else {
        format!("{} min", minutes)
    }
}

/// 12-hour rendering, e.g. `07:00 AM`.
pub fn alarm_label(alarm_time: Option<NaiveTime>) -> String {
    match alarm_time {
        Some(time) => time.format("%I:%M %p").to_string(),
        None => "Alarm not set".to_string(),
    }
}

pub fn action_label(state: SessionState) -> &'static str {
    if state.is_active() {
        "Pause"
    } else {
        "Play"
    }
}
