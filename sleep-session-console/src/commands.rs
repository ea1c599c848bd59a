use std::str::FromStr;

use chrono::NaiveTime;

use sleep_session_core::SessionEvent;

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Timer(u32),
    Alarm(NaiveTime),
    Action,
    Pause,
    Resume,
    Stop,
    Interrupt,
    Active,
    Options,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  timer <minutes|off>   choose the sleep timer
  alarm <HH:MM>         choose the alarm time (24h)
  action                play / pause / resume
  pause | resume        explicit pause or resume
  stop                  stop the session or dismiss the alarm
  interrupt             simulate an interruption (e.g. a phone call)
  active                simulate the app becoming active again
  options               list sleep timer choices
  quit";

impl Command {
    /// The session event this command posts, if any.
    pub fn event(&self) -> Option<SessionEvent> {
        match self {
            Self::Timer(minutes) => Some(SessionEvent::SelectSleepTimer(*minutes)),
            Self::Alarm(time) => Some(SessionEvent::SelectAlarmTime(*time)),
            Self::Action => Some(SessionEvent::ActionButtonPressed),
            Self::Pause => Some(SessionEvent::PauseRequested),
            Self::Resume => Some(SessionEvent::ResumeRequested),
            Self::Stop => Some(SessionEvent::StopButtonPressed),
            Self::Interrupt => Some(SessionEvent::Interrupted),
            Self::Active => Some(SessionEvent::BecameActive),
            Self::Options | Self::Help | Self::Quit => None,
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| "empty command".to_string())?;
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(format!("too many arguments for `{}`", name));
        }

        let command = match (name.to_ascii_lowercase().as_str(), arg) {
            ("timer", Some("off")) => Self::Timer(0),
            ("timer", Some(minutes)) => Self::Timer(
                minutes
                    .parse()
                    .map_err(|_| format!("invalid minutes: {}", minutes))?,
            ),
            ("alarm", Some(time)) => Self::Alarm(
                NaiveTime::parse_from_str(time, "%H:%M")
                    .map_err(|_| format!("invalid time (expected HH:MM): {}", time))?,
            ),
            ("action", None) => Self::Action,
            ("pause", None) => Self::Pause,
            ("resume", None) => Self::Resume,
            ("stop", None) => Self::Stop,
            ("interrupt", None) => Self::Interrupt,
            ("active", None) => Self::Active,
            ("options", None) => Self::Options,
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            ("timer" | "alarm", None) => return Err(format!("`{}` needs an argument", name)),
            _ => return Err(format!("unknown command: {} (try `help`)", line.trim())),
        };
        Ok(command)
    }
}
