//! # sleep-session-core
//!
//! Platform-agnostic core of a sleep tracking app.
//!
//! Plays an ambient sound, switches to recording when the sleep timer
//! elapses, and rings an alarm at a chosen time of day. Platform backends
//! implement the collaborator traits (player, recorder, notifications,
//! audio session, view) and plug into the generic `SessionController`.
//!
//! ## Architecture
//!
//! ```text
//! sleep-session-core (this crate)
//! ├── traits/       ← AmbientPlayer, Recorder, AlarmScheduler, AudioSession, SessionView, Clock, TimerScheduler
//! ├── models/       ← SessionState, SessionConfig, DisplayModel, SessionError
//! ├── scheduling/   ← alarm normalization, ThreadTimerScheduler
//! ├── session/      ← SessionController, SessionEvent queue, SessionRuntime
//! └── storage/      ← recording file naming
//! ```

pub mod models;
pub mod scheduling;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::{sleep_timer_options, ControllerSettings, SessionConfig, SleepTimerOption, SLEEP_TIMER_CHOICES};
pub use models::display::DisplayModel;
pub use models::error::SessionError;
pub use models::state::{PausedActivity, SessionState};
pub use scheduling::alarm::{alarm_delay_secs, normalize_alarm};
pub use scheduling::thread_timer::ThreadTimerScheduler;
pub use session::controller::{SessionController, SessionServices};
pub use session::events::{EventSender, SessionEvent};
pub use session::runtime::SessionRuntime;
pub use traits::alarm_scheduler::{AlarmScheduler, NotificationId};
pub use traits::ambient_player::AmbientPlayer;
pub use traits::audio_session::AudioSession;
pub use traits::clock::{Clock, SystemClock};
pub use traits::recorder::{Recorder, RecorderEvent};
pub use traits::session_view::SessionView;
pub use traits::timer_scheduler::{TimerKind, TimerRequest, TimerScheduler};
