use serde::Serialize;

/// Sleep session state machine.
///
/// State transitions:
/// ```text
///          start (timer > 0)            sleep timer
/// idle ─────────────────────→ playing ─────────────→ recording
///   │                          ↑   ↓                   ↑   ↓
///   │ start (timer off)        paused (playback)   paused (recording)
///   └──────────────────────────────────────────────→ recording
///
/// any non-alarm ── alarm timer ──→ alarm ── dismiss ──→ idle
/// any ── stop ──→ idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SessionState {
    Idle,
    Playing,
    Recording,
    Paused,
    Alarm,
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Whether an activity (playback or recording) is running in the foreground.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Playing | Self::Recording)
    }

    /// Whether a session is in progress, paused or not.
    pub fn is_in_session(&self) -> bool {
        matches!(self, Self::Playing | Self::Recording | Self::Paused)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Playing => "Playing",
            Self::Recording => "Recording",
            Self::Paused => "Paused",
            Self::Alarm => "Alarm",
        }
    }
}

/// Which activity a `Paused` session will resume.
///
/// Recorded at the moment of pausing rather than inferred from which
/// engine still holds a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PausedActivity {
    Playback,
    Recording,
}

impl PausedActivity {
    /// The state a resume returns to.
    pub fn resumed_state(&self) -> SessionState {
        match self {
            Self::Playback => SessionState::Playing,
            Self::Recording => SessionState::Recording,
        }
    }
}
