//! Mock collaborators and a simulated clock for controller tests.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use parking_lot::Mutex;

use crate::models::display::DisplayModel;
use crate::models::error::SessionError;
use crate::models::state::SessionState;
use crate::session::controller::{SessionController, SessionServices};
use crate::session::events::SessionEvent;
use crate::traits::alarm_scheduler::{AlarmScheduler, NotificationId};
use crate::traits::ambient_player::AmbientPlayer;
use crate::traits::audio_session::AudioSession;
use crate::traits::clock::Clock;
use crate::traits::recorder::Recorder;
use crate::traits::session_view::SessionView;
use crate::traits::timer_scheduler::{TimerKind, TimerRequest, TimerScheduler};

pub fn at(day: u32, h: u32, m: u32) -> DateTime<Local> {
    let local = NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap();
    Local.from_local_datetime(&local).earliest().unwrap()
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn minutes(n: u64) -> Duration {
    Duration::from_secs(n * 60)
}

// --- Players ---

#[derive(Debug, Default)]
pub struct PlayerLog {
    pub play: usize,
    pub pause: usize,
    pub stop: usize,
    pub last_looped: Option<bool>,
    pub fail_next_play: bool,
}

pub struct MockPlayer(pub Arc<Mutex<PlayerLog>>);

impl AmbientPlayer for MockPlayer {
    fn play(&mut self, looped: bool) -> Result<(), SessionError> {
        let mut log = self.0.lock();
        if log.fail_next_play {
            log.fail_next_play = false;
            return Err(SessionError::PlaybackFailed("asset missing".into()));
        }
        log.play += 1;
        log.last_looped = Some(looped);
        Ok(())
    }

    fn pause(&mut self) {
        self.0.lock().pause += 1;
    }

    fn stop(&mut self) {
        self.0.lock().stop += 1;
    }
}

// --- Recorder ---

#[derive(Debug, Default)]
pub struct RecorderLog {
    pub starts: Vec<String>,
    pub pause: usize,
    pub stop: usize,
    pub fail_next_start: bool,
}

pub struct MockRecorder(pub Arc<Mutex<RecorderLog>>);

impl Recorder for MockRecorder {
    fn start(&mut self, file_name: &str) -> Result<(), SessionError> {
        let mut log = self.0.lock();
        if log.fail_next_start {
            log.fail_next_start = false;
            return Err(SessionError::RecordingFailed("microphone unavailable".into()));
        }
        log.starts.push(file_name.to_string());
        Ok(())
    }

    fn pause(&mut self) {
        self.0.lock().pause += 1;
    }

    fn stop(&mut self) {
        self.0.lock().stop += 1;
    }
}

// --- Services ---

#[derive(Debug, Default)]
pub struct AudioSessionLog {
    pub activations: usize,
    pub fail: bool,
}

pub struct MockAudioSession(pub Arc<Mutex<AudioSessionLog>>);

impl AudioSession for MockAudioSession {
    fn activate(&mut self) -> Result<(), SessionError> {
        let mut log = self.0.lock();
        if log.fail {
            return Err(SessionError::AudioSessionFailed("category rejected".into()));
        }
        log.activations += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NotificationLog {
    pub scheduled: Vec<u64>,
    pub fail: bool,
}

pub struct MockNotifications(pub Arc<Mutex<NotificationLog>>);

impl AlarmScheduler for MockNotifications {
    fn schedule_one_shot(&mut self, after_secs: u64) -> Result<NotificationId, SessionError> {
        let mut log = self.0.lock();
        if log.fail {
            return Err(SessionError::NotificationFailed("not authorized".into()));
        }
        log.scheduled.push(after_secs);
        Ok(NotificationId(format!("alarm-{}", log.scheduled.len())))
    }
}

#[derive(Clone)]
pub struct ManualClock(pub Arc<Mutex<DateTime<Local>>>);

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.0.lock()
    }
}

#[derive(Debug, Clone)]
pub struct PendingTimer {
    pub deadline: DateTime<Local>,
    pub request: TimerRequest,
}

/// Timer scheduler whose timers only fire from `Harness::advance`.
pub struct ManualTimers {
    clock: ManualClock,
    pub pending: Arc<Mutex<Vec<PendingTimer>>>,
}

impl TimerScheduler for ManualTimers {
    fn schedule(&mut self, request: TimerRequest) {
        let after = TimeDelta::from_std(request.after).unwrap();
        let deadline = self.clock.now() + after;
        let mut pending = self.pending.lock();
        pending.retain(|t| t.request.kind != request.kind);
        pending.push(PendingTimer { deadline, request });
    }

    fn cancel(&mut self, kind: TimerKind) {
        self.pending.lock().retain(|t| t.request.kind != kind);
    }
}

// --- View ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    State(SessionState),
    Display(DisplayModel),
    AlarmDialog,
    Alert(String, String),
}

#[derive(Default)]
pub struct MockView(pub Mutex<Vec<ViewCall>>);

impl MockView {
    pub fn states(&self) -> Vec<SessionState> {
        self.0
            .lock()
            .iter()
            .filter_map(|c| match c {
                ViewCall::State(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter_map(|c| match c {
                ViewCall::Alert(text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn alarm_dialogs(&self) -> usize {
        self.0
            .lock()
            .iter()
            .filter(|c| matches!(c, ViewCall::AlarmDialog))
            .count()
    }

    pub fn last_display(&self) -> Option<DisplayModel> {
        self.0.lock().iter().rev().find_map(|c| match c {
            ViewCall::Display(d) => Some(d.clone()),
            _ => None,
        })
    }
}

impl SessionView for MockView {
    fn set_state(&self, state: SessionState) {
        self.0.lock().push(ViewCall::State(state));
    }

    fn update_display(&self, display: &DisplayModel) {
        self.0.lock().push(ViewCall::Display(display.clone()));
    }

    fn present_alarm_dialog(&self) {
        self.0.lock().push(ViewCall::AlarmDialog);
    }

    fn present_alert(&self, text: &str, action_label: &str) {
        self.0
            .lock()
            .push(ViewCall::Alert(text.to_string(), action_label.to_string()));
    }
}

// --- Harness ---

/// A controller wired to mocks, plus handles to inspect them.
pub struct Harness {
    pub controller: SessionController<MockPlayer, MockRecorder>,
    pub ambient: Arc<Mutex<PlayerLog>>,
    pub alarm_sound: Arc<Mutex<PlayerLog>>,
    pub recorder: Arc<Mutex<RecorderLog>>,
    pub audio_session: Arc<Mutex<AudioSessionLog>>,
    pub notifications: Arc<Mutex<NotificationLog>>,
    pub clock: ManualClock,
    pub timers: Arc<Mutex<Vec<PendingTimer>>>,
    pub view: Arc<MockView>,
}

impl Harness {
    pub fn new(now: DateTime<Local>) -> Self {
        let ambient = Arc::new(Mutex::new(PlayerLog::default()));
        let alarm_sound = Arc::new(Mutex::new(PlayerLog::default()));
        let recorder = Arc::new(Mutex::new(RecorderLog::default()));
        let audio_session = Arc::new(Mutex::new(AudioSessionLog::default()));
        let notifications = Arc::new(Mutex::new(NotificationLog::default()));
        let clock = ManualClock(Arc::new(Mutex::new(now)));
        let timers = Arc::new(Mutex::new(Vec::new()));
        let view = Arc::new(MockView::default());

        let services = SessionServices {
            audio_session: Box::new(MockAudioSession(Arc::clone(&audio_session))),
            notifications: Box::new(MockNotifications(Arc::clone(&notifications))),
            timers: Box::new(ManualTimers {
                clock: clock.clone(),
                pending: Arc::clone(&timers),
            }),
            clock: Box::new(clock.clone()),
        };
        let mut controller = SessionController::new(
            MockPlayer(Arc::clone(&ambient)),
            MockPlayer(Arc::clone(&alarm_sound)),
            MockRecorder(Arc::clone(&recorder)),
            services,
        );
        controller.set_view(view.clone());

        Self {
            controller,
            ambient,
            alarm_sound,
            recorder,
            audio_session,
            notifications,
            clock,
            timers,
            view,
        }
    }

    /// Configure and press play.
    pub fn start(&mut self, sleep_minutes: u32, alarm: NaiveTime) {
        self.controller.handle(SessionEvent::SelectSleepTimer(sleep_minutes));
        self.controller.handle(SessionEvent::SelectAlarmTime(alarm));
        self.controller.handle(SessionEvent::ActionButtonPressed);
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn state(&self) -> SessionState {
        self.controller.state()
    }

    /// Move simulated time forward, firing due timers in deadline order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now() + TimeDelta::from_std(by).unwrap();
        loop {
            let due = {
                let mut pending = self.timers.lock();
                pending.sort_by_key(|t| t.deadline);
                match pending.first() {
                    Some(t) if t.deadline <= target => Some(pending.remove(0)),
                    _ => None,
                }
            };
            let Some(timer) = due else { break };
            *self.clock.0.lock() = timer.deadline;
            self.controller.handle(SessionEvent::TimerFired {
                kind: timer.request.kind,
                generation: timer.request.generation,
            });
        }
        *self.clock.0.lock() = target;
    }

    pub fn pending_timer(&self, kind: TimerKind) -> Option<PendingTimer> {
        self.timers
            .lock()
            .iter()
            .find(|t| t.request.kind == kind)
            .cloned()
    }
}
