use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use uuid::Uuid;

use crate::models::config::{ControllerSettings, SessionConfig};
use crate::models::display::DisplayModel;
use crate::models::error::SessionError;
use crate::models::state::{PausedActivity, SessionState};
use crate::scheduling::alarm;
use crate::session::events::SessionEvent;
use crate::session::timer_slot::TimerSlot;
use crate::storage::naming;
use crate::traits::alarm_scheduler::{AlarmScheduler, NotificationId};
use crate::traits::ambient_player::AmbientPlayer;
use crate::traits::audio_session::AudioSession;
use crate::traits::clock::Clock;
use crate::traits::recorder::{Recorder, RecorderEvent};
use crate::traits::session_view::SessionView;
use crate::traits::timer_scheduler::{TimerKind, TimerRequest, TimerScheduler};

/// Process-level services the controller needs besides the two audio engines.
pub struct SessionServices {
    pub audio_session: Box<dyn AudioSession>,
    pub notifications: Box<dyn AlarmScheduler>,
    pub timers: Box<dyn TimerScheduler>,
    pub clock: Box<dyn Clock>,
}

/// Sleep session state machine.
///
/// Generic over the player and recorder backends. Owns the session state,
/// the user's configuration and both timers; every input arrives through
/// [`SessionController::handle`] and is processed to completion before the
/// next one.
///
/// ```text
/// [View] ─┐
/// [Timers] ├→ SessionEvent → SessionController → [Ambient / Alarm player]
/// [Recorder]┘                      │            → [Recorder]
///                                  └──────────→ [SessionView]
/// ```
pub struct SessionController<P: AmbientPlayer, R: Recorder> {
    ambient: P,
    alarm_sound: P,
    recorder: R,
    audio_session: Box<dyn AudioSession>,
    notifications: Box<dyn AlarmScheduler>,
    timers: Box<dyn TimerScheduler>,
    clock: Box<dyn Clock>,
    view: Option<Arc<dyn SessionView>>,

    settings: ControllerSettings,
    config: SessionConfig,
    state: SessionState,
    paused_activity: Option<PausedActivity>,
    needs_restore: bool,

    sleep_timer: TimerSlot,
    alarm_timer: TimerSlot,
    pending_notification: Option<NotificationId>,

    session_id: Option<Uuid>,
    recording_name: Option<String>,
}

impl<P: AmbientPlayer, R: Recorder> SessionController<P, R> {
    pub fn new(ambient: P, alarm_sound: P, recorder: R, services: SessionServices) -> Self {
        Self {
            ambient,
            alarm_sound,
            recorder,
            audio_session: services.audio_session,
            notifications: services.notifications,
            timers: services.timers,
            clock: services.clock,
            view: None,
            settings: ControllerSettings::default(),
            config: SessionConfig::default(),
            state: SessionState::Idle,
            paused_activity: None,
            needs_restore: false,
            sleep_timer: TimerSlot::default(),
            alarm_timer: TimerSlot::default(),
            pending_notification: None,
            session_id: None,
            recording_name: None,
        }
    }

    pub fn set_view(&mut self, view: Arc<dyn SessionView>) {
        self.view = Some(view);
    }

    /// Replace controller-wide settings. Only allowed while idle.
    pub fn set_settings(&mut self, settings: ControllerSettings) -> Result<(), SessionError> {
        if !self.state.is_idle() {
            return Err(SessionError::ConfigurationLocked);
        }
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn paused_activity(&self) -> Option<PausedActivity> {
        self.paused_activity
    }

    pub fn needs_restore(&self) -> bool {
        self.needs_restore
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    pub fn recording_name(&self) -> Option<&str> {
        self.recording_name.as_deref()
    }

    pub fn is_timer_pending(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Sleep => self.sleep_timer.is_pending(),
            TimerKind::Alarm => self.alarm_timer.is_pending(),
        }
    }

    pub fn display(&self) -> DisplayModel {
        DisplayModel::derive(self.state, &self.config)
    }

    /// Process one event to completion.
    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ViewReady => self.on_view_ready(),
            SessionEvent::BecameActive => self.on_became_active(),
            SessionEvent::Interrupted => self.on_interrupted(),
            SessionEvent::SelectSleepTimer(minutes) => self.select_sleep_timer(minutes),
            SessionEvent::SelectAlarmTime(time) => self.select_alarm_time(time),
            SessionEvent::ActionButtonPressed => self.on_action_button_pressed(),
            SessionEvent::StopButtonPressed => self.on_stop_button_pressed(),
            SessionEvent::PauseRequested => self.pause(),
            SessionEvent::ResumeRequested => self.resume(),
            SessionEvent::TimerFired { kind, generation } => self.on_timer_fired(kind, generation),
            SessionEvent::NotificationDelivered(id) => self.on_notification_delivered(&id),
            SessionEvent::Recorder(event) => self.on_recorder_event(event),
            SessionEvent::Shutdown => self.teardown(),
        }
    }

    // --- View actions ---

    pub fn on_view_ready(&mut self) {
        if let Some(ref view) = self.view {
            view.set_state(self.state);
            view.update_display(&self.display());
        }
    }

    pub fn select_sleep_timer(&mut self, minutes: u32) {
        if !self.state.is_idle() {
            log::warn!("sleep timer change to {} min rejected: {}", minutes, SessionError::ConfigurationLocked);
            self.push_display();
            return;
        }
        self.config.sleep_timer_minutes = minutes;
        log::debug!("sleep timer set to {} min", minutes);
        self.push_display();
    }

    pub fn select_alarm_time(&mut self, time: NaiveTime) {
        if !self.state.is_idle() {
            log::warn!("alarm change to {} rejected: {}", time, SessionError::ConfigurationLocked);
            self.push_display();
            return;
        }
        self.config.set_alarm_time(time);
        log::debug!("alarm set to {:?}", self.config.alarm_time);
        self.push_display();
    }

    /// Play/pause toggle: starts a session from idle, pauses an active one,
    /// resumes a paused one.
    pub fn on_action_button_pressed(&mut self) {
        match self.state {
            SessionState::Idle => self.start_session(),
            SessionState::Playing | SessionState::Recording => self.pause(),
            SessionState::Paused => self.resume(),
            SessionState::Alarm => log::debug!("action ignored while alarm is ringing"),
        }
    }

    /// Stop (or dismiss the alarm) from any state.
    pub fn on_stop_button_pressed(&mut self) {
        if self.state.is_idle() {
            log::debug!("stop ignored: already idle");
            return;
        }
        log::info!("session {} stopped from {}", self.session_tag(), self.state.label());
        self.enter_idle();
    }

    pub fn pause(&mut self) {
        match self.state {
            SessionState::Playing => {
                self.ambient.pause();
                self.paused_activity = Some(PausedActivity::Playback);
            }
            SessionState::Recording => {
                self.recorder.pause();
                self.paused_activity = Some(PausedActivity::Recording);
            }
            other => {
                log::debug!("pause ignored while {}", other.label());
                return;
            }
        }
        log::info!("session {} paused ({:?})", self.session_tag(), self.paused_activity);
        self.set_state(SessionState::Paused);
    }

    pub fn resume(&mut self) {
        if !self.state.is_paused() {
            log::debug!("resume ignored while {}", self.state.label());
            return;
        }
        let Some(activity) = self.paused_activity else {
            log::warn!("paused session {} has no activity to resume", self.session_tag());
            return;
        };

        let resumed = match activity {
            PausedActivity::Playback => self.ambient.play(self.settings.ambient_loop),
            PausedActivity::Recording => self.start_recorder(),
        };
        match resumed {
            Ok(()) => {
                self.paused_activity = None;
                log::info!("session {} resumed ({:?})", self.session_tag(), activity);
                self.set_state(activity.resumed_state());
            }
            Err(err) => self.fail_to_idle(err),
        }
    }

    // --- Lifecycle ---

    pub fn on_interrupted(&mut self) {
        if self.state.is_in_session() {
            self.needs_restore = true;
            log::info!("session {} interrupted while {}", self.session_tag(), self.state.label());
        } else {
            log::debug!("interruption while {}; nothing to restore", self.state.label());
        }
    }

    /// Reconcile the audio engines with the logical state after an
    /// interruption. Runs at most once per interruption.
    pub fn on_became_active(&mut self) {
        if !self.needs_restore {
            return;
        }
        self.needs_restore = false;

        if let Err(err) = self.audio_session.activate() {
            self.fail_to_idle(err);
            return;
        }

        let restored = match self.state {
            SessionState::Playing => self.ambient.play(self.settings.ambient_loop),
            SessionState::Recording => self.start_recorder(),
            _ => Ok(()),
        };
        match restored {
            Ok(()) => log::info!("session {} restored while {}", self.session_tag(), self.state.label()),
            Err(err) => self.fail_to_idle(err),
        }
    }

    /// Stop everything; the screen owning this controller is going away.
    pub fn teardown(&mut self) {
        if !self.state.is_idle() {
            log::info!("tearing down session {} while {}", self.session_tag(), self.state.label());
            self.enter_idle();
        }
    }

    // --- Collaborator reports ---

    pub fn on_timer_fired(&mut self, kind: TimerKind, generation: u64) {
        let slot = match kind {
            TimerKind::Sleep => &mut self.sleep_timer,
            TimerKind::Alarm => &mut self.alarm_timer,
        };
        if !slot.fire(generation) {
            log::debug!("ignoring stale {:?} timer (generation {})", kind, generation);
            return;
        }
        match kind {
            TimerKind::Sleep => self.on_sleep_timer(),
            TimerKind::Alarm => self.trigger_alarm("timer"),
        }
    }

    pub fn on_notification_delivered(&mut self, id: &NotificationId) {
        if self.pending_notification.as_ref() != Some(id) {
            log::debug!("ignoring notification {}", id);
            return;
        }
        self.trigger_alarm("notification");
    }

    pub fn on_recorder_event(&mut self, event: RecorderEvent) {
        match event {
            RecorderEvent::Started => {
                log::info!("session {} recording started", self.session_tag());
            }
            RecorderEvent::Finished { success: true } => {
                log::info!("session {} recording finalized", self.session_tag());
            }
            RecorderEvent::Finished { success: false } => {
                let recording_in_use = self.state == SessionState::Recording
                    || (self.state.is_paused()
                        && self.paused_activity == Some(PausedActivity::Recording));
                if recording_in_use {
                    self.fail_to_idle(SessionError::RecordingFailed(
                        "recording finished unsuccessfully".into(),
                    ));
                } else {
                    log::warn!("recorder reported failure while {}", self.state.label());
                }
            }
        }
    }

    // --- Internal helpers ---

    fn start_session(&mut self) {
        if let Err(err) = self.config.validate() {
            log::info!("start rejected: {}", err);
            self.alert(&err);
            return;
        }
        let Some(alarm_time) = self.config.alarm_time else {
            return;
        };

        if let Err(err) = self.audio_session.activate() {
            log::error!("start aborted: {}", err);
            self.alert(&err);
            return;
        }

        let session_id = Uuid::new_v4();
        self.session_id = Some(session_id);
        let now = self.clock.now();
        let delay_secs = alarm::alarm_delay_secs(&now, alarm_time);
        log::info!(
            "session {} starting: alarm at {} (in {}s), sleep timer {} min",
            session_id,
            alarm::normalize_alarm(&now, alarm_time),
            delay_secs,
            self.config.sleep_timer_minutes
        );

        self.arm_alarm(delay_secs);

        if self.config.sleep_timer_enabled() {
            match self.ambient.play(self.settings.ambient_loop) {
                Ok(()) => {
                    self.arm_sleep_timer();
                    self.set_state(SessionState::Playing);
                }
                Err(err) => self.fail_to_idle(err),
            }
        } else {
            self.enter_recording();
        }
    }

    fn on_sleep_timer(&mut self) {
        match self.state {
            SessionState::Playing => {
                log::info!("session {} sleep timer elapsed; switching to recording", self.session_tag());
                self.enter_recording();
            }
            SessionState::Paused if self.paused_activity == Some(PausedActivity::Playback) => {
                log::info!("session {} sleep timer elapsed while paused; recording on resume", self.session_tag());
                self.ambient.stop();
                self.recording_name = None;
                self.paused_activity = Some(PausedActivity::Recording);
            }
            other => log::debug!("sleep timer ignored while {}", other.label()),
        }
    }

    /// Start a fresh capture, with ambient playback stopped first.
    fn enter_recording(&mut self) {
        self.ambient.stop();
        self.recording_name = None;
        match self.start_recorder() {
            Ok(()) => {
                self.paused_activity = None;
                self.set_state(SessionState::Recording);
            }
            Err(err) => self.fail_to_idle(err),
        }
    }

    /// Start or resume the recorder under the current capture name,
    /// naming a new capture if none is held.
    fn start_recorder(&mut self) -> Result<(), SessionError> {
        let name = match &self.recording_name {
            Some(name) => name.clone(),
            None => naming::recording_file_name(
                self.clock.now().naive_local(),
                &self.settings.recording_extension,
            ),
        };
        self.recorder.start(&name)?;
        self.recording_name = Some(name);
        Ok(())
    }

    fn trigger_alarm(&mut self, source: &str) {
        if self.state == SessionState::Alarm {
            log::debug!("alarm already ringing; {} ignored", source);
            return;
        }
        log::info!(
            "session {} alarm fired by {} while {}",
            self.session_tag(),
            source,
            self.state.label()
        );

        self.recorder.stop();
        self.ambient.stop();
        self.cancel_timers();
        self.paused_activity = None;
        self.recording_name = None;

        if let Err(err) = self.alarm_sound.play(self.settings.alarm_loop) {
            log::error!("alarm sound failed to start: {}", err);
        }
        self.set_state(SessionState::Alarm);
        if let Some(ref view) = self.view {
            view.present_alarm_dialog();
        }
    }

    fn arm_alarm(&mut self, delay_secs: u64) {
        let generation = self.alarm_timer.arm();
        self.timers.schedule(TimerRequest {
            kind: TimerKind::Alarm,
            generation,
            after: Duration::from_secs(delay_secs),
        });

        self.pending_notification = match self.notifications.schedule_one_shot(delay_secs) {
            Ok(id) => {
                log::debug!("alarm notification {} scheduled in {}s", id, delay_secs);
                Some(id)
            }
            Err(err) => {
                log::warn!("{}; relying on in-process alarm timer", err);
                None
            }
        };
    }

    fn arm_sleep_timer(&mut self) {
        let generation = self.sleep_timer.arm();
        self.timers.schedule(TimerRequest {
            kind: TimerKind::Sleep,
            generation,
            after: Duration::from_secs(self.config.sleep_timer_secs()),
        });
    }

    fn cancel_timers(&mut self) {
        self.sleep_timer.disarm();
        self.alarm_timer.disarm();
        self.timers.cancel(TimerKind::Sleep);
        self.timers.cancel(TimerKind::Alarm);
        self.pending_notification = None;
    }

    /// Return to idle, stopping every engine and cancelling both timers.
    fn enter_idle(&mut self) {
        self.ambient.stop();
        self.recorder.stop();
        self.alarm_sound.stop();
        self.cancel_timers();
        self.paused_activity = None;
        self.needs_restore = false;
        self.recording_name = None;
        self.session_id = None;
        self.set_state(SessionState::Idle);
    }

    fn fail_to_idle(&mut self, err: SessionError) {
        log::error!("session {} failed: {}", self.session_tag(), err);
        self.enter_idle();
        self.alert(&err);
    }

    fn set_state(&mut self, new_state: SessionState) {
        self.state = new_state;
        if let Some(ref view) = self.view {
            view.set_state(new_state);
            view.update_display(&self.display());
        }
    }

    fn push_display(&self) {
        if let Some(ref view) = self.view {
            view.update_display(&self.display());
        }
    }

    fn alert(&self, err: &SessionError) {
        if let Some(ref view) = self.view {
            view.present_alert(&err.to_string(), "OK");
        }
    }

    fn session_tag(&self) -> String {
        self.session_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".into())
    }
}
