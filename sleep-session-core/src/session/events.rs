use chrono::NaiveTime;
use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::models::error::SessionError;
use crate::traits::alarm_scheduler::NotificationId;
use crate::traits::recorder::RecorderEvent;
use crate::traits::timer_scheduler::TimerKind;

/// Every input the controller reacts to.
///
/// View actions, lifecycle signals, timer firings and collaborator reports
/// all arrive through one queue and are handled one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ViewReady,
    BecameActive,
    Interrupted,
    SelectSleepTimer(u32),
    SelectAlarmTime(NaiveTime),
    ActionButtonPressed,
    StopButtonPressed,
    PauseRequested,
    ResumeRequested,
    TimerFired { kind: TimerKind, generation: u64 },
    NotificationDelivered(NotificationId),
    Recorder(RecorderEvent),
    Shutdown,
}

/// Create the session event queue.
pub fn channel() -> (EventSender, Receiver<SessionEvent>) {
    let (tx, rx) = unbounded();
    (EventSender { tx }, rx)
}

/// Cloneable handle for posting events into the session queue.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<SessionEvent>,
}

impl EventSender {
    pub fn post(&self, event: SessionEvent) -> Result<(), SessionError> {
        self.tx.send(event).map_err(|_| SessionError::RuntimeStopped)
    }

    pub fn on_view_ready(&self) -> Result<(), SessionError> {
        self.post(SessionEvent::ViewReady)
    }

    pub fn on_became_active(&self) -> Result<(), SessionError> {
        self.post(SessionEvent::BecameActive)
    }

    pub fn on_interrupted(&self) -> Result<(), SessionError> {
        self.post(SessionEvent::Interrupted)
    }

    pub fn select_sleep_timer(&self, minutes: u32) -> Result<(), SessionError> {
        self.post(SessionEvent::SelectSleepTimer(minutes))
    }

    pub fn select_alarm_time(&self, time: NaiveTime) -> Result<(), SessionError> {
        self.post(SessionEvent::SelectAlarmTime(time))
    }

    pub fn on_action_button_pressed(&self) -> Result<(), SessionError> {
        self.post(SessionEvent::ActionButtonPressed)
    }

    pub fn on_stop_button_pressed(&self) -> Result<(), SessionError> {
        self.post(SessionEvent::StopButtonPressed)
    }

    pub fn pause(&self) -> Result<(), SessionError> {
        self.post(SessionEvent::PauseRequested)
    }

    pub fn resume(&self) -> Result<(), SessionError> {
        self.post(SessionEvent::ResumeRequested)
    }

    pub fn recorder_started(&self) -> Result<(), SessionError> {
        self.post(SessionEvent::Recorder(RecorderEvent::Started))
    }

    pub fn recorder_finished(&self, success: bool) -> Result<(), SessionError> {
        self.post(SessionEvent::Recorder(RecorderEvent::Finished { success }))
    }

    pub fn notification_delivered(&self, id: NotificationId) -> Result<(), SessionError> {
        self.post(SessionEvent::NotificationDelivered(id))
    }
}
