//! Log-backed collaborators standing in for the platform audio engines.
//!
//! Each one reports what a real engine would do instead of touching audio
//! hardware.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{after, bounded, select, Sender};
use sleep_session_core::{
    AlarmScheduler, AmbientPlayer, AudioSession, EventSender, NotificationId, Recorder,
    SessionError,
};

/// Named sound asset "played" by logging.
pub struct LogPlayer {
    asset: String,
    playing: bool,
    paused: bool,
}

impl LogPlayer {
    pub fn new(asset: &str) -> Self {
        Self {
            asset: asset.to_string(),
            playing: false,
            paused: false,
        }
    }
}

impl AmbientPlayer for LogPlayer {
    fn play(&mut self, looped: bool) -> Result<(), SessionError> {
        if self.paused {
            log::info!("[{}] resume", self.asset);
        } else {
            log::info!("[{}] play (looped: {})", self.asset, looped);
        }
        self.playing = true;
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing {
            log::info!("[{}] pause", self.asset);
            self.playing = false;
            self.paused = true;
        }
    }

    fn stop(&mut self) {
        if self.playing || self.paused {
            log::info!("[{}] stop", self.asset);
        }
        self.playing = false;
        self.paused = false;
    }
}

/// Capture engine that names files but writes nothing.
pub struct LogRecorder {
    directory: PathBuf,
    events: EventSender,
    capture: Option<String>,
    recording: bool,
}

impl LogRecorder {
    pub fn new(directory: PathBuf, events: EventSender) -> Self {
        Self {
            directory,
            events,
            capture: None,
            recording: false,
        }
    }

    fn report(&self, result: Result<(), SessionError>) {
        if let Err(e) = result {
            log::debug!("recorder report dropped: {}", e);
        }
    }
}

impl Recorder for LogRecorder {
    fn start(&mut self, file_name: &str) -> Result<(), SessionError> {
        match &self.capture {
            Some(current) => log::info!("[recorder] resume {}", current),
            None => {
                let path = self.directory.join(file_name);
                log::info!("[recorder] new capture {}", path.display());
                self.capture = Some(file_name.to_string());
            }
        }
        self.recording = true;
        self.report(self.events.recorder_started());
        Ok(())
    }

    fn pause(&mut self) {
        if self.recording {
            log::info!("[recorder] pause");
            self.recording = false;
        }
    }

    fn stop(&mut self) {
        if let Some(name) = self.capture.take() {
            log::info!("[recorder] finalize {}", name);
            self.recording = false;
            self.report(self.events.recorder_finished(true));
        }
    }
}

#[derive(Default)]
pub struct LogAudioSession {
    active: bool,
}

impl AudioSession for LogAudioSession {
    fn activate(&mut self) -> Result<(), SessionError> {
        if self.active {
            log::debug!("[audio session] reactivate");
        } else {
            log::info!("[audio session] category play-and-record, active");
        }
        self.active = true;
        Ok(())
    }
}

/// Delivers "system notifications" from a background thread, as the OS
/// would while the app is suspended.
///
/// Only the latest notification stays pending: scheduling a new one drops
/// the previous cancel sender, which wakes its thread without delivering.
pub struct LogNotifications {
    events: EventSender,
    scheduled: u64,
    pending: Option<Sender<()>>,
}

impl LogNotifications {
    pub fn new(events: EventSender) -> Self {
        Self {
            events,
            scheduled: 0,
            pending: None,
        }
    }
}

impl AlarmScheduler for LogNotifications {
    fn schedule_one_shot(&mut self, after_secs: u64) -> Result<NotificationId, SessionError> {
        if self.pending.take().is_some() {
            log::debug!("[notifications] superseded alarm-{}", self.scheduled);
        }
        self.scheduled += 1;
        let id = NotificationId(format!("alarm-{}", self.scheduled));
        let events = self.events.clone();
        let delivered = id.clone();
        let (cancel_tx, cancel_rx) = bounded::<()>(0);

        thread::Builder::new()
            .name("notification".into())
            .spawn(move || {
                select! {
                    recv(after(Duration::from_secs(after_secs))) -> _ => {
                        log::info!("[notifications] deliver {}", delivered);
                        if events.notification_delivered(delivered).is_err() {
                            log::debug!("notification delivered after shutdown");
                        }
                    }
                    recv(cancel_rx) -> _ => {
                        log::debug!("[notifications] {} withdrawn", delivered);
                    }
                }
            })
            .map_err(|e| SessionError::NotificationFailed(e.to_string()))?;

        self.pending = Some(cancel_tx);
        log::info!("[notifications] {} scheduled in {}s", id, after_secs);
        Ok(id)
    }
}
