use std::thread;

use crossbeam_channel::Receiver;

use crate::models::error::SessionError;
use crate::session::controller::SessionController;
use crate::session::events::{EventSender, SessionEvent};
use crate::traits::ambient_player::AmbientPlayer;
use crate::traits::recorder::Recorder;

/// Runs a `SessionController` on a dedicated thread.
///
/// Events are drained from the queue one at a time, in delivery order, so
/// a timer firing can never interleave with a half-finished transition.
pub struct SessionRuntime {
    events: EventSender,
    handle: Option<thread::JoinHandle<()>>,
}

impl SessionRuntime {
    pub fn spawn<P, R>(
        mut controller: SessionController<P, R>,
        events: EventSender,
        receiver: Receiver<SessionEvent>,
    ) -> Result<Self, SessionError>
    where
        P: AmbientPlayer + 'static,
        R: Recorder + 'static,
    {
        let handle = thread::Builder::new()
            .name("sleep-session".into())
            .spawn(move || {
                for event in receiver.iter() {
                    let shutdown = matches!(event, SessionEvent::Shutdown);
                    controller.handle(event);
                    if shutdown {
                        break;
                    }
                }
                log::debug!("session thread exiting");
            })
            .map_err(|e| SessionError::RuntimeSpawnFailed(e.to_string()))?;

        Ok(Self {
            events,
            handle: Some(handle),
        })
    }

    /// Handle for the view and collaborators to post events.
    pub fn sender(&self) -> EventSender {
        self.events.clone()
    }

    /// Tear down the session and join the session thread.
    pub fn shutdown(mut self) {
        self.stop_thread();
    }

    fn stop_thread(&mut self) {
        if let Some(handle) = self.handle.take() {
            if self.events.post(SessionEvent::Shutdown).is_err() {
                log::debug!("session thread already gone");
            }
            if handle.join().is_err() {
                log::error!("session thread panicked");
            }
        }
    }
}

impl Drop for SessionRuntime {
    fn drop(&mut self) {
        self.stop_thread();
    }
}
