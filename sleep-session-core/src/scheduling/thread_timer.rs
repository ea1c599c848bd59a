use std::collections::HashMap;
use std::thread;

use crossbeam_channel::{after, bounded, select, Sender};

use crate::session::events::{EventSender, SessionEvent};
use crate::traits::timer_scheduler::{TimerKind, TimerRequest, TimerScheduler};

/// Timer scheduler backed by one waiting thread per armed timer.
///
/// Each thread blocks on either its deadline or its cancellation channel.
/// Dropping the cancel sender (on `cancel`, on rescheduling the same kind,
/// or when the scheduler itself is dropped) wakes the thread and it exits
/// without firing.
pub struct ThreadTimerScheduler {
    events: EventSender,
    pending: HashMap<TimerKind, Sender<()>>,
}

impl ThreadTimerScheduler {
    pub fn new(events: EventSender) -> Self {
        Self {
            events,
            pending: HashMap::new(),
        }
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }
}

impl TimerScheduler for ThreadTimerScheduler {
    fn schedule(&mut self, request: TimerRequest) {
        self.cancel(request.kind);

        let (cancel_tx, cancel_rx) = bounded::<()>(0);
        let events = self.events.clone();
        let thread_name = match request.kind {
            TimerKind::Sleep => "sleep-timer",
            TimerKind::Alarm => "alarm-timer",
        };

        let spawned = thread::Builder::new()
            .name(thread_name.into())
            .spawn(move || {
                select! {
                    recv(after(request.after)) -> _ => {
                        let fired = SessionEvent::TimerFired {
                            kind: request.kind,
                            generation: request.generation,
                        };
                        if events.post(fired).is_err() {
                            log::debug!("{:?} timer fired after session shut down", request.kind);
                        }
                    }
                    recv(cancel_rx) -> _ => {
                        log::debug!(
                            "{:?} timer generation {} cancelled",
                            request.kind,
                            request.generation
                        );
                    }
                }
            });

        match spawned {
            Ok(_) => {
                self.pending.insert(request.kind, cancel_tx);
            }
            Err(e) => log::error!("failed to spawn {} thread: {}", thread_name, e),
        }
    }

    fn cancel(&mut self, kind: TimerKind) {
        self.pending.remove(&kind);
    }
}
