/// Generation-tagged bookkeeping for one kind of one-shot timer.
///
/// Every arm or disarm bumps the generation, so a firing carrying an older
/// generation is recognisably stale and can be dropped.
#[derive(Debug, Default)]
pub(crate) struct TimerSlot {
    generation: u64,
    pending: bool,
}

impl TimerSlot {
    /// Arm a new timer, superseding any pending one. Returns its generation.
    pub(crate) fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.pending = true;
        self.generation
    }

    /// Invalidate any pending timer. Returns whether one was pending.
    pub(crate) fn disarm(&mut self) -> bool {
        let was_pending = self.pending;
        self.generation += 1;
        self.pending = false;
        was_pending
    }

    /// Accept a firing if it belongs to the current pending timer.
    pub(crate) fn fire(&mut self, generation: u64) -> bool {
        if self.pending && generation == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }
}
