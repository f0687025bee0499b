// Trailing-edge debounce bookkeeping for bursty events (window resize).
//
// The browser owns the actual timers; this only tracks which one is pending.
// Every new event supersedes the pending timer, whose handle is handed back
// so the caller can cancel it. At most one timer is live at a time.

#[derive(Debug)]
pub struct Debounce<H> {
    delay_ms: u32,
    pending: Option<H>,
}

impl<H> Debounce<H> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the timer scheduled for a new event. Returns the superseded
    /// timer, which must be cancelled.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// The live timer elapsed. False when nothing was pending, e.g. after
    /// [`Debounce::cancel`].
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Drop any pending timer, returning its handle for cancellation.
    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take()
    }
}
