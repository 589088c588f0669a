use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Collapses rapid query edits into one dispatch per quiet period.
///
/// Poll-driven: the owner calls `should_fire()` from its event loop and
/// `mark_fired()` once it has dispatched (or to drop a pending dispatch).
/// The `_at` variants take an explicit millisecond clock so tests stay
/// deterministic.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period_ms: u64,
    epoch: Instant,
    /// Clock reading of the last input that (re)armed the timer
    last_input_ms: Option<u64>,
    /// Whether a dispatch is waiting for the quiet period to elapse
    pending: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period_ms: quiet_period.as_millis() as u64,
            epoch: Instant::now(),
            last_input_ms: None,
            pending: false,
        }
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    pub fn schedule(&mut self) {
        let now = self.now_ms();
        self.schedule_at(now);
    }

    /// Arm (or re-arm) the timer at the given clock reading.
    pub fn schedule_at(&mut self, now_ms: u64) {
        self.last_input_ms = Some(now_ms);
        self.pending = true;
    }

    pub fn should_fire(&self) -> bool {
        self.should_fire_at(self.now_ms())
    }

    pub fn should_fire_at(&self, now_ms: u64) -> bool {
        if !self.pending {
            return false;
        }
        match self.last_input_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.quiet_period_ms,
            None => false,
        }
    }

    pub fn mark_fired(&mut self) {
        self.pending = false;
        self.last_input_ms = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
