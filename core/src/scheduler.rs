//! Data refresh throttling
//!
//! Refreshes are scheduled on absolute deadlines that advance in whole
//! interval steps. Frame jitter cannot drift the cadence and a stalled frame
//! produces one refresh, not a burst of catch-up refreshes.

/// Decides when the data source should be resampled
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    interval: f64,
    /// `None` until the first call, which always fires
    next_update: Option<f64>,
}

impl RefreshScheduler {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            next_update: None,
        }
    }

    pub fn next_update(&self) -> Option<f64> {
        self.next_update
    }

    /// Forget the deadline; the next call fires immediately
    pub fn reset(&mut self) {
        self.next_update = None;
    }

    /// Returns true at most once per interval slot
    pub fn should_refresh(&mut self, now: f64) -> bool {
        match self.next_update {
            None => {
                self.next_update = Some(now + self.interval);
                true
            }
            Some(next) if now < next => false,
            Some(next) => {
                let missed = ((now - next) / self.interval).floor();
                self.next_update = Some(next + (missed + 1.0) * self.interval);
                true
            }
        }
    }
}
