/// Trailing-edge rate limiter for high-frequency gesture callbacks.
///
/// Values submitted inside the interval are parked as `pending` and delivered
/// by a later [`Self::poll`] once the deadline passes, so the most recent
/// value is never lost. [`Self::flush`] hands out the pending value
/// immediately; release paths use it so the last pre-release sample is
/// delivered before any final event.
///
/// Deadlines are plain timestamps checked against caller-supplied clocks;
/// there are no OS timers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailingThrottle<T: Copy + PartialEq> {
    interval_ms: f64,
    last_sent_at: Option<f64>,
    last_sent: Option<T>,
    pending: Option<T>,
}

impl<T: Copy + PartialEq> TrailingThrottle<T> {
    /// `interval_ms <= 0` disables throttling entirely.
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: if interval_ms.is_finite() {
                interval_ms
            } else {
                0.0
            },
            last_sent_at: None,
            last_sent: None,
            pending: None,
        }
    }

    /// Offers a new value; returns it if it should be delivered right now.
    pub fn submit(&mut self, value: T, now_ms: f64) -> Option<T> {
        if self.interval_ms <= 0.0 {
            self.mark_sent(value, now_ms);
            return Some(value);
        }
        match self.last_sent_at {
            Some(last) if now_ms - last < self.interval_ms => {
                self.pending = Some(value);
                None
            }
            _ => {
                self.mark_sent(value, now_ms);
                Some(value)
            }
        }
    }

    /// Delivers an overdue pending value, if any. Pending values equal to the
    /// last delivered one are dropped silently.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        let pending = self.pending?;
        match self.last_sent_at {
            Some(last) if now_ms - last < self.interval_ms => None,
            _ => {
                self.pending = None;
                if self.last_sent == Some(pending) {
                    return None;
                }
                self.mark_sent(pending, now_ms);
                Some(pending)
            }
        }
    }

    /// Hands out the pending value regardless of the deadline.
    pub fn flush(&mut self, now_ms: f64) -> Option<T> {
        let pending = self.pending.take()?;
        if self.last_sent == Some(pending) {
            return None;
        }
        self.mark_sent(pending, now_ms);
        Some(pending)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn reset(&mut self) {
        self.last_sent_at = None;
        self.last_sent = None;
        self.pending = None;
    }

    fn mark_sent(&mut self, value: T, now_ms: f64) {
        self.last_sent_at = Some(now_ms);
        self.last_sent = Some(value);
    }
}
