use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Easing curves used by snap-back animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^2`
    QuadOut,
    /// `1 - (1 - t)^3`
    CubicOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadOut => 1.0 - (1.0 - t).powi(2),
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Values an [`AnimationTask`] can interpolate.
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(self.x.lerp(other.x, t), self.y.lerp(other.y, t))
    }
}

/// One finite eased transition driven by caller-supplied timestamps.
///
/// Tasks carry no clock of their own; hosts sample them from their frame loop
/// and drop them once finished. Cancellation is dropping the task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTask<T: Lerp> {
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
    from: T,
    to: T,
}

impl<T: Lerp> AnimationTask<T> {
    #[must_use]
    pub fn new(start_ms: f64, duration_ms: f64, easing: Easing, from: T, to: T) -> Self {
        Self {
            start_ms,
            duration_ms,
            easing,
            from,
            to,
        }
    }

    /// Samples the eased value at `now_ms`; the flag reports completion.
    ///
    /// Zero or negative durations complete immediately.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> (T, bool) {
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let progress = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        let value = self.from.lerp(self.to, self.easing.apply(progress));
        (value, progress >= 1.0)
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_curves_start_fast_and_land_exactly() {
        for easing in [Easing::QuadOut, Easing::CubicOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert!(easing.apply(0.5) > 0.5);
        }
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn task_can_be_fast_forwarded() {
        let task = AnimationTask::new(1_000.0, 100.0, Easing::QuadOut, 0.0_f64, 10.0);
        let (mid, done) = task.sample(1_050.0);
        assert!(!done);
        assert!(mid > 5.0 && mid < 10.0);
        let (end, done) = task.sample(2_000.0);
        assert!(done);
        assert_eq!(end, 10.0);
    }

    #[test]
    fn zero_duration_task_finishes_immediately() {
        let task = AnimationTask::new(0.0, 0.0, Easing::CubicOut, 1.0_f64, 2.0);
        assert_eq!(task.sample(0.0), (2.0, true));
    }

    #[test]
    fn point_interpolation_tracks_both_axes() {
        let task = AnimationTask::new(
            0.0,
            100.0,
            Easing::Linear,
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        );
        let (mid, _) = task.sample(50.0);
        assert_eq!(mid, Point::new(0.5, 0.5));
    }
}
