use tracing::trace;

use crate::core::{AnimationTask, Easing};
use crate::error::WidgetResult;

use super::{FaderConfig, FaderOrientation};

/// Host-facing fader notifications, queued in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaderEvent {
    Start,
    ValueChanged { value: f64 },
    End,
}

/// One tick mark beside the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerMark {
    pub value: f64,
    pub position_px: f64,
    pub is_major: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragOrigin {
    value: f64,
    pointer_px: f64,
}

/// 1D spring-back fader in the manner of an audio mixer slider.
///
/// The release immediately reports the origin value and then runs a
/// visual-only snap-back; hosts read [`Self::value`] for the button position.
pub struct Fader {
    config: FaderConfig,
    value: f64,
    drag: Option<DragOrigin>,
    snap: Option<AnimationTask<f64>>,
    events: Vec<FaderEvent>,
}

impl Fader {
    pub fn new(config: FaderConfig) -> WidgetResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            value: config.value_origin,
            drag: None,
            snap: None,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &FaderConfig {
        &self.config
    }

    /// Displayed button value; equals the logical value except during the
    /// snap-back animation.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    /// Queued events since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<FaderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Button offset along the track for a value.
    #[must_use]
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        let normalized = (value - self.config.min_value)
            / (self.config.max_value - self.config.min_value);
        match self.config.orientation {
            // Top of a vertical track is the maximum.
            FaderOrientation::Vertical => (1.0 - normalized) * self.config.track_length_px(),
            FaderOrientation::Horizontal => normalized * self.config.track_length_px(),
        }
    }

    /// Inverse of [`Self::value_to_pixel`].
    #[must_use]
    pub fn pixel_to_value(&self, pixel: f64) -> f64 {
        let track = self.config.track_length_px();
        let range = self.config.max_value - self.config.min_value;
        match self.config.orientation {
            FaderOrientation::Vertical => self.config.min_value + (1.0 - pixel / track) * range,
            FaderOrientation::Horizontal => self.config.min_value + pixel / track * range,
        }
    }

    /// Pointer press on the button; `pointer_px` is the pointer position
    /// along the travel axis (client Y for vertical, client X otherwise).
    pub fn drag_start(&mut self, pointer_px: f64) {
        if !pointer_px.is_finite() {
            return;
        }
        // A new grab cancels the snap-back in flight.
        self.snap = None;
        self.drag = Some(DragOrigin {
            value: self.value,
            pointer_px,
        });
        self.events.push(FaderEvent::Start);
    }

    pub fn drag_move(&mut self, pointer_px: f64) {
        let Some(origin) = self.drag else {
            return;
        };
        if !pointer_px.is_finite() {
            return;
        }
        let delta_px = pointer_px - origin.pointer_px;
        let value_per_px =
            (self.config.max_value - self.config.min_value) / self.config.track_length_px();
        // Dragging down a vertical fader lowers the value.
        let value_delta = match self.config.orientation {
            FaderOrientation::Vertical => -delta_px * value_per_px,
            FaderOrientation::Horizontal => delta_px * value_per_px,
        };
        let next = round_value(
            (origin.value + value_delta).clamp(self.config.min_value, self.config.max_value),
        );
        if next != self.value {
            self.value = next;
            self.events.push(FaderEvent::ValueChanged { value: next });
        }
    }

    /// Release: reports the origin value and the end marker immediately, then
    /// starts the visual-only snap-back.
    pub fn drag_end(&mut self, now_ms: f64) {
        if self.drag.take().is_none() {
            return;
        }
        let start = self.value;
        let target = self.config.value_origin;
        self.events.push(FaderEvent::ValueChanged { value: target });
        self.events.push(FaderEvent::End);
        trace!(start, "fader released");

        let duration_ms = self.config.snap_duration_s * 1000.0;
        if start == target || duration_ms <= 0.0 {
            self.value = target;
            return;
        }
        self.snap = Some(AnimationTask::new(
            now_ms,
            duration_ms,
            Easing::CubicOut,
            start,
            target,
        ));
    }

    /// Advances the snap-back; returns `true` while more frames are needed.
    /// Never emits events.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(task) = self.snap else {
            return false;
        };
        let (value, finished) = task.sample(now_ms);
        self.value = round_value(value);
        if finished {
            self.value = task.target();
            self.snap = None;
        }
        !finished
    }

    /// Tick marks along the track; majors land on every fifth step and on
    /// the range ends and zero.
    #[must_use]
    pub fn ruler_marks(&self) -> Vec<RulerMark> {
        let step = self.config.ruler.line_distance;
        let major_step = step * 5.0;
        let mut marks = Vec::new();
        let mut value = self.config.min_value;
        while value <= self.config.max_value + 1e-4 {
            let rounded = round_value(value);
            let is_major = (rounded % major_step).abs() < 1e-4
                || rounded.abs() < 1e-4
                || (rounded - self.config.min_value).abs() < 1e-4
                || (rounded - self.config.max_value).abs() < 1e-4;
            marks.push(RulerMark {
                value: rounded,
                position_px: self.value_to_pixel(rounded),
                is_major,
            });
            value += step;
        }
        marks
    }
}

/// Values are reported at micro precision to keep host deltas stable.
fn round_value(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
