use serde::{Deserialize, Serialize};

use crate::core::{AnimationTask, ContainerSpace, Point};

/// Container dimension the joystick's maximum throw is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthReference {
    MinWidthHeight,
    Width,
    Height,
}

impl LengthReference {
    #[must_use]
    pub fn dimension_px(self, space: ContainerSpace) -> f64 {
        let rect = space.rect();
        match self {
            Self::MinWidthHeight => rect.min_dimension(),
            Self::Width => rect.width,
            Self::Height => rect.height,
        }
    }
}

/// Normalized stick deflection reported to hosts, both axes in [-1, 1].
/// Y grows upward: dragging toward the top of the screen is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoystickVector {
    pub x: f64,
    pub y: f64,
}

impl JoystickVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Live joystick gesture: pointer-down origin plus the clamped dynamic point,
/// both in normalized container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickSession {
    pub origin: Point,
    pub dynamic: Point,
}

impl JoystickSession {
    #[must_use]
    pub fn begin(origin: Point) -> Self {
        Self {
            origin,
            dynamic: origin,
        }
    }

    /// Clamps `candidate` so its pixel distance from the origin never exceeds
    /// `max_length_px`, then returns the clamped point and the distance ratio
    /// in [0, 1].
    #[must_use]
    pub fn clamp_to_radius(
        &self,
        space: ContainerSpace,
        candidate: Point,
        max_length_px: f64,
    ) -> (Point, f64) {
        let rect = space.rect();
        let dx = candidate.x - self.origin.x;
        let dy = candidate.y - self.origin.y;
        let dist_px = (dx * rect.width).hypot(dy * rect.height);
        if max_length_px <= 0.0 {
            return (self.origin, 0.0);
        }
        if dist_px <= max_length_px {
            return (candidate, dist_px / max_length_px);
        }
        let scale = max_length_px / dist_px;
        (
            Point::new(self.origin.x + dx * scale, self.origin.y + dy * scale),
            1.0,
        )
    }

    /// Deflection of `dynamic` from the origin, normalized to [-1, 1] against
    /// the maximum throw, Y-inverted, and zeroed inside the dead zone.
    #[must_use]
    pub fn deflection(
        &self,
        space: ContainerSpace,
        max_length_px: f64,
        dead_zone_ratio: f64,
    ) -> JoystickVector {
        if max_length_px <= 0.0 {
            return JoystickVector::ZERO;
        }
        let rect = space.rect();
        let dx = self.dynamic.x - self.origin.x;
        let dy = self.dynamic.y - self.origin.y;
        let dist_px = (dx * rect.width).hypot(dy * rect.height);
        if dist_px / max_length_px <= dead_zone_ratio {
            return JoystickVector::ZERO;
        }
        let offset_x = dx / (max_length_px / rect.width);
        let offset_y = dy / (max_length_px / rect.height);
        JoystickVector::new(offset_x, -offset_y)
    }
}

/// Joystick mode lifecycle. `SnappingBack` is visual only; no host events are
/// emitted while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JoystickState {
    #[default]
    Released,
    Active(JoystickSession),
    SnappingBack {
        origin: Point,
        dynamic: Point,
        task: AnimationTask<Point>,
    },
}

impl JoystickState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    #[must_use]
    pub fn is_snapping_back(&self) -> bool {
        matches!(self, Self::SnappingBack { .. })
    }

    /// Origin/dynamic pair to draw, if the overlay is visible at all.
    #[must_use]
    pub fn visual(&self) -> Option<(Point, Point)> {
        match self {
            Self::Released => None,
            Self::Active(session) => Some((session.origin, session.dynamic)),
            Self::SnappingBack {
                origin, dynamic, ..
            } => Some((*origin, *dynamic)),
        }
    }
}
