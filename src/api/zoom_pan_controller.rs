use tracing::trace;

use crate::core::{ContainerRect, ContainerSpace, Point, ZoomState};
use crate::interaction::PinchState;

use super::PolygonEditor;

/// Wheel zoom step: one notch scales by `1 ± WHEEL_ZOOM_STEP`.
const WHEEL_ZOOM_STEP: f64 = 0.1;

impl PolygonEditor {
    /// Desktop wheel zoom anchored at the cursor.
    pub fn wheel_zoom(&mut self, container: ContainerRect, screen: Point, delta_y: f64) {
        if !self.config.zoom_pan_enabled {
            return;
        }
        if !delta_y.is_finite() || delta_y == 0.0 {
            return;
        }
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        let factor = if delta_y < 0.0 {
            1.0 + WHEEL_ZOOM_STEP
        } else {
            1.0 - WHEEL_ZOOM_STEP
        };
        let anchor = space.screen_to_normalized(screen);
        self.zoom = self.zoom.scaled_at(factor, anchor);
        trace!(zoom = self.zoom.zoom(), "wheel zoom");
    }

    /// Two-finger pinch start; screen positions of both touches.
    pub fn pinch_start(&mut self, container: ContainerRect, first: Point, second: Point) {
        if !self.config.zoom_pan_enabled {
            return;
        }
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        self.pinch = PinchState::begin(self.zoom, space, first, second);
    }

    pub fn pinch_move(&mut self, container: ContainerRect, first: Point, second: Point) {
        let Some(pinch) = self.pinch else {
            return;
        };
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        if let Some(zoom) = pinch.update(space, first, second) {
            self.zoom = zoom;
        }
    }

    pub fn pinch_end(&mut self) {
        self.pinch = None;
    }

    /// Back to unmagnified content.
    pub fn reset_zoom(&mut self) {
        self.zoom = ZoomState::default();
        self.pinch = None;
    }
}
