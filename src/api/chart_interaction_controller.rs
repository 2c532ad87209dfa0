use tracing::trace;

use crate::core::{Point, ViewBounds};
use crate::interaction::ChartGesture;

use super::{ChartEngine, WheelModifiers, ZoomMode};

/// One wheel notch scales the visible range by this factor (or its inverse).
const WHEEL_ZOOM_FACTOR: f64 = 1.1;
/// Wheel-scroll translation as a fraction of the visible range.
const SCROLL_FRACTION: f64 = 0.05;
const SCROLL_FRACTION_AXIS: f64 = 0.1;

impl ChartEngine {
    /// Pointer press in surface pixels; starts a pan when inside the plot.
    pub fn pointer_down(&mut self, px: Point) {
        if !self.config.pannable || !px.is_finite() {
            return;
        }
        let Ok(transform) = self.transform() else {
            return;
        };
        if transform.area().contains(px) {
            self.gesture = ChartGesture::Panning {
                start_px: px,
                start_bounds: self.view,
            };
            // No hover while panning.
            self.hover = None;
        }
    }

    pub fn pointer_move(&mut self, px: Point) {
        if !px.is_finite() {
            return;
        }
        match self.gesture {
            ChartGesture::Panning {
                start_px,
                start_bounds,
            } => {
                let Ok(transform) = self.transform() else {
                    return;
                };
                let area = transform.area();
                let dx = -((px.x - start_px.x) / area.width) * start_bounds.x_range();
                let dy = ((px.y - start_px.y) / area.height) * start_bounds.y_range();
                let candidate = start_bounds.translated(dx, dy);
                if candidate.is_valid() {
                    self.view = candidate;
                }
            }
            ChartGesture::Idle => self.update_hover(px),
        }
    }

    pub fn pointer_up(&mut self) {
        self.gesture = ChartGesture::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.gesture = ChartGesture::Idle;
        self.hover = None;
    }

    /// Double-click resets the visible window to the external bounds.
    pub fn double_click(&mut self) {
        self.reset_view();
    }

    /// Wheel input: zoom with the zoom modifier held, scroll otherwise.
    pub fn wheel(&mut self, px: Point, delta_y: f64, modifiers: WheelModifiers) {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return;
        }
        if self.config.zoomable && modifiers.zoom {
            self.zoom_at(px, delta_y);
        } else if self.config.scrollable {
            self.scroll(delta_y, modifiers.axis);
        }
    }

    fn zoom_at(&mut self, px: Point, delta_y: f64) {
        if !px.is_finite() {
            return;
        }
        let Ok(transform) = self.transform() else {
            return;
        };
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_FACTOR
        } else {
            1.0 / WHEEL_ZOOM_FACTOR
        };
        let anchor = transform.px_to_data(px);
        if !anchor.is_finite() {
            return;
        }

        let x_ratio = (anchor.x - self.view.x_min) / self.view.x_range();
        let new_x_range = self.view.x_range() * factor;
        let mut candidate = ViewBounds {
            x_min: anchor.x - x_ratio * new_x_range,
            x_max: anchor.x + (1.0 - x_ratio) * new_x_range,
            ..self.view
        };
        if self.config.zoom_mode == ZoomMode::Xy {
            let y_ratio = (anchor.y - self.view.y_min) / self.view.y_range();
            let new_y_range = self.view.y_range() * factor;
            candidate.y_min = anchor.y - y_ratio * new_y_range;
            candidate.y_max = anchor.y + (1.0 - y_ratio) * new_y_range;
        }
        if candidate.is_valid() {
            self.view = candidate;
            self.hover = None;
            trace!(factor, "wheel zoom");
        }
    }

    fn scroll(&mut self, delta_y: f64, along_x: bool) {
        let direction = if delta_y > 0.0 { 1.0 } else { -1.0 };
        let candidate = if along_x {
            self.view
                .translated(direction * self.view.x_range() * SCROLL_FRACTION_AXIS, 0.0)
        } else {
            self.view
                .translated(0.0, -direction * self.view.y_range() * SCROLL_FRACTION)
        };
        if candidate.is_valid() {
            self.view = candidate;
            self.hover = None;
        }
    }
}
