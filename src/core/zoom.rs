use serde::{Deserialize, Serialize};

use crate::core::types::Point;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 10.0;

/// Magnification state for the overlay content.
///
/// `center` is the normalized content point shown at the middle of the
/// container; the visible content window is `center ± 0.5 / zoom` per axis.
/// The center is clamped to `0.5 ± 0.5 * (zoom - 1) / zoom`, which is exactly
/// the range keeping that window inside [0, 1], so content never pans past
/// its own edges and the pannable window collapses as zoom approaches 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    zoom: f64,
    center: Point,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            center: Point::new(0.5, 0.5),
        }
    }
}

impl ZoomState {
    /// Builds a state with both zoom and center clamped into their invariants.
    /// Non-finite inputs fall back to the identity state.
    #[must_use]
    pub fn clamped(zoom: f64, center: Point) -> Self {
        if !zoom.is_finite() || !center.is_finite() {
            return Self::default();
        }
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let half_window = 0.5 * (zoom - 1.0) / zoom;
        let center = Point::new(
            center.x.clamp(0.5 - half_window, 0.5 + half_window),
            center.y.clamp(0.5 - half_window, 0.5 + half_window),
        );
        Self { zoom, center }
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn center(self) -> Point {
        self.center
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.zoom <= MIN_ZOOM
    }

    /// Maps a normalized content point into the zoomed view.
    #[must_use]
    pub fn content_to_view(self, content: Point) -> Point {
        Point::new(
            (content.x - self.center.x) * self.zoom + 0.5,
            (content.y - self.center.y) * self.zoom + 0.5,
        )
    }

    /// Inverse of [`Self::content_to_view`] for a fixed state.
    #[must_use]
    pub fn view_to_content(self, view: Point) -> Point {
        Point::new(
            self.center.x + (view.x - 0.5) / self.zoom,
            self.center.y + (view.y - 0.5) / self.zoom,
        )
    }

    /// Rescales by `factor` while keeping the content under `anchor_view`
    /// (a normalized view position) fixed on screen.
    #[must_use]
    pub fn scaled_at(self, factor: f64, anchor_view: Point) -> Self {
        if !factor.is_finite() || factor <= 0.0 || !anchor_view.is_finite() {
            return self;
        }
        let anchor_content = self.view_to_content(anchor_view);
        let next_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let center = Point::new(
            anchor_content.x - (anchor_view.x - 0.5) / next_zoom,
            anchor_content.y - (anchor_view.y - 0.5) / next_zoom,
        );
        Self::clamped(next_zoom, center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_state_maps_view_onto_content() {
        let state = ZoomState::default();
        let p = Point::new(0.3, 0.7);
        assert_eq!(state.content_to_view(p), p);
        assert_eq!(state.view_to_content(p), p);
    }

    #[test]
    fn content_view_round_trip() {
        let state = ZoomState::clamped(3.0, Point::new(0.4, 0.6));
        let content = Point::new(0.45, 0.55);
        let back = state.view_to_content(state.content_to_view(content));
        assert!((back.x - content.x).abs() < 1e-12);
        assert!((back.y - content.y).abs() < 1e-12);
    }

    #[test]
    fn center_clamp_keeps_window_inside_unit_square() {
        let state = ZoomState::clamped(2.0, Point::new(0.0, 1.0));
        let window_min = state.center().y - 0.5 / state.zoom();
        let window_max = state.center().y + 0.5 / state.zoom();
        assert!(state.center().x >= 0.25);
        assert!(window_min >= -1e-12);
        assert!(window_max <= 1.0 + 1e-12);
    }

    #[test]
    fn scaled_at_keeps_anchor_content_fixed() {
        let state = ZoomState::clamped(2.0, Point::new(0.5, 0.5));
        let anchor = Point::new(0.7, 0.4);
        let before = state.view_to_content(anchor);
        let zoomed = state.scaled_at(1.1, anchor);
        let after = zoomed.view_to_content(anchor);
        assert!((before.x - after.x).abs() < 1e-12);
        assert!((before.y - after.y).abs() < 1e-12);
    }

    #[test]
    fn zoom_is_clamped_to_bounds() {
        let state = ZoomState::clamped(50.0, Point::new(0.5, 0.5));
        assert_eq!(state.zoom(), MAX_ZOOM);
        let state = state.scaled_at(0.001, Point::new(0.5, 0.5));
        assert_eq!(state.zoom(), MIN_ZOOM);
        assert_eq!(state.center(), Point::new(0.5, 0.5));
    }
}
