use crate::core::geometry::distance;
use crate::core::{ContainerSpace, Point, ZoomState};

/// Minimum finger separation accepted when starting a pinch; anything closer
/// makes the scale ratio numerically useless.
const MIN_PINCH_DISTANCE_PX: f64 = 1.0;

/// Two-finger pinch gesture captured at its start.
///
/// Each move recomputes zoom from the live/initial finger-distance ratio and
/// re-derives the zoom center from the start-of-gesture anchor content point,
/// so pan follows the midpoint scaled down by the live zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchState {
    start_zoom: f64,
    start_distance_px: f64,
    anchor_content: Point,
}

impl PinchState {
    #[must_use]
    pub fn begin(zoom: ZoomState, space: ContainerSpace, a: Point, b: Point) -> Option<Self> {
        let start_distance_px = distance(a, b);
        if !start_distance_px.is_finite() || start_distance_px < MIN_PINCH_DISTANCE_PX {
            return None;
        }
        let mid_view = space.screen_to_normalized(a.midpoint(b));
        Some(Self {
            start_zoom: zoom.zoom(),
            start_distance_px,
            anchor_content: zoom.view_to_content(mid_view),
        })
    }

    /// Produces the zoom state for the current finger positions.
    #[must_use]
    pub fn update(&self, space: ContainerSpace, a: Point, b: Point) -> Option<ZoomState> {
        let distance_px = distance(a, b);
        if !distance_px.is_finite() || distance_px <= 0.0 {
            return None;
        }
        let zoom = ZoomState::clamped(
            self.start_zoom * distance_px / self.start_distance_px,
            Point::new(0.5, 0.5),
        )
        .zoom();

        let mid_view = space.screen_to_normalized(a.midpoint(b));
        let center = Point::new(
            self.anchor_content.x - (mid_view.x - 0.5) / zoom,
            self.anchor_content.y - (mid_view.y - 0.5) / zoom,
        );
        Some(ZoomState::clamped(zoom, center))
    }
}
