use crate::core::types::{ContainerRect, Point};
use crate::error::{WidgetError, WidgetResult};

/// Mapping between screen pixels, normalized [0, 1] container fractions, and
/// container-local canvas pixels.
///
/// A `ContainerSpace` is built per event from the container's live bounding
/// rectangle and thrown away afterwards; it must never outlive the event that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSpace {
    rect: ContainerRect,
}

impl ContainerSpace {
    pub fn new(rect: ContainerRect) -> WidgetResult<Self> {
        if !rect.is_valid() {
            return Err(WidgetError::InvalidContainer {
                width: rect.width,
                height: rect.height,
            });
        }
        Ok(Self { rect })
    }

    #[must_use]
    pub fn rect(self) -> ContainerRect {
        self.rect
    }

    /// Maps an absolute screen position into normalized container fractions,
    /// clamping into [0, 1] so out-of-container pointers stay usable.
    #[must_use]
    pub fn screen_to_normalized(self, screen: Point) -> Point {
        Point::new(
            ((screen.x - self.rect.left) / self.rect.width).clamp(0.0, 1.0),
            ((screen.y - self.rect.top) / self.rect.height).clamp(0.0, 1.0),
        )
    }

    /// Inverse of [`Self::screen_to_normalized`] for in-container points.
    #[must_use]
    pub fn normalized_to_screen(self, norm: Point) -> Point {
        Point::new(
            norm.x * self.rect.width + self.rect.left,
            norm.y * self.rect.height + self.rect.top,
        )
    }

    /// Maps normalized fractions onto the container-local canvas in pixels.
    #[must_use]
    pub fn normalized_to_canvas(self, norm: Point) -> Point {
        Point::new(norm.x * self.rect.width, norm.y * self.rect.height)
    }

    /// Pixel distance between two normalized points.
    #[must_use]
    pub fn normalized_distance_px(self, a: Point, b: Point) -> f64 {
        let dx = (a.x - b.x) * self.rect.width;
        let dy = (a.y - b.y) * self.rect.height;
        dx.hypot(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_round_trip_is_exact_inside_container() {
        let space = ContainerSpace::new(ContainerRect::new(40.0, 20.0, 800.0, 600.0))
            .expect("valid space");
        let screen = Point::new(240.0, 170.0);
        let norm = space.screen_to_normalized(screen);
        let back = space.normalized_to_screen(norm);
        assert!((back.x - screen.x).abs() < 1e-9);
        assert!((back.y - screen.y).abs() < 1e-9);
    }

    #[test]
    fn out_of_container_pointer_clamps_to_unit_square() {
        let space =
            ContainerSpace::new(ContainerRect::from_size(100.0, 100.0)).expect("valid space");
        let norm = space.screen_to_normalized(Point::new(-50.0, 400.0));
        assert_eq!(norm, Point::new(0.0, 1.0));
    }

    #[test]
    fn degenerate_container_is_rejected() {
        assert!(ContainerSpace::new(ContainerRect::from_size(0.0, 100.0)).is_err());
        assert!(ContainerSpace::new(ContainerRect::from_size(f64::NAN, 100.0)).is_err());
    }
}
