use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::geometry::point_in_polygon;
use crate::core::types::Point;

/// Inline vertex storage; most overlay polygons are small quads/hulls.
pub type Vertices = SmallVec<[Point; 8]>;

/// Ordered vertex loop in normalized container coordinates.
///
/// A polygon is closed (and hit-testable) once it has at least three
/// vertices. Draft shapes being drawn live in the designer state machine, not
/// here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    points: Vertices,
}

impl Polygon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replaces one vertex wholesale. Returns `false` for out-of-range indices.
    pub fn set_point(&mut self, index: usize, point: Point) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, &self.points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
