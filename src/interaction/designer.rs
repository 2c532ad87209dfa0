use crate::core::{Point, Vertices};

/// Gesture state of the polygon authoring mode.
///
/// Encoding the union explicitly rules out impossible combinations such as
/// drawing and dragging at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DesignerState {
    #[default]
    Idle,
    /// Open vertex chain being drawn; not yet part of the committed set.
    Drawing { points: Vertices },
    /// One committed vertex following the pointer.
    Dragging {
        poly_index: usize,
        point_index: usize,
    },
}

impl DesignerState {
    #[must_use]
    pub fn drawing(first: Point) -> Self {
        let mut points = Vertices::new();
        points.push(first);
        Self::Drawing { points }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Draft vertices when drawing, empty otherwise.
    #[must_use]
    pub fn draft_points(&self) -> &[Point] {
        match self {
            Self::Drawing { points } => points,
            _ => &[],
        }
    }
}
