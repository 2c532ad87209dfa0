use tracing::trace;

use crate::core::geometry::distance;
use crate::core::{ContainerRect, ContainerSpace, Point, Polygon};
use crate::interaction::DesignerState;

use super::{EditorMode, PolygonEditor};

/// Screen-pixel radius for grabbing an existing vertex.
const VERTEX_HIT_RADIUS_PX: f64 = 10.0;
/// Screen-pixel radius for the close-on-first-point click, slightly wider so
/// closing stays comfortable on touch screens.
const CLOSE_HIT_RADIUS_PX: f64 = 12.0;

impl PolygonEditor {
    /// Designer-mode click: adds draft vertices, closes drafts, or starts a
    /// new draft. Out-of-range requests are silent no-ops.
    pub fn click(&mut self, container: ContainerRect, screen: Point) {
        if self.config.mode != EditorMode::Designer {
            return;
        }
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        let content = self.screen_to_content(space, screen);

        match std::mem::take(&mut self.designer) {
            DesignerState::Drawing { mut points } => {
                if points.len() >= 3 {
                    let first_screen = self.content_to_screen(space, points[0]);
                    if distance(screen, first_screen) < CLOSE_HIT_RADIUS_PX {
                        self.commit_draft(points);
                        return;
                    }
                }
                if points.len() < self.config.max_points {
                    points.push(content);
                }
                if points.len() >= self.config.max_points {
                    self.commit_draft(points);
                } else {
                    self.designer = DesignerState::Drawing { points };
                }
            }
            state @ DesignerState::Dragging { .. } => {
                self.designer = state;
            }
            DesignerState::Idle => {
                if self.find_vertex(space, screen).is_some() {
                    return;
                }
                if self.find_polygon(content).is_some() {
                    return;
                }
                if self.polygons.len() < self.config.max_polygons {
                    self.designer = DesignerState::drawing(content);
                }
            }
        }
    }

    /// Designer-mode double-click: discards the draft, or deletes the hit
    /// polygon when idle.
    pub fn double_click(&mut self, container: ContainerRect, screen: Point) {
        if self.config.mode != EditorMode::Designer {
            return;
        }
        if self.designer.is_drawing() {
            self.designer = DesignerState::Idle;
            return;
        }
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        let content = self.screen_to_content(space, screen);
        if let Some(index) = self.find_polygon(content) {
            self.polygons.remove(index);
            trace!(index, "polygon deleted");
            self.emit_polygons_changed();
        }
    }

    pub(super) fn designer_pointer_down(&mut self, container: ContainerRect, screen: Point) {
        if self.designer.is_drawing() {
            return;
        }
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        if let Some((poly_index, point_index)) = self.find_vertex(space, screen) {
            self.designer = DesignerState::Dragging {
                poly_index,
                point_index,
            };
        }
    }

    pub(super) fn designer_pointer_move(&mut self, container: ContainerRect, screen: Point) {
        let DesignerState::Dragging {
            poly_index,
            point_index,
        } = self.designer
        else {
            return;
        };
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        let content = self.screen_to_content(space, screen);
        let moved = self
            .polygons
            .get_mut(poly_index)
            .is_some_and(|polygon| polygon.set_point(point_index, content));
        if moved {
            // Hosts track the vertex live, not just on release.
            self.emit_polygons_changed();
        }
    }

    pub(super) fn designer_pointer_up(&mut self) {
        if self.designer.is_dragging() {
            self.designer = DesignerState::Idle;
        }
    }

    fn commit_draft(&mut self, points: crate::core::Vertices) {
        trace!(vertices = points.len(), "polygon committed");
        self.polygons.push(Polygon::from_points(points));
        self.designer = DesignerState::Idle;
        self.emit_polygons_changed();
    }

    /// Pointer position in normalized content coordinates, through the
    /// current zoom state.
    fn screen_to_content(&self, space: ContainerSpace, screen: Point) -> Point {
        self.zoom
            .view_to_content(space.screen_to_normalized(screen))
    }

    fn content_to_screen(&self, space: ContainerSpace, content: Point) -> Point {
        space.normalized_to_screen(self.zoom.content_to_view(content))
    }

    /// Nearest committed vertex within the grab radius, if any.
    fn find_vertex(&self, space: ContainerSpace, screen: Point) -> Option<(usize, usize)> {
        for (poly_index, polygon) in self.polygons.iter().enumerate() {
            for (point_index, &vertex) in polygon.points().iter().enumerate() {
                let vertex_screen = self.content_to_screen(space, vertex);
                if distance(screen, vertex_screen) < VERTEX_HIT_RADIUS_PX {
                    return Some((poly_index, point_index));
                }
            }
        }
        None
    }

    /// Topmost committed polygon containing the content point, if any.
    fn find_polygon(&self, content: Point) -> Option<usize> {
        self.polygons
            .iter()
            .enumerate()
            .rev()
            .find(|(_, polygon)| polygon.contains(content))
            .map(|(index, _)| index)
    }
}
