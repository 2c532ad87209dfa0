use crate::core::{ContainerRect, ContainerSpace, Point, Viewport};
use crate::error::WidgetResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathPrimitive, RenderFrame,
    SceneLayer,
};

use super::PolygonEditor;

const VERTEX_RADIUS_PX: f64 = 5.0;
const DRAFT_FIRST_VERTEX_RADIUS_PX: f64 = 8.0;
const VERTEX_OUTLINE_WIDTH_PX: f64 = 2.0;
/// Highlight for the vertex that closes the draft.
const DRAFT_FIRST_VERTEX_COLOR: Color = Color::rgb(1.0, 0.4, 0.0);

impl PolygonEditor {
    /// Builds the overlay scene for the current state: committed polygons,
    /// the draft being drawn, the reticle, and the joystick, in that order.
    /// Pure function of state; identical state yields identical frames.
    pub fn build_scene(&self, container: ContainerRect) -> WidgetResult<RenderFrame> {
        let space = ContainerSpace::new(container)?;
        let viewport = Viewport::new(
            container.width.round().max(1.0) as u32,
            container.height.round().max(1.0) as u32,
        );
        let mut frame = RenderFrame::with_layers(viewport, SceneLayer::overlay_stack());

        self.push_committed_polygons(&mut frame, space);
        self.push_draft(&mut frame, space);
        self.push_reticle(&mut frame, space);
        self.push_joystick(&mut frame, space);

        Ok(frame)
    }

    fn push_committed_polygons(&self, frame: &mut RenderFrame, space: ContainerSpace) {
        for polygon in &self.polygons {
            if !polygon.is_closed() {
                continue;
            }
            let points: Vec<Point> = polygon
                .points()
                .iter()
                .map(|&p| self.content_to_canvas(space, p))
                .collect();
            frame.push_path(
                SceneLayer::Polygons,
                PathPrimitive::closed_shape(
                    points.clone(),
                    self.config.fill_color,
                    self.config.border_color,
                    self.config.line_width,
                ),
            );
            for point in points {
                frame.push_circle(
                    SceneLayer::Polygons,
                    CirclePrimitive::filled(
                        point.x,
                        point.y,
                        VERTEX_RADIUS_PX,
                        self.config.border_color,
                    )
                    .with_stroke(Color::WHITE, VERTEX_OUTLINE_WIDTH_PX),
                );
            }
        }
    }

    fn push_draft(&self, frame: &mut RenderFrame, space: ContainerSpace) {
        let draft = self.designer.draft_points();
        if draft.is_empty() {
            return;
        }
        let points: Vec<Point> = draft
            .iter()
            .map(|&p| self.content_to_canvas(space, p))
            .collect();
        if points.len() >= 2 {
            frame.push_path(
                SceneLayer::Draft,
                PathPrimitive::stroked(
                    points.clone(),
                    self.config.border_color,
                    self.config.line_width,
                ),
            );
        }
        for (index, point) in points.iter().enumerate() {
            let (radius, fill) = if index == 0 {
                (DRAFT_FIRST_VERTEX_RADIUS_PX, DRAFT_FIRST_VERTEX_COLOR)
            } else {
                (VERTEX_RADIUS_PX, self.config.border_color)
            };
            frame.push_circle(
                SceneLayer::Draft,
                CirclePrimitive::filled(point.x, point.y, radius, fill)
                    .with_stroke(Color::WHITE, VERTEX_OUTLINE_WIDTH_PX),
            );
        }
    }

    fn push_reticle(&self, frame: &mut RenderFrame, space: ContainerSpace) {
        let reticle = self.config.reticle;
        if !reticle.visible {
            return;
        }
        let center = self.content_to_canvas(space, Point::new(reticle.x, reticle.y));
        let gap = 6.0 * reticle.size;
        let arm = 14.0 * reticle.size;
        let dot_radius = 2.0 * reticle.size;
        let stroke_width = 2.0 * reticle.size;

        frame.push_circle(
            SceneLayer::Reticle,
            CirclePrimitive::filled(center.x, center.y, dot_radius, reticle.color),
        );
        let arms = [
            (center.x, center.y - gap, center.x, center.y - gap - arm),
            (center.x, center.y + gap, center.x, center.y + gap + arm),
            (center.x - gap, center.y, center.x - gap - arm, center.y),
            (center.x + gap, center.y, center.x + gap + arm, center.y),
        ];
        for (x1, y1, x2, y2) in arms {
            frame.push_line(
                SceneLayer::Reticle,
                LinePrimitive::new(x1, y1, x2, y2, stroke_width, reticle.color),
            );
        }
    }

    fn push_joystick(&self, frame: &mut RenderFrame, space: ContainerSpace) {
        let Some((origin, dynamic)) = self.joystick.visual() else {
            return;
        };
        let joystick = self.config.joystick;
        let origin_px = space.normalized_to_canvas(origin);
        let dynamic_px = space.normalized_to_canvas(dynamic);

        let max_throw = self.max_throw_px(space);
        let ratio = if max_throw > 0.0 {
            (space.normalized_distance_px(origin, dynamic) / max_throw).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let connector_color = joystick.line_color_near.lerp(joystick.line_color_far, ratio);

        frame.push_line(
            SceneLayer::Joystick,
            LinePrimitive::new(
                origin_px.x,
                origin_px.y,
                dynamic_px.x,
                dynamic_px.y,
                joystick.line_width,
                connector_color,
            )
            .with_style(LineStrokeStyle::Dashed),
        );
        for center in [origin_px, dynamic_px] {
            frame.push_circle(
                SceneLayer::Joystick,
                CirclePrimitive::filled(center.x, center.y, joystick.size_px / 2.0, joystick.color)
                    .with_stroke(Color::WHITE, VERTEX_OUTLINE_WIDTH_PX),
            );
        }
    }

    fn content_to_canvas(&self, space: ContainerSpace, content: Point) -> Point {
        space.normalized_to_canvas(self.zoom.content_to_view(content))
    }
}
