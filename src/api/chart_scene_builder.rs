use crate::core::Point;
use crate::error::WidgetResult;
use crate::render::{
    CirclePrimitive, ClipRect, Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame,
    SceneLayer, TextHAlign, TextPrimitive,
};

use super::ChartEngine;

const AXIS_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const AXIS_WIDTH_PX: f64 = 2.0;
const TICK_LABEL_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);
const TICK_FONT_PX: f64 = 12.0;
const AXIS_TITLE_FONT_PX: f64 = 14.0;
const TITLE_FONT_PX: f64 = 18.0;
const LEGEND_WIDTH_PX: f64 = 110.0;
const LEGEND_ROW_PX: f64 = 25.0;
const LEGEND_BACKGROUND: Color = Color::rgba(1.0, 1.0, 1.0, 0.9);
const LEGEND_BORDER: Color = Color::rgb(0.8, 0.8, 0.8);
const GUIDE_COLOR: Color = Color::rgb(0.6, 0.6, 0.6);

impl ChartEngine {
    /// Builds the chart scene for the current view state: background, clipped
    /// grid, axes and labels, clipped series, legend, hover crosshair, in
    /// that order. Pure function of state.
    pub fn build_scene(&self) -> WidgetResult<RenderFrame> {
        let transform = self.transform()?;
        let area = transform.area();
        let viewport = self.viewport();
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        let mut frame = RenderFrame::with_layers(viewport, SceneLayer::chart_stack());
        let clip = ClipRect {
            x: area.left,
            y: area.top,
            width: area.width,
            height: area.height,
        };
        frame.set_clip(SceneLayer::Grid, clip);
        frame.set_clip(SceneLayer::Series, clip);

        // Background
        frame.push_rect(
            SceneLayer::Background,
            RectPrimitive::filled(0.0, 0.0, width, height, self.config.background_color),
        );

        self.push_grid(&mut frame, transform);
        self.push_axes(&mut frame, transform, width, height);
        self.push_series(&mut frame, transform);
        self.push_legend(&mut frame, width);
        self.push_crosshair(&mut frame, transform);

        Ok(frame)
    }

    fn push_grid(&self, frame: &mut RenderFrame, transform: crate::core::PlotTransform) {
        let area = transform.area();
        let bounds = transform.bounds();
        let divisions = self.config.grid_size;
        let x_step = bounds.x_range() / f64::from(divisions);
        let y_step = bounds.y_range() / f64::from(divisions);

        for i in 0..=divisions {
            let x = bounds.x_min + f64::from(i) * x_step;
            let px = transform.x_to_px(x);
            frame.push_line(
                SceneLayer::Grid,
                LinePrimitive::new(px, area.top, px, area.bottom(), 1.0, self.config.grid_color),
            );
        }
        for i in 0..=divisions {
            let y = bounds.y_min + f64::from(i) * y_step;
            let py = transform.y_to_px(y);
            frame.push_line(
                SceneLayer::Grid,
                LinePrimitive::new(area.left, py, area.right(), py, 1.0, self.config.grid_color),
            );
        }
    }

    fn push_axes(
        &self,
        frame: &mut RenderFrame,
        transform: crate::core::PlotTransform,
        width: f64,
        height: f64,
    ) {
        let area = transform.area();
        let bounds = transform.bounds();

        frame.push_line(
            SceneLayer::Axis,
            LinePrimitive::new(
                area.left,
                area.bottom(),
                area.right(),
                area.bottom(),
                AXIS_WIDTH_PX,
                AXIS_COLOR,
            ),
        );
        frame.push_line(
            SceneLayer::Axis,
            LinePrimitive::new(
                area.left,
                area.top,
                area.left,
                area.bottom(),
                AXIS_WIDTH_PX,
                AXIS_COLOR,
            ),
        );
        frame.push_rect(
            SceneLayer::Axis,
            RectPrimitive::outlined(area.left, area.top, area.width, area.height, AXIS_COLOR, 1.0),
        );

        let divisions = self.config.grid_size;
        let x_step = bounds.x_range() / f64::from(divisions);
        let y_step = bounds.y_range() / f64::from(divisions);
        for i in 0..=divisions {
            let x = bounds.x_min + f64::from(i) * x_step;
            frame.push_text(
                SceneLayer::Axis,
                TextPrimitive::new(
                    format!("{x:.1}"),
                    transform.x_to_px(x),
                    area.bottom() + 20.0,
                    TICK_FONT_PX,
                    TICK_LABEL_COLOR,
                    TextHAlign::Center,
                ),
            );
        }
        for i in 0..=divisions {
            let y = bounds.y_min + f64::from(i) * y_step;
            frame.push_text(
                SceneLayer::Axis,
                TextPrimitive::new(
                    format!("{y:.1}"),
                    area.left - 10.0,
                    transform.y_to_px(y) + 4.0,
                    TICK_FONT_PX,
                    TICK_LABEL_COLOR,
                    TextHAlign::Right,
                ),
            );
        }

        if !self.config.x_label.is_empty() {
            frame.push_text(
                SceneLayer::Axis,
                TextPrimitive::new(
                    self.config.x_label.clone(),
                    width / 2.0,
                    height - 10.0,
                    AXIS_TITLE_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                )
                .with_bold(),
            );
        }
        if !self.config.y_label.is_empty() {
            frame.push_text(
                SceneLayer::Axis,
                TextPrimitive::new(
                    self.config.y_label.clone(),
                    15.0,
                    height / 2.0,
                    AXIS_TITLE_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                )
                .with_bold()
                .with_angle(-90.0),
            );
        }
        if !self.config.title.is_empty() {
            frame.push_text(
                SceneLayer::Axis,
                TextPrimitive::new(
                    self.config.title.clone(),
                    width / 2.0,
                    25.0,
                    TITLE_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                )
                .with_bold(),
            );
        }
    }

    fn push_series(&self, frame: &mut RenderFrame, transform: crate::core::PlotTransform) {
        let area = transform.area();
        for dataset in &self.config.datasets {
            // Non-finite samples are dropped per point, not per series.
            let points: Vec<Point> = dataset
                .data
                .iter()
                .filter(|point| point.is_finite())
                .map(|&point| transform.data_to_px(point))
                .collect();
            if points.len() >= 2 {
                frame.push_path(
                    SceneLayer::Series,
                    PathPrimitive::stroked(points.clone(), dataset.color, dataset.line_width)
                        .with_style(dataset.line_style),
                );
            }
            for point in points {
                if area.contains(point) {
                    frame.push_circle(
                        SceneLayer::Series,
                        CirclePrimitive::filled(
                            point.x,
                            point.y,
                            dataset.line_width + 2.0,
                            dataset.color,
                        ),
                    );
                }
            }
        }
    }

    fn push_legend(&self, frame: &mut RenderFrame, width: f64) {
        if self.config.datasets.is_empty() {
            return;
        }
        let origin_x = width - self.config.padding.right - 120.0;
        let origin_y = self.config.padding.top;
        let rows = self.config.datasets.len() as f64;
        frame.push_rect(
            SceneLayer::Legend,
            RectPrimitive::filled(
                origin_x,
                origin_y,
                LEGEND_WIDTH_PX,
                rows * LEGEND_ROW_PX + 10.0,
                LEGEND_BACKGROUND,
            )
            .with_stroke(LEGEND_BORDER, 1.0)
            .with_corner_radius(4.0),
        );
        for (index, dataset) in self.config.datasets.iter().enumerate() {
            let row_y = origin_y + index as f64 * LEGEND_ROW_PX + 18.0;
            frame.push_line(
                SceneLayer::Legend,
                LinePrimitive::new(origin_x + 10.0, row_y, origin_x + 35.0, row_y, 2.0, dataset.color)
                    .with_style(dataset.line_style),
            );
            frame.push_text(
                SceneLayer::Legend,
                TextPrimitive::new(
                    dataset.label.clone(),
                    origin_x + 42.0,
                    row_y + 4.0,
                    TICK_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Left,
                ),
            );
        }
    }

    fn push_crosshair(&self, frame: &mut RenderFrame, transform: crate::core::PlotTransform) {
        let Some(hit) = self.hover else {
            return;
        };
        let Some(dataset) = self.config.datasets.get(hit.dataset_index) else {
            return;
        };
        let area = transform.area();

        frame.push_line(
            SceneLayer::Crosshair,
            LinePrimitive::new(hit.px.x, area.top, hit.px.x, area.bottom(), 1.0, GUIDE_COLOR)
                .with_style(crate::render::LineStrokeStyle::Dashed),
        );
        frame.push_line(
            SceneLayer::Crosshair,
            LinePrimitive::new(area.left, hit.px.y, area.right(), hit.px.y, 1.0, GUIDE_COLOR)
                .with_style(crate::render::LineStrokeStyle::Dashed),
        );
        frame.push_circle(
            SceneLayer::Crosshair,
            CirclePrimitive {
                x: hit.px.x,
                y: hit.px.y,
                radius: dataset.line_width + 4.0,
                fill: None,
                stroke: Some(dataset.color),
                stroke_width: 2.0,
            },
        );
        frame.push_text(
            SceneLayer::Crosshair,
            TextPrimitive::new(
                format!("{}: ({:.2}, {:.2})", dataset.label, hit.point.x, hit.point.y),
                hit.px.x + 8.0,
                hit.px.y - 8.0,
                TICK_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Left,
            ),
        );
    }
}
