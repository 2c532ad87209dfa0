use serde::{Deserialize, Serialize};

use crate::core::types::{DataPoint, Point, Viewport};
use crate::error::{WidgetError, WidgetResult};

/// Currently visible data window of a chart, independent from the datasets'
/// own domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> WidgetResult<Self> {
        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        if !bounds.is_valid() {
            return Err(WidgetError::InvalidData(
                "view bounds must be finite non-degenerate intervals".to_owned(),
            ));
        }
        Ok(bounds)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.x_max > self.x_min
            && self.y_max > self.y_min
    }

    #[must_use]
    pub fn x_range(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn y_range(self) -> f64 {
        self.y_max - self.y_min
    }

    /// Translated copy; returns `self` unchanged for non-finite deltas.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        if !dx.is_finite() || !dy.is_finite() {
            return self;
        }
        Self {
            x_min: self.x_min + dx,
            x_max: self.x_max + dx,
            y_min: self.y_min + dy,
            y_max: self.y_max + dy,
        }
    }
}

/// Pixel padding reserved around the plot area for titles, labels and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 30.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

/// Plot rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, px: Point) -> bool {
        px.x >= self.left && px.x <= self.right() && px.y >= self.top && px.y <= self.bottom()
    }
}

/// Affine mapping between chart data space and surface pixels for one fixed
/// view state. Y is inverted: larger data values sit higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    bounds: ViewBounds,
    area: PlotArea,
}

impl PlotTransform {
    pub fn new(bounds: ViewBounds, viewport: Viewport, padding: PlotPadding) -> WidgetResult<Self> {
        if !viewport.is_valid() {
            return Err(WidgetError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !bounds.is_valid() {
            return Err(WidgetError::InvalidData(
                "plot transform requires valid view bounds".to_owned(),
            ));
        }

        let area = PlotArea {
            left: padding.left,
            top: padding.top,
            width: f64::from(viewport.width) - padding.left - padding.right,
            height: f64::from(viewport.height) - padding.top - padding.bottom,
        };
        if !area.width.is_finite() || !area.height.is_finite() || area.width <= 0.0 || area.height <= 0.0
        {
            return Err(WidgetError::InvalidData(
                "plot padding leaves no drawable area".to_owned(),
            ));
        }

        Ok(Self { bounds, area })
    }

    #[must_use]
    pub fn bounds(self) -> ViewBounds {
        self.bounds
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn x_to_px(self, x: f64) -> f64 {
        self.area.left + (x - self.bounds.x_min) / self.bounds.x_range() * self.area.width
    }

    #[must_use]
    pub fn y_to_px(self, y: f64) -> f64 {
        self.area.bottom() - (y - self.bounds.y_min) / self.bounds.y_range() * self.area.height
    }

    #[must_use]
    pub fn data_to_px(self, point: DataPoint) -> Point {
        Point::new(self.x_to_px(point.x), self.y_to_px(point.y))
    }

    #[must_use]
    pub fn px_to_x(self, px: f64) -> f64 {
        self.bounds.x_min + (px - self.area.left) / self.area.width * self.bounds.x_range()
    }

    #[must_use]
    pub fn px_to_y(self, px: f64) -> f64 {
        self.bounds.y_min + (self.area.bottom() - px) / self.area.height * self.bounds.y_range()
    }

    #[must_use]
    pub fn px_to_data(self, px: Point) -> DataPoint {
        DataPoint::new(self.px_to_x(px.x), self.px_to_y(px.y))
    }
}
