use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PlotPadding, ViewBounds, Viewport};
use crate::error::{WidgetError, WidgetResult};
use crate::render::{Color, LineStrokeStyle};

/// Which axes a modifier-wheel zoom affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomMode {
    /// X range only; Y stays fixed.
    X,
    #[default]
    Xy,
}

/// One plotted series. Read-only to the widget; hosts own and replace it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub color: Color,
    pub line_width: f64,
    pub line_style: LineStrokeStyle,
    pub data: Vec<DataPoint>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            line_width: 2.0,
            line_style: LineStrokeStyle::Solid,
            data: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStrokeStyle) -> Self {
        self.line_style = line_style;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<DataPoint>) -> Self {
        self.data = data;
        self
    }

    /// Styling must be drawable; data points may be non-finite and are
    /// skipped per point during scene building instead.
    pub fn validate(&self) -> WidgetResult<()> {
        if self.label.is_empty() {
            return Err(WidgetError::InvalidConfig(
                "dataset label must not be empty".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "dataset line width must be finite and > 0".to_owned(),
            ));
        }
        self.color
            .validate()
            .map_err(|e| WidgetError::InvalidConfig(e.to_string()))
    }
}

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub grid_color: Color,
    /// Grid divisions per axis.
    pub grid_size: u32,
    pub pannable: bool,
    pub zoomable: bool,
    pub zoom_mode: ZoomMode,
    pub scrollable: bool,
    pub padding: PlotPadding,
    pub datasets: Vec<Dataset>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: "X".to_owned(),
            y_label: "Y".to_owned(),
            x_min: 0.0,
            x_max: 100.0,
            y_min: 0.0,
            y_max: 100.0,
            width: 600,
            height: 400,
            background_color: Color::WHITE,
            grid_color: Color::rgb(224.0 / 255.0, 224.0 / 255.0, 224.0 / 255.0),
            grid_size: 10,
            pannable: false,
            zoomable: false,
            zoom_mode: ZoomMode::default(),
            scrollable: false,
            padding: PlotPadding::default(),
            datasets: Vec::new(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, color: Color, grid_size: u32) -> Self {
        self.grid_color = color;
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn with_pannable(mut self, pannable: bool) -> Self {
        self.pannable = pannable;
        self
    }

    #[must_use]
    pub fn with_zoomable(mut self, zoomable: bool, zoom_mode: ZoomMode) -> Self {
        self.zoomable = zoomable;
        self.zoom_mode = zoom_mode;
        self
    }

    #[must_use]
    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_datasets(mut self, datasets: Vec<Dataset>) -> Self {
        self.datasets = datasets;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Initial data window from the external bounds.
    pub fn bounds(&self) -> WidgetResult<ViewBounds> {
        ViewBounds::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }

    pub fn validate(&self) -> WidgetResult<()> {
        let bounds = self.bounds()?;
        // Probes padding/viewport compatibility as well.
        crate::core::PlotTransform::new(bounds, self.viewport(), self.padding)?;
        if self.grid_size == 0 {
            return Err(WidgetError::InvalidConfig(
                "grid size must be at least 1".to_owned(),
            ));
        }
        for color in [self.background_color, self.grid_color] {
            color
                .validate()
                .map_err(|e| WidgetError::InvalidConfig(e.to_string()))?;
        }
        for dataset in &self.datasets {
            dataset.validate()?;
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> WidgetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}
