use crate::core::{PlotTransform, ViewBounds, Viewport};
use crate::error::WidgetResult;
use crate::interaction::{ChartGesture, HoverHit};

use super::{ChartConfig, Dataset};

/// Modifier keys accompanying a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelModifiers {
    /// Ctrl/Cmd held: the wheel zooms instead of scrolling.
    pub zoom: bool,
    /// Shift held: scrolling moves along X and uses the larger step.
    pub axis: bool,
}

/// Interactive 2D line chart engine.
///
/// Owns the visible data window and pointer interaction; hosts feed
/// surface-local pixel coordinates and draw the built scene. The chart emits
/// no events; all observable state is internal.
pub struct ChartEngine {
    pub(super) config: ChartConfig,
    pub(super) view: ViewBounds,
    pub(super) gesture: ChartGesture,
    pub(super) hover: Option<HoverHit>,
}

impl ChartEngine {
    pub fn new(config: ChartConfig) -> WidgetResult<Self> {
        config.validate()?;
        let view = config.bounds()?;
        Ok(Self {
            config,
            view,
            gesture: ChartGesture::Idle,
            hover: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn view_bounds(&self) -> ViewBounds {
        self.view
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.gesture.is_panning()
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverHit> {
        self.hover
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport()
    }

    /// Data/pixel mapping for the current view state.
    pub fn transform(&self) -> WidgetResult<PlotTransform> {
        PlotTransform::new(self.view, self.viewport(), self.config.padding)
    }

    /// Replaces the plotted series wholesale.
    pub fn set_datasets(&mut self, datasets: Vec<Dataset>) -> WidgetResult<()> {
        for dataset in &datasets {
            dataset.validate()?;
        }
        self.config.datasets = datasets;
        self.hover = None;
        Ok(())
    }

    /// Replaces the external bounds, resetting the visible window to them.
    pub fn set_domain(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> WidgetResult<()> {
        let bounds = ViewBounds::new(x_min, x_max, y_min, y_max)?;
        self.config.x_min = x_min;
        self.config.x_max = x_max;
        self.config.y_min = y_min;
        self.config.y_max = y_max;
        self.view = bounds;
        self.hover = None;
        Ok(())
    }

    /// Restores the visible window to the external bounds exactly.
    pub fn reset_view(&mut self) {
        // Config bounds were validated at construction and on every update.
        self.view = ViewBounds {
            x_min: self.config.x_min,
            x_max: self.config.x_max,
            y_min: self.config.y_min,
            y_max: self.config.y_max,
        };
        self.hover = None;
    }
}
