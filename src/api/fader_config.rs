use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};
use crate::render::Color;

/// Axis the fader button travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FaderOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Tick marks and labels drawn beside the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    pub visible: bool,
    pub show_text: bool,
    /// Spacing between marks in value units.
    pub line_distance: f64,
    pub line_width: f64,
    pub color: Color,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            visible: true,
            show_text: true,
            line_distance: 0.2,
            line_width: 1.0,
            color: Color::rgb(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0),
        }
    }
}

/// Public fader bootstrap configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaderConfig {
    pub orientation: FaderOrientation,
    pub min_value: f64,
    pub max_value: f64,
    /// Rest position the button snaps back to on release.
    pub value_origin: f64,
    pub snap_duration_s: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub ruler: RulerConfig,
}

impl Default for FaderConfig {
    fn default() -> Self {
        Self::new(FaderOrientation::Vertical)
    }
}

/// Track chrome inset on each end, in pixels.
const TRACK_INSET_PX: f64 = 20.0;
/// Button extent along the travel axis, in pixels.
const BUTTON_LENGTH_PX: f64 = 60.0;

impl FaderConfig {
    #[must_use]
    pub fn new(orientation: FaderOrientation) -> Self {
        let (width_px, height_px) = match orientation {
            FaderOrientation::Vertical => (80.0, 300.0),
            FaderOrientation::Horizontal => (300.0, 80.0),
        };
        Self {
            orientation,
            min_value: -1.0,
            max_value: 1.0,
            value_origin: 0.0,
            snap_duration_s: 0.1,
            width_px,
            height_px,
            ruler: RulerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    #[must_use]
    pub fn with_value_origin(mut self, value_origin: f64) -> Self {
        self.value_origin = value_origin;
        self
    }

    #[must_use]
    pub fn with_snap_duration_s(mut self, snap_duration_s: f64) -> Self {
        self.snap_duration_s = snap_duration_s;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width_px: f64, height_px: f64) -> Self {
        self.width_px = width_px;
        self.height_px = height_px;
        self
    }

    #[must_use]
    pub fn with_ruler(mut self, ruler: RulerConfig) -> Self {
        self.ruler = ruler;
        self
    }

    /// Button travel distance in pixels.
    #[must_use]
    pub fn track_length_px(&self) -> f64 {
        let along = match self.orientation {
            FaderOrientation::Vertical => self.height_px,
            FaderOrientation::Horizontal => self.width_px,
        };
        along - 2.0 * TRACK_INSET_PX - BUTTON_LENGTH_PX
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.min_value.is_finite()
            || !self.max_value.is_finite()
            || self.max_value <= self.min_value
        {
            return Err(WidgetError::InvalidConfig(
                "fader range must be finite with max > min".to_owned(),
            ));
        }
        if !self.value_origin.is_finite()
            || !(self.min_value..=self.max_value).contains(&self.value_origin)
        {
            return Err(WidgetError::InvalidConfig(
                "fader origin must lie inside the range".to_owned(),
            ));
        }
        if !self.snap_duration_s.is_finite() || self.snap_duration_s < 0.0 {
            return Err(WidgetError::InvalidConfig(
                "fader snap duration must be finite and >= 0".to_owned(),
            ));
        }
        let track = self.track_length_px();
        if !track.is_finite() || track <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "fader is too small to leave button travel".to_owned(),
            ));
        }
        if !self.ruler.line_distance.is_finite() || self.ruler.line_distance <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "ruler line distance must be finite and > 0".to_owned(),
            ));
        }
        if !self.ruler.line_width.is_finite() || self.ruler.line_width <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "ruler line width must be finite and > 0".to_owned(),
            ));
        }
        self.ruler
            .color
            .validate()
            .map_err(|e| WidgetError::InvalidConfig(e.to_string()))
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> WidgetResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}
