use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};
use crate::interaction::LengthReference;
use crate::render::Color;

/// Interaction mode of the overlay editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    /// Pure display, no interaction.
    Viewer,
    /// Polygon authoring.
    #[default]
    Designer,
    /// Virtual analog stick.
    Joystick,
}

/// How the host lays out the backing image inside the container.
///
/// Carried in the config so hosts can persist the full widget setup in one
/// document; the engine itself only maps coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StretchMode {
    #[default]
    Fit,
    Stretch,
    OriginalSize,
}

/// Crosshair reticle drawn over the content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReticleConfig {
    pub visible: bool,
    /// Normalized content position.
    pub x: f64,
    pub y: f64,
    /// Scale multiplier applied to every reticle measurement.
    pub size: f64,
    pub color: Color,
}

impl Default for ReticleConfig {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.5,
            y: 0.5,
            size: 1.0,
            color: Color::rgba(1.0, 0.0, 0.0, 204.0 / 255.0),
        }
    }
}

impl ReticleConfig {
    fn validate(self) -> WidgetResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(WidgetError::InvalidConfig(
                "reticle position must be finite".to_owned(),
            ));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "reticle size must be finite and > 0".to_owned(),
            ));
        }
        self.color
            .validate()
            .map_err(|e| WidgetError::InvalidConfig(e.to_string()))
    }
}

/// Virtual joystick tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickConfig {
    pub color: Color,
    /// Diameter of the two stick circles in pixels.
    pub size_px: f64,
    pub line_width: f64,
    /// Maximum throw as a fraction of the reference dimension.
    pub line_max_length: f64,
    pub length_reference: LengthReference,
    pub snap_duration_s: f64,
    /// Connector color at rest.
    pub line_color_near: Color,
    /// Connector color at maximum throw.
    pub line_color_far: Color,
    /// Dead zone radius as a fraction of the maximum throw.
    pub zero_radius: f64,
    /// Minimum spacing between move callbacks; 0 disables throttling.
    pub move_interval_ms: f64,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.6, 0.6, 0.6, 0.8),
            size_px: 48.0,
            line_width: 2.0,
            line_max_length: 0.25,
            length_reference: LengthReference::MinWidthHeight,
            snap_duration_s: 0.1,
            line_color_near: Color::rgb(1.0 / 3.0, 1.0 / 3.0, 1.0),
            line_color_far: Color::rgb(1.0, 0.0, 0.0),
            zero_radius: 0.01,
            move_interval_ms: 0.0,
        }
    }
}

impl JoystickConfig {
    fn validate(self) -> WidgetResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "joystick size must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "joystick line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_max_length.is_finite() || self.line_max_length <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "joystick max length fraction must be finite and > 0".to_owned(),
            ));
        }
        if !self.snap_duration_s.is_finite() || self.snap_duration_s < 0.0 {
            return Err(WidgetError::InvalidConfig(
                "joystick snap duration must be finite and >= 0".to_owned(),
            ));
        }
        if !self.zero_radius.is_finite() || !(0.0..1.0).contains(&self.zero_radius) {
            return Err(WidgetError::InvalidConfig(
                "joystick dead zone must be in [0, 1)".to_owned(),
            ));
        }
        if !self.move_interval_ms.is_finite() || self.move_interval_ms < 0.0 {
            return Err(WidgetError::InvalidConfig(
                "joystick move interval must be finite and >= 0".to_owned(),
            ));
        }
        for color in [self.color, self.line_color_near, self.line_color_far] {
            color
                .validate()
                .map_err(|e| WidgetError::InvalidConfig(e.to_string()))?;
        }
        Ok(())
    }
}

/// Public overlay editor bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the widget
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonEditorConfig {
    pub mode: EditorMode,
    pub stretch_mode: StretchMode,
    pub max_points: usize,
    pub max_polygons: usize,
    pub border_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    pub reticle: ReticleConfig,
    pub joystick: JoystickConfig,
    pub zoom_pan_enabled: bool,
}

impl Default for PolygonEditorConfig {
    fn default() -> Self {
        Self {
            mode: EditorMode::default(),
            stretch_mode: StretchMode::default(),
            max_points: 32,
            max_polygons: 8,
            border_color: Color::rgb(0.0, 0.6, 0.0),
            fill_color: Color::rgba(0.0, 238.0 / 255.0, 0.0, 85.0 / 255.0),
            line_width: 1.0,
            reticle: ReticleConfig::default(),
            joystick: JoystickConfig::default(),
            zoom_pan_enabled: false,
        }
    }
}

impl PolygonEditorConfig {
    #[must_use]
    pub fn new(mode: EditorMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stretch_mode(mut self, stretch_mode: StretchMode) -> Self {
        self.stretch_mode = stretch_mode;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, max_points: usize, max_polygons: usize) -> Self {
        self.max_points = max_points;
        self.max_polygons = max_polygons;
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_reticle(mut self, reticle: ReticleConfig) -> Self {
        self.reticle = reticle;
        self
    }

    #[must_use]
    pub fn with_joystick(mut self, joystick: JoystickConfig) -> Self {
        self.joystick = joystick;
        self
    }

    #[must_use]
    pub fn with_zoom_pan_enabled(mut self, enabled: bool) -> Self {
        self.zoom_pan_enabled = enabled;
        self
    }

    pub fn validate(self) -> WidgetResult<()> {
        if self.max_points < 3 {
            return Err(WidgetError::InvalidConfig(
                "max points must be at least 3".to_owned(),
            ));
        }
        if self.max_polygons == 0 {
            return Err(WidgetError::InvalidConfig(
                "max polygons must be at least 1".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        for color in [self.border_color, self.fill_color] {
            color
                .validate()
                .map_err(|e| WidgetError::InvalidConfig(e.to_string()))?;
        }
        self.reticle.validate()?;
        self.joystick.validate()
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
