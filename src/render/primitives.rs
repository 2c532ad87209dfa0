use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{WidgetError, WidgetResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> WidgetResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(WidgetError::InvalidData(format!(
                "hex color `{hex}` must have 6 or 8 digits"
            )));
        }
        let channel = |range: std::ops::Range<usize>| -> WidgetResult<f64> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| WidgetError::InvalidData(format!("hex color `{hex}` is malformed")))
        };
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
            alpha: if digits.len() == 8 { channel(6..8)? } else { 1.0 },
        })
    }

    /// Per-channel linear interpolation toward `other`, exact at both ends.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Self {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
            alpha: mix(self.alpha, other.alpha),
        }
    }

    pub fn validate(self) -> WidgetResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WidgetError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke dashing applied to lines and polylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStrokeStyle {
    /// On/off run lengths in pixels; empty means solid.
    #[must_use]
    pub fn dash_pattern(self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[8.0, 4.0],
            Self::Dotted => &[2.0, 4.0],
            Self::DashDot => &[8.0, 4.0, 2.0, 4.0],
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> WidgetResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(WidgetError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(WidgetError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn filled(x: f64, y: f64, radius: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            radius,
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> WidgetResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(WidgetError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(WidgetError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(WidgetError::InvalidData(
                "circle needs a fill or a stroke".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(WidgetError::InvalidData(
                    "circle stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Draw command for a path through pixel-space points, open or closed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub points: Vec<Point>,
    pub closed: bool,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub style: LineStrokeStyle,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(points: Vec<Point>, stroke: Color, stroke_width: f64) -> Self {
        Self {
            points,
            closed: false,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn closed_shape(points: Vec<Point>, fill: Color, stroke: Color, stroke_width: f64) -> Self {
        Self {
            points,
            closed: true,
            fill: Some(fill),
            stroke: Some(stroke),
            stroke_width,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.points.len() < 2 {
            return Err(WidgetError::InvalidData(
                "path needs at least two points".to_owned(),
            ));
        }
        if self.points.iter().any(|p| !p.is_finite()) {
            return Err(WidgetError::InvalidData(
                "path points must be finite".to_owned(),
            ));
        }
        if self.fill.is_some() && !self.closed {
            return Err(WidgetError::InvalidData(
                "only closed paths can be filled".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(WidgetError::InvalidData(
                "path needs a fill or a stroke".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(WidgetError::InvalidData(
                    "path stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Draw command for an axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn outlined(x: f64, y: f64, width: f64, height: f64, stroke: Color, stroke_width: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> WidgetResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(WidgetError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(WidgetError::InvalidData(
                "rect size must be finite and > 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(WidgetError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(WidgetError::InvalidData(
                "rect needs a fill or a stroke".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(WidgetError::InvalidData(
                    "rect stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub bold: bool,
    /// Clockwise rotation around (x, y) in degrees.
    pub angle_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            bold: false,
            angle_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = angle_deg;
        self
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.text.is_empty() {
            return Err(WidgetError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.angle_deg.is_finite() {
            return Err(WidgetError::InvalidData(
                "text placement must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(WidgetError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
