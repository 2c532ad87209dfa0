use crate::core::Viewport;
use crate::error::{WidgetError, WidgetResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// Compositing layers, ordered back to front within each widget's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneLayer {
    Background,
    Grid,
    Axis,
    Series,
    Legend,
    Crosshair,
    Polygons,
    Draft,
    Reticle,
    Joystick,
}

impl SceneLayer {
    /// Canonical chart stack: later layers occlude earlier ones.
    #[must_use]
    pub fn chart_stack() -> &'static [SceneLayer] {
        &[
            Self::Background,
            Self::Grid,
            Self::Axis,
            Self::Series,
            Self::Legend,
            Self::Crosshair,
        ]
    }

    /// Canonical overlay stack for the polygon editor.
    #[must_use]
    pub fn overlay_stack() -> &'static [SceneLayer] {
        &[Self::Polygons, Self::Draft, Self::Reticle, Self::Joystick]
    }
}

/// Pixel-space clip rectangle applied to a whole layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClipRect {
    pub fn validate(self) -> WidgetResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(WidgetError::InvalidData(
                "clip rect must be finite with positive size".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Primitives accumulated for one compositing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub layer: SceneLayer,
    pub clip: Option<ClipRect>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    fn empty(layer: SceneLayer) -> Self {
        Self {
            layer,
            clip: None,
            lines: Vec::new(),
            circles: Vec::new(),
            paths: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.circles.is_empty()
            && self.paths.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one widget draw pass.
///
/// Layers are stored in compositing order; backends draw them in vector
/// order, honoring each layer's optional clip. Within one layer the draw
/// order is rects, paths, lines, circles, texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn with_layers(viewport: Viewport, stack: &[SceneLayer]) -> Self {
        Self {
            viewport,
            layers: stack.iter().map(|&layer| LayerPrimitives::empty(layer)).collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, layer: SceneLayer) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|entry| entry.layer == layer)
    }

    pub fn set_clip(&mut self, layer: SceneLayer, clip: ClipRect) {
        if let Some(entry) = self.layer_mut(layer) {
            entry.clip = Some(clip);
        }
    }

    pub fn push_line(&mut self, layer: SceneLayer, line: LinePrimitive) {
        if let Some(entry) = self.layer_mut(layer) {
            entry.lines.push(line);
        }
    }

    pub fn push_circle(&mut self, layer: SceneLayer, circle: CirclePrimitive) {
        if let Some(entry) = self.layer_mut(layer) {
            entry.circles.push(circle);
        }
    }

    pub fn push_path(&mut self, layer: SceneLayer, path: PathPrimitive) {
        if let Some(entry) = self.layer_mut(layer) {
            entry.paths.push(path);
        }
    }

    pub fn push_rect(&mut self, layer: SceneLayer, rect: RectPrimitive) {
        if let Some(entry) = self.layer_mut(layer) {
            entry.rects.push(rect);
        }
    }

    pub fn push_text(&mut self, layer: SceneLayer, text: TextPrimitive) {
        if let Some(entry) = self.layer_mut(layer) {
            entry.texts.push(text);
        }
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.viewport.is_valid() {
            return Err(WidgetError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            if let Some(clip) = layer.clip {
                clip.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for path in &layer.paths {
                path.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    /// Total primitive count across all layers.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| {
                layer.lines.len()
                    + layer.circles.len()
                    + layer.paths.len()
                    + layer.rects.len()
                    + layer.texts.len()
            })
            .sum()
    }

    fn layer_mut(&mut self, layer: SceneLayer) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|entry| entry.layer == layer)
    }
}
