mod frame;
mod null_renderer;
mod primitives;

pub use frame::{ClipRect, LayerPrimitives, RenderFrame, SceneLayer};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::WidgetResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from widget domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> WidgetResult<()>;
}
