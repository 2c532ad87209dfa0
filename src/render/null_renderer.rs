use crate::error::WidgetResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_primitive_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> WidgetResult<()> {
        frame.validate()?;
        self.last_primitive_count = frame.primitive_count();
        self.frames_rendered += 1;
        Ok(())
    }
}
