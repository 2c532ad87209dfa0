//! Host platform services consumed by page-level code.
//!
//! The widget layer never touches ambient globals (fullscreen state,
//! clipboard). Hosts inject an implementation of [`PlatformServices`] instead,
//! which keeps embedding code testable without a real windowing environment.

use crate::error::WidgetResult;

/// Ambient browser/OS services an embedding host must provide.
pub trait PlatformServices {
    fn request_fullscreen(&mut self) -> WidgetResult<()>;
    fn exit_fullscreen(&mut self) -> WidgetResult<()>;
    fn is_fullscreen(&self) -> bool;
    fn read_clipboard(&mut self) -> WidgetResult<String>;
    fn write_clipboard(&mut self, text: &str) -> WidgetResult<()>;
}

/// In-memory platform used by tests and headless embedding.
#[derive(Debug, Default)]
pub struct NullPlatform {
    fullscreen: bool,
    clipboard: String,
}

impl PlatformServices for NullPlatform {
    fn request_fullscreen(&mut self) -> WidgetResult<()> {
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> WidgetResult<()> {
        self.fullscreen = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn read_clipboard(&mut self) -> WidgetResult<String> {
        Ok(self.clipboard.clone())
    }

    fn write_clipboard(&mut self, text: &str) -> WidgetResult<()> {
        self.clipboard = text.to_owned();
        Ok(())
    }
}
