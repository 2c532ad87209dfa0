//! panel-widgets: headless interactive widget engines for device control
//! panels.
//!
//! The crate owns coordinate transforms, gesture state machines, animation
//! and throttling, and deterministic scene building into render primitives.
//! Hosts own pixels, pointer event sources, clocks and frame scheduling; they
//! feed events in and draw the produced [`render::RenderFrame`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod platform;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, Fader, FaderConfig, PolygonEditor, PolygonEditorConfig};
pub use error::{WidgetError, WidgetResult};
