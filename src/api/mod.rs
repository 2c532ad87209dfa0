mod chart_config;
mod chart_engine;
mod chart_hover_controller;
mod chart_interaction_controller;
mod chart_scene_builder;
mod designer_controller;
mod fader;
mod fader_config;
mod joystick_controller;
mod polygon_editor;
mod polygon_editor_config;
mod polygon_scene_builder;
mod zoom_pan_controller;

pub use chart_config::{ChartConfig, Dataset, ZoomMode};
pub use chart_engine::{ChartEngine, WheelModifiers};
pub use fader::{Fader, FaderEvent, RulerMark};
pub use fader_config::{FaderConfig, FaderOrientation, RulerConfig};
pub use polygon_editor::{PolygonEditor, PolygonEditorEvent};
pub use polygon_editor_config::{
    EditorMode, JoystickConfig, PolygonEditorConfig, ReticleConfig, StretchMode,
};
