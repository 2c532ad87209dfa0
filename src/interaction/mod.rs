mod chart;
mod designer;
mod joystick;
mod pinch;

pub use chart::{ChartGesture, HoverHit};
pub use designer::DesignerState;
pub use joystick::{JoystickSession, JoystickState, JoystickVector, LengthReference};
pub use pinch::PinchState;
