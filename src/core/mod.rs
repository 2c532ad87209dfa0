pub mod animation;
pub mod geometry;
pub mod polygon;
pub mod space;
pub mod throttle;
pub mod types;
pub mod view_bounds;
pub mod zoom;

pub use animation::{AnimationTask, Easing, Lerp};
pub use polygon::{Polygon, Vertices};
pub use space::ContainerSpace;
pub use throttle::TrailingThrottle;
pub use types::{ContainerRect, DataPoint, Point, Viewport};
pub use view_bounds::{PlotArea, PlotPadding, PlotTransform, ViewBounds};
pub use zoom::{MAX_ZOOM, MIN_ZOOM, ZoomState};
