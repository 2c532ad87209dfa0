use crate::core::{ContainerRect, Point, Polygon, TrailingThrottle, ZoomState};
use crate::error::WidgetResult;
use crate::interaction::{DesignerState, JoystickState, JoystickVector, PinchState};

use super::{EditorMode, PolygonEditorConfig};

/// Host-facing notifications, queued in emission order and drained after each
/// call. `PolygonsChanged` always carries the full replacement set.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonEditorEvent {
    PolygonsChanged(Vec<Polygon>),
    JoystickStart,
    JoystickMove(JoystickVector),
    JoystickEnd,
}

/// Interactive image-overlay engine: polygon authoring, a virtual joystick
/// with elastic snap-back, and wheel/pinch zoom-pan.
///
/// The engine is headless: hosts feed pointer events (with the container's
/// live bounding rectangle read fresh per event) plus frame ticks, then drain
/// events and draw the built scene.
pub struct PolygonEditor {
    pub(super) config: PolygonEditorConfig,
    pub(super) polygons: Vec<Polygon>,
    pub(super) designer: DesignerState,
    pub(super) joystick: JoystickState,
    pub(super) throttle: TrailingThrottle<JoystickVector>,
    pub(super) zoom: ZoomState,
    pub(super) pinch: Option<PinchState>,
    pub(super) events: Vec<PolygonEditorEvent>,
}

impl PolygonEditor {
    pub fn new(config: PolygonEditorConfig) -> WidgetResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            polygons: Vec::new(),
            designer: DesignerState::Idle,
            joystick: JoystickState::Released,
            throttle: TrailingThrottle::new(config.joystick.move_interval_ms),
            zoom: ZoomState::default(),
            pinch: None,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &PolygonEditorConfig {
        &self.config
    }

    /// Switches interaction mode, abandoning any gesture in progress.
    /// The zoom state survives mode changes.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.config.mode == mode {
            return;
        }
        self.config.mode = mode;
        self.abandon_gestures();
    }

    /// Replaces the working polygon set from host-owned state.
    ///
    /// This is a sync, not an edit: no `PolygonsChanged` is emitted. A vertex
    /// drag in progress is abandoned since its indices may no longer exist.
    pub fn set_polygons(&mut self, polygons: Vec<Polygon>) {
        self.polygons = polygons;
        if self.designer.is_dragging() {
            self.designer = DesignerState::Idle;
        }
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[must_use]
    pub fn designer_state(&self) -> &DesignerState {
        &self.designer
    }

    #[must_use]
    pub fn joystick_state(&self) -> &JoystickState {
        &self.joystick
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn is_joystick_active(&self) -> bool {
        self.joystick.is_active()
    }

    /// Queued events since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<PolygonEditorEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pointer_down(&mut self, container: ContainerRect, screen: Point, now_ms: f64) {
        match self.config.mode {
            EditorMode::Joystick => self.joystick_pointer_down(container, screen, now_ms),
            EditorMode::Designer => self.designer_pointer_down(container, screen),
            EditorMode::Viewer => {}
        }
    }

    pub fn pointer_move(&mut self, container: ContainerRect, screen: Point, now_ms: f64) {
        match self.config.mode {
            EditorMode::Joystick => self.joystick_pointer_move(container, screen, now_ms),
            EditorMode::Designer => self.designer_pointer_move(container, screen),
            EditorMode::Viewer => {}
        }
    }

    pub fn pointer_up(&mut self, now_ms: f64) {
        match self.config.mode {
            EditorMode::Joystick => self.joystick_pointer_up(now_ms),
            EditorMode::Designer => self.designer_pointer_up(),
            EditorMode::Viewer => {}
        }
    }

    /// Pointer leaving the container releases like a pointer-up.
    pub fn pointer_leave(&mut self, now_ms: f64) {
        self.pointer_up(now_ms);
    }

    /// Advances the snap-back animation and flushes overdue throttled moves.
    ///
    /// Returns `true` while the host should keep scheduling frames.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.joystick_tick(now_ms)
    }

    pub(super) fn emit(&mut self, event: PolygonEditorEvent) {
        self.events.push(event);
    }

    pub(super) fn emit_polygons_changed(&mut self) {
        let snapshot = self.polygons.clone();
        self.emit(PolygonEditorEvent::PolygonsChanged(snapshot));
    }

    fn abandon_gestures(&mut self) {
        self.designer = DesignerState::Idle;
        self.joystick = JoystickState::Released;
        self.throttle.reset();
        self.pinch = None;
    }
}
