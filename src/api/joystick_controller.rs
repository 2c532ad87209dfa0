use tracing::trace;

use crate::core::{AnimationTask, ContainerRect, ContainerSpace, Easing, Point};
use crate::interaction::{JoystickSession, JoystickState, JoystickVector};

use super::{PolygonEditor, PolygonEditorEvent};

impl PolygonEditor {
    pub(super) fn joystick_pointer_down(
        &mut self,
        container: ContainerRect,
        screen: Point,
        _now_ms: f64,
    ) {
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        // Starting a new gesture cancels any in-flight snap-back so two
        // animations never race on the same state.
        let origin = space.screen_to_normalized(screen);
        self.joystick = JoystickState::Active(JoystickSession::begin(origin));
        self.throttle.reset();
        trace!(x = origin.x, y = origin.y, "joystick engaged");
        self.emit(PolygonEditorEvent::JoystickStart);
    }

    pub(super) fn joystick_pointer_move(
        &mut self,
        container: ContainerRect,
        screen: Point,
        now_ms: f64,
    ) {
        let JoystickState::Active(mut session) = self.joystick else {
            return;
        };
        let Ok(space) = ContainerSpace::new(container) else {
            return;
        };
        let max_length_px = self.max_throw_px(space);
        if max_length_px <= 0.0 {
            return;
        }

        let candidate = space.screen_to_normalized(screen);
        let (clamped, _) = session.clamp_to_radius(space, candidate, max_length_px);
        session.dynamic = clamped;
        self.joystick = JoystickState::Active(session);

        // Deliver an overdue suppressed sample before offering the new one.
        if let Some(v) = self.throttle.poll(now_ms) {
            self.emit(PolygonEditorEvent::JoystickMove(v));
        }
        let deflection =
            session.deflection(space, max_length_px, self.config.joystick.zero_radius);
        if let Some(v) = self.throttle.submit(deflection, now_ms) {
            self.emit(PolygonEditorEvent::JoystickMove(v));
        }
    }

    pub(super) fn joystick_pointer_up(&mut self, now_ms: f64) {
        let JoystickState::Active(session) = self.joystick else {
            return;
        };

        // Last suppressed sample first, then the guaranteed stop, then the
        // end marker; the snap-back after this emits nothing.
        if let Some(v) = self.throttle.flush(now_ms) {
            if !v.is_zero() {
                self.emit(PolygonEditorEvent::JoystickMove(v));
            }
        }
        self.emit(PolygonEditorEvent::JoystickMove(JoystickVector::ZERO));
        self.emit(PolygonEditorEvent::JoystickEnd);
        self.throttle.reset();
        trace!("joystick released");

        let duration_ms = self.config.joystick.snap_duration_s * 1000.0;
        if duration_ms > 0.0 && session.dynamic != session.origin {
            self.joystick = JoystickState::SnappingBack {
                origin: session.origin,
                dynamic: session.dynamic,
                task: AnimationTask::new(
                    now_ms,
                    duration_ms,
                    Easing::QuadOut,
                    session.dynamic,
                    session.origin,
                ),
            };
        } else {
            self.joystick = JoystickState::Released;
        }
    }

    pub(super) fn joystick_tick(&mut self, now_ms: f64) -> bool {
        match self.joystick {
            JoystickState::SnappingBack { origin, task, .. } => {
                let (position, finished) = task.sample(now_ms);
                if finished {
                    self.joystick = JoystickState::Released;
                    false
                } else {
                    self.joystick = JoystickState::SnappingBack {
                        origin,
                        dynamic: position,
                        task,
                    };
                    true
                }
            }
            JoystickState::Active(_) => {
                if let Some(v) = self.throttle.poll(now_ms) {
                    self.emit(PolygonEditorEvent::JoystickMove(v));
                }
                self.throttle.has_pending()
            }
            JoystickState::Released => false,
        }
    }

    pub(super) fn max_throw_px(&self, space: ContainerSpace) -> f64 {
        let reference = self.config.joystick.length_reference.dimension_px(space);
        let max_length = reference * self.config.joystick.line_max_length;
        if max_length.is_finite() { max_length } else { 0.0 }
    }
}
