use approx::assert_abs_diff_eq;
use panel_widgets::api::{
    EditorMode, JoystickConfig, PolygonEditor, PolygonEditorConfig, PolygonEditorEvent,
};
use panel_widgets::core::{ContainerRect, Point};
use panel_widgets::interaction::{JoystickVector, LengthReference};

fn container() -> ContainerRect {
    // Reference dimension (min of width/height) is 200 px, so the default
    // 0.25 fraction gives a 50 px maximum throw.
    ContainerRect::from_size(400.0, 200.0)
}

fn joystick_editor(config: JoystickConfig) -> PolygonEditor {
    PolygonEditor::new(PolygonEditorConfig::new(EditorMode::Joystick).with_joystick(config))
        .expect("editor init")
}

fn moves(events: &[PolygonEditorEvent]) -> Vec<JoystickVector> {
    events
        .iter()
        .filter_map(|event| match event {
            PolygonEditorEvent::JoystickMove(v) => Some(*v),
            _ => None,
        })
        .collect()
}

#[test]
fn session_emits_start_moves_zero_end_in_order() {
    let mut editor = joystick_editor(JoystickConfig::default());
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    editor.pointer_move(container(), Point::new(225.0, 100.0), 5.0);
    editor.pointer_up(10.0);

    let events = editor.drain_events();
    assert!(matches!(events[0], PolygonEditorEvent::JoystickStart));
    assert!(matches!(events[1], PolygonEditorEvent::JoystickMove(_)));
    assert_eq!(
        events[events.len() - 2],
        PolygonEditorEvent::JoystickMove(JoystickVector::ZERO)
    );
    assert!(matches!(events[events.len() - 1], PolygonEditorEvent::JoystickEnd));
}

#[test]
fn deflection_is_normalized_and_y_inverted() {
    let mut editor = joystick_editor(JoystickConfig::default());
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    // 25 px right, 25 px up: half the 50 px throw on each axis.
    editor.pointer_move(container(), Point::new(225.0, 75.0), 5.0);

    let events = editor.drain_events();
    let reported = moves(&events)[0];
    assert_abs_diff_eq!(reported.x, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(reported.y, 0.5, epsilon = 1e-9);
}

#[test]
fn throw_beyond_the_radius_clamps_exactly_on_the_radius() {
    let mut editor = joystick_editor(JoystickConfig::default());
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    // 200 px right: four times the maximum throw.
    editor.pointer_move(container(), Point::new(400.0, 100.0), 5.0);

    let session_visual = editor.joystick_state().visual().expect("active visual");
    let (origin, dynamic) = session_visual;
    let dist_px = ((dynamic.x - origin.x) * 400.0).hypot((dynamic.y - origin.y) * 200.0);
    assert_abs_diff_eq!(dist_px, 50.0, epsilon = 1e-9);

    let events = editor.drain_events();
    let reported = moves(&events)[0];
    assert_abs_diff_eq!(reported.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(reported.y, 0.0, epsilon = 1e-9);
}

#[test]
fn dead_zone_reports_exact_zero() {
    let config = JoystickConfig {
        zero_radius: 0.2,
        ..JoystickConfig::default()
    };
    let mut editor = joystick_editor(config);
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    // 5 px of a 50 px throw: inside the 20 % dead zone.
    editor.pointer_move(container(), Point::new(205.0, 100.0), 5.0);

    let events = editor.drain_events();
    assert_eq!(moves(&events), vec![JoystickVector::ZERO]);
}

#[test]
fn release_emits_exactly_one_zero_then_end_and_snap_back_is_silent() {
    let mut editor = joystick_editor(JoystickConfig::default());
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    editor.pointer_move(container(), Point::new(240.0, 100.0), 5.0);
    editor.pointer_up(10.0);

    let events = editor.drain_events();
    let zeros = moves(&events).iter().filter(|v| v.is_zero()).count();
    assert_eq!(zeros, 1);
    assert!(matches!(events.last(), Some(PolygonEditorEvent::JoystickEnd)));

    // The snap-back animation runs to completion without emitting anything.
    assert!(editor.joystick_state().is_snapping_back());
    let mut now = 10.0;
    while editor.tick(now) {
        now += 16.0;
        assert!(now < 1_000.0, "snap-back never finished");
    }
    assert!(editor.drain_events().is_empty());
    assert!(editor.joystick_state().visual().is_none());
}

#[test]
fn zero_movement_release_still_reports_a_final_zero() {
    let mut editor = joystick_editor(JoystickConfig::default());
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    editor.pointer_up(5.0);

    let events = editor.drain_events();
    assert_eq!(
        events,
        vec![
            PolygonEditorEvent::JoystickStart,
            PolygonEditorEvent::JoystickMove(JoystickVector::ZERO),
            PolygonEditorEvent::JoystickEnd,
        ]
    );
    // No movement means nothing to animate.
    assert!(editor.joystick_state().visual().is_none());
}

#[test]
fn new_pointer_down_cancels_a_snap_back_in_flight() {
    let mut editor = joystick_editor(JoystickConfig::default());
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    editor.pointer_move(container(), Point::new(240.0, 100.0), 5.0);
    editor.pointer_up(10.0);
    assert!(editor.joystick_state().is_snapping_back());

    editor.pointer_down(container(), Point::new(100.0, 100.0), 20.0);
    assert!(editor.is_joystick_active());
    let (origin, dynamic) = editor.joystick_state().visual().expect("active visual");
    assert_eq!(origin, dynamic);
    assert_eq!(origin, Point::new(0.25, 0.5));
}

#[test]
fn reference_dimension_mode_selects_the_axis() {
    let config = JoystickConfig {
        length_reference: LengthReference::Width,
        ..JoystickConfig::default()
    };
    let mut editor = joystick_editor(config);
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    // Width reference: throw is 400 * 0.25 = 100 px, so 50 px is half throw.
    editor.pointer_move(container(), Point::new(250.0, 100.0), 5.0);

    let events = editor.drain_events();
    let reported = moves(&events)[0];
    assert_abs_diff_eq!(reported.x, 0.5, epsilon = 1e-9);
}

#[test]
fn designer_mode_never_reports_joystick_events() {
    let mut editor =
        PolygonEditor::new(PolygonEditorConfig::new(EditorMode::Designer)).expect("editor init");
    editor.pointer_down(container(), Point::new(200.0, 100.0), 0.0);
    editor.pointer_move(container(), Point::new(240.0, 100.0), 5.0);
    editor.pointer_up(10.0);
    assert!(moves(&editor.drain_events()).is_empty());
}
