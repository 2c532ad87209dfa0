use approx::assert_abs_diff_eq;
use panel_widgets::api::{EditorMode, PolygonEditor, PolygonEditorConfig};
use panel_widgets::core::{ContainerRect, Point, MAX_ZOOM, MIN_ZOOM};

fn container() -> ContainerRect {
    ContainerRect::from_size(400.0, 400.0)
}

fn zoomable_editor() -> PolygonEditor {
    PolygonEditor::new(PolygonEditorConfig::new(EditorMode::Viewer).with_zoom_pan_enabled(true))
        .expect("editor init")
}

#[test]
fn wheel_up_zooms_in_and_wheel_down_zooms_out() {
    let mut editor = zoomable_editor();
    editor.wheel_zoom(container(), Point::new(200.0, 200.0), -120.0);
    assert_abs_diff_eq!(editor.zoom_state().zoom(), 1.1, epsilon = 1e-9);

    // 1.1 * 0.9 lands just under the floor and clamps back to identity.
    editor.wheel_zoom(container(), Point::new(200.0, 200.0), 120.0);
    assert_abs_diff_eq!(editor.zoom_state().zoom(), MIN_ZOOM, epsilon = 1e-9);
}

#[test]
fn zoom_never_leaves_its_bounds() {
    let mut editor = zoomable_editor();
    for _ in 0..100 {
        editor.wheel_zoom(container(), Point::new(250.0, 150.0), -120.0);
        let zoom = editor.zoom_state().zoom();
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
    }
    assert_abs_diff_eq!(editor.zoom_state().zoom(), MAX_ZOOM, epsilon = 1e-9);

    for _ in 0..100 {
        editor.wheel_zoom(container(), Point::new(250.0, 150.0), 120.0);
        let zoom = editor.zoom_state().zoom();
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
    }
    assert_abs_diff_eq!(editor.zoom_state().zoom(), MIN_ZOOM, epsilon = 1e-9);
}

#[test]
fn wheel_zoom_keeps_the_cursor_content_fixed() {
    let mut editor = zoomable_editor();
    let cursor = Point::new(300.0, 100.0);
    // Zoom in a few notches away from the clamped edge.
    editor.wheel_zoom(container(), Point::new(200.0, 200.0), -120.0);
    editor.wheel_zoom(container(), Point::new(200.0, 200.0), -120.0);

    let space = panel_widgets::core::ContainerSpace::new(container()).expect("space");
    let anchor_view = space.screen_to_normalized(cursor);
    let before = editor.zoom_state().view_to_content(anchor_view);
    editor.wheel_zoom(container(), cursor, -120.0);
    let after = editor.zoom_state().view_to_content(anchor_view);

    assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-9);
    assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-9);
}

#[test]
fn zoom_is_inert_unless_enabled() {
    let mut editor =
        PolygonEditor::new(PolygonEditorConfig::new(EditorMode::Viewer)).expect("editor init");
    editor.wheel_zoom(container(), Point::new(200.0, 200.0), -120.0);
    editor.pinch_start(container(), Point::new(150.0, 200.0), Point::new(250.0, 200.0));
    editor.pinch_move(container(), Point::new(100.0, 200.0), Point::new(300.0, 200.0));
    assert!(editor.zoom_state().is_identity());
}

#[test]
fn pinch_scales_by_the_finger_distance_ratio() {
    let mut editor = zoomable_editor();
    editor.pinch_start(container(), Point::new(150.0, 200.0), Point::new(250.0, 200.0));
    editor.pinch_move(container(), Point::new(50.0, 200.0), Point::new(350.0, 200.0));
    assert_abs_diff_eq!(editor.zoom_state().zoom(), 3.0, epsilon = 1e-9);

    editor.pinch_end();
    // A finished pinch no longer moves the state.
    editor.pinch_move(container(), Point::new(0.0, 200.0), Point::new(400.0, 200.0));
    assert_abs_diff_eq!(editor.zoom_state().zoom(), 3.0, epsilon = 1e-9);
}

#[test]
fn pinch_pan_follows_the_midpoint_without_escaping_the_content() {
    let mut editor = zoomable_editor();
    editor.pinch_start(container(), Point::new(150.0, 200.0), Point::new(250.0, 200.0));
    // Same spread (zoom 2x) dragged hard toward the left edge.
    editor.pinch_move(container(), Point::new(-300.0, 200.0), Point::new(-100.0, 200.0));

    let state = editor.zoom_state();
    assert_abs_diff_eq!(state.zoom(), 2.0, epsilon = 1e-9);
    // Center clamp: the visible window must stay inside the content.
    assert!(state.center().x - 0.5 / state.zoom() >= -1e-9);
    assert!(state.center().x + 0.5 / state.zoom() <= 1.0 + 1e-9);
}

#[test]
fn zero_distance_pinch_is_rejected() {
    let mut editor = zoomable_editor();
    let finger = Point::new(200.0, 200.0);
    editor.pinch_start(container(), finger, finger);
    editor.pinch_move(container(), Point::new(100.0, 200.0), Point::new(300.0, 200.0));
    assert!(editor.zoom_state().is_identity());
}

#[test]
fn reset_zoom_restores_identity() {
    let mut editor = zoomable_editor();
    editor.wheel_zoom(container(), Point::new(300.0, 100.0), -120.0);
    editor.wheel_zoom(container(), Point::new(300.0, 100.0), -120.0);
    assert!(!editor.zoom_state().is_identity());
    editor.reset_zoom();
    assert!(editor.zoom_state().is_identity());
    assert_eq!(editor.zoom_state().center(), Point::new(0.5, 0.5));
}
