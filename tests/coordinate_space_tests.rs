use approx::assert_abs_diff_eq;
use panel_widgets::core::{ContainerRect, ContainerSpace, Point, ZoomState};

#[test]
fn screen_round_trip_survives_offset_containers() {
    let rect = ContainerRect::new(120.0, 80.0, 640.0, 480.0);
    let space = ContainerSpace::new(rect).expect("valid space");

    for screen in [
        Point::new(120.0, 80.0),
        Point::new(760.0, 560.0),
        Point::new(433.5, 291.25),
    ] {
        let back = space.normalized_to_screen(space.screen_to_normalized(screen));
        assert_abs_diff_eq!(back.x, screen.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, screen.y, epsilon = 1e-9);
    }
}

#[test]
fn round_trip_holds_through_the_zoom_transform() {
    let space = ContainerSpace::new(ContainerRect::from_size(800.0, 600.0)).expect("valid space");
    let zoom = ZoomState::clamped(4.0, Point::new(0.6, 0.4));

    let screen = Point::new(412.0, 297.0);
    let content = zoom.view_to_content(space.screen_to_normalized(screen));
    let back = space.normalized_to_screen(zoom.content_to_view(content));
    assert_abs_diff_eq!(back.x, screen.x, epsilon = 1e-9);
    assert_abs_diff_eq!(back.y, screen.y, epsilon = 1e-9);
}

#[test]
fn canvas_mapping_scales_with_the_container() {
    let space = ContainerSpace::new(ContainerRect::new(10.0, 10.0, 200.0, 100.0))
        .expect("valid space");
    let canvas = space.normalized_to_canvas(Point::new(0.25, 0.5));
    assert_eq!(canvas, Point::new(50.0, 50.0));
}

#[test]
fn normalized_distance_uses_pixel_metric() {
    let space =
        ContainerSpace::new(ContainerRect::from_size(300.0, 400.0)).expect("valid space");
    let d = space.normalized_distance_px(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    assert_abs_diff_eq!(d, 500.0, epsilon = 1e-9);
}
