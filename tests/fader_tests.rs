use approx::assert_abs_diff_eq;
use panel_widgets::api::{Fader, FaderConfig, FaderEvent, FaderOrientation};

// Default vertical fader: 300 px tall, 200 px of button travel.
fn vertical() -> Fader {
    Fader::new(FaderConfig::new(FaderOrientation::Vertical)).expect("fader init")
}

#[test]
fn value_pixel_mapping_round_trips() {
    let fader = vertical();
    assert_abs_diff_eq!(fader.value_to_pixel(1.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fader.value_to_pixel(-1.0), 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fader.value_to_pixel(0.0), 100.0, epsilon = 1e-9);

    for value in [-1.0, -0.35, 0.0, 0.5, 1.0] {
        let back = fader.pixel_to_value(fader.value_to_pixel(value));
        assert_abs_diff_eq!(back, value, epsilon = 1e-9);
    }
}

#[test]
fn horizontal_mapping_grows_rightward() {
    let fader = Fader::new(FaderConfig::new(FaderOrientation::Horizontal)).expect("fader init");
    assert_abs_diff_eq!(fader.value_to_pixel(-1.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fader.value_to_pixel(1.0), 200.0, epsilon = 1e-9);
}

#[test]
fn dragging_up_raises_the_value_and_reports_changes() {
    let mut fader = vertical();
    fader.drag_start(500.0);
    fader.drag_move(450.0);
    assert_abs_diff_eq!(fader.value(), 0.5, epsilon = 1e-9);

    // Same position again: no duplicate event.
    fader.drag_move(450.0);

    let events = fader.drain_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], FaderEvent::Start));
    assert!(matches!(events[1], FaderEvent::ValueChanged { value } if (value - 0.5).abs() < 1e-9));
}

#[test]
fn drag_values_clamp_to_the_range() {
    let mut fader = vertical();
    fader.drag_start(500.0);
    fader.drag_move(0.0);
    assert_eq!(fader.value(), 1.0);
    fader.drag_move(1_000.0);
    assert_eq!(fader.value(), -1.0);
}

#[test]
fn values_are_rounded_to_micro_precision() {
    let mut fader = vertical();
    fader.drag_start(500.0);
    // 12.345678 px of travel: 0.12345678 in value space.
    fader.drag_move(500.0 - 12.345_678);
    assert_eq!(fader.value(), 0.123_457);
}

#[test]
fn release_reports_the_origin_then_the_end_before_animating() {
    let mut fader = vertical();
    fader.drag_start(500.0);
    fader.drag_move(430.0);
    fader.drain_events();

    fader.drag_end(1_000.0);
    let events = fader.drain_events();
    assert_eq!(
        events,
        vec![FaderEvent::ValueChanged { value: 0.0 }, FaderEvent::End]
    );

    // Visual-only snap-back: the displayed value eases toward the origin
    // without emitting anything.
    assert!(fader.is_animating());
    assert!(fader.value() > 0.0);
    assert!(fader.tick(1_050.0));
    assert!(fader.value() < 0.7);
    assert!(!fader.tick(1_200.0));
    assert_eq!(fader.value(), 0.0);
    assert!(fader.drain_events().is_empty());
}

#[test]
fn releasing_at_the_origin_skips_the_animation() {
    let mut fader = vertical();
    fader.drag_start(500.0);
    fader.drag_end(0.0);
    assert!(!fader.is_animating());
    let events = fader.drain_events();
    assert_eq!(
        events,
        vec![
            FaderEvent::Start,
            FaderEvent::ValueChanged { value: 0.0 },
            FaderEvent::End
        ]
    );
}

#[test]
fn a_new_grab_cancels_the_snap_back() {
    let mut fader = vertical();
    fader.drag_start(500.0);
    fader.drag_move(400.0);
    fader.drag_end(0.0);
    assert!(fader.is_animating());

    fader.drag_start(420.0);
    assert!(!fader.is_animating());
    assert!(fader.is_dragging());
}

#[test]
fn ruler_marks_cover_the_range_with_majors_at_ends_and_zero() {
    let fader = vertical();
    let marks = fader.ruler_marks();
    assert_eq!(marks.len(), 11);
    assert_eq!(marks.first().map(|m| m.value), Some(-1.0));
    assert_eq!(marks.last().map(|m| m.value), Some(1.0));

    let majors: Vec<f64> = marks.iter().filter(|m| m.is_major).map(|m| m.value).collect();
    assert_eq!(majors, vec![-1.0, 0.0, 1.0]);
    // Positions run top-down for a vertical fader.
    assert!(marks.first().map(|m| m.position_px) > marks.last().map(|m| m.position_px));
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(
        Fader::new(FaderConfig::new(FaderOrientation::Vertical).with_range(1.0, -1.0)).is_err()
    );
    assert!(
        Fader::new(FaderConfig::new(FaderOrientation::Vertical).with_value_origin(5.0)).is_err()
    );
    assert!(
        Fader::new(FaderConfig::new(FaderOrientation::Vertical).with_size(80.0, 90.0)).is_err()
    );
}
