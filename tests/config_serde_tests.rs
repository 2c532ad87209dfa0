use panel_widgets::api::{
    ChartConfig, Dataset, EditorMode, FaderConfig, FaderOrientation, PolygonEditorConfig,
    ZoomMode,
};
use panel_widgets::core::DataPoint;
use panel_widgets::render::{Color, LineStrokeStyle};

#[test]
fn polygon_editor_config_round_trips_through_json() {
    let config = PolygonEditorConfig::new(EditorMode::Joystick)
        .with_limits(16, 4)
        .with_zoom_pan_enabled(true);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = PolygonEditorConfig::from_json_str(&json).expect("parse");
    assert_eq!(config, parsed);
}

#[test]
fn chart_config_round_trips_through_json() {
    let config = ChartConfig::new(-5.0, 5.0, 0.0, 1.0)
        .with_title("speeds")
        .with_zoomable(true, ZoomMode::X)
        .with_datasets(vec![
            Dataset::new("a", Color::rgb(0.1, 0.2, 0.3))
                .with_line_style(LineStrokeStyle::DashDot)
                .with_data(vec![DataPoint::new(0.0, 0.5)]),
        ]);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(config, parsed);
}

#[test]
fn fader_config_round_trips_through_json() {
    let config = FaderConfig::new(FaderOrientation::Horizontal).with_range(0.0, 10.0)
        .with_value_origin(5.0);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = FaderConfig::from_json_str(&json).expect("parse");
    assert_eq!(config, parsed);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = PolygonEditorConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, PolygonEditorConfig::default());

    let chart = ChartConfig::from_json_str(r#"{"x_max": 50.0}"#).expect("parse");
    assert_eq!(chart.x_max, 50.0);
    assert_eq!(chart.grid_size, 10);
}

#[test]
fn malformed_json_is_reported_as_a_config_error() {
    let err = ChartConfig::from_json_str("not json").expect_err("must fail");
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn invalid_configs_fail_validation() {
    assert!(
        PolygonEditorConfig::default()
            .with_limits(2, 8)
            .validate()
            .is_err()
    );
    assert!(
        PolygonEditorConfig::default()
            .with_limits(32, 0)
            .validate()
            .is_err()
    );
    assert!(ChartConfig::new(0.0, 0.0, 0.0, 1.0).validate().is_err());
    assert!(ChartConfig::new(0.0, f64::NAN, 0.0, 1.0).validate().is_err());
    assert!(
        ChartConfig::new(0.0, 1.0, 0.0, 1.0)
            .with_grid(Color::WHITE, 0)
            .validate()
            .is_err()
    );
    assert!(
        FaderConfig::new(FaderOrientation::Vertical)
            .with_snap_duration_s(-1.0)
            .validate()
            .is_err()
    );
}

#[test]
fn dataset_validation_rejects_undrawable_styling() {
    assert!(Dataset::new("", Color::WHITE).validate().is_err());
    assert!(
        Dataset::new("a", Color::WHITE)
            .with_line_width(0.0)
            .validate()
            .is_err()
    );
    assert!(
        Dataset::new("a", Color::rgb(2.0, 0.0, 0.0)).validate().is_err()
    );
    // Non-finite data is allowed here; it is skipped at render time.
    assert!(
        Dataset::new("a", Color::WHITE)
            .with_data(vec![DataPoint::new(f64::NAN, 0.0)])
            .validate()
            .is_ok()
    );
}
