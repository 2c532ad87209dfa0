use panel_widgets::core::{
    ContainerRect, ContainerSpace, PlotPadding, PlotTransform, Point, ViewBounds, Viewport,
    ZoomState,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn container_space_round_trip_property(
        left in -10_000.0f64..10_000.0,
        top in -10_000.0f64..10_000.0,
        width in 1.0f64..5_000.0,
        height in 1.0f64..5_000.0,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0
    ) {
        let rect = ContainerRect::new(left, top, width, height);
        let space = ContainerSpace::new(rect).expect("valid space");
        let screen = Point::new(left + fx * width, top + fy * height);

        let back = space.normalized_to_screen(space.screen_to_normalized(screen));
        prop_assert!((back.x - screen.x).abs() <= 1e-6);
        prop_assert!((back.y - screen.y).abs() <= 1e-6);
    }

    #[test]
    fn zoom_round_trip_property(
        zoom in 1.0f64..10.0,
        cx in 0.0f64..1.0,
        cy in 0.0f64..1.0,
        vx in 0.0f64..1.0,
        vy in 0.0f64..1.0
    ) {
        let state = ZoomState::clamped(zoom, Point::new(cx, cy));
        let view = Point::new(vx, vy);
        let back = state.content_to_view(state.view_to_content(view));
        prop_assert!((back.x - view.x).abs() <= 1e-9);
        prop_assert!((back.y - view.y).abs() <= 1e-9);
    }

    #[test]
    fn zoom_window_stays_inside_unit_square_property(
        zoom in -5.0f64..50.0,
        cx in -2.0f64..3.0,
        cy in -2.0f64..3.0
    ) {
        let state = ZoomState::clamped(zoom, Point::new(cx, cy));
        for (center, half) in [
            (state.center().x, 0.5 / state.zoom()),
            (state.center().y, 0.5 / state.zoom()),
        ] {
            prop_assert!(center - half >= -1e-9);
            prop_assert!(center + half <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn plot_transform_round_trip_property(
        x_min in -1_000_000.0f64..1_000_000.0,
        x_span in 0.001f64..1_000_000.0,
        y_min in -1_000_000.0f64..1_000_000.0,
        y_span in 0.001f64..1_000_000.0,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0
    ) {
        let bounds = ViewBounds::new(x_min, x_min + x_span, y_min, y_min + y_span)
            .expect("valid bounds");
        let transform =
            PlotTransform::new(bounds, Viewport::new(1600, 900), PlotPadding::default())
                .expect("valid transform");

        let point = panel_widgets::core::DataPoint::new(
            x_min + fx * x_span,
            y_min + fy * y_span,
        );
        let back = transform.px_to_data(transform.data_to_px(point));
        prop_assert!((back.x - point.x).abs() <= x_span * 1e-9 + 1e-9);
        prop_assert!((back.y - point.y).abs() <= y_span * 1e-9 + 1e-9);
    }
}
