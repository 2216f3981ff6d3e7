use combined_chart::core::{ChartOffsets, Transformer, Viewport, ViewportHandler};
use proptest::prelude::*;

fn handler_with_zoom(scale_x: f64, scale_y: f64) -> ViewportHandler {
    let mut handler = ViewportHandler::new(Viewport::new(1200, 700));
    handler.restrain_view_port(ChartOffsets::uniform(12.0));
    let zoomed = handler.zoom(scale_x, scale_y);
    handler.refresh(zoomed);
    handler
}

proptest! {
    #[test]
    fn value_pixel_round_trip(
        x_min in -10_000.0f64..10_000.0,
        x_range in 1.0f64..5_000.0,
        y_min in -1_000.0f64..1_000.0,
        y_range in 1.0f64..2_000.0,
        x_factor in 0.0f64..1.0,
        y_factor in 0.0f64..1.0,
        scale_x in 1.0f64..8.0,
        scale_y in 1.0f64..8.0,
        inverted in any::<bool>()
    ) {
        let handler = handler_with_zoom(scale_x, scale_y);
        let mut transformer = Transformer::new();
        transformer.prepare_matrix_value_px(x_min, x_range, y_range, y_min, &handler);
        transformer.prepare_matrix_offset(inverted, &handler);

        let x = x_min + x_range * x_factor;
        let y = y_min + y_range * y_factor;
        let px = transformer.pixel_for_values(x, y, &handler);
        let back = transformer
            .value_for_touch_point(px.x, px.y, &handler)
            .expect("invertible transform");

        prop_assert!((back.x - x).abs() <= 1e-6 * x_range.max(x.abs()));
        prop_assert!((back.y - y).abs() <= 1e-6 * y_range.max(y.abs()));
    }

    #[test]
    fn unzoomed_range_fills_content_rect(
        x_min in -1_000.0f64..1_000.0,
        x_range in 1.0f64..5_000.0,
        y_min in -1_000.0f64..1_000.0,
        y_range in 1.0f64..2_000.0
    ) {
        let handler = handler_with_zoom(1.0, 1.0);
        let mut transformer = Transformer::new();
        transformer.prepare_matrix_value_px(x_min, x_range, y_range, y_min, &handler);
        transformer.prepare_matrix_offset(false, &handler);

        let bottom_left = transformer.pixel_for_values(x_min, y_min, &handler);
        let top_right = transformer.pixel_for_values(x_min + x_range, y_min + y_range, &handler);
        prop_assert!((bottom_left.x - handler.content_left()).abs() <= 1e-6);
        prop_assert!((bottom_left.y - handler.content_bottom()).abs() <= 1e-6);
        prop_assert!((top_right.x - handler.content_right()).abs() <= 1e-6);
        prop_assert!((top_right.y - handler.content_top()).abs() <= 1e-6);
    }
}
