use kurbo::Point;

use crate::core::{ScatterDataSet, ScatterShape};
use crate::interaction::Highlight;
use crate::render::data_renderer::{
    XBounds, draw_highlight_lines, formatter_for, highlighted_entry, push_segment,
    push_value_text, should_draw_values,
};
use crate::render::{
    ChartDataProvider, CirclePrimitive, Color, DataRenderer, PolygonPrimitive, RectPrimitive,
    RenderFrame,
};

const SHAPE_STROKE_PX: f64 = 1.0;

/// Draws one marker shape per scatter entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScatterChartRenderer;

impl ScatterChartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn visible(set: &ScatterDataSet, provider: &dyn ChartDataProvider) -> Vec<(usize, Point)> {
        let Some(bounds) = XBounds::new(set, provider) else {
            return Vec::new();
        };
        let handler = provider.viewport_handler();
        let transformer = provider.transformer(set.axis_dependency);
        let phase_y = provider.animator().phase_y();

        let mut out = Vec::new();
        for index in bounds.indices() {
            let Some(entry) = set.entry(index) else {
                break;
            };
            let px = transformer.pixel_for_values(entry.x, entry.y * phase_y, handler);
            if !handler.is_in_bounds_right(px.x) {
                break;
            }
            if !handler.is_in_bounds_left(px.x) || !handler.is_in_bounds_y(px.y) {
                continue;
            }
            out.push((index, px));
        }
        out
    }
}

/// Pushes one marker centered on `center`.
fn draw_shape(
    frame: &mut RenderFrame,
    shape: ScatterShape,
    center: Point,
    size: f64,
    color: Color,
) {
    let half = size / 2.0;
    match shape {
        ScatterShape::Square => {
            let rect = RectPrimitive::new(center.x - half, center.y - half, size, size, color);
            if rect.validate().is_ok() {
                frame.push_rect(rect);
            }
        }
        ScatterShape::Circle => {
            let circle = CirclePrimitive::filled(center.x, center.y, half, color);
            if circle.validate().is_ok() {
                frame.push_circle(circle);
            }
        }
        ScatterShape::Triangle => {
            let polygon = PolygonPrimitive::new(
                vec![
                    (center.x, center.y - half),
                    (center.x + half, center.y + half),
                    (center.x - half, center.y + half),
                ],
                color,
            );
            if polygon.validate().is_ok() {
                frame.push_polygon(polygon);
            }
        }
        ScatterShape::Cross => {
            push_segment(
                frame,
                (center.x - half, center.y),
                (center.x + half, center.y),
                SHAPE_STROKE_PX,
                color,
            );
            push_segment(
                frame,
                (center.x, center.y - half),
                (center.x, center.y + half),
                SHAPE_STROKE_PX,
                color,
            );
        }
        ScatterShape::X => {
            push_segment(
                frame,
                (center.x - half, center.y - half),
                (center.x + half, center.y + half),
                SHAPE_STROKE_PX,
                color,
            );
            push_segment(
                frame,
                (center.x + half, center.y - half),
                (center.x - half, center.y + half),
                SHAPE_STROKE_PX,
                color,
            );
        }
    }
}

impl DataRenderer for ScatterChartRenderer {
    fn draw_data(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        let Some(data) = provider.combined_data().scatter.as_ref() else {
            return;
        };
        for set in data.data_sets() {
            if !set.visible || set.style.shape_size <= 0.0 {
                continue;
            }
            for (index, center) in Self::visible(set, provider) {
                draw_shape(frame, set.style.shape, center, set.style.shape_size, set.color(index));
            }
        }
    }

    fn draw_values(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        if !provider.is_drawing_values_allowed() {
            return;
        }
        let Some(data) = provider.combined_data().scatter.as_ref() else {
            return;
        };
        for set in data.data_sets() {
            if !should_draw_values(set) {
                continue;
            }
            let formatter = formatter_for(set, provider);
            for (index, center) in Self::visible(set, provider) {
                let Some(entry) = set.entry(index) else {
                    continue;
                };
                push_value_text(
                    frame,
                    formatter.string_for_value(entry.y),
                    center.x,
                    center.y - set.style.shape_size - set.value_text_size,
                    set.value_text_size,
                    set.value_text_color,
                );
            }
        }
    }

    fn draw_extras(&self, _frame: &mut RenderFrame, _provider: &dyn ChartDataProvider) {}

    fn draw_highlighted(
        &self,
        frame: &mut RenderFrame,
        provider: &dyn ChartDataProvider,
        highlights: &[Highlight],
    ) {
        let Some(data) = provider.combined_data().scatter.as_ref() else {
            return;
        };
        let handler = provider.viewport_handler();
        let animator = provider.animator();

        for highlight in highlights {
            let Some((set, entry)) = highlighted_entry(data, highlight, animator.phase_x()) else {
                continue;
            };
            let px = provider.transformer(set.axis_dependency).pixel_for_values(
                entry.x,
                entry.y * animator.phase_y(),
                handler,
            );
            if !handler.is_in_bounds(px.x, px.y) {
                continue;
            }
            draw_highlight_lines(frame, handler, set, px.x, px.y);
        }
    }
}
