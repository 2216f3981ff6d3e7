use kurbo::Point;

use crate::core::LineDataSet;
use crate::formatter::{DefaultFillFormatter, FillFormatter};
use crate::interaction::Highlight;
use crate::render::data_renderer::{
    XBounds, draw_highlight_lines, formatter_for, highlighted_entry, push_segment,
    push_value_text, should_draw_values,
};
use crate::render::{
    ChartDataProvider, CirclePrimitive, DataRenderer, PolygonPrimitive, RenderFrame,
};

/// Draws line data: linear segments, optional fill and entry circles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineChartRenderer;

impl LineChartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn visible_points(set: &LineDataSet, provider: &dyn ChartDataProvider) -> Vec<Point> {
        let Some(bounds) = XBounds::new(set, provider) else {
            return Vec::new();
        };
        let phase_y = provider.animator().phase_y();
        let mut points: Vec<Point> = bounds
            .indices()
            .filter_map(|index| set.entry(index))
            .map(|entry| Point::new(entry.x, entry.y * phase_y))
            .collect();
        provider
            .transformer(set.axis_dependency)
            .points_value_to_pixel(&mut points, provider.viewport_handler());
        points
    }

    fn draw_fill(
        frame: &mut RenderFrame,
        provider: &dyn ChartDataProvider,
        set: &LineDataSet,
        points: &[Point],
    ) {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        let fill_min = match set.style.fill_formatter.as_deref() {
            Some(formatter) => formatter.fill_line_position(set, provider),
            None => DefaultFillFormatter::new().fill_line_position(set, provider),
        };
        let base = provider
            .transformer(set.axis_dependency)
            .pixel_for_values(0.0, fill_min, provider.viewport_handler())
            .y;

        let mut outline: Vec<(f64, f64)> = Vec::with_capacity(points.len() + 2);
        outline.push((first.x, base));
        outline.extend(points.iter().map(|point| (point.x, point.y)));
        outline.push((last.x, base));

        let polygon =
            PolygonPrimitive::new(outline, set.style.fill_color.with_alpha(set.style.fill_alpha));
        if polygon.validate().is_ok() {
            frame.push_polygon(polygon);
        }
    }
}

impl DataRenderer for LineChartRenderer {
    fn draw_data(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        let Some(data) = provider.combined_data().line.as_ref() else {
            return;
        };
        let handler = provider.viewport_handler();

        for set in data.data_sets() {
            if !set.visible || set.entry_count() < 1 {
                continue;
            }
            let points = Self::visible_points(set, provider);
            if set.style.draw_filled && points.len() > 1 {
                Self::draw_fill(frame, provider, set, &points);
            }

            for (index, pair) in points.windows(2).enumerate() {
                let (from, to) = (pair[0], pair[1]);
                if !handler.is_in_bounds_right(from.x.min(to.x)) {
                    break;
                }
                if !handler.is_in_bounds_left(from.x.max(to.x)) {
                    continue;
                }
                push_segment(
                    frame,
                    (from.x, from.y),
                    (to.x, to.y),
                    set.style.line_width,
                    set.color(index),
                );
            }
        }
    }

    fn draw_values(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        if !provider.is_drawing_values_allowed() {
            return;
        }
        let Some(data) = provider.combined_data().line.as_ref() else {
            return;
        };
        let handler = provider.viewport_handler();

        for set in data.data_sets() {
            if !should_draw_values(set) {
                continue;
            }
            let formatter = formatter_for(set, provider);
            let mut value_offset = set.style.circle_radius * 1.75;
            if !set.style.draw_circles {
                value_offset /= 2.0;
            }
            let Some(bounds) = XBounds::new(set, provider) else {
                continue;
            };
            let points = Self::visible_points(set, provider);
            for (point, index) in points.iter().zip(bounds.indices()) {
                if !handler.is_in_bounds_right(point.x) {
                    break;
                }
                if !handler.is_in_bounds_left(point.x) || !handler.is_in_bounds_y(point.y) {
                    continue;
                }
                let Some(entry) = set.entry(index) else {
                    continue;
                };
                push_value_text(
                    frame,
                    formatter.string_for_value(entry.y),
                    point.x,
                    point.y - value_offset - set.value_text_size,
                    set.value_text_size,
                    set.value_text_color,
                );
            }
        }
    }

    fn draw_extras(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        let Some(data) = provider.combined_data().line.as_ref() else {
            return;
        };
        let handler = provider.viewport_handler();

        for set in data.data_sets() {
            if !set.visible || !set.style.draw_circles || set.style.circle_radius <= 0.0 {
                continue;
            }
            for point in Self::visible_points(set, provider) {
                if !handler.is_in_bounds_right(point.x) {
                    break;
                }
                if !handler.is_in_bounds_left(point.x) || !handler.is_in_bounds_y(point.y) {
                    continue;
                }
                frame.push_circle(CirclePrimitive::filled(
                    point.x,
                    point.y,
                    set.style.circle_radius,
                    set.style.circle_color,
                ));
            }
        }
    }

    fn draw_highlighted(
        &self,
        frame: &mut RenderFrame,
        provider: &dyn ChartDataProvider,
        highlights: &[Highlight],
    ) {
        let Some(data) = provider.combined_data().line.as_ref() else {
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
