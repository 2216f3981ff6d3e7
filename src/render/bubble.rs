use kurbo::Point;

use crate::core::BubbleDataSet;
use crate::interaction::Highlight;
use crate::render::data_renderer::{
    XBounds, formatter_for, highlighted_entry, push_value_text, should_draw_values,
};
use crate::render::{ChartDataProvider, CirclePrimitive, DataRenderer, RenderFrame};

/// Diameter of a bubble of `size` against the largest size in its set.
///
/// With normalization the area scales with `size / max_size`; without it
/// `size` multiplies the reference directly.
#[must_use]
pub fn bubble_shape_size(size: f64, max_size: f64, reference_size: f64, normalize: bool) -> f64 {
    let factor = if normalize {
        if max_size == 0.0 {
            1.0
        } else {
            (size / max_size).sqrt()
        }
    } else {
        size
    };
    reference_size * factor
}

/// Draws bubble data as filled circles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleChartRenderer;

impl BubbleChartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Smaller of the content height and the pixel width of one x unit.
    fn reference_size(set: &BubbleDataSet, provider: &dyn ChartDataProvider) -> f64 {
        let handler = provider.viewport_handler();
        let transformer = provider.transformer(set.axis_dependency);
        let origin = transformer.pixel_for_values(0.0, 0.0, handler);
        let unit = transformer.pixel_for_values(1.0, 0.0, handler);
        let max_width = (unit.x - origin.x).abs();
        let max_height = (handler.content_bottom() - handler.content_top()).abs();
        max_height.min(max_width)
    }

    /// Visible bubbles as `(entry index, center, diameter)`.
    fn visible(set: &BubbleDataSet, provider: &dyn ChartDataProvider) -> Vec<(usize, Point, f64)> {
        let Some(bounds) = XBounds::new(set, provider) else {
            return Vec::new();
        };
        let handler = provider.viewport_handler();
        let transformer = provider.transformer(set.axis_dependency);
        let phase_y = provider.animator().phase_y();
        let reference = Self::reference_size(set, provider);
        let max_size = set.max_size();

        let mut out = Vec::new();
        for index in bounds.indices() {
            let Some(entry) = set.entry(index) else {
                break;
            };
            let center = transformer.pixel_for_values(entry.x, entry.y * phase_y, handler);
            let diameter = bubble_shape_size(
                entry.size,
                max_size,
                reference,
                set.style.normalize_size_enabled,
            );
            let half = diameter / 2.0;

            if !handler.is_in_bounds_top(center.y + half)
                || !handler.is_in_bounds_bottom(center.y - half)
            {
                continue;
            }
            if !handler.is_in_bounds_left(center.x + half) {
                continue;
            }
            if !handler.is_in_bounds_right(center.x - half) {
                break;
            }
            out.push((index, center, diameter));
        }
        out
    }
}

impl DataRenderer for BubbleChartRenderer {
    fn draw_data(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        let Some(data) = provider.combined_data().bubble.as_ref() else {
            return;
        };
        for set in data.data_sets() {
            if !set.visible {
                continue;
            }
            for (index, center, diameter) in Self::visible(set, provider) {
                let circle = CirclePrimitive::filled(center.x, center.y, diameter / 2.0, set.color(index));
                if circle.validate().is_ok() {
                    frame.push_circle(circle);
                }
            }
        }
    }

    fn draw_values(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        if !provider.is_drawing_values_allowed() {
            return;
        }
        let Some(data) = provider.combined_data().bubble.as_ref() else {
            return;
        };
        for set in data.data_sets() {
            if !should_draw_values(set) {
                continue;
            }
            let formatter = formatter_for(set, provider);
            for (index, center, _) in Self::visible(set, provider) {
                let Some(entry) = set.entry(index) else {
                    continue;
                };
                push_value_text(
                    frame,
                    formatter.string_for_value(entry.size),
                    center.x,
                    center.y - 0.5 * set.value_text_size,
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
        let Some(data) = provider.combined_data().bubble.as_ref() else {
            return;
        };
        let handler = provider.viewport_handler();
        let animator = provider.animator();

        for highlight in highlights {
            let Some((set, entry)) = highlighted_entry(data, highlight, animator.phase_x()) else {
                continue;
            };
            let center = provider.transformer(set.axis_dependency).pixel_for_values(
                entry.x,
                entry.y * animator.phase_y(),
                handler,
            );
            let diameter = bubble_shape_size(
                entry.size,
                set.max_size(),
                Self::reference_size(set, provider),
                set.style.normalize_size_enabled,
            );
            let half = diameter / 2.0;
            if !handler.is_in_bounds_top(center.y + half)
                || !handler.is_in_bounds_bottom(center.y - half)
                || !handler.is_in_bounds_left(center.x + half)
                || !handler.is_in_bounds_right(center.x - half)
            {
                continue;
            }

            let ring = CirclePrimitive::stroked(
                center.x,
                center.y,
                half,
                set.highlight_color,
                set.style.highlight_circle_width,
            );
            if ring.validate().is_ok() {
                frame.push_circle(ring);
            }
        }
    }
}
