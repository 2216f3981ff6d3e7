use kurbo::Rect;

use crate::core::{BarDataSet, BarEntry, ChartEntry};
use crate::interaction::Highlight;
use crate::render::data_renderer::{
    VALUE_OFFSET_PX, formatter_for, highlighted_entry, phased_count, push_value_text,
    should_draw_values,
};
use crate::render::{ChartDataProvider, Color, DataRenderer, RectPrimitive, RenderFrame};

/// Draws bar data, including stacked bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChartRenderer {
    pub draw_value_above_bar: bool,
    pub draw_bar_shadow: bool,
}

impl Default for BarChartRenderer {
    fn default() -> Self {
        Self {
            draw_value_above_bar: true,
            draw_bar_shadow: false,
        }
    }
}

impl BarChartRenderer {
    #[must_use]
    pub fn new(draw_value_above_bar: bool, draw_bar_shadow: bool) -> Self {
        Self {
            draw_value_above_bar,
            draw_bar_shadow,
        }
    }

    fn draw_data_set(
        &self,
        frame: &mut RenderFrame,
        provider: &dyn ChartDataProvider,
        set: &BarDataSet,
        bar_width: f64,
    ) {
        let handler = provider.viewport_handler();
        let transformer = provider.transformer(set.axis_dependency);
        let animator = provider.animator();
        let half = bar_width / 2.0;
        let count = phased_count(set.entry_count(), animator.phase_x());

        if self.draw_bar_shadow {
            for entry in &set.entries()[..count] {
                let px = transformer.rect_value_to_pixel(
                    Rect::new(entry.x - half, 0.0, entry.x + half, 0.0),
                    1.0,
                    handler,
                );
                if !handler.is_in_bounds_left(px.x1) {
                    continue;
                }
                if !handler.is_in_bounds_right(px.x0) {
                    break;
                }
                push_rect(
                    frame,
                    Rect::new(px.x0, handler.content_top(), px.x1, handler.content_bottom()),
                    set.style.bar_shadow_color,
                );
            }
        }

        'entries: for (index, entry) in set.entries()[..count].iter().enumerate() {
            for (segment, (from, to)) in segments(entry).into_iter().enumerate() {
                let px = transformer.rect_value_to_pixel(
                    Rect::new(entry.x - half, from, entry.x + half, to),
                    animator.phase_y(),
                    handler,
                );
                if !handler.is_in_bounds_left(px.x1) {
                    continue 'entries;
                }
                if !handler.is_in_bounds_right(px.x0) {
                    break 'entries;
                }
                let color = if entry.is_stacked() {
                    set.color(segment)
                } else {
                    set.color(index)
                };
                push_rect(frame, px, color);
            }
        }
    }

    fn draw_data_set_values(
        &self,
        frame: &mut RenderFrame,
        provider: &dyn ChartDataProvider,
        set: &BarDataSet,
    ) {
        let handler = provider.viewport_handler();
        let transformer = provider.transformer(set.axis_dependency);
        let animator = provider.animator();
        let formatter = formatter_for(set, provider);
        let text_height = set.value_text_size;

        let (mut pos_offset, mut neg_offset) = if self.draw_value_above_bar {
            (-(VALUE_OFFSET_PX + text_height), VALUE_OFFSET_PX)
        } else {
            (VALUE_OFFSET_PX, -(VALUE_OFFSET_PX + text_height))
        };
        if provider.is_inverted(set.axis_dependency) {
            pos_offset = -pos_offset - text_height;
            neg_offset = -neg_offset - text_height;
        }

        let count = phased_count(set.entry_count(), animator.phase_x());
        for entry in &set.entries()[..count] {
            let labels: Vec<(f64, f64)> = match entry.y_values.as_ref() {
                Some(values) => entry
                    .ranges()
                    .iter()
                    .zip(values.iter())
                    .map(|(range, value)| {
                        let anchor = if *value >= 0.0 { range.to } else { range.from };
                        (*value, anchor)
                    })
                    .collect(),
                None => vec![(entry.y, entry.y)],
            };

            for (value, anchor) in labels {
                let px = transformer.pixel_for_values(entry.x, anchor * animator.phase_y(), handler);
                if !handler.is_in_bounds_right(px.x) {
                    return;
                }
                if !handler.is_in_bounds_y(px.y) || !handler.is_in_bounds_left(px.x) {
                    continue;
                }
                let offset = if value >= 0.0 { pos_offset } else { neg_offset };
                push_value_text(
                    frame,
                    formatter.string_for_value(value),
                    px.x,
                    px.y + offset,
                    set.value_text_size,
                    set.value_text_color,
                );
            }
        }
    }
}

/// Value-space `(from, to)` extents drawn for one entry.
fn segments(entry: &BarEntry) -> Vec<(f64, f64)> {
    if entry.is_stacked() {
        entry.ranges().iter().map(|range| (range.from, range.to)).collect()
    } else {
        vec![(0.0, entry.y)]
    }
}

fn push_rect(frame: &mut RenderFrame, rect: Rect, color: Color) {
    let primitive = RectPrimitive::new(rect.x0, rect.y0, rect.width(), rect.height(), color);
    if primitive.validate().is_ok() {
        frame.push_rect(primitive);
    }
}

impl DataRenderer for BarChartRenderer {
    fn draw_data(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        let Some(data) = provider.combined_data().bar.as_ref() else {
            return;
        };
        for set in data.data_sets() {
            if set.visible && set.entry_count() > 0 {
                self.draw_data_set(frame, provider, set, data.bar_width());
            }
        }
    }

    fn draw_values(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        if !provider.is_drawing_values_allowed() {
            return;
        }
        let Some(data) = provider.combined_data().bar.as_ref() else {
            return;
        };
        for set in data.data_sets() {
            if should_draw_values(set) {
                self.draw_data_set_values(frame, provider, set);
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
        let Some(data) = provider.combined_data().bar.as_ref() else {
            return;
        };
        let handler = provider.viewport_handler();
        let animator = provider.animator();
        let half = data.bar_width() / 2.0;

        for highlight in highlights {
            let Some((set, entry)) = highlighted_entry(data, highlight, animator.phase_x()) else {
                continue;
            };
            let transformer = provider.transformer(set.axis_dependency);

            let stack_range = highlight
                .stack_index
                .and_then(|stack| entry.ranges().get(stack).copied());
            let (from, to) = match stack_range {
                Some(range) => (range.from, range.to),
                None if entry.is_stacked() => entry.y_bounds(),
                None => (0.0, entry.y),
            };

            let px = transformer.rect_value_to_pixel(
                Rect::new(entry.x - half, from, entry.x + half, to),
                animator.phase_y(),
                handler,
            );
            push_rect(
                frame,
                px,
                set.highlight_color.with_alpha(set.style.highlight_alpha),
            );
        }
    }
}
