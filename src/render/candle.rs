use kurbo::{Affine, Point};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CandleDataSet, CandleEntry};
use crate::interaction::Highlight;
use crate::render::data_renderer::{
    VALUE_OFFSET_PX, XBounds, draw_highlight_lines, formatter_for, highlighted_entry,
    push_segment, push_value_text, should_draw_values,
};
use crate::render::{ChartDataProvider, DataRenderer, RectPrimitive, RenderFrame};

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_right: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_increasing: bool,
}

impl CandleGeometry {
    #[must_use]
    pub fn body_top(&self) -> f64 {
        self.open_y.min(self.close_y)
    }

    #[must_use]
    pub fn body_bottom(&self) -> f64 {
        self.open_y.max(self.close_y)
    }
}

/// Projects candles through a value-to-pixel matrix.
///
/// Pure and side-effect free so it serves both rendering and regression
/// tests. `bar_space` is the fraction of one x unit left empty on each side
/// of a body.
#[must_use]
pub fn project_candles(
    entries: &[CandleEntry],
    value_to_pixel: Affine,
    phase_y: f64,
    bar_space: f64,
) -> Vec<CandleGeometry> {
    #[cfg(feature = "parallel-projection")]
    {
        entries
            .par_iter()
            .map(|entry| project_single_candle(*entry, value_to_pixel, phase_y, bar_space))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        entries
            .iter()
            .map(|entry| project_single_candle(*entry, value_to_pixel, phase_y, bar_space))
            .collect()
    }
}

fn project_single_candle(
    entry: CandleEntry,
    value_to_pixel: Affine,
    phase_y: f64,
    bar_space: f64,
) -> CandleGeometry {
    let at = |x: f64, y: f64| value_to_pixel * Point::new(x, y * phase_y);
    let center = at(entry.x, entry.close);
    let left = at(entry.x - 0.5 + bar_space, entry.open);
    let right = at(entry.x + 0.5 - bar_space, entry.open);
    let high = at(entry.x, entry.high);
    let low = at(entry.x, entry.low);

    CandleGeometry {
        center_x: center.x,
        body_left: left.x.min(right.x),
        body_right: left.x.max(right.x),
        open_y: left.y,
        close_y: center.y,
        wick_top: high.y.min(low.y),
        wick_bottom: high.y.max(low.y),
        is_increasing: entry.is_increasing(),
    }
}

/// Draws candlestick data as wick + body, or as OHLC ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandleStickChartRenderer;

impl CandleStickChartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn visible_geometry(
        set: &CandleDataSet,
        provider: &dyn ChartDataProvider,
    ) -> Vec<(usize, CandleGeometry)> {
        let Some(bounds) = XBounds::new(set, provider) else {
            return Vec::new();
        };
        let end = (bounds.min + bounds.range + 1).min(set.entry_count());
        let entries = &set.entries()[bounds.min..end];
        let matrix = provider
            .transformer(set.axis_dependency)
            .value_to_pixel_matrix(provider.viewport_handler());
        let bar_space = set.style.bar_space.clamp(0.0, 0.45);

        project_candles(entries, matrix, provider.animator().phase_y(), bar_space)
            .into_iter()
            .enumerate()
            .map(|(offset, geometry)| (bounds.min + offset, geometry))
            .collect()
    }

    fn draw_data_set(frame: &mut RenderFrame, provider: &dyn ChartDataProvider, set: &CandleDataSet) {
        let handler = provider.viewport_handler();
        let style = &set.style;

        for (_, candle) in Self::visible_geometry(set, provider) {
            if !handler.is_in_bounds_right(candle.body_left) {
                break;
            }
            if !handler.is_in_bounds_left(candle.body_right) {
                continue;
            }

            let body_color = if candle.is_increasing {
                style.increasing_color
            } else {
                style.decreasing_color
            };
            let shadow_color = style.shadow_color.unwrap_or(body_color);

            if style.show_candle_bar {
                push_segment(
                    frame,
                    (candle.center_x, candle.wick_top),
                    (candle.center_x, candle.wick_bottom),
                    style.shadow_width,
                    body_color,
                );
                push_segment(
                    frame,
                    (candle.body_left, candle.open_y),
                    (candle.center_x, candle.open_y),
                    style.shadow_width,
                    body_color,
                );
                push_segment(
                    frame,
                    (candle.center_x, candle.close_y),
                    (candle.body_right, candle.close_y),
                    style.shadow_width,
                    body_color,
                );
                continue;
            }

            push_segment(
                frame,
                (candle.center_x, candle.wick_top),
                (candle.center_x, candle.wick_bottom),
                style.shadow_width,
                shadow_color,
            );

            let height = candle.body_bottom() - candle.body_top();
            if height > 0.0 {
                let body = RectPrimitive::new(
                    candle.body_left,
                    candle.body_top(),
                    candle.body_right - candle.body_left,
                    height,
                    body_color,
                );
                if body.validate().is_ok() {
                    frame.push_rect(body);
                }
            } else {
                push_segment(
                    frame,
                    (candle.body_left, candle.open_y),
                    (candle.body_right, candle.open_y),
                    style.shadow_width,
                    shadow_color,
                );
            }
        }
    }
}

impl DataRenderer for CandleStickChartRenderer {
    fn draw_data(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        let Some(data) = provider.combined_data().candle.as_ref() else {
            return;
        };
        for set in data.data_sets() {
            if set.visible && set.entry_count() > 0 {
                Self::draw_data_set(frame, provider, set);
            }
        }
    }

    fn draw_values(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        if !provider.is_drawing_values_allowed() {
            return;
        }
        let Some(data) = provider.combined_data().candle.as_ref() else {
            return;
        };
        let handler = provider.viewport_handler();

        for set in data.data_sets() {
            if !should_draw_values(set) {
                continue;
            }
            let formatter = formatter_for(set, provider);
            for (index, candle) in Self::visible_geometry(set, provider) {
                if !handler.is_in_bounds_right(candle.center_x) {
                    break;
                }
                if !handler.is_in_bounds_left(candle.center_x)
                    || !handler.is_in_bounds_y(candle.wick_top)
                {
                    continue;
                }
                let Some(entry) = set.entry(index) else {
                    continue;
                };
                push_value_text(
                    frame,
                    formatter.string_for_value(entry.high),
                    candle.center_x,
                    candle.wick_top - VALUE_OFFSET_PX - set.value_text_size,
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
        let Some(data) = provider.combined_data().candle.as_ref() else {
            return;
        };
        let handler = provider.viewport_handler();
        let animator = provider.animator();

        for highlight in highlights {
            let Some((set, entry)) = highlighted_entry(data, highlight, animator.phase_x()) else {
                continue;
            };
            let mid = (entry.low * animator.phase_y() + entry.high * animator.phase_y()) / 2.0;
            let px = provider
                .transformer(set.axis_dependency)
                .pixel_for_values(entry.x, mid, handler);
            if !handler.is_in_bounds(px.x, px.y) {
                continue;
            }
            draw_highlight_lines(frame, handler, set, px.x, px.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Affine;

    use super::project_candles;
    use crate::core::CandleEntry;

    #[test]
    fn projection_orders_body_and_wick() {
        let candle = CandleEntry::new(2.0, 10.0, 20.0, 5.0, 15.0).expect("valid candle");
        // x * 10, y flipped around 100.
        let matrix = Affine::new([10.0, 0.0, 0.0, -1.0, 0.0, 100.0]);
        let geometry = project_candles(&[candle], matrix, 1.0, 0.1);

        assert_eq!(geometry.len(), 1);
        let g = geometry[0];
        assert!((g.center_x - 20.0).abs() <= 1e-9);
        assert!((g.body_left - 16.0).abs() <= 1e-9);
        assert!((g.body_right - 24.0).abs() <= 1e-9);
        assert!((g.body_top() - 85.0).abs() <= 1e-9);
        assert!((g.body_bottom() - 90.0).abs() <= 1e-9);
        assert!((g.wick_top - 80.0).abs() <= 1e-9);
        assert!((g.wick_bottom - 95.0).abs() <= 1e-9);
        assert!(g.is_increasing);
    }
}
