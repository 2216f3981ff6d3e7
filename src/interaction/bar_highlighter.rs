use tracing::trace;

use crate::core::{BarDataSet, Rounding, StackRange};
use crate::interaction::highlighter::{
    DEFAULT_MAX_HIGHLIGHT_DISTANCE, Highlighter, data_highlights, value_for_touch_point,
};
use crate::interaction::Highlight;
use crate::render::ChartDataProvider;

/// Index of the stack segment holding `value`.
///
/// Falls back to the last segment when `value` lies above every range and to
/// the first one otherwise.
#[must_use]
pub fn closest_stack_index(ranges: &[StackRange], value: f64) -> usize {
    if let Some(index) = ranges.iter().position(|range| range.contains(value)) {
        return index;
    }
    let last = ranges.len().saturating_sub(1);
    match ranges.get(last) {
        Some(range) if value > range.to => last,
        _ => 0,
    }
}

/// Highlighter over bar data; distance is horizontal only and stacked bars
/// resolve to a single stack segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarHighlighter {
    pub max_highlight_distance: f64,
}

impl Default for BarHighlighter {
    fn default() -> Self {
        Self {
            max_highlight_distance: DEFAULT_MAX_HIGHLIGHT_DISTANCE,
        }
    }
}

impl BarHighlighter {
    #[must_use]
    pub fn new(max_highlight_distance: f64) -> Self {
        Self {
            max_highlight_distance,
        }
    }

    /// Narrows a whole-bar highlight down to the touched stack segment.
    #[must_use]
    pub fn stacked_highlight(
        &self,
        highlight: Highlight,
        set: &BarDataSet,
        x_value: f64,
        y_value: f64,
        provider: &dyn ChartDataProvider,
    ) -> Option<Highlight> {
        let entry = set.entry_for_x_value(x_value, y_value, Rounding::Closest)?;
        if !entry.is_stacked() {
            return Some(highlight);
        }
        let ranges = entry.ranges();
        if ranges.is_empty() {
            return None;
        }

        let stack_index = closest_stack_index(&ranges, y_value);
        let px = provider.transformer(set.axis_dependency).pixel_for_values(
            highlight.x,
            ranges[stack_index].to,
            provider.viewport_handler(),
        );
        trace!(stack_index, x = entry.x, "stacked bar highlight");

        Some(
            Highlight::new(entry.x, entry.y, highlight.data_set_index)
                .with_pixels(px.x, px.y)
                .with_stack_index(Some(stack_index))
                .with_axis(highlight.axis),
        )
    }
}

impl Highlighter for BarHighlighter {
    fn highlights(
        &self,
        x_value: f64,
        _x_px: f64,
        _y_px: f64,
        provider: &dyn ChartDataProvider,
    ) -> Vec<Highlight> {
        provider
            .combined_data()
            .bar
            .as_ref()
            .map(|data| data_highlights(data, x_value, Rounding::Closest, provider))
            .unwrap_or_default()
    }

    fn max_highlight_distance(&self) -> f64 {
        self.max_highlight_distance
    }

    fn distance(&self, x1: f64, _y1: f64, x2: f64, _y2: f64) -> f64 {
        (x1 - x2).abs()
    }

    fn highlight(&self, x_px: f64, y_px: f64, provider: &dyn ChartDataProvider) -> Option<Highlight> {
        let value = value_for_touch_point(x_px, y_px, provider)?;
        let candidates = self.highlights(value.x, x_px, y_px, provider);
        let highlight = self.closest_highlight(&candidates, x_px, y_px)?;

        let set = provider
            .combined_data()
            .bar
            .as_ref()
            .and_then(|data| data.data_set(highlight.data_set_index))?;
        if set.is_stacked() {
            return self.stacked_highlight(highlight, set, value.x, value.y, provider);
        }
        Some(highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::closest_stack_index;
    use crate::core::StackRange;

    #[test]
    fn stack_index_prefers_containing_range() {
        let ranges = [
            StackRange::new(-4.0, 0.0),
            StackRange::new(0.0, 3.0),
            StackRange::new(3.0, 5.0),
        ];
        assert_eq!(closest_stack_index(&ranges, 4.0), 2);
        assert_eq!(closest_stack_index(&ranges, 3.0), 1);
        assert_eq!(closest_stack_index(&ranges, -1.0), 0);
        assert_eq!(closest_stack_index(&ranges, 9.0), 2);
        assert_eq!(closest_stack_index(&ranges, -9.0), 0);
        assert_eq!(closest_stack_index(&[], 1.0), 0);
    }
}
