use tracing::trace;

use crate::core::{ChartDataRef, CombinedChartData, Rounding};
use crate::interaction::highlighter::{DEFAULT_MAX_HIGHLIGHT_DISTANCE, Highlighter, kind_highlights};
use crate::interaction::{BarHighlighter, Highlight};
use crate::render::ChartDataProvider;

/// Highlighter spanning every kind of a combined chart.
///
/// Every returned highlight carries the data index of the kind it came
/// from, so the combined renderer can route it to the right sub-renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedHighlighter {
    bar_highlighter: Option<BarHighlighter>,
    pub max_highlight_distance: f64,
    pub rounding: Rounding,
}

impl Default for CombinedHighlighter {
    fn default() -> Self {
        Self {
            bar_highlighter: None,
            max_highlight_distance: DEFAULT_MAX_HIGHLIGHT_DISTANCE,
            rounding: Rounding::Closest,
        }
    }
}

impl CombinedHighlighter {
    /// Builds a highlighter for `data`; bar data gets a dedicated bar
    /// highlighter.
    #[must_use]
    pub fn new(data: &CombinedChartData, max_highlight_distance: f64) -> Self {
        Self {
            bar_highlighter: data
                .bar
                .as_ref()
                .map(|_| BarHighlighter::new(max_highlight_distance)),
            max_highlight_distance,
            rounding: Rounding::Closest,
        }
    }

    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    #[must_use]
    pub fn bar_highlighter(&self) -> Option<&BarHighlighter> {
        self.bar_highlighter.as_ref()
    }
}

impl Highlighter for CombinedHighlighter {
    fn highlights(
        &self,
        x_value: f64,
        x_px: f64,
        y_px: f64,
        provider: &dyn ChartDataProvider,
    ) -> Vec<Highlight> {
        let mut out = Vec::new();
        for (data_index, data) in provider.combined_data().all_data().into_iter().enumerate() {
            if let (ChartDataRef::Bar(_), Some(bar_highlighter)) = (data, self.bar_highlighter) {
                if let Some(highlight) = bar_highlighter.highlight(x_px, y_px, provider) {
                    out.push(highlight.with_data_index(Some(data_index)));
                    continue;
                }
            }

            out.extend(
                kind_highlights(data, x_value, self.rounding, provider)
                    .into_iter()
                    .map(|highlight| highlight.with_data_index(Some(data_index))),
            );
        }
        trace!(x_value, highlight_count = out.len(), "combined highlights");
        out
    }

    fn max_highlight_distance(&self) -> f64 {
        self.max_highlight_distance
    }
}
