use tracing::{debug, warn};

use crate::interaction::{CombinedHighlighter, Highlight, Highlighter};
use crate::render::Renderer;

use super::CombinedChart;

impl<R: Renderer> CombinedChart<R> {
    /// Highlight nearest to pixel `(x, y)`, without selecting it.
    ///
    /// In full-bar mode the stack index is dropped so the whole stacked bar
    /// is emphasized.
    #[must_use]
    pub fn highlight_by_touch_point(&self, x: f64, y: f64) -> Option<Highlight> {
        if self.model.data.is_empty() {
            warn!("Can't select by touch. No data set.");
            return None;
        }
        let highlight = self.highlighter.highlight(x, y, &self.model)?;
        if self.highlight_full_bar {
            return Some(highlight.with_stack_index(None));
        }
        Some(highlight)
    }

    /// Selects the highlight under a tap, or deselects when the tap hits
    /// nothing or the already selected entry.
    pub fn tap(&mut self, x: f64, y: f64) -> Option<Highlight> {
        if !self.highlight_per_tap_enabled {
            return None;
        }
        let highlight = self.highlight_by_touch_point(x, y);
        let repeated = match (highlight, self.model.highlighted.first()) {
            (Some(new), Some(current)) => new.same_target(current),
            _ => false,
        };
        if repeated {
            self.highlight_value(None);
            return None;
        }
        self.highlight_value(highlight);
        highlight
    }

    /// Replaces the selection with `highlight`.
    ///
    /// `None`, or a highlight that resolves to no entry, clears the selection.
    pub fn highlight_value(&mut self, highlight: Option<Highlight>) {
        let resolved = highlight.filter(|highlight| {
            let data = &self.model.data;
            match highlight.data_index {
                Some(_) => data.entry_for_highlight(highlight).is_some(),
                None => data
                    .all_data()
                    .iter()
                    .any(|kind| kind.entry_xy_for_highlight(highlight).is_some()),
            }
        });
        if highlight.is_some() && resolved.is_none() {
            debug!(?highlight, "highlight does not resolve to an entry");
        }
        self.model.highlighted = resolved.into_iter().collect();
        self.model.redraw_requested = true;
    }

    /// Replaces the selection with `highlights` as given.
    pub fn highlight_values(&mut self, highlights: Vec<Highlight>) {
        self.model.highlighted = highlights;
        self.model.redraw_requested = true;
    }

    #[must_use]
    pub fn highlighted(&self) -> &[Highlight] {
        self.model.highlighted()
    }

    #[must_use]
    pub fn values_to_highlight(&self) -> bool {
        !self.model.highlighted.is_empty()
    }

    pub fn clear_highlights(&mut self) {
        self.highlight_values(Vec::new());
    }

    #[must_use]
    pub fn highlight_per_tap_enabled(&self) -> bool {
        self.highlight_per_tap_enabled
    }

    pub fn set_highlight_per_tap_enabled(&mut self, enabled: bool) {
        self.highlight_per_tap_enabled = enabled;
    }

    #[must_use]
    pub fn max_highlight_distance(&self) -> f64 {
        self.highlighter.max_highlight_distance
    }

    pub fn set_max_highlight_distance(&mut self, distance: f64) {
        self.highlighter = CombinedHighlighter::new(&self.model.data, distance)
            .with_rounding(self.highlighter.rounding);
    }
}
