use kurbo::Point;
use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{AxisDependency, ChartData, ChartDataRef, ChartEntry, ChartKind, DataSet, Rounding};
use crate::interaction::Highlight;
use crate::render::ChartDataProvider;

/// Touch distance, in pixels, beyond which nothing is highlighted.
pub const DEFAULT_MAX_HIGHLIGHT_DISTANCE: f64 = 500.0;

/// Touch-to-entry resolution shared by all highlighters.
pub trait Highlighter {
    /// Candidate highlights at `x_value`; the pixel position is the touch.
    fn highlights(
        &self,
        x_value: f64,
        x_px: f64,
        y_px: f64,
        provider: &dyn ChartDataProvider,
    ) -> Vec<Highlight>;

    fn max_highlight_distance(&self) -> f64;

    /// Pixel distance between the touch and a candidate.
    fn distance(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        (x1 - x2).hypot(y1 - y2)
    }

    /// Highlight closest to the touch point, or `None` when nothing lies
    /// within [`Self::max_highlight_distance`].
    fn highlight(&self, x_px: f64, y_px: f64, provider: &dyn ChartDataProvider) -> Option<Highlight> {
        let value = value_for_touch_point(x_px, y_px, provider)?;
        let candidates = self.highlights(value.x, x_px, y_px, provider);
        let selected = self.closest_highlight(&candidates, x_px, y_px);
        trace!(
            x_px,
            y_px,
            x_value = value.x,
            candidate_count = candidates.len(),
            selected = selected.is_some(),
            "highlight by touch"
        );
        selected
    }

    /// Picks the axis side nearest in y, then the nearest candidate on it.
    fn closest_highlight(&self, candidates: &[Highlight], x_px: f64, y_px: f64) -> Option<Highlight> {
        if candidates.is_empty() {
            return None;
        }
        let left = minimum_y_distance(candidates, y_px, AxisDependency::Left);
        let right = minimum_y_distance(candidates, y_px, AxisDependency::Right);
        let axis = if left < right {
            AxisDependency::Left
        } else {
            AxisDependency::Right
        };

        candidates
            .iter()
            .filter(|candidate| candidate.axis == axis)
            .map(|candidate| {
                let dist = self.distance(x_px, y_px, candidate.x_px, candidate.y_px);
                (OrderedFloat(dist), *candidate)
            })
            .filter(|(dist, _)| dist.0 < self.max_highlight_distance())
            .min_by_key(|item| item.0)
            .map(|(_, candidate)| candidate)
    }
}

/// Value under a touch point, read through the left transformer.
pub fn value_for_touch_point(x_px: f64, y_px: f64, provider: &dyn ChartDataProvider) -> Option<Point> {
    provider
        .transformer(AxisDependency::Left)
        .value_for_touch_point(x_px, y_px, provider.viewport_handler())
        .ok()
}

fn minimum_y_distance(candidates: &[Highlight], y_px: f64, axis: AxisDependency) -> f64 {
    candidates
        .iter()
        .filter(|candidate| candidate.axis == axis)
        .map(|candidate| (candidate.y_px - y_px).abs())
        .fold(f64::MAX, f64::min)
}

/// Highlights for every entry of `set` at `x_value`, or at the x closest to
/// it under `rounding` when nothing sits exactly there.
pub fn build_highlights<E: ChartEntry, S>(
    set: &DataSet<E, S>,
    data_set_index: usize,
    x_value: f64,
    rounding: Rounding,
    provider: &dyn ChartDataProvider,
) -> Vec<Highlight> {
    let mut entries = set.entries_for_x_value(x_value);
    if entries.is_empty() {
        if let Some(closest) = set.entry_for_x_value(x_value, f64::NAN, rounding) {
            entries = set.entries_for_x_value(closest.x());
        }
    }

    let transformer = provider.transformer(set.axis_dependency);
    let handler = provider.viewport_handler();
    entries
        .iter()
        .map(|entry| {
            let px = transformer.pixel_for_values(entry.x(), entry.y(), handler);
            Highlight::new(entry.x(), entry.y(), data_set_index)
                .with_pixels(px.x, px.y)
                .with_axis(set.axis_dependency)
        })
        .collect()
}

/// Highlights from every highlight-enabled set of one chart data object.
pub(crate) fn data_highlights<E: ChartEntry, S>(
    data: &ChartData<E, S>,
    x_value: f64,
    rounding: Rounding,
    provider: &dyn ChartDataProvider,
) -> Vec<Highlight> {
    data.data_sets()
        .iter()
        .enumerate()
        .filter(|(_, set)| set.highlight_enabled)
        .flat_map(|(index, set)| build_highlights(set, index, x_value, rounding, provider))
        .collect()
}

pub(crate) fn kind_highlights(
    data: ChartDataRef<'_>,
    x_value: f64,
    rounding: Rounding,
    provider: &dyn ChartDataProvider,
) -> Vec<Highlight> {
    match data {
        ChartDataRef::Bar(data) => data_highlights(data, x_value, rounding, provider),
        ChartDataRef::Line(data) => data_highlights(data, x_value, rounding, provider),
        ChartDataRef::Scatter(data) => data_highlights(data, x_value, rounding, provider),
        ChartDataRef::Candle(data) => data_highlights(data, x_value, rounding, provider),
        ChartDataRef::Bubble(data) => data_highlights(data, x_value, rounding, provider),
    }
}

/// Highlighter over the data of a single chart kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartHighlighter {
    kind: ChartKind,
    pub max_highlight_distance: f64,
    pub rounding: Rounding,
}

impl ChartHighlighter {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            max_highlight_distance: DEFAULT_MAX_HIGHLIGHT_DISTANCE,
            rounding: Rounding::Closest,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }
}

impl Highlighter for ChartHighlighter {
    fn highlights(
        &self,
        x_value: f64,
        _x_px: f64,
        _y_px: f64,
        provider: &dyn ChartDataProvider,
    ) -> Vec<Highlight> {
        provider
            .combined_data()
            .data_for(self.kind)
            .map(|data| kind_highlights(data, x_value, self.rounding, provider))
            .unwrap_or_default()
    }

    fn max_highlight_distance(&self) -> f64 {
        self.max_highlight_distance
    }
}
