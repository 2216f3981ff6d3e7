use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, AxisDependency, ChartKind, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::Highlight;
use crate::jobs::ViewPortJob;
use crate::render::{ChartDataProvider, Renderer};

use super::CombinedChart;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub draw_order: Vec<ChartKind>,
    /// Kinds with a renderer, in z-order.
    pub rendered_kinds: Vec<ChartKind>,
    /// Present kinds in data-index order.
    pub data_kinds: Vec<ChartKind>,
    pub entry_count: usize,
    pub scale_x: f64,
    pub scale_y: f64,
    pub trans_x: f64,
    pub trans_y: f64,
    pub x_bounds: AxisBounds,
    pub left_bounds: AxisBounds,
    pub right_bounds: AxisBounds,
    pub visible_x_range: (f64, f64),
    pub highlighted: Vec<Highlight>,
    pub pending_jobs: Vec<ViewPortJob>,
    pub draw_value_above_bar: bool,
    pub draw_bar_shadow: bool,
    pub highlight_full_bar: bool,
    pub series_metadata: IndexMap<String, String>,
}

impl<R: Renderer> CombinedChart<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let model = &self.model;
        let handler = model.viewport_handler();
        ChartSnapshot {
            viewport: model.viewport(),
            draw_order: self.draw_order().to_vec(),
            rendered_kinds: self
                .data_renderer
                .sub_renderers()
                .iter()
                .map(|renderer| renderer.kind())
                .collect(),
            data_kinds: model.data.all_data().iter().map(|data| data.kind()).collect(),
            entry_count: model.data.entry_count(),
            scale_x: handler.scale_x(),
            scale_y: handler.scale_y(),
            trans_x: handler.trans_x(),
            trans_y: handler.trans_y(),
            x_bounds: model.x_bounds(),
            left_bounds: model.y_bounds(AxisDependency::Left),
            right_bounds: model.y_bounds(AxisDependency::Right),
            visible_x_range: (model.lowest_visible_x(), model.highest_visible_x()),
            highlighted: model.highlighted.clone(),
            pending_jobs: self.pending_jobs.iter().copied().collect(),
            draw_value_above_bar: self.draw_value_above_bar(),
            draw_bar_shadow: self.draw_bar_shadow(),
            highlight_full_bar: self.highlight_full_bar,
            series_metadata: self.series_metadata.clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    #[must_use]
    pub fn series_metadata(&self) -> &IndexMap<String, String> {
        &self.series_metadata
    }

    /// Attaches host metadata carried through snapshots in insertion order.
    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.series_metadata.insert(key.into(), value.into());
    }

    pub fn remove_series_metadata(&mut self, key: &str) -> Option<String> {
        self.series_metadata.shift_remove(key)
    }
}
