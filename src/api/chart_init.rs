use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::CombinedChartData;
use crate::error::{ChartError, ChartResult};
use crate::interaction::CombinedHighlighter;
use crate::render::{CombinedChartRenderer, Renderer};

use super::{ChartModel, CombinedChart, CombinedChartConfig};

impl<R: Renderer> CombinedChart<R> {
    /// Creates a chart sized to `config.viewport`.
    pub fn new(renderer: R, config: CombinedChartConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        Self::new_deferred(renderer, config)
    }

    /// Creates a chart whose viewport may still be unknown.
    ///
    /// Until [`Self::set_viewport`] provides non-zero dimensions, zoom and move
    /// requests are queued instead of applied.
    pub fn new_deferred(renderer: R, config: CombinedChartConfig) -> ChartResult<Self> {
        if !config.max_highlight_distance.is_finite() || config.max_highlight_distance < 0.0 {
            return Err(ChartError::InvalidData(
                "max highlight distance must be finite and >= 0".to_owned(),
            ));
        }
        if config.draw_order.is_empty() {
            return Err(ChartError::InvalidData(
                "draw order must name at least one chart kind".to_owned(),
            ));
        }

        let model = ChartModel::new(&config);
        let mut data_renderer = CombinedChartRenderer::new();
        data_renderer.set_draw_value_above_bar(config.draw_value_above_bar);
        data_renderer.set_draw_bar_shadow(config.draw_bar_shadow);
        data_renderer.set_draw_order(config.draw_order.clone(), model.data());

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            draw_order = ?config.draw_order,
            "created combined chart"
        );

        Ok(Self {
            renderer,
            highlighter: CombinedHighlighter::new(
                &CombinedChartData::default(),
                config.max_highlight_distance,
            ),
            model,
            data_renderer,
            pending_jobs: VecDeque::new(),
            highlight_full_bar: config.highlight_full_bar,
            highlight_per_tap_enabled: config.highlight_per_tap_enabled,
            series_metadata: IndexMap::new(),
        })
    }
}
