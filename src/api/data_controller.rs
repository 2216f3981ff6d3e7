use tracing::debug;

use crate::core::{ChartKind, CombinedChartData};
use crate::error::ChartResult;
use crate::interaction::CombinedHighlighter;
use crate::render::{CombinedChartRenderer, Renderer};

use super::{ChartModel, CombinedChart};

impl<R: Renderer> CombinedChart<R> {
    #[must_use]
    pub fn data(&self) -> &CombinedChartData {
        self.model.data()
    }

    /// Data provider and job host state the renderers and highlighter read.
    #[must_use]
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    /// Replaces the chart data.
    ///
    /// Axis bounds are refitted, the highlighter and sub-renderers rebuilt for
    /// the kinds now present, and any highlight is dropped.
    pub fn set_data(&mut self, data: CombinedChartData) {
        self.model.data = data;
        self.model.highlighted.clear();
        self.notify_data_changed();

        debug!(
            kind_count = self.model.data.all_data().len(),
            entry_count = self.model.data.entry_count(),
            renderer_count = self.data_renderer.sub_renderers().len(),
            "set combined data"
        );
    }

    /// Removes all data.
    pub fn clear(&mut self) {
        self.set_data(CombinedChartData::default());
    }

    /// Refits axes and matrices after the data was changed in place.
    ///
    /// Kinds may have been added or removed, so the highlighter and the
    /// sub-renderers are rebuilt as well.
    pub fn notify_data_changed(&mut self) {
        let max_highlight_distance = self.highlighter.max_highlight_distance;
        let rounding = self.highlighter.rounding;
        self.highlighter = CombinedHighlighter::new(&self.model.data, max_highlight_distance)
            .with_rounding(rounding);
        self.data_renderer.create_renderers(&self.model.data);

        self.model.calc_min_max();
        self.model.calculate_offsets();
        self.model.redraw_requested = true;
    }

    /// Mutable access to the data; call [`Self::notify_data_changed`] after
    /// changing entries or kinds.
    pub fn data_mut(&mut self) -> &mut CombinedChartData {
        &mut self.model.data
    }

    #[must_use]
    pub fn combined_renderer(&self) -> &CombinedChartRenderer {
        &self.data_renderer
    }

    /// Escape hatch over the sub-renderer list; nothing keeps it consistent
    /// with the data afterwards.
    pub fn combined_renderer_mut(&mut self) -> &mut CombinedChartRenderer {
        &mut self.data_renderer
    }

    #[must_use]
    pub fn highlighter(&self) -> &CombinedHighlighter {
        &self.highlighter
    }

    #[must_use]
    pub fn draw_order(&self) -> &[ChartKind] {
        self.data_renderer.draw_order()
    }

    /// Replaces the draw order and rebuilds the sub-renderers.
    ///
    /// An empty order keeps the previous one and returns `false`.
    pub fn set_draw_order(&mut self, order: Vec<ChartKind>) -> bool {
        let changed = self.data_renderer.set_draw_order(order, &self.model.data);
        if changed {
            self.model.redraw_requested = true;
        }
        changed
    }

    /// Draw order given as raw kind tags (bar 0, bubble 1, line 2, candle 3,
    /// scatter 4). Unknown tags reject the whole order.
    pub fn set_draw_order_raw(&mut self, raw: &[i32]) -> ChartResult<bool> {
        let order = raw
            .iter()
            .map(|value| ChartKind::try_from(*value))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(self.set_draw_order(order))
    }

    /// Draw order as raw kind tags.
    #[must_use]
    pub fn draw_order_raw(&self) -> Vec<i32> {
        self.draw_order().iter().map(|kind| kind.raw_value()).collect()
    }

    #[must_use]
    pub fn draw_value_above_bar(&self) -> bool {
        self.data_renderer.draw_value_above_bar()
    }

    pub fn set_draw_value_above_bar(&mut self, enabled: bool) {
        self.data_renderer.set_draw_value_above_bar(enabled);
        self.model.redraw_requested = true;
    }

    #[must_use]
    pub fn draw_bar_shadow(&self) -> bool {
        self.data_renderer.draw_bar_shadow()
    }

    pub fn set_draw_bar_shadow(&mut self, enabled: bool) {
        self.data_renderer.set_draw_bar_shadow(enabled);
        self.model.redraw_requested = true;
    }

    /// When enabled, touch highlights on stacked bars select the whole bar.
    #[must_use]
    pub fn highlight_full_bar(&self) -> bool {
        self.highlight_full_bar
    }

    pub fn set_highlight_full_bar(&mut self, enabled: bool) {
        self.highlight_full_bar = enabled;
    }
}
