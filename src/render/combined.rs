use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{ChartDataRef, ChartKind, CombinedChartData};
use crate::interaction::Highlight;
use crate::render::{
    BarChartRenderer, BubbleChartRenderer, CandleStickChartRenderer, ChartDataProvider,
    DataRenderer, LineChartRenderer, RenderFrame, ScatterChartRenderer,
};

/// One per-kind renderer tagged with the kind it draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRenderer {
    Bar(BarChartRenderer),
    Bubble(BubbleChartRenderer),
    Line(LineChartRenderer),
    Candle(CandleStickChartRenderer),
    Scatter(ScatterChartRenderer),
}

impl SeriesRenderer {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Bubble(_) => ChartKind::Bubble,
            Self::Line(_) => ChartKind::Line,
            Self::Candle(_) => ChartKind::Candle,
            Self::Scatter(_) => ChartKind::Scatter,
        }
    }

    /// The data object this renderer draws, if present.
    #[must_use]
    pub fn data<'a>(&self, data: &'a CombinedChartData) -> Option<ChartDataRef<'a>> {
        data.data_for(self.kind())
    }

    fn as_data_renderer(&self) -> &dyn DataRenderer {
        match self {
            Self::Bar(renderer) => renderer,
            Self::Bubble(renderer) => renderer,
            Self::Line(renderer) => renderer,
            Self::Candle(renderer) => renderer,
            Self::Scatter(renderer) => renderer,
        }
    }
}

impl DataRenderer for SeriesRenderer {
    fn draw_data(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        self.as_data_renderer().draw_data(frame, provider);
    }

    fn draw_values(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        self.as_data_renderer().draw_values(frame, provider);
    }

    fn draw_extras(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        self.as_data_renderer().draw_extras(frame, provider);
    }

    fn draw_highlighted(
        &self,
        frame: &mut RenderFrame,
        provider: &dyn ChartDataProvider,
        highlights: &[Highlight],
    ) {
        self.as_data_renderer()
            .draw_highlighted(frame, provider, highlights);
    }
}

/// Fans draw passes out to one sub-renderer per present chart kind.
///
/// Sub-renderers are listed in draw order; earlier ones paint first and end
/// up behind later ones.
#[derive(Debug, Clone)]
pub struct CombinedChartRenderer {
    draw_order: Vec<ChartKind>,
    renderers: Vec<SeriesRenderer>,
    draw_value_above_bar: bool,
    draw_bar_shadow: bool,
}

impl Default for CombinedChartRenderer {
    fn default() -> Self {
        Self {
            draw_order: ChartKind::DEFAULT_DRAW_ORDER.to_vec(),
            renderers: Vec::new(),
            draw_value_above_bar: true,
            draw_bar_shadow: false,
        }
    }
}

impl CombinedChartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the sub-renderer list from the draw order and present kinds.
    pub fn create_renderers(&mut self, data: &CombinedChartData) {
        let bar = BarChartRenderer::new(self.draw_value_above_bar, self.draw_bar_shadow);
        self.renderers = self
            .draw_order
            .iter()
            .filter(|kind| data.has_kind(**kind))
            .map(|kind| match kind {
                ChartKind::Bar => SeriesRenderer::Bar(bar),
                ChartKind::Bubble => SeriesRenderer::Bubble(BubbleChartRenderer::new()),
                ChartKind::Line => SeriesRenderer::Line(LineChartRenderer::new()),
                ChartKind::Candle => SeriesRenderer::Candle(CandleStickChartRenderer::new()),
                ChartKind::Scatter => SeriesRenderer::Scatter(ScatterChartRenderer::new()),
            })
            .collect();

        debug!(
            renderer_count = self.renderers.len(),
            draw_order = ?self.draw_order,
            "rebuilt combined sub-renderers"
        );
    }

    pub fn draw_data(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        for renderer in &self.renderers {
            renderer.draw_data(frame, provider);
        }
    }

    pub fn draw_values(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        for renderer in &self.renderers {
            renderer.draw_values(frame, provider);
        }
    }

    pub fn draw_extras(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider) {
        for renderer in &self.renderers {
            renderer.draw_extras(frame, provider);
        }
    }

    /// Forwards to each sub-renderer only the highlights scoped to its kind
    /// or left unscoped.
    pub fn draw_highlighted(
        &self,
        frame: &mut RenderFrame,
        provider: &dyn ChartDataProvider,
        highlights: &[Highlight],
    ) {
        let data = provider.combined_data();
        for renderer in &self.renderers {
            let Some(data_index) = data.data_index_of(renderer.kind()) else {
                continue;
            };
            let scoped: SmallVec<[Highlight; 4]> = highlights
                .iter()
                .filter(|highlight| highlight.targets_data_index(data_index))
                .copied()
                .collect();
            trace!(
                kind = ?renderer.kind(),
                data_index,
                highlight_count = scoped.len(),
                "forward highlights"
            );
            renderer.draw_highlighted(frame, provider, &scoped);
        }
    }

    #[must_use]
    pub fn sub_renderers(&self) -> &[SeriesRenderer] {
        &self.renderers
    }

    /// Direct access to the list; no draw-order invariant is enforced.
    pub fn sub_renderers_mut(&mut self) -> &mut Vec<SeriesRenderer> {
        &mut self.renderers
    }

    pub fn set_sub_renderers(&mut self, renderers: Vec<SeriesRenderer>) {
        self.renderers = renderers;
    }

    #[must_use]
    pub fn sub_renderer(&self, index: usize) -> Option<&SeriesRenderer> {
        self.renderers.get(index)
    }

    #[must_use]
    pub fn draw_order(&self) -> &[ChartKind] {
        &self.draw_order
    }

    /// Replaces the draw order and rebuilds. An empty order is ignored and
    /// `false` is returned.
    pub fn set_draw_order(&mut self, order: Vec<ChartKind>, data: &CombinedChartData) -> bool {
        if order.is_empty() {
            debug!("ignoring empty draw order");
            return false;
        }
        self.draw_order = order;
        self.create_renderers(data);
        true
    }

    #[must_use]
    pub fn draw_value_above_bar(&self) -> bool {
        self.draw_value_above_bar
    }

    pub fn set_draw_value_above_bar(&mut self, enabled: bool) {
        self.draw_value_above_bar = enabled;
        self.for_each_bar(|bar| bar.draw_value_above_bar = enabled);
    }

    #[must_use]
    pub fn draw_bar_shadow(&self) -> bool {
        self.draw_bar_shadow
    }

    pub fn set_draw_bar_shadow(&mut self, enabled: bool) {
        self.draw_bar_shadow = enabled;
        self.for_each_bar(|bar| bar.draw_bar_shadow = enabled);
    }

    fn for_each_bar(&mut self, mut apply: impl FnMut(&mut BarChartRenderer)) {
        for renderer in &mut self.renderers {
            if let SeriesRenderer::Bar(bar) = renderer {
                apply(bar);
            }
        }
    }
}
