use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::error::ChartResult;
use crate::interaction::CombinedHighlighter;
use crate::jobs::ViewPortJob;
use crate::render::{CombinedChartRenderer, Renderer};

use super::ChartModel;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `CombinedChart` overlays bar, line, scatter, candlestick and bubble data
/// in one plot area. It owns the backend renderer, the chart model, the
/// combined data renderer and highlighter, and the queue of viewport jobs
/// waiting for the chart to receive its dimensions.
pub struct CombinedChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) model: ChartModel,
    pub(super) data_renderer: CombinedChartRenderer,
    pub(super) highlighter: CombinedHighlighter,
    pub(super) pending_jobs: VecDeque<ViewPortJob>,
    pub(super) highlight_full_bar: bool,
    pub(super) highlight_per_tap_enabled: bool,
    pub(super) series_metadata: IndexMap<String, String>,
}

impl<R: Renderer> CombinedChart<R> {
    /// Builds the current frame and hands it to the backend renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.model.take_redraw_request();
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by toolkit draw callbacks while keeping the renderer decoupled
    /// from any toolkit API.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.model.take_redraw_request();
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
