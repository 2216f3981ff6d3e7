mod animator;
mod bar;
mod bubble;
mod candle;
mod combined;
mod data_renderer;
mod frame;
mod line;
mod null_renderer;
mod primitives;
mod provider;
mod scatter;

pub use animator::{Animator, Easing};
pub use bar::BarChartRenderer;
pub use bubble::{BubbleChartRenderer, bubble_shape_size};
pub use candle::{CandleGeometry, CandleStickChartRenderer, project_candles};
pub use combined::{CombinedChartRenderer, SeriesRenderer};
pub use data_renderer::{DataRenderer, XBounds};
pub use frame::{DrawCommand, RenderFrame};
pub use line::LineChartRenderer;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use provider::ChartDataProvider;
pub use scatter::ScatterChartRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart data and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
