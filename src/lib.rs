//! combined-chart: headless combined charting engine.
//!
//! Overlays bar, line, scatter, candlestick and bubble data in one plot
//! area. Drawing produces a backend-agnostic `RenderFrame`; a `Renderer`
//! backend (the null renderer, or cairo behind `cairo-backend`) consumes it.

pub mod api;
pub mod core;
pub mod error;
pub mod formatter;
pub mod interaction;
pub mod jobs;
pub mod render;
pub mod telemetry;

pub use api::{ChartSnapshot, CombinedChart, CombinedChartConfig};
pub use error::{ChartError, ChartResult};
