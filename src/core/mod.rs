pub mod axis;
pub mod chart_data;
pub mod combined_data;
pub mod data_set;
pub mod entry;
pub mod primitives;
pub mod transformer;
pub mod types;
pub mod viewport_handler;

pub use axis::{AxisBounds, XAxisConfig, YAxisConfig};
pub use chart_data::{
    BarChartData, BubbleChartData, CandleChartData, ChartData, LineChartData, ScatterChartData,
};
pub use combined_data::{ChartDataRef, ChartKind, CombinedChartData};
pub use data_set::{
    BarDataSet, BarStyle, BubbleDataSet, BubbleStyle, CandleDataSet, CandleStyle, DataSet,
    LineDataSet, LineStyle, ScatterDataSet, ScatterShape, ScatterStyle,
};
pub use entry::{BarEntry, BubbleEntry, CandleEntry, ChartEntry, Entry, StackRange};
pub use transformer::Transformer;
pub use types::{AxisDependency, Rounding, Viewport};
pub use viewport_handler::{ChartOffsets, ViewportHandler};
