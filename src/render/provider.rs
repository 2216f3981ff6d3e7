use crate::core::{AxisDependency, CombinedChartData, Transformer, ViewportHandler};
use crate::formatter::ValueFormatter;
use crate::render::Animator;

/// Read access the data renderers need from the owning chart.
///
/// Renderers never store the chart or its viewport handler; everything is
/// looked up through this trait for the duration of one draw call.
pub trait ChartDataProvider {
    fn combined_data(&self) -> &CombinedChartData;

    fn viewport_handler(&self) -> &ViewportHandler;

    fn transformer(&self, axis: AxisDependency) -> &Transformer;

    fn is_inverted(&self, axis: AxisDependency) -> bool;

    fn animator(&self) -> &Animator;

    /// Smallest x value currently inside the content rect.
    fn lowest_visible_x(&self) -> f64;

    /// Largest x value currently inside the content rect.
    fn highest_visible_x(&self) -> f64;

    /// Current y-axis extent for `axis`.
    fn chart_y_min(&self, axis: AxisDependency) -> f64;

    fn chart_y_max(&self, axis: AxisDependency) -> f64;

    /// Value labels are suppressed when more entries than this are visible.
    fn max_visible_count(&self) -> usize;

    /// Formatter used for data sets without their own.
    fn default_value_formatter(&self) -> &dyn ValueFormatter;

    fn is_drawing_values_allowed(&self) -> bool {
        let entry_count = self.combined_data().entry_count() as f64;
        entry_count < self.max_visible_count() as f64 * self.viewport_handler().scale_x()
    }
}
