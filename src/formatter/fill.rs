use std::fmt;
use std::sync::Arc;

use crate::core::{AxisDependency, LineDataSet};
use crate::render::ChartDataProvider;

/// Decides the y value a filled line series closes its fill area against.
pub trait FillFormatter: fmt::Debug + Send + Sync {
    fn fill_line_position(&self, data_set: &LineDataSet, provider: &dyn ChartDataProvider) -> f64;
}

/// Closure form accepted by [`DefaultFillFormatter::with_block`].
pub type FillLineFn = Arc<dyn Fn(&LineDataSet, &dyn ChartDataProvider) -> f64 + Send + Sync>;

/// Fills towards zero when the line crosses it, otherwise towards the
/// nearest chart edge.
#[derive(Clone, Default)]
pub struct DefaultFillFormatter {
    block: Option<FillLineFn>,
}

impl fmt::Debug for DefaultFillFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultFillFormatter")
            .field("custom_block", &self.block.is_some())
            .finish()
    }
}

impl DefaultFillFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_block(block: FillLineFn) -> Self {
        Self { block: Some(block) }
    }
}

impl FillFormatter for DefaultFillFormatter {
    fn fill_line_position(&self, data_set: &LineDataSet, provider: &dyn ChartDataProvider) -> f64 {
        if let Some(block) = &self.block {
            return block(data_set, provider);
        }

        if data_set.y_max() > 0.0 && data_set.y_min() < 0.0 {
            return 0.0;
        }

        let axis: AxisDependency = data_set.axis_dependency;
        let line_data = provider.combined_data().line.as_ref();
        let data_y_max = line_data.map_or(0.0, |data| data.y_max());
        let data_y_min = line_data.map_or(0.0, |data| data.y_min());

        let max = if data_y_max > 0.0 {
            0.0
        } else {
            provider.chart_y_max(axis)
        };
        let min = if data_y_min < 0.0 {
            0.0
        } else {
            provider.chart_y_min(axis)
        };

        if data_set.y_min() >= 0.0 { min } else { max }
    }
}
