use serde::{Deserialize, Deserializer, Serialize};

use crate::core::AxisDependency;

/// Selected entry reference produced by the highlighters.
///
/// `data_index` is the position of the owning kind inside
/// [`CombinedChartData::all_data`](crate::core::CombinedChartData::all_data);
/// `None` leaves the highlight unscoped so every sub-renderer accepts it.
/// `stack_index == None` addresses the whole bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub x: f64,
    pub y: f64,
    /// Pixel position; NaN until resolved. Serialized as `null` when unset.
    #[serde(default = "unset_pixel", deserialize_with = "pixel_or_unset")]
    pub x_px: f64,
    #[serde(default = "unset_pixel", deserialize_with = "pixel_or_unset")]
    pub y_px: f64,
    pub data_set_index: usize,
    #[serde(default)]
    pub stack_index: Option<usize>,
    #[serde(default)]
    pub data_index: Option<usize>,
    #[serde(default)]
    pub axis: AxisDependency,
}

fn unset_pixel() -> f64 {
    f64::NAN
}

fn pixel_or_unset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Highlight {
    #[must_use]
    pub fn new(x: f64, y: f64, data_set_index: usize) -> Self {
        Self {
            x,
            y,
            x_px: f64::NAN,
            y_px: f64::NAN,
            data_set_index,
            stack_index: None,
            data_index: None,
            axis: AxisDependency::Left,
        }
    }

    #[must_use]
    pub fn with_pixels(mut self, x_px: f64, y_px: f64) -> Self {
        self.x_px = x_px;
        self.y_px = y_px;
        self
    }

    #[must_use]
    pub fn with_stack_index(mut self, stack_index: Option<usize>) -> Self {
        self.stack_index = stack_index;
        self
    }

    #[must_use]
    pub fn with_data_index(mut self, data_index: Option<usize>) -> Self {
        self.data_index = data_index;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisDependency) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack_index.is_some()
    }

    /// Whether this highlight applies to the kind at `data_index`.
    #[must_use]
    pub fn targets_data_index(&self, data_index: usize) -> bool {
        self.data_index.is_none_or(|own| own == data_index)
    }

    /// Same entry, ignoring pixel positions.
    #[must_use]
    pub fn same_target(&self, other: &Self) -> bool {
        self.x == other.x
            && self.data_set_index == other.data_set_index
            && self.stack_index == other.stack_index
            && self.data_index == other.data_index
    }
}
