use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, ChartOffsets, Viewport, XAxisConfig, YAxisConfig};
use crate::error::{ChartError, ChartResult};
use crate::interaction::DEFAULT_MAX_HIGHLIGHT_DISTANCE;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist and reload a chart setup.
/// Every field except the viewport has a default, so partial JSON documents
/// are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub offsets: ChartOffsets,
    #[serde(default = "default_draw_order")]
    pub draw_order: Vec<ChartKind>,
    #[serde(default = "default_true")]
    pub draw_value_above_bar: bool,
    #[serde(default)]
    pub draw_bar_shadow: bool,
    #[serde(default = "default_true")]
    pub highlight_full_bar: bool,
    #[serde(default = "default_true")]
    pub highlight_per_tap_enabled: bool,
    #[serde(default = "default_max_highlight_distance")]
    pub max_highlight_distance: f64,
    /// Value labels are hidden once more entries than this are visible.
    #[serde(default = "default_max_visible_count")]
    pub max_visible_count: usize,
    #[serde(default = "default_min_scale")]
    pub min_scale_x: f64,
    /// `0` means no upper bound.
    #[serde(default)]
    pub max_scale_x: f64,
    #[serde(default = "default_min_scale")]
    pub min_scale_y: f64,
    #[serde(default)]
    pub max_scale_y: f64,
    #[serde(default)]
    pub drag_offset_x: f64,
    #[serde(default)]
    pub drag_offset_y: f64,
    /// Pads the x axis by half a unit on each side while bar, candle or
    /// bubble data is present, so the outermost items are not clipped.
    #[serde(default = "default_true")]
    pub auto_x_axis_space: bool,
    #[serde(default)]
    pub x_axis: XAxisConfig,
    #[serde(default)]
    pub left_axis: YAxisConfig,
    #[serde(default)]
    pub right_axis: YAxisConfig,
}

fn default_draw_order() -> Vec<ChartKind> {
    ChartKind::DEFAULT_DRAW_ORDER.to_vec()
}

fn default_true() -> bool {
    true
}

fn default_max_highlight_distance() -> f64 {
    DEFAULT_MAX_HIGHLIGHT_DISTANCE
}

fn default_max_visible_count() -> usize {
    100
}

fn default_min_scale() -> f64 {
    1.0
}

impl CombinedChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            offsets: ChartOffsets::default(),
            draw_order: default_draw_order(),
            draw_value_above_bar: true,
            draw_bar_shadow: false,
            highlight_full_bar: true,
            highlight_per_tap_enabled: true,
            max_highlight_distance: default_max_highlight_distance(),
            max_visible_count: default_max_visible_count(),
            min_scale_x: default_min_scale(),
            max_scale_x: 0.0,
            min_scale_y: default_min_scale(),
            max_scale_y: 0.0,
            drag_offset_x: 0.0,
            drag_offset_y: 0.0,
            auto_x_axis_space: true,
            x_axis: XAxisConfig::default(),
            left_axis: YAxisConfig::default(),
            right_axis: YAxisConfig::default(),
        }
    }

    #[must_use]
    pub fn with_offsets(mut self, offsets: ChartOffsets) -> Self {
        self.offsets = offsets;
        self
    }

    #[must_use]
    pub fn with_draw_order(mut self, draw_order: Vec<ChartKind>) -> Self {
        self.draw_order = draw_order;
        self
    }

    #[must_use]
    pub fn with_draw_value_above_bar(mut self, enabled: bool) -> Self {
        self.draw_value_above_bar = enabled;
        self
    }

    #[must_use]
    pub fn with_draw_bar_shadow(mut self, enabled: bool) -> Self {
        self.draw_bar_shadow = enabled;
        self
    }

    #[must_use]
    pub fn with_highlight_full_bar(mut self, enabled: bool) -> Self {
        self.highlight_full_bar = enabled;
        self
    }

    #[must_use]
    pub fn with_max_highlight_distance(mut self, distance: f64) -> Self {
        self.max_highlight_distance = distance;
        self
    }

    #[must_use]
    pub fn with_max_visible_count(mut self, count: usize) -> Self {
        self.max_visible_count = count;
        self
    }

    #[must_use]
    pub fn with_scale_limits_x(mut self, min: f64, max: f64) -> Self {
        self.min_scale_x = min;
        self.max_scale_x = max;
        self
    }

    #[must_use]
    pub fn with_scale_limits_y(mut self, min: f64, max: f64) -> Self {
        self.min_scale_y = min;
        self.max_scale_y = max;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: XAxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_left_axis(mut self, axis: YAxisConfig) -> Self {
        self.left_axis = axis;
        self
    }

    #[must_use]
    pub fn with_right_axis(mut self, axis: YAxisConfig) -> Self {
        self.right_axis = axis;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
