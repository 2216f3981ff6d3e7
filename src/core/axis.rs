use serde::{Deserialize, Serialize};

/// User-facing y-axis options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YAxisConfig {
    #[serde(default)]
    pub inverted: bool,
    /// Extra room above the data maximum, in percent of the data range.
    #[serde(default = "default_space_percent")]
    pub space_top: f64,
    /// Extra room below the data minimum, in percent of the data range.
    #[serde(default = "default_space_percent")]
    pub space_bottom: f64,
    #[serde(default)]
    pub fixed_min: Option<f64>,
    #[serde(default)]
    pub fixed_max: Option<f64>,
}

fn default_space_percent() -> f64 {
    10.0
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            inverted: false,
            space_top: default_space_percent(),
            space_bottom: default_space_percent(),
            fixed_min: None,
            fixed_max: None,
        }
    }
}

/// User-facing x-axis options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct XAxisConfig {
    /// Extra room before the first x value, in x units.
    #[serde(default)]
    pub space_min: f64,
    /// Extra room after the last x value, in x units.
    #[serde(default)]
    pub space_max: f64,
    #[serde(default)]
    pub fixed_min: Option<f64>,
    #[serde(default)]
    pub fixed_max: Option<f64>,
}

/// Computed axis extent in value space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

impl AxisBounds {
    #[must_use]
    pub fn range(self) -> f64 {
        (self.max - self.min).abs()
    }

    /// Fits a y axis to data bounds, applying percent spacing and fixed limits.
    #[must_use]
    pub fn for_y(data_min: f64, data_max: f64, config: YAxisConfig) -> Self {
        let mut min = config.fixed_min.unwrap_or(data_min);
        let mut max = config.fixed_max.unwrap_or(data_max);

        let range = (max - min).abs();
        if range == 0.0 {
            max += 1.0;
            min -= 1.0;
        }

        let range = (max - min).abs();
        if config.fixed_min.is_none() {
            min -= range / 100.0 * config.space_bottom;
        }
        if config.fixed_max.is_none() {
            max += range / 100.0 * config.space_top;
        }

        Self { min, max }
    }

    /// Fits the x axis to data bounds, applying spacing and fixed limits.
    #[must_use]
    pub fn for_x(data_min: f64, data_max: f64, config: XAxisConfig) -> Self {
        let mut min = config
            .fixed_min
            .unwrap_or(data_min - config.space_min);
        let mut max = config
            .fixed_max
            .unwrap_or(data_max + config.space_max);

        if (max - min).abs() == 0.0 {
            max += 1.0;
            min -= 1.0;
        }

        Self { min, max }
    }
}
