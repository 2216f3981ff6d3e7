use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Capability shared by every entry type a data set can hold.
pub trait ChartEntry: Clone + std::fmt::Debug {
    fn x(&self) -> f64;

    /// Representative y value used for highlighting and value labels.
    fn y(&self) -> f64;

    /// Lowest and highest y this entry contributes to data bounds.
    fn y_bounds(&self) -> (f64, f64) {
        (self.y(), self.y())
    }
}

/// Plain x/y sample used by line and scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub x: f64,
    pub y: f64,
}

impl Entry {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }
}

impl ChartEntry for Entry {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// One segment of a stacked bar, in value space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackRange {
    pub from: f64,
    pub to: f64,
}

impl StackRange {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Lower bound is exclusive, upper bound inclusive.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value > self.from && value <= self.to
    }
}

/// Bar sample, optionally stacked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    pub x: f64,
    pub y: f64,
    pub y_values: Option<SmallVec<[f64; 4]>>,
}

impl BarEntry {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            y_values: None,
        }
    }

    /// Stacked bar whose `y` is the sum of all stack values.
    #[must_use]
    pub fn stacked(x: f64, values: &[f64]) -> Self {
        Self {
            x,
            y: values.iter().sum(),
            y_values: Some(values.iter().copied().collect()),
        }
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.y_values.is_some()
    }

    /// Sum of the negative stack values, as a positive number.
    #[must_use]
    pub fn negative_sum(&self) -> f64 {
        self.y_values
            .as_ref()
            .map(|values| values.iter().filter(|v| **v < 0.0).map(|v| -v).sum())
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn positive_sum(&self) -> f64 {
        self.y_values
            .as_ref()
            .map(|values| values.iter().filter(|v| **v >= 0.0).sum())
            .unwrap_or(0.0)
    }

    /// Value-space extent of every stack segment, in stack order.
    ///
    /// Negative values stack downward from zero and positive values upward.
    #[must_use]
    pub fn ranges(&self) -> SmallVec<[StackRange; 4]> {
        let mut out = SmallVec::new();
        let Some(values) = self.y_values.as_ref() else {
            return out;
        };

        let mut neg_remain = -self.negative_sum();
        let mut pos_remain = 0.0;
        for value in values {
            if *value < 0.0 {
                out.push(StackRange::new(neg_remain, neg_remain - value));
                neg_remain -= value;
            } else {
                out.push(StackRange::new(pos_remain, pos_remain + value));
                pos_remain += value;
            }
        }
        out
    }
}

impl ChartEntry for BarEntry {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn y_bounds(&self) -> (f64, f64) {
        if self.is_stacked() {
            (-self.negative_sum(), self.positive_sum())
        } else {
            (self.y, self.y)
        }
    }
}

/// Canonical OHLC candle used by candlestick series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleEntry {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandleEntry {
    /// Builds a validated candle from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(x: f64, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !x.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            x,
            open,
            high,
            low,
            close,
        })
    }

    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Returns `true` when close is greater than or equal to open.
    #[must_use]
    pub fn is_increasing(self) -> bool {
        self.close >= self.open
    }
}

impl ChartEntry for CandleEntry {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.close
    }

    fn y_bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

/// Bubble sample; `size` drives the bubble radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleEntry {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl BubbleEntry {
    #[must_use]
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }
}

impl ChartEntry for BubbleEntry {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}
