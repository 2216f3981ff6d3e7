use std::fmt::Debug;

use crate::core::primitives::decimals;

/// Turns a plotted value into label text.
pub trait ValueFormatter: Debug + Send + Sync {
    fn string_for_value(&self, value: f64) -> String;
}

/// Fixed-precision formatter with optional prefix/suffix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefaultValueFormatter {
    pub decimals: usize,
    pub prefix: String,
    pub suffix: String,
}

impl DefaultValueFormatter {
    #[must_use]
    pub fn new(decimals: usize) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    /// Picks the precision from the span of the data being labeled.
    ///
    /// With fewer than two entries the larger magnitude is used as reference.
    #[must_use]
    pub fn for_range(min: f64, max: f64, entry_count: usize) -> Self {
        let reference = if entry_count < 2 {
            min.abs().max(max.abs())
        } else {
            (max - min).abs()
        };
        Self::new(decimals(reference))
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl ValueFormatter for DefaultValueFormatter {
    fn string_for_value(&self, value: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals, value, self.suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultValueFormatter, ValueFormatter};

    #[test]
    fn precision_follows_data_span() {
        assert_eq!(DefaultValueFormatter::for_range(0.0, 1000.0, 10).decimals, 0);
        assert_eq!(DefaultValueFormatter::for_range(0.0, 0.5, 10).decimals, 3);
        let formatter = DefaultValueFormatter::new(2).with_suffix(" %");
        assert_eq!(formatter.string_for_value(3.14159), "3.14 %");
    }
}
