//! Value and fill-line formatters consumed by the data renderers.

mod fill;
mod large_value;
mod value;

pub use fill::{DefaultFillFormatter, FillFormatter, FillLineFn};
pub use large_value::LargeValueFormatter;
pub use value::{DefaultValueFormatter, ValueFormatter};
