//! Touch-to-entry resolution and the highlight values it produces.

mod bar_highlighter;
mod combined_highlighter;
mod highlight;
mod highlighter;

pub use bar_highlighter::{BarHighlighter, closest_stack_index};
pub use combined_highlighter::CombinedHighlighter;
pub use highlight::Highlight;
pub use highlighter::{
    ChartHighlighter, DEFAULT_MAX_HIGHLIGHT_DISTANCE, Highlighter, build_highlights,
    value_for_touch_point,
};
