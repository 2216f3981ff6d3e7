use std::ops::RangeInclusive;

use crate::core::{ChartData, ChartEntry, DataSet, Rounding, ViewportHandler};
use crate::formatter::ValueFormatter;
use crate::interaction::Highlight;
use crate::render::{ChartDataProvider, Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Gap between a value label and the point it annotates, in pixels.
pub(crate) const VALUE_OFFSET_PX: f64 = 4.5;

/// Draw passes every per-kind renderer implements.
pub trait DataRenderer {
    fn draw_data(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider);

    fn draw_values(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider);

    fn draw_extras(&self, frame: &mut RenderFrame, provider: &dyn ChartDataProvider);

    fn draw_highlighted(
        &self,
        frame: &mut RenderFrame,
        provider: &dyn ChartDataProvider,
        highlights: &[Highlight],
    );
}

/// Window of entry indices of one data set that falls inside the visible x
/// range, shortened by the animator's x phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XBounds {
    pub min: usize,
    pub max: usize,
    pub range: usize,
}

impl XBounds {
    #[must_use]
    pub fn new<E: ChartEntry, S>(set: &DataSet<E, S>, provider: &dyn ChartDataProvider) -> Option<Self> {
        if set.entry_count() == 0 {
            return None;
        }
        let low = provider.lowest_visible_x();
        let high = provider.highest_visible_x();
        let min = set.entry_index(low, f64::NAN, Rounding::Down).unwrap_or(0);
        let max = set.entry_index(high, f64::NAN, Rounding::Up).unwrap_or(0).max(min);
        let phase_x = provider.animator().phase_x();
        let range = ((max - min) as f64 * phase_x).floor() as usize;
        Some(Self { min, max, range })
    }

    #[must_use]
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.min..=self.min + self.range
    }
}

/// Number of leading entries the x phase lets through.
#[must_use]
pub(crate) fn phased_count(entry_count: usize, phase_x: f64) -> usize {
    ((entry_count as f64 * phase_x).ceil() as usize).min(entry_count)
}

pub(crate) fn should_draw_values<E: ChartEntry, S>(set: &DataSet<E, S>) -> bool {
    set.visible && set.draw_values && set.entry_count() > 0
}

pub(crate) fn formatter_for<'a, E, S>(
    set: &'a DataSet<E, S>,
    provider: &'a dyn ChartDataProvider,
) -> &'a dyn ValueFormatter {
    match set.value_formatter.as_deref() {
        Some(formatter) => formatter,
        None => provider.default_value_formatter(),
    }
}

/// Resolves a highlight to its data set and entry.
///
/// Disabled sets, out-of-range indices and entries not yet revealed by the x
/// phase resolve to `None`.
pub(crate) fn highlighted_entry<'a, E: ChartEntry, S>(
    data: &'a ChartData<E, S>,
    highlight: &Highlight,
    phase_x: f64,
) -> Option<(&'a DataSet<E, S>, &'a E)> {
    let set = data.data_set(highlight.data_set_index)?;
    if !set.highlight_enabled {
        return None;
    }
    let index = set.entry_index(highlight.x, highlight.y, Rounding::Closest)?;
    if index >= phased_count(set.entry_count(), phase_x) {
        return None;
    }
    set.entry(index).map(|entry| (set, entry))
}

/// Crosshair style indicator lines through a highlighted point.
pub(crate) fn draw_highlight_lines<E, S>(
    frame: &mut RenderFrame,
    handler: &ViewportHandler,
    set: &DataSet<E, S>,
    x: f64,
    y: f64,
) {
    if !x.is_finite() || !y.is_finite() || set.highlight_line_width <= 0.0 {
        return;
    }
    if set.draw_vertical_highlight_indicator {
        frame.push_line(LinePrimitive::new(
            x,
            handler.content_top(),
            x,
            handler.content_bottom(),
            set.highlight_line_width,
            set.highlight_color,
        ));
    }
    if set.draw_horizontal_highlight_indicator {
        frame.push_line(LinePrimitive::new(
            handler.content_left(),
            y,
            handler.content_right(),
            y,
            set.highlight_line_width,
            set.highlight_color,
        ));
    }
}

pub(crate) fn push_value_text(
    frame: &mut RenderFrame,
    text: String,
    x: f64,
    y: f64,
    font_size_px: f64,
    color: Color,
) {
    if text.is_empty() || !x.is_finite() || !y.is_finite() || font_size_px <= 0.0 {
        return;
    }
    frame.push_text(TextPrimitive::new(text, x, y, font_size_px, color, TextHAlign::Center));
}

/// Finite, non-degenerate line segment.
pub(crate) fn push_segment(
    frame: &mut RenderFrame,
    from: (f64, f64),
    to: (f64, f64),
    width: f64,
    color: Color,
) {
    let line = LinePrimitive::new(from.0, from.1, to.0, to.1, width, color);
    if line.validate().is_ok() {
        frame.push_line(line);
    }
}
