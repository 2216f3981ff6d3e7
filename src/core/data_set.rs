use std::sync::Arc;

use tracing::{trace, warn};

use crate::core::entry::{BarEntry, BubbleEntry, CandleEntry, ChartEntry, Entry};
use crate::core::types::{AxisDependency, Rounding};
use crate::formatter::{FillFormatter, ValueFormatter};
use crate::render::Color;

/// Bar-specific presentation options.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    pub stack_labels: Vec<String>,
    pub bar_shadow_color: Color,
    /// Alpha applied to the highlight color over a highlighted bar.
    pub highlight_alpha: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            stack_labels: Vec::new(),
            bar_shadow_color: Color::rgb(215.0 / 255.0, 215.0 / 255.0, 215.0 / 255.0),
            highlight_alpha: 120.0 / 255.0,
        }
    }
}

/// Line-specific presentation options.
#[derive(Debug, Clone)]
pub struct LineStyle {
    pub line_width: f64,
    pub draw_circles: bool,
    pub circle_radius: f64,
    pub circle_color: Color,
    pub draw_filled: bool,
    pub fill_color: Color,
    pub fill_alpha: f64,
    pub fill_formatter: Option<Arc<dyn FillFormatter>>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            draw_circles: true,
            circle_radius: 8.0,
            circle_color: Color::rgb(140.0 / 255.0, 234.0 / 255.0, 1.0),
            draw_filled: false,
            fill_color: Color::rgb(140.0 / 255.0, 234.0 / 255.0, 1.0),
            fill_alpha: 0.33,
            fill_formatter: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ScatterShape {
    #[default]
    Square,
    Circle,
    Triangle,
    Cross,
    X,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterStyle {
    pub shape: ScatterShape,
    pub shape_size: f64,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            shape: ScatterShape::Square,
            shape_size: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleStyle {
    pub increasing_color: Color,
    pub decreasing_color: Color,
    pub shadow_color: Option<Color>,
    pub shadow_width: f64,
    /// Fraction of one x unit left empty on each side of a body, in `[0, 0.45]`.
    pub bar_space: f64,
    /// Draws open/close ticks instead of filled bodies.
    pub show_candle_bar: bool,
}

impl Default for CandleStyle {
    fn default() -> Self {
        Self {
            increasing_color: Color::rgb(0.149, 0.651, 0.604),
            decreasing_color: Color::rgb(0.937, 0.325, 0.314),
            shadow_color: None,
            shadow_width: 1.5,
            bar_space: 0.1,
            show_candle_bar: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleStyle {
    pub normalize_size_enabled: bool,
    pub highlight_circle_width: f64,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            normalize_size_enabled: true,
            highlight_circle_width: 2.5,
        }
    }
}

/// Ordered series of entries plus its presentation options.
///
/// Entries are kept sorted by x. Bounds are recalculated on every mutation.
#[derive(Debug, Clone)]
pub struct DataSet<E, S> {
    label: String,
    entries: Vec<E>,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    pub colors: Vec<Color>,
    pub value_text_color: Color,
    pub value_text_size: f64,
    pub highlight_enabled: bool,
    pub visible: bool,
    pub draw_values: bool,
    pub axis_dependency: AxisDependency,
    pub value_formatter: Option<Arc<dyn ValueFormatter>>,
    pub highlight_color: Color,
    pub highlight_line_width: f64,
    pub draw_vertical_highlight_indicator: bool,
    pub draw_horizontal_highlight_indicator: bool,
    pub style: S,
}

pub type BarDataSet = DataSet<BarEntry, BarStyle>;
pub type LineDataSet = DataSet<Entry, LineStyle>;
pub type ScatterDataSet = DataSet<Entry, ScatterStyle>;
pub type CandleDataSet = DataSet<CandleEntry, CandleStyle>;
pub type BubbleDataSet = DataSet<BubbleEntry, BubbleStyle>;

impl<E: ChartEntry, S: Default> DataSet<E, S> {
    pub fn new(label: impl Into<String>, entries: Vec<E>) -> Self {
        let mut set = Self {
            label: label.into(),
            entries: canonicalize_entries(entries),
            x_min: f64::MAX,
            x_max: -f64::MAX,
            y_min: f64::MAX,
            y_max: -f64::MAX,
            colors: vec![Color::rgb(140.0 / 255.0, 234.0 / 255.0, 1.0)],
            value_text_color: Color::rgb(0.0, 0.0, 0.0),
            value_text_size: 7.0,
            highlight_enabled: true,
            visible: true,
            draw_values: true,
            axis_dependency: AxisDependency::Left,
            value_formatter: None,
            highlight_color: Color::rgb(1.0, 187.0 / 255.0, 115.0 / 255.0),
            highlight_line_width: 0.5,
            draw_vertical_highlight_indicator: true,
            draw_horizontal_highlight_indicator: true,
            style: S::default(),
        };
        set.calc_min_max();
        set
    }
}

impl<E: ChartEntry, S> DataSet<E, S> {
    #[must_use]
    pub fn with_style(mut self, style: S) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_axis_dependency(mut self, axis: AxisDependency) -> Self {
        self.axis_dependency = axis;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Color for the entry at `index`, cycling through the color list.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::rgb(0.0, 0.0, 0.0);
        }
        self.colors[index % self.colors.len()]
    }

    /// Inserts an entry, keeping x order. Entries with non-finite values are dropped.
    pub fn add_entry(&mut self, entry: E) -> bool {
        if !is_finite_entry(&entry) {
            warn!(label = %self.label, "skipping non-finite entry");
            return false;
        }
        let index = self.entries.partition_point(|e| e.x() <= entry.x());
        self.entries.insert(index, entry);
        trace!(label = %self.label, count = self.entries.len(), "add entry");
        self.calc_min_max();
        true
    }

    pub fn remove_entry(&mut self, index: usize) -> Option<E> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.calc_min_max();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.calc_min_max();
    }

    /// Recomputes x/y bounds from the current entries.
    pub fn calc_min_max(&mut self) {
        self.x_min = f64::MAX;
        self.x_max = -f64::MAX;
        self.y_min = f64::MAX;
        self.y_max = -f64::MAX;

        for entry in &self.entries {
            let (low, high) = entry.y_bounds();
            self.x_min = self.x_min.min(entry.x());
            self.x_max = self.x_max.max(entry.x());
            self.y_min = self.y_min.min(low);
            self.y_max = self.y_max.max(high);
        }
    }

    /// Index of the entry matching `x_value` under `rounding`.
    ///
    /// When `closest_to_y` is not NaN and several entries share the matched x,
    /// the one closest in y is returned.
    #[must_use]
    pub fn entry_index(&self, x_value: f64, closest_to_y: f64, rounding: Rounding) -> Option<usize> {
        if self.entries.is_empty() || x_value.is_nan() {
            return None;
        }

        let mut low = 0;
        let mut high = self.entries.len() - 1;
        let mut closest = high;

        while low < high {
            let m = low + (high - low) / 2;
            let d1 = self.entries[m].x() - x_value;
            let d2 = self.entries[m + 1].x() - x_value;
            let (ad1, ad2) = (d1.abs(), d2.abs());

            if ad2 < ad1 {
                low = m + 1;
            } else if ad1 < ad2 {
                high = m;
            } else if d1 >= 0.0 {
                high = m;
            } else {
                low = m + 1;
            }
            closest = high;
        }

        let closest_x = self.entries[closest].x();
        match rounding {
            Rounding::Up => {
                if closest_x < x_value && closest < self.entries.len() - 1 {
                    closest += 1;
                }
            }
            Rounding::Down => {
                if closest_x > x_value && closest > 0 {
                    closest -= 1;
                }
            }
            Rounding::Closest => {}
        }

        if !closest_to_y.is_nan() {
            let closest_x = self.entries[closest].x();
            while closest > 0 && self.entries[closest - 1].x() == closest_x {
                closest -= 1;
            }

            let mut best = closest;
            let mut best_dist = (self.entries[closest].y() - closest_to_y).abs();
            for (offset, entry) in self.entries[closest + 1..].iter().enumerate() {
                if entry.x() != closest_x {
                    break;
                }
                let dist = (entry.y() - closest_to_y).abs();
                if dist <= best_dist {
                    best_dist = dist;
                    best = closest + 1 + offset;
                }
            }
            closest = best;
        }

        Some(closest)
    }

    #[must_use]
    pub fn entry_for_x_value(&self, x_value: f64, closest_to_y: f64, rounding: Rounding) -> Option<&E> {
        self.entry_index(x_value, closest_to_y, rounding)
            .and_then(|index| self.entries.get(index))
    }

    /// All entries whose x equals `x_value` exactly, in stored order.
    #[must_use]
    pub fn entries_for_x_value(&self, x_value: f64) -> &[E] {
        let start = self.entries.partition_point(|e| e.x() < x_value);
        let end = self.entries.partition_point(|e| e.x() <= x_value);
        &self.entries[start..end]
    }

    /// Position of the first entry with the same x and y as `entry`.
    #[must_use]
    pub fn entry_index_of(&self, entry: &E) -> Option<usize> {
        self.entries_for_x_value(entry.x())
            .iter()
            .position(|candidate| candidate.y() == entry.y())
            .map(|offset| self.entries.partition_point(|e| e.x() < entry.x()) + offset)
    }
}

impl BubbleDataSet {
    /// Largest bubble size in the set, 0 when empty.
    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.size)
            .fold(0.0, f64::max)
    }
}

impl BarDataSet {
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.entries.iter().any(BarEntry::is_stacked)
    }

    /// Largest stack size across all entries, 1 for plain bars.
    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|e| e.y_values.as_ref().map(|values| values.len()))
            .max()
            .unwrap_or(1)
    }
}

fn is_finite_entry<E: ChartEntry>(entry: &E) -> bool {
    let (low, high) = entry.y_bounds();
    entry.x().is_finite() && low.is_finite() && high.is_finite()
}

fn canonicalize_entries<E: ChartEntry>(mut entries: Vec<E>) -> Vec<E> {
    let original_len = entries.len();
    entries.retain(is_finite_entry);
    entries.sort_by(|a, b| a.x().total_cmp(&b.x()));

    let filtered_count = original_len - entries.len();
    if filtered_count > 0 {
        warn!(
            filtered_count,
            canonical_count = entries.len(),
            "dropped non-finite entries"
        );
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::LineDataSet;
    use crate::core::{Entry, Rounding};

    fn set(values: &[(f64, f64)]) -> LineDataSet {
        LineDataSet::new(
            "test",
            values.iter().map(|(x, y)| Entry::new(*x, *y)).collect(),
        )
    }

    #[test]
    fn entries_are_sorted_and_bounds_tracked() {
        let set = set(&[(3.0, 1.0), (1.0, 5.0), (2.0, -2.0), (f64::NAN, 1.0)]);
        let xs: Vec<f64> = set.entries().iter().map(|e| e.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!((set.x_min(), set.x_max()), (1.0, 3.0));
        assert_eq!((set.y_min(), set.y_max()), (-2.0, 5.0));
    }

    #[test]
    fn entry_index_respects_rounding() {
        let set = set(&[(0.0, 0.0), (10.0, 1.0), (20.0, 2.0)]);
        assert_eq!(set.entry_index(12.0, f64::NAN, Rounding::Closest), Some(1));
        assert_eq!(set.entry_index(12.0, f64::NAN, Rounding::Up), Some(2));
        assert_eq!(set.entry_index(8.0, f64::NAN, Rounding::Down), Some(0));
        assert_eq!(set.entry_index(-50.0, f64::NAN, Rounding::Closest), Some(0));
        assert_eq!(set.entry_index(500.0, f64::NAN, Rounding::Closest), Some(2));
    }

    #[test]
    fn entry_index_midpoint_resolves_to_higher_entry() {
        let set = set(&[(0.0, 0.0), (10.0, 1.0)]);
        assert_eq!(set.entry_index(5.0, f64::NAN, Rounding::Closest), Some(1));
        assert_eq!(set.entry_index(4.999, f64::NAN, Rounding::Closest), Some(0));

        let set = super::LineDataSet::new(
            "wide",
            (0..5).map(|i| Entry::new(f64::from(i) * 10.0, 0.0)).collect(),
        );
        assert_eq!(set.entry_index(25.0, f64::NAN, Rounding::Closest), Some(3));
        assert_eq!(set.entry_index(5.0, f64::NAN, Rounding::Closest), Some(1));
        assert_eq!(set.entry_index(5.0, f64::NAN, Rounding::Down), Some(0));
    }

    #[test]
    fn entry_index_prefers_closest_y_among_equal_x() {
        let set = set(&[(0.0, 0.0), (5.0, 1.0), (5.0, 9.0), (5.0, 4.0), (7.0, 0.0)]);
        let index = set.entry_index(5.0, 8.0, Rounding::Closest).expect("index");
        assert_eq!(set.entries()[index].y, 9.0);
        assert_eq!(set.entries_for_x_value(5.0).len(), 3);
        assert!(set.entries_for_x_value(6.0).is_empty());
    }

    #[test]
    fn mutations_recalculate_bounds() {
        let mut set = set(&[(1.0, 1.0), (2.0, 2.0)]);
        assert!(set.add_entry(Entry::new(1.5, 10.0)));
        assert_eq!(set.y_max(), 10.0);
        assert_eq!(set.entries()[1].x, 1.5);
        set.remove_entry(1);
        assert_eq!(set.y_max(), 2.0);
        assert!(!set.add_entry(Entry::new(f64::INFINITY, 1.0)));
        assert_eq!(set.remove_entry(10), None);
    }
}
