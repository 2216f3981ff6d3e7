use tracing::debug;

use crate::core::data_set::{
    BarStyle, BubbleStyle, CandleStyle, DataSet, LineStyle, ScatterStyle,
};
use crate::core::entry::{BarEntry, BubbleEntry, CandleEntry, ChartEntry, Entry};
use crate::core::types::AxisDependency;
use crate::interaction::Highlight;

/// Ordered collection of data sets of one chart kind with aggregate bounds.
#[derive(Debug, Clone)]
pub struct ChartData<E, S> {
    data_sets: Vec<DataSet<E, S>>,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    left_y_min: f64,
    left_y_max: f64,
    right_y_min: f64,
    right_y_max: f64,
    /// Bar width in x-value units; only bar data reads it.
    bar_width: f64,
}

pub type BarChartData = ChartData<BarEntry, BarStyle>;
pub type LineChartData = ChartData<Entry, LineStyle>;
pub type ScatterChartData = ChartData<Entry, ScatterStyle>;
pub type CandleChartData = ChartData<CandleEntry, CandleStyle>;
pub type BubbleChartData = ChartData<BubbleEntry, BubbleStyle>;

impl<E: ChartEntry, S> Default for ChartData<E, S> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E: ChartEntry, S> ChartData<E, S> {
    #[must_use]
    pub fn new(data_sets: Vec<DataSet<E, S>>) -> Self {
        let mut data = Self {
            data_sets,
            x_min: f64::MAX,
            x_max: -f64::MAX,
            y_min: f64::MAX,
            y_max: -f64::MAX,
            left_y_min: f64::MAX,
            left_y_max: -f64::MAX,
            right_y_min: f64::MAX,
            right_y_max: -f64::MAX,
            bar_width: 0.85,
        };
        data.notify_data_changed();
        data
    }

    /// Recomputes all bounds; call after mutating a data set in place.
    pub fn notify_data_changed(&mut self) {
        for set in &mut self.data_sets {
            set.calc_min_max();
        }
        self.calc_min_max();
    }

    fn calc_min_max(&mut self) {
        self.x_min = f64::MAX;
        self.x_max = -f64::MAX;
        self.y_min = f64::MAX;
        self.y_max = -f64::MAX;
        self.left_y_min = f64::MAX;
        self.left_y_max = -f64::MAX;
        self.right_y_min = f64::MAX;
        self.right_y_max = -f64::MAX;

        for set in self.data_sets.iter().filter(|set| set.entry_count() > 0) {
            self.x_min = self.x_min.min(set.x_min());
            self.x_max = self.x_max.max(set.x_max());
            self.y_min = self.y_min.min(set.y_min());
            self.y_max = self.y_max.max(set.y_max());
            match set.axis_dependency {
                AxisDependency::Left => {
                    self.left_y_min = self.left_y_min.min(set.y_min());
                    self.left_y_max = self.left_y_max.max(set.y_max());
                }
                AxisDependency::Right => {
                    self.right_y_min = self.right_y_min.min(set.y_min());
                    self.right_y_max = self.right_y_max.max(set.y_max());
                }
            }
        }

        // An axis without sets mirrors the other one so both stay usable.
        if self.left_y_min > self.left_y_max {
            self.left_y_min = self.right_y_min;
            self.left_y_max = self.right_y_max;
        }
        if self.right_y_min > self.right_y_max {
            self.right_y_min = self.left_y_min;
            self.right_y_max = self.left_y_max;
        }
    }

    #[must_use]
    pub fn data_sets(&self) -> &[DataSet<E, S>] {
        &self.data_sets
    }

    #[must_use]
    pub fn data_set(&self, index: usize) -> Option<&DataSet<E, S>> {
        self.data_sets.get(index)
    }

    /// Mutable access; call [`Self::notify_data_changed`] afterwards.
    pub fn data_set_mut(&mut self, index: usize) -> Option<&mut DataSet<E, S>> {
        self.data_sets.get_mut(index)
    }

    #[must_use]
    pub fn data_set_by_label(&self, label: &str) -> Option<&DataSet<E, S>> {
        self.data_sets.iter().find(|set| set.label() == label)
    }

    pub fn add_data_set(&mut self, set: DataSet<E, S>) {
        self.data_sets.push(set);
        debug!(count = self.data_sets.len(), "add data set");
        self.calc_min_max();
    }

    pub fn remove_data_set(&mut self, index: usize) -> Option<DataSet<E, S>> {
        if index >= self.data_sets.len() {
            return None;
        }
        let removed = self.data_sets.remove(index);
        self.calc_min_max();
        Some(removed)
    }

    #[must_use]
    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(DataSet::entry_count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    pub fn set_highlight_enabled(&mut self, enabled: bool) {
        for set in &mut self.data_sets {
            set.highlight_enabled = enabled;
        }
    }

    /// `true` only when every data set allows highlighting.
    #[must_use]
    pub fn is_highlight_enabled(&self) -> bool {
        self.data_sets.iter().all(|set| set.highlight_enabled)
    }

    /// Entry a highlight points at.
    ///
    /// The entry must sit exactly at the highlight's x and match its y, unless
    /// that y is NaN. Out-of-range indices resolve to `None`.
    #[must_use]
    pub fn entry_for_highlight(&self, highlight: &Highlight) -> Option<&E> {
        self.data_sets
            .get(highlight.data_set_index)?
            .entries_for_x_value(highlight.x)
            .iter()
            .find(|entry| highlight.y.is_nan() || entry.y() == highlight.y)
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

    #[must_use]
    pub fn y_min_for(&self, axis: AxisDependency) -> f64 {
        match axis {
            AxisDependency::Left => self.left_y_min,
            AxisDependency::Right => self.right_y_min,
        }
    }

    #[must_use]
    pub fn y_max_for(&self, axis: AxisDependency) -> f64 {
        match axis {
            AxisDependency::Left => self.left_y_max,
            AxisDependency::Right => self.right_y_max,
        }
    }
}

impl BarChartData {
    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    pub fn set_bar_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.bar_width = width;
        }
    }

    #[must_use]
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.set_bar_width(width);
        self
    }
}

impl ScatterChartData {
    /// Largest scatter shape size across all data sets.
    #[must_use]
    pub fn greatest_shape_size(&self) -> f64 {
        self.data_sets
            .iter()
            .map(|set| set.style.shape_size)
            .fold(0.0, f64::max)
    }
}

impl BubbleChartData {
    /// Sets the highlight ring width for every data set.
    pub fn set_highlight_circle_width(&mut self, width: f64) {
        for set in &mut self.data_sets {
            set.style.highlight_circle_width = width;
        }
    }
}
