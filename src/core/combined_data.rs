use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::chart_data::{
    BarChartData, BubbleChartData, CandleChartData, LineChartData, ScatterChartData,
};
use crate::core::types::AxisDependency;
use crate::error::{ChartError, ChartResult};
use crate::interaction::Highlight;

/// Chart kind tag; doubles as a draw-order element.
///
/// Raw values follow the draw-order numbering: bar 0, bubble 1, line 2,
/// candle 3, scatter 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Bubble,
    Line,
    Candle,
    Scatter,
}

impl ChartKind {
    /// Default back-to-front draw order.
    pub const DEFAULT_DRAW_ORDER: [ChartKind; 5] = [
        ChartKind::Bar,
        ChartKind::Bubble,
        ChartKind::Line,
        ChartKind::Candle,
        ChartKind::Scatter,
    ];

    /// Fixed order in which present kinds are listed by [`CombinedChartData::all_data`].
    pub const CONTAINER_ORDER: [ChartKind; 5] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Scatter,
        ChartKind::Candle,
        ChartKind::Bubble,
    ];

    #[must_use]
    pub fn raw_value(self) -> i32 {
        match self {
            Self::Bar => 0,
            Self::Bubble => 1,
            Self::Line => 2,
            Self::Candle => 3,
            Self::Scatter => 4,
        }
    }
}

impl TryFrom<i32> for ChartKind {
    type Error = ChartError;

    fn try_from(value: i32) -> ChartResult<Self> {
        match value {
            0 => Ok(Self::Bar),
            1 => Ok(Self::Bubble),
            2 => Ok(Self::Line),
            3 => Ok(Self::Candle),
            4 => Ok(Self::Scatter),
            other => Err(ChartError::InvalidData(format!(
                "unknown chart kind tag: {other}"
            ))),
        }
    }
}

/// Borrowed view of one kind's data object.
#[derive(Debug, Clone, Copy)]
pub enum ChartDataRef<'a> {
    Bar(&'a BarChartData),
    Line(&'a LineChartData),
    Scatter(&'a ScatterChartData),
    Candle(&'a CandleChartData),
    Bubble(&'a BubbleChartData),
}

macro_rules! with_data {
    ($value:expr, $data:ident => $body:expr) => {
        match $value {
            ChartDataRef::Bar($data) => $body,
            ChartDataRef::Line($data) => $body,
            ChartDataRef::Scatter($data) => $body,
            ChartDataRef::Candle($data) => $body,
            ChartDataRef::Bubble($data) => $body,
        }
    };
}

impl<'a> ChartDataRef<'a> {
    #[must_use]
    pub fn kind(self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Scatter(_) => ChartKind::Scatter,
            Self::Candle(_) => ChartKind::Candle,
            Self::Bubble(_) => ChartKind::Bubble,
        }
    }

    #[must_use]
    pub fn data_set_count(self) -> usize {
        with_data!(self, data => data.data_set_count())
    }

    #[must_use]
    pub fn entry_count(self) -> usize {
        with_data!(self, data => data.entry_count())
    }

    #[must_use]
    pub fn x_bounds(self) -> (f64, f64) {
        with_data!(self, data => (data.x_min(), data.x_max()))
    }

    #[must_use]
    pub fn y_bounds(self, axis: AxisDependency) -> (f64, f64) {
        with_data!(self, data => (data.y_min_for(axis), data.y_max_for(axis)))
    }

    #[must_use]
    pub fn data_set_label(self, index: usize) -> Option<&'a str> {
        with_data!(self, data => data.data_set(index).map(|set| set.label()))
    }

    /// Whether data set `index` exists and allows highlighting.
    #[must_use]
    pub fn is_data_set_highlight_enabled(self, index: usize) -> bool {
        with_data!(self, data => data.data_set(index).is_some_and(|set| set.highlight_enabled))
    }

    /// `(x, y)` of the entry a highlight points at.
    #[must_use]
    pub fn entry_xy_for_highlight(self, highlight: &Highlight) -> Option<(f64, f64)> {
        use crate::core::ChartEntry;
        with_data!(self, data => data.entry_for_highlight(highlight).map(|e| (e.x(), e.y())))
    }
}

/// Container holding zero or one data object per chart kind.
#[derive(Debug, Clone, Default)]
pub struct CombinedChartData {
    pub bar: Option<BarChartData>,
    pub line: Option<LineChartData>,
    pub scatter: Option<ScatterChartData>,
    pub candle: Option<CandleChartData>,
    pub bubble: Option<BubbleChartData>,
}

impl CombinedChartData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bar(mut self, data: BarChartData) -> Self {
        self.bar = Some(data);
        self
    }

    #[must_use]
    pub fn with_line(mut self, data: LineChartData) -> Self {
        self.line = Some(data);
        self
    }

    #[must_use]
    pub fn with_scatter(mut self, data: ScatterChartData) -> Self {
        self.scatter = Some(data);
        self
    }

    #[must_use]
    pub fn with_candle(mut self, data: CandleChartData) -> Self {
        self.candle = Some(data);
        self
    }

    #[must_use]
    pub fn with_bubble(mut self, data: BubbleChartData) -> Self {
        self.bubble = Some(data);
        self
    }

    #[must_use]
    pub fn data_for(&self, kind: ChartKind) -> Option<ChartDataRef<'_>> {
        match kind {
            ChartKind::Bar => self.bar.as_ref().map(ChartDataRef::Bar),
            ChartKind::Line => self.line.as_ref().map(ChartDataRef::Line),
            ChartKind::Scatter => self.scatter.as_ref().map(ChartDataRef::Scatter),
            ChartKind::Candle => self.candle.as_ref().map(ChartDataRef::Candle),
            ChartKind::Bubble => self.bubble.as_ref().map(ChartDataRef::Bubble),
        }
    }

    #[must_use]
    pub fn has_kind(&self, kind: ChartKind) -> bool {
        self.data_for(kind).is_some()
    }

    /// Present data objects in container order (line, bar, scatter, candle, bubble).
    #[must_use]
    pub fn all_data(&self) -> SmallVec<[ChartDataRef<'_>; 5]> {
        ChartKind::CONTAINER_ORDER
            .iter()
            .filter_map(|kind| self.data_for(*kind))
            .collect()
    }

    /// Position of `kind` inside [`Self::all_data`], `None` when absent.
    #[must_use]
    pub fn data_index_of(&self, kind: ChartKind) -> Option<usize> {
        self.all_data().iter().position(|data| data.kind() == kind)
    }

    #[must_use]
    pub fn data_by_index(&self, index: usize) -> Option<ChartDataRef<'_>> {
        self.all_data().get(index).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_data().is_empty()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.all_data().iter().map(|data| data.entry_count()).sum()
    }

    /// Aggregate x bounds of all present kinds; `None` when nothing has entries.
    #[must_use]
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        fold_bounds(self.all_data().iter().map(|data| data.x_bounds()))
    }

    #[must_use]
    pub fn y_bounds(&self, axis: AxisDependency) -> Option<(f64, f64)> {
        fold_bounds(self.all_data().iter().map(|data| data.y_bounds(axis)))
    }

    /// Data object a scoped highlight refers to.
    #[must_use]
    pub fn data_for_highlight(&self, highlight: &Highlight) -> Option<ChartDataRef<'_>> {
        self.data_by_index(highlight.data_index?)
    }

    /// Data object and data set index of a scoped highlight, `None` when
    /// either index is out of range.
    #[must_use]
    pub fn data_set_by_highlight(
        &self,
        highlight: &Highlight,
    ) -> Option<(ChartDataRef<'_>, usize)> {
        let data = self.data_for_highlight(highlight)?;
        let index = highlight.data_set_index;
        (index < data.data_set_count()).then_some((data, index))
    }

    /// `(x, y)` of the entry a scoped highlight points at.
    #[must_use]
    pub fn entry_for_highlight(&self, highlight: &Highlight) -> Option<(f64, f64)> {
        self.data_for_highlight(highlight)?
            .entry_xy_for_highlight(highlight)
    }
}

fn fold_bounds(bounds: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64)> {
    let (min, max) = bounds
        .filter(|(min, max)| min <= max)
        .fold((f64::MAX, -f64::MAX), |acc, (min, max)| {
            (acc.0.min(min), acc.1.max(max))
        });
    (min <= max).then_some((min, max))
}

#[cfg(test)]
mod tests {
    use super::{ChartKind, CombinedChartData};
    use crate::core::{BarChartData, BarDataSet, BarEntry, Entry, LineChartData, LineDataSet};
    use crate::interaction::Highlight;

    #[test]
    fn all_data_uses_container_order() {
        let data = CombinedChartData::new()
            .with_bar(BarChartData::new(vec![BarDataSet::new(
                "bars",
                vec![BarEntry::new(1.0, 2.0)],
            )]))
            .with_line(LineChartData::new(vec![LineDataSet::new(
                "line",
                vec![Entry::new(0.0, 10.0)],
            )]));

        let kinds: Vec<ChartKind> = data.all_data().iter().map(|d| d.kind()).collect();
        assert_eq!(kinds, vec![ChartKind::Line, ChartKind::Bar]);
        assert_eq!(data.data_index_of(ChartKind::Bar), Some(1));
        assert_eq!(data.data_index_of(ChartKind::Candle), None);
        assert_eq!(data.x_bounds(), Some((0.0, 1.0)));
    }

    #[test]
    fn data_set_lookup_by_highlight_checks_both_indices() {
        let data = CombinedChartData::new().with_line(LineChartData::new(vec![LineDataSet::new(
            "line",
            vec![Entry::new(0.0, 10.0)],
        )]));

        let scoped = Highlight::new(0.0, 10.0, 0).with_data_index(Some(0));
        let (found, set_index) = data.data_set_by_highlight(&scoped).expect("line set");
        assert_eq!(found.kind(), ChartKind::Line);
        assert_eq!(found.data_set_label(set_index), Some("line"));

        assert!(data.data_set_by_highlight(&scoped.with_data_index(Some(1))).is_none());
        let missing_set = Highlight::new(0.0, 10.0, 3).with_data_index(Some(0));
        assert!(data.data_set_by_highlight(&missing_set).is_none());
        assert!(data.data_set_by_highlight(&Highlight::new(0.0, 10.0, 0)).is_none());
    }

    #[test]
    fn raw_tags_round_trip() {
        for kind in ChartKind::DEFAULT_DRAW_ORDER {
            assert_eq!(ChartKind::try_from(kind.raw_value()).expect("tag"), kind);
        }
        assert!(ChartKind::try_from(9).is_err());
    }
}
