use combined_chart::api::{CombinedChart, CombinedChartConfig};
use combined_chart::core::{
    AxisDependency, BarChartData, BarDataSet, BarEntry, ChartKind, CombinedChartData, Entry,
    LineChartData, LineDataSet, ScatterChartData, ScatterDataSet, Viewport,
};
use combined_chart::interaction::{BarHighlighter, ChartHighlighter, Highlight, Highlighter};
use combined_chart::render::NullRenderer;

fn chart(data: CombinedChartData) -> CombinedChart<NullRenderer> {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(data);
    chart
}

fn bar_data() -> BarChartData {
    BarChartData::new(vec![BarDataSet::new(
        "bars",
        vec![BarEntry::new(1.0, 10.0), BarEntry::new(2.0, 20.0), BarEntry::new(3.0, 30.0)],
    )])
}

#[test]
fn bar_only_chart_returns_bar_highlighter_result_tagged_zero() {
    let chart = chart(CombinedChartData::new().with_bar(bar_data()));
    let highlighter = chart.highlighter();
    assert!(highlighter.bar_highlighter().is_some());

    let px = chart.pixel_for_values(2.0, 20.0, AxisDependency::Left);
    let expected = BarHighlighter::new(chart.max_highlight_distance())
        .highlight(px.x, px.y, chart.model())
        .expect("bar under touch");

    let highlights = highlighter.highlights(2.0, px.x, px.y, chart.model());
    assert_eq!(highlights, vec![expected.with_data_index(Some(0))]);
    assert_eq!(highlights[0].x, 2.0);
    assert_eq!(highlights[0].data_set_index, 0);
}

#[test]
fn highlight_disabled_sets_are_skipped() {
    let enabled = LineDataSet::new("enabled", vec![Entry::new(1.0, 5.0), Entry::new(2.0, 6.0)]);
    let mut disabled =
        LineDataSet::new("disabled", vec![Entry::new(1.0, 7.0), Entry::new(2.0, 8.0)]);
    disabled.highlight_enabled = false;
    let chart = chart(
        CombinedChartData::new().with_line(LineChartData::new(vec![enabled, disabled])),
    );

    let px = chart.pixel_for_values(2.0, 6.0, AxisDependency::Left);
    let highlights = chart.highlighter().highlights(2.0, px.x, px.y, chart.model());
    assert_eq!(highlights.len(), 1);
    assert_eq!(highlights[0].data_set_index, 0);
    assert_eq!(highlights[0].data_index, Some(0));
    assert_eq!((highlights[0].x, highlights[0].y), (2.0, 6.0));
}

#[test]
fn kind_with_only_disabled_sets_yields_nothing() {
    let mut disabled = ScatterDataSet::new("scatter", vec![Entry::new(2.0, 4.0)]);
    disabled.highlight_enabled = false;
    let line = LineDataSet::new("line", vec![Entry::new(2.0, 3.0)]);
    let chart = chart(
        CombinedChartData::new()
            .with_line(LineChartData::new(vec![line]))
            .with_scatter(ScatterChartData::new(vec![disabled])),
    );

    let scatter_index = chart
        .data()
        .data_index_of(ChartKind::Scatter)
        .expect("scatter present");
    let highlights = chart.highlighter().highlights(2.0, 0.0, 0.0, chart.model());
    assert_eq!(highlights.len(), 1);
    assert!(highlights.iter().all(|h| h.data_index != Some(scatter_index)));
}

#[test]
fn highlights_follow_kind_then_data_set_order() {
    let line = LineDataSet::new("line", vec![Entry::new(2.0, 12.0)]);
    let scatter_a = ScatterDataSet::new("a", vec![Entry::new(2.0, 14.0)]);
    let scatter_b = ScatterDataSet::new("b", vec![Entry::new(2.0, 16.0)]);
    let chart = chart(
        CombinedChartData::new()
            .with_bar(bar_data())
            .with_line(LineChartData::new(vec![line]))
            .with_scatter(ScatterChartData::new(vec![scatter_a, scatter_b])),
    );

    let px = chart.pixel_for_values(2.0, 20.0, AxisDependency::Left);
    let highlights = chart.highlighter().highlights(2.0, px.x, px.y, chart.model());
    let tags: Vec<(Option<usize>, usize)> = highlights
        .iter()
        .map(|h| (h.data_index, h.data_set_index))
        .collect();
    assert_eq!(tags, vec![(Some(0), 0), (Some(1), 0), (Some(2), 0), (Some(2), 1)]);
}

#[test]
fn touch_picks_nearest_entry_within_distance() {
    let line = LineDataSet::new(
        "line",
        vec![Entry::new(1.0, 10.0), Entry::new(2.0, 20.0), Entry::new(3.0, 15.0)],
    );
    let chart = chart(CombinedChartData::new().with_line(LineChartData::new(vec![line])));

    let px = chart.pixel_for_values(2.9, 15.0, AxisDependency::Left);
    let highlight = chart
        .highlight_by_touch_point(px.x, px.y)
        .expect("entry near touch");
    assert_eq!((highlight.x, highlight.y), (3.0, 15.0));

    let single = ChartHighlighter::new(ChartKind::Line);
    let direct = single.highlight(px.x, px.y, chart.model()).expect("line entry");
    assert_eq!((direct.x, direct.y), (3.0, 15.0));
    assert_eq!(direct.data_index, None);
}

#[test]
fn touch_beyond_max_distance_selects_nothing() {
    let line = LineDataSet::new("line", vec![Entry::new(1.0, 10.0), Entry::new(2.0, 20.0)]);
    let config = CombinedChartConfig::new(Viewport::new(800, 600)).with_max_highlight_distance(5.0);
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(CombinedChartData::new().with_line(LineChartData::new(vec![line])));

    let px = chart.pixel_for_values(2.0, 20.0, AxisDependency::Left);
    assert!(chart.highlight_by_touch_point(px.x, px.y + 40.0).is_none());
    assert!(chart.highlight_by_touch_point(px.x, px.y + 1.0).is_some());
}

#[test]
fn full_bar_mode_strips_stack_index() {
    let stacked = BarDataSet::new("stacked", vec![BarEntry::stacked(2.0, &[5.0, 10.0])]);
    let mut chart = chart(CombinedChartData::new().with_bar(BarChartData::new(vec![stacked])));
    let px = chart.pixel_for_values(2.0, 12.0, AxisDependency::Left);

    assert!(chart.highlight_full_bar());
    let whole = chart.highlight_by_touch_point(px.x, px.y).expect("bar hit");
    assert_eq!(whole.stack_index, None);
    assert_eq!(whole.data_index, Some(0));

    chart.set_highlight_full_bar(false);
    let segment = chart.highlight_by_touch_point(px.x, px.y).expect("bar hit");
    assert_eq!(segment.stack_index, Some(1));
    assert_eq!(segment.data_index, Some(0));
}

#[test]
fn empty_chart_cannot_select_by_touch() {
    let chart = chart(CombinedChartData::new());
    assert!(chart.highlight_by_touch_point(400.0, 300.0).is_none());
}

#[test]
fn tap_toggles_selection() {
    let line = LineDataSet::new("line", vec![Entry::new(1.0, 10.0), Entry::new(2.0, 20.0)]);
    let mut chart = chart(CombinedChartData::new().with_line(LineChartData::new(vec![line])));
    let px = chart.pixel_for_values(2.0, 20.0, AxisDependency::Left);

    let selected = chart.tap(px.x, px.y).expect("selected on first tap");
    assert_eq!(chart.highlighted(), &[selected]);

    assert!(chart.tap(px.x, px.y).is_none());
    assert!(chart.highlighted().is_empty());

    chart.set_highlight_per_tap_enabled(false);
    assert!(chart.tap(px.x, px.y).is_none());
}

#[test]
fn highlight_value_rejects_unknown_targets() {
    let line = LineDataSet::new("line", vec![Entry::new(1.0, 10.0), Entry::new(2.0, 20.0)]);
    let mut chart = chart(CombinedChartData::new().with_line(LineChartData::new(vec![line])));

    chart.highlight_value(Some(Highlight::new(2.0, 20.0, 0).with_data_index(Some(0))));
    assert_eq!(chart.highlighted().len(), 1);
    assert!(chart.values_to_highlight());

    chart.highlight_value(Some(Highlight::new(2.0, 20.0, 4).with_data_index(Some(0))));
    assert!(chart.highlighted().is_empty());

    chart.highlight_value(Some(Highlight::new(2.0, 20.0, 0).with_data_index(Some(3))));
    assert!(chart.highlighted().is_empty());

    chart.highlight_value(Some(Highlight::new(1.0, 10.0, 0)));
    assert_eq!(chart.highlighted().len(), 1);

    chart.highlight_value(Some(Highlight::new(999.0, -5.0, 0).with_data_index(Some(0))));
    assert!(chart.highlighted().is_empty());

    chart.highlight_value(Some(Highlight::new(2.0, 21.0, 0).with_data_index(Some(0))));
    assert!(chart.highlighted().is_empty());

    chart.highlight_value(Some(Highlight::new(1.4, f64::NAN, 0)));
    assert!(chart.highlighted().is_empty());

    chart.highlight_value(Some(Highlight::new(1.0, f64::NAN, 0).with_data_index(Some(0))));
    assert_eq!(chart.highlighted().len(), 1);

    chart.clear_highlights();
    assert!(!chart.values_to_highlight());
}
