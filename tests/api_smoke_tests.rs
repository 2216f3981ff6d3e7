use combined_chart::api::{CombinedChart, CombinedChartConfig};
use combined_chart::core::{
    BarChartData, BarDataSet, BarEntry, BubbleChartData, BubbleDataSet, BubbleEntry,
    CandleChartData, CandleDataSet, CandleEntry, ChartKind, CombinedChartData, Entry,
    LineChartData, LineDataSet, ScatterChartData, ScatterDataSet, Viewport,
};
use combined_chart::render::NullRenderer;

fn full_data() -> CombinedChartData {
    let bars = BarDataSet::new(
        "bars",
        vec![BarEntry::new(1.0, 10.0), BarEntry::new(2.0, 20.0), BarEntry::new(3.0, 15.0)],
    );
    let line = LineDataSet::new(
        "line",
        vec![Entry::new(1.0, 12.0), Entry::new(2.0, 18.0), Entry::new(3.0, 22.0)],
    );
    let scatter = ScatterDataSet::new("scatter", vec![Entry::new(1.5, 8.0), Entry::new(2.5, 9.0)]);
    let candles = CandleDataSet::new(
        "candles",
        vec![
            CandleEntry::new(1.0, 10.0, 14.0, 9.0, 13.0).expect("valid candle"),
            CandleEntry::new(2.0, 13.0, 15.0, 11.0, 12.0).expect("valid candle"),
        ],
    );
    let bubbles = BubbleDataSet::new("bubbles", vec![BubbleEntry::new(2.0, 16.0, 4.0)]);

    CombinedChartData::new()
        .with_bar(BarChartData::new(vec![bars]))
        .with_line(LineChartData::new(vec![line]))
        .with_scatter(ScatterChartData::new(vec![scatter]))
        .with_candle(CandleChartData::new(vec![candles]))
        .with_bubble(BubbleChartData::new(vec![bubbles]))
}

#[test]
fn chart_smoke_flow() {
    let renderer = NullRenderer::default();
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(renderer, config).expect("chart init");

    chart.set_data(full_data());
    assert_eq!(chart.combined_renderer().sub_renderers().len(), 5);
    assert_eq!(chart.data().entry_count(), 11);

    chart.render().expect("render should succeed");
    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_rect_count > 0);
    assert!(renderer.last_command_count > renderer.last_rect_count);

    let px = chart.pixel_for_values(2.0, 20.0, combined_chart::core::AxisDependency::Left);
    let back = chart
        .value_for_touch_point(px.x, px.y, combined_chart::core::AxisDependency::Left)
        .expect("invertible transform");
    assert!((back.x - 2.0).abs() <= 1e-9);
    assert!((back.y - 20.0).abs() <= 1e-9);
}

#[test]
fn new_rejects_zero_viewport() {
    let config = CombinedChartConfig::new(Viewport::new(0, 600));
    assert!(CombinedChart::new(NullRenderer::default(), config).is_err());
}

#[test]
fn clear_drops_renderers_and_highlights() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(full_data());

    let px = chart.pixel_for_values(2.0, 18.0, combined_chart::core::AxisDependency::Left);
    let highlight = chart.highlight_by_touch_point(px.x, px.y);
    assert!(highlight.is_some());
    chart.highlight_value(highlight);
    assert_eq!(chart.highlighted().len(), 1);

    chart.clear();
    assert!(chart.data().is_empty());
    assert!(chart.highlighted().is_empty());
    assert!(chart.combined_renderer().sub_renderers().is_empty());
    assert!(chart.highlight_by_touch_point(px.x, px.y).is_none());
}

#[test]
fn x_axis_is_padded_for_bar_kinds() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");

    let line_only = CombinedChartData::new().with_line(LineChartData::new(vec![LineDataSet::new(
        "line",
        vec![Entry::new(1.0, 1.0), Entry::new(5.0, 2.0)],
    )]));
    chart.set_data(line_only);
    let bounds = chart.model().x_bounds();
    assert_eq!((bounds.min, bounds.max), (1.0, 5.0));

    chart.set_data(full_data());
    let bounds = chart.model().x_bounds();
    assert_eq!((bounds.min, bounds.max), (0.5, 3.5));
}

#[test]
fn draw_order_accessors_follow_contract() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(full_data());
    assert_eq!(chart.draw_order(), &ChartKind::DEFAULT_DRAW_ORDER);
    assert_eq!(chart.draw_order_raw(), vec![0, 1, 2, 3, 4]);

    assert!(chart.set_draw_order_raw(&[4, 2]).expect("known tags"));
    assert_eq!(chart.draw_order(), &[ChartKind::Scatter, ChartKind::Line]);
    let kinds: Vec<ChartKind> = chart
        .combined_renderer()
        .sub_renderers()
        .iter()
        .map(|renderer| renderer.kind())
        .collect();
    assert_eq!(kinds, vec![ChartKind::Scatter, ChartKind::Line]);

    assert!(chart.set_draw_order_raw(&[1, 9]).is_err());
    assert_eq!(chart.draw_order(), &[ChartKind::Scatter, ChartKind::Line]);

    assert!(!chart.set_draw_order(Vec::new()));
    assert_eq!(chart.draw_order(), &[ChartKind::Scatter, ChartKind::Line]);
}

#[test]
fn bar_toggles_reach_rebuilt_bar_renderers() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600)).with_draw_bar_shadow(true);
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(full_data());
    assert!(chart.draw_bar_shadow());
    assert!(chart.draw_value_above_bar());

    chart.set_draw_value_above_bar(false);
    chart.set_draw_order(vec![ChartKind::Line, ChartKind::Bar]);

    let bar = chart
        .combined_renderer()
        .sub_renderers()
        .iter()
        .find_map(|renderer| match renderer {
            combined_chart::render::SeriesRenderer::Bar(bar) => Some(*bar),
            _ => None,
        })
        .expect("bar sub-renderer");
    assert!(bar.draw_bar_shadow);
    assert!(!bar.draw_value_above_bar);
}

#[test]
fn in_place_kind_changes_rebuild_renderers_and_highlighter() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");

    chart.data_mut().line = Some(LineChartData::new(vec![LineDataSet::new(
        "line",
        vec![Entry::new(1.0, 1.0), Entry::new(2.0, 3.0)],
    )]));
    chart.notify_data_changed();

    let kinds: Vec<ChartKind> = chart
        .combined_renderer()
        .sub_renderers()
        .iter()
        .map(|renderer| renderer.kind())
        .collect();
    assert_eq!(kinds, vec![ChartKind::Line]);
    assert!(chart.build_render_frame().lines().count() > 0);
    assert!(chart.highlighter().bar_highlighter().is_none());

    chart.data_mut().bar = Some(BarChartData::new(vec![BarDataSet::new(
        "bars",
        vec![BarEntry::new(1.0, 2.0)],
    )]));
    chart.notify_data_changed();
    assert!(chart.highlighter().bar_highlighter().is_some());
    assert_eq!(chart.combined_renderer().sub_renderers().len(), 2);
    assert!(chart.build_render_frame().rects().count() > 0);

    chart.data_mut().line = None;
    chart.notify_data_changed();
    let kinds: Vec<ChartKind> = chart
        .combined_renderer()
        .sub_renderers()
        .iter()
        .map(|renderer| renderer.kind())
        .collect();
    assert_eq!(kinds, vec![ChartKind::Bar]);
}
