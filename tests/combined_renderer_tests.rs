use combined_chart::api::{CombinedChart, CombinedChartConfig};
use combined_chart::core::{
    BarChartData, BarDataSet, BarEntry, BubbleChartData, BubbleDataSet, BubbleEntry,
    CandleChartData, CandleDataSet, CandleEntry, ChartKind, CombinedChartData, Entry,
    LineChartData, LineDataSet, ScatterChartData, ScatterDataSet, ScatterShape, ScatterStyle,
    Viewport,
};
use combined_chart::interaction::Highlight;
use combined_chart::render::{CombinedChartRenderer, DrawCommand, NullRenderer, RenderFrame};
use proptest::prelude::*;

fn data_with_kinds(kinds: &[ChartKind]) -> CombinedChartData {
    let mut data = CombinedChartData::new();
    for kind in kinds {
        match kind {
            ChartKind::Bar => {
                data.bar = Some(BarChartData::new(vec![BarDataSet::new(
                    "bars",
                    vec![BarEntry::new(1.0, 10.0), BarEntry::new(2.0, 20.0)],
                )]));
            }
            ChartKind::Bubble => {
                data.bubble = Some(BubbleChartData::new(vec![BubbleDataSet::new(
                    "bubbles",
                    vec![BubbleEntry::new(1.0, 12.0, 3.0), BubbleEntry::new(2.0, 14.0, 5.0)],
                )]));
            }
            ChartKind::Line => {
                data.line = Some(LineChartData::new(vec![LineDataSet::new(
                    "line",
                    vec![Entry::new(1.0, 11.0), Entry::new(2.0, 19.0)],
                )]));
            }
            ChartKind::Candle => {
                data.candle = Some(CandleChartData::new(vec![CandleDataSet::new(
                    "candles",
                    vec![
                        CandleEntry::new(1.0, 10.0, 13.0, 9.0, 12.0).expect("valid candle"),
                        CandleEntry::new(2.0, 12.0, 14.0, 10.0, 11.0).expect("valid candle"),
                    ],
                )]));
            }
            ChartKind::Scatter => {
                let style = ScatterStyle {
                    shape: ScatterShape::Circle,
                    ..ScatterStyle::default()
                };
                data.scatter = Some(ScatterChartData::new(vec![
                    ScatterDataSet::new("scatter", vec![Entry::new(1.0, 15.0), Entry::new(2.0, 16.0)])
                        .with_style(style),
                ]));
            }
        }
    }
    data
}

fn chart_with(kinds: &[ChartKind]) -> CombinedChart<NullRenderer> {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(data_with_kinds(kinds));
    chart
}

fn rendered_kinds(renderer: &CombinedChartRenderer) -> Vec<ChartKind> {
    renderer
        .sub_renderers()
        .iter()
        .map(|renderer| renderer.kind())
        .collect()
}

proptest! {
    #[test]
    fn sub_renderers_follow_draw_order_and_skip_absent_kinds(
        order in Just(ChartKind::DEFAULT_DRAW_ORDER.to_vec()).prop_shuffle(),
        present in proptest::collection::vec(any::<bool>(), 5)
    ) {
        let kinds: Vec<ChartKind> = ChartKind::DEFAULT_DRAW_ORDER
            .iter()
            .zip(&present)
            .filter(|(_, present)| **present)
            .map(|(kind, _)| *kind)
            .collect();
        let data = data_with_kinds(&kinds);

        let mut renderer = CombinedChartRenderer::new();
        prop_assert!(renderer.set_draw_order(order.clone(), &data));

        let expected: Vec<ChartKind> = order
            .iter()
            .copied()
            .filter(|kind| kinds.contains(kind))
            .collect();
        let actual = rendered_kinds(&renderer);
        prop_assert_eq!(actual.len(), kinds.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn create_renderers_is_idempotent(
        order in Just(ChartKind::DEFAULT_DRAW_ORDER.to_vec()).prop_shuffle()
    ) {
        let data = data_with_kinds(&[ChartKind::Bar, ChartKind::Line, ChartKind::Bubble]);
        let mut renderer = CombinedChartRenderer::new();
        renderer.set_draw_order(order, &data);
        let first = renderer.sub_renderers().to_vec();
        renderer.create_renderers(&data);
        prop_assert_eq!(renderer.sub_renderers(), first.as_slice());
    }
}

#[test]
fn empty_draw_order_keeps_previous_order() {
    let data = data_with_kinds(&[ChartKind::Bar, ChartKind::Line]);
    let mut renderer = CombinedChartRenderer::new();
    assert!(renderer.set_draw_order(vec![ChartKind::Line, ChartKind::Bar], &data));

    assert!(!renderer.set_draw_order(Vec::new(), &data));
    assert_eq!(renderer.draw_order(), &[ChartKind::Line, ChartKind::Bar]);
    assert_eq!(rendered_kinds(&renderer), vec![ChartKind::Line, ChartKind::Bar]);
}

#[test]
fn replaced_sub_renderers_are_used_as_given() {
    let data = data_with_kinds(&[ChartKind::Bar, ChartKind::Line]);
    let mut renderer = CombinedChartRenderer::new();
    renderer.create_renderers(&data);
    let line_only: Vec<_> = renderer
        .sub_renderers()
        .iter()
        .filter(|renderer| renderer.kind() == ChartKind::Line)
        .copied()
        .collect();
    renderer.set_sub_renderers(line_only);
    assert_eq!(rendered_kinds(&renderer), vec![ChartKind::Line]);
    assert_eq!(
        renderer.sub_renderer(0).map(|renderer| renderer.kind()),
        Some(ChartKind::Line)
    );
}

#[test]
fn highlights_reach_only_their_kind() {
    // Container order lists line before bar: line is data index 0, bar 1.
    let chart = chart_with(&[ChartKind::Bar, ChartKind::Line]);
    let data = chart.data();
    let line_index = data.data_index_of(ChartKind::Line).expect("line present");
    let bar_index = data.data_index_of(ChartKind::Bar).expect("bar present");
    assert_eq!((line_index, bar_index), (0, 1));

    let renderer = chart.combined_renderer();
    let mut frame = RenderFrame::new(chart.viewport());
    let line_highlight = Highlight::new(2.0, 19.0, 0).with_data_index(Some(line_index));
    renderer.draw_highlighted(&mut frame, chart.model(), &[line_highlight]);
    assert_eq!(frame.rects().count(), 0);
    assert_eq!(frame.lines().count(), 2);

    let mut frame = RenderFrame::new(chart.viewport());
    let bar_highlight = Highlight::new(2.0, 20.0, 0).with_data_index(Some(bar_index));
    renderer.draw_highlighted(&mut frame, chart.model(), &[bar_highlight]);
    assert_eq!(frame.rects().count(), 1);
    assert_eq!(frame.lines().count(), 0);
}

#[test]
fn unscoped_highlight_reaches_every_kind() {
    let chart = chart_with(&[ChartKind::Bar, ChartKind::Line]);
    let mut frame = RenderFrame::new(chart.viewport());
    let unscoped = Highlight::new(2.0, 20.0, 0);
    chart
        .combined_renderer()
        .draw_highlighted(&mut frame, chart.model(), &[unscoped]);
    assert_eq!(frame.rects().count(), 1);
    assert_eq!(frame.lines().count(), 2);
}

#[test]
fn draw_order_sets_z_order_of_commands() {
    let mut chart = chart_with(&[ChartKind::Bar, ChartKind::Scatter]);
    let frame = chart.build_render_frame();
    assert!(matches!(frame.commands.first(), Some(DrawCommand::Rect(_))));

    chart.set_draw_order(vec![ChartKind::Scatter, ChartKind::Bar]);
    let frame = chart.build_render_frame();
    assert!(matches!(frame.commands.first(), Some(DrawCommand::Circle(_))));
}
