use combined_chart::api::{CombinedChart, CombinedChartConfig};
use combined_chart::core::{
    AxisDependency, BarChartData, BarDataSet, BarEntry, CombinedChartData, Entry, LineChartData,
    LineDataSet, Viewport,
};
use combined_chart::render::{DrawCommand, Easing, NullRenderer};

fn line_chart(config: CombinedChartConfig) -> CombinedChart<NullRenderer> {
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(CombinedChartData::new().with_line(LineChartData::new(vec![LineDataSet::new(
        "line",
        vec![Entry::new(1.0, 10.0), Entry::new(2.0, 20.0), Entry::new(3.0, 15.0)],
    )])));
    chart
}

fn position(commands: &[DrawCommand], matches: impl Fn(&DrawCommand) -> bool) -> Option<usize> {
    commands.iter().position(matches)
}

fn last_position(commands: &[DrawCommand], matches: impl Fn(&DrawCommand) -> bool) -> Option<usize> {
    commands.iter().rposition(matches)
}

#[test]
fn values_are_drawn_after_data_extras_and_highlights() {
    let mut chart = line_chart(CombinedChartConfig::new(Viewport::new(800, 600)));
    let px = chart.pixel_for_values(2.0, 20.0, AxisDependency::Left);
    let highlight = chart.highlight_by_touch_point(px.x, px.y);
    chart.highlight_value(highlight);

    let frame = chart.build_render_frame();
    let commands = frame.commands.as_slice();
    assert_eq!(frame.texts().count(), 3);
    assert_eq!(frame.circles().count(), 3);

    let first_text = position(commands, |c| matches!(c, DrawCommand::Text(_))).expect("text");
    let last_circle =
        last_position(commands, |c| matches!(c, DrawCommand::Circle(_))).expect("circle");
    let first_circle =
        position(commands, |c| matches!(c, DrawCommand::Circle(_))).expect("circle");
    let first_line = position(commands, |c| matches!(c, DrawCommand::Line(_))).expect("line");
    assert!(first_line < first_circle);
    assert!(last_circle < first_text);
    assert!(matches!(commands.last(), Some(DrawCommand::Text(_))));
}

#[test]
fn values_are_hidden_above_max_visible_count() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600)).with_max_visible_count(2);
    let chart = line_chart(config);
    let frame = chart.build_render_frame();
    assert_eq!(frame.texts().count(), 0);
    assert!(frame.lines().count() > 0);
}

#[test]
fn render_hands_frame_to_backend() {
    let mut chart = line_chart(CombinedChartConfig::new(Viewport::new(800, 600)));
    assert!(chart.needs_redraw());
    chart.render().expect("render");
    assert!(!chart.needs_redraw());

    let expected = chart.build_render_frame();
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_command_count, expected.len());
    assert_eq!(renderer.last_text_count, 3);
    assert_eq!(renderer.last_circle_count, 3);
}

#[test]
fn render_without_dimensions_fails() {
    let config = CombinedChartConfig::new(Viewport::new(0, 0));
    let mut chart = CombinedChart::new_deferred(NullRenderer::default(), config).expect("init");
    assert!(chart.render().is_err());

    chart.set_viewport(Viewport::new(320, 240)).expect("valid viewport");
    chart.render().expect("render after sizing");
}

#[test]
fn x_animation_reveals_entries_progressively() {
    let mut chart = line_chart(CombinedChartConfig::new(Viewport::new(800, 600)));
    let full = chart.build_render_frame().len();

    chart.animate_x(1.0, Easing::Linear);
    assert_eq!(chart.animator().phase_x(), 0.0);
    assert!(chart.build_render_frame().len() < full);

    assert!(chart.step_animation(0.5));
    assert!((chart.animator().phase_x() - 0.5).abs() <= 1e-12);
    assert!(chart.step_animation(0.6));
    assert_eq!(chart.animator().phase_x(), 1.0);
    assert!(!chart.animator().is_running());
    assert!(!chart.step_animation(0.1));
    assert_eq!(chart.build_render_frame().len(), full);
}

#[test]
fn y_animation_scales_bar_heights() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(CombinedChartData::new().with_bar(BarChartData::new(vec![BarDataSet::new(
        "bars",
        vec![BarEntry::new(1.0, 10.0), BarEntry::new(2.0, 20.0)],
    )])));
    let full_height: f64 = chart.build_render_frame().rects().map(|r| r.height).sum();

    chart.animate_y(2.0, Easing::Linear);
    chart.step_animation(1.0);
    let half_height: f64 = chart.build_render_frame().rects().map(|r| r.height).sum();
    assert!((half_height - full_height / 2.0).abs() <= 1e-6);

    chart.stop_animation();
    assert_eq!(chart.animator().phase_y(), 1.0);
}
