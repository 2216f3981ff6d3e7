use combined_chart::api::{ChartSnapshot, CombinedChart, CombinedChartConfig};
use combined_chart::core::{
    AxisDependency, BarChartData, BarDataSet, BarEntry, ChartKind, ChartOffsets, CombinedChartData,
    Entry, LineChartData, LineDataSet, Viewport, YAxisConfig,
};
use combined_chart::interaction::Highlight;
use combined_chart::jobs::{MoveViewJob, ViewPortJob};
use combined_chart::render::NullRenderer;

fn data() -> CombinedChartData {
    CombinedChartData::new()
        .with_bar(BarChartData::new(vec![BarDataSet::new(
            "bars",
            vec![BarEntry::new(1.0, 4.0), BarEntry::new(2.0, 8.0)],
        )]))
        .with_line(LineChartData::new(vec![
            LineDataSet::new("line", vec![Entry::new(1.0, 3.0), Entry::new(2.0, 5.0)])
                .with_axis_dependency(AxisDependency::Right),
        ]))
}

#[test]
fn combined_chart_config_json_roundtrip() {
    let config = CombinedChartConfig::new(Viewport::new(640, 480))
        .with_offsets(ChartOffsets::uniform(24.0))
        .with_draw_order(vec![ChartKind::Line, ChartKind::Bar])
        .with_draw_bar_shadow(true)
        .with_highlight_full_bar(false)
        .with_max_visible_count(12)
        .with_scale_limits_x(1.0, 6.0)
        .with_right_axis(YAxisConfig {
            inverted: true,
            fixed_min: Some(0.0),
            ..YAxisConfig::default()
        });

    let json = config.to_json_pretty().expect("serialize config");
    let parsed = CombinedChartConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn partial_config_json_uses_defaults() {
    let parsed = CombinedChartConfig::from_json_str(r#"{"viewport":{"width":300,"height":200}}"#)
        .expect("parse config");
    assert_eq!(parsed, CombinedChartConfig::new(Viewport::new(300, 200)));
    assert_eq!(parsed.draw_order, ChartKind::DEFAULT_DRAW_ORDER.to_vec());
    assert!(parsed.draw_value_above_bar);
    assert!(!parsed.draw_bar_shadow);
    assert_eq!(parsed.max_visible_count, 100);
    assert_eq!(parsed.max_highlight_distance, 500.0);
}

#[test]
fn malformed_config_json_is_rejected() {
    assert!(CombinedChartConfig::from_json_str("{\"offsets\":{}}").is_err());
}

#[test]
fn snapshot_preserves_metadata_order_and_state() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(data());
    chart.set_series_metadata("zeta", "last");
    chart.set_series_metadata("alpha", "first");
    chart.highlight_value(Some(Highlight::new(2.0, 8.0, 0).with_data_index(Some(1))));

    let snapshot = chart.snapshot();
    let keys: Vec<&str> = snapshot.series_metadata.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
    assert_eq!(snapshot.data_kinds, vec![ChartKind::Line, ChartKind::Bar]);
    assert_eq!(snapshot.rendered_kinds, vec![ChartKind::Bar, ChartKind::Line]);
    assert_eq!(snapshot.entry_count, 4);
    assert_eq!(snapshot.highlighted.len(), 1);
    assert_eq!((snapshot.x_bounds.min, snapshot.x_bounds.max), (0.5, 2.5));
    assert!(snapshot.right_bounds.max < snapshot.left_bounds.max);

    assert_eq!(chart.remove_series_metadata("zeta").as_deref(), Some("last"));
    assert_eq!(chart.series_metadata().len(), 1);
}

#[test]
fn snapshot_json_roundtrip() {
    let config = CombinedChartConfig::new(Viewport::new(0, 0));
    let mut chart = CombinedChart::new_deferred(NullRenderer::default(), config).expect("chart init");
    chart.set_data(data());
    chart.add_viewport_job(ViewPortJob::from(MoveViewJob::new(1.5, 0.0, AxisDependency::Left)));
    chart.set_series_metadata("source", "fixture");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.pending_jobs.len(), 1);

    let json = chart.snapshot_json_pretty().expect("serialize snapshot");
    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse bare snapshot");
    assert_same_snapshot(&parsed, &snapshot);

    let contract = chart
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(contract.contains("\"schema_version\": 1"));
    let parsed = ChartSnapshot::from_json_compat_str(&contract).expect("parse contract");
    assert_same_snapshot(&parsed, &snapshot);
}

fn assert_same_snapshot(parsed: &ChartSnapshot, expected: &ChartSnapshot) {
    assert_eq!(parsed.viewport, expected.viewport);
    assert_eq!(parsed.draw_order, expected.draw_order);
    assert_eq!(parsed.data_kinds, expected.data_kinds);
    assert_eq!(parsed.pending_jobs, expected.pending_jobs);
    assert_eq!(parsed.series_metadata, expected.series_metadata);
    assert!((parsed.left_bounds.min - expected.left_bounds.min).abs() <= 1e-9);
    assert!((parsed.left_bounds.max - expected.left_bounds.max).abs() <= 1e-9);
    assert!((parsed.right_bounds.max - expected.right_bounds.max).abs() <= 1e-9);
    assert!((parsed.scale_x - expected.scale_x).abs() <= 1e-9);
}

#[test]
fn snapshot_contract_rejects_unknown_schema() {
    let config = CombinedChartConfig::new(Viewport::new(800, 600));
    let chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");
    let contract = chart
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract")
        .replace("\"schema_version\": 1", "\"schema_version\": 7");
    assert!(ChartSnapshot::from_json_compat_str(&contract).is_err());
}

#[test]
fn unset_highlight_pixels_survive_json() {
    let highlight = Highlight::new(3.0, 4.0, 1).with_data_index(Some(0));
    let json = serde_json::to_string(&highlight).expect("serialize highlight");
    let parsed: Highlight = serde_json::from_str(&json).expect("parse highlight");
    assert!(parsed.x_px.is_nan());
    assert!(parsed.same_target(&highlight));
}
