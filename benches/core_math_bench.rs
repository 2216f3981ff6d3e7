use combined_chart::api::{CombinedChart, CombinedChartConfig};
use combined_chart::core::{
    BarChartData, BarDataSet, BarEntry, CandleChartData, CandleDataSet, CandleEntry,
    CombinedChartData, Entry, LineChartData, LineDataSet, Transformer, Viewport, ViewportHandler,
};
use combined_chart::render::{NullRenderer, project_candles};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_candles(count: usize, base: f64, slope: f64) -> Vec<CandleEntry> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            let open = base + x * slope;
            let close = if i % 2 == 0 { open + 1.0 } else { open - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            CandleEntry::new(x, open, high, low, close).expect("valid generated candle")
        })
        .collect()
}

fn bench_transformer_round_trip(c: &mut Criterion) {
    let handler = ViewportHandler::new(Viewport::new(1920, 1080));
    let mut transformer = Transformer::new();
    transformer.prepare_matrix_offset(false, &handler);
    transformer.prepare_matrix_value_px(0.0, 10_000.0, 2_500.0, 0.0, &handler);

    c.bench_function("transformer_round_trip", |b| {
        b.iter(|| {
            let px = transformer.pixel_for_values(black_box(4_321.123), black_box(1_234.5), &handler);
            let _ = transformer
                .value_for_touch_point(px.x, px.y, &handler)
                .expect("invertible matrix");
        })
    });
}

fn bench_candle_projection_10k(c: &mut Criterion) {
    let handler = ViewportHandler::new(Viewport::new(1920, 1080));
    let mut transformer = Transformer::new();
    transformer.prepare_matrix_offset(false, &handler);
    transformer.prepare_matrix_value_px(-0.5, 10_000.0, 2_500.0, 0.0, &handler);
    let matrix = transformer.value_to_pixel_matrix(&handler);
    let candles = generated_candles(10_000, 100.0, 0.05);

    c.bench_function("candle_projection_10k", |b| {
        b.iter(|| {
            let _ = project_candles(black_box(&candles), black_box(matrix), 1.0, 0.1);
        })
    });
}

fn combined_chart_2k() -> CombinedChart<NullRenderer> {
    let config = CombinedChartConfig::new(Viewport::new(1600, 900)).with_max_visible_count(50);
    let mut chart = CombinedChart::new(NullRenderer::default(), config).expect("chart init");

    let line: Vec<Entry> = (0..2_000)
        .map(|i| Entry::new(i as f64, 400.0 + (i as f64 * 0.01).sin() * 20.0))
        .collect();
    let bars: Vec<BarEntry> = (0..2_000)
        .map(|i| BarEntry::new(i as f64, 50.0 + (i % 17) as f64))
        .collect();

    chart.set_series_metadata("series-id", "combined-main");
    chart.set_data(
        CombinedChartData::new()
            .with_line(LineChartData::new(vec![LineDataSet::new("trend", line)]))
            .with_bar(BarChartData::new(vec![BarDataSet::new("volume", bars)]))
            .with_candle(CandleChartData::new(vec![CandleDataSet::new(
                "price",
                generated_candles(2_000, 400.0, 0.03),
            )])),
    );
    chart
}

fn bench_render_frame_2k(c: &mut Criterion) {
    let chart = combined_chart_2k();

    c.bench_function("combined_render_frame_2k", |b| {
        b.iter(|| {
            let frame = chart.build_render_frame();
            black_box(frame.len());
        })
    });
}

fn bench_snapshot_json_2k(c: &mut Criterion) {
    let chart = combined_chart_2k();

    c.bench_function("combined_snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = chart
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_transformer_round_trip,
    bench_candle_projection_10k,
    bench_render_frame_2k,
    bench_snapshot_json_2k
);
criterion_main!(benches);
