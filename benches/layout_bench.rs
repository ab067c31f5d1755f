use category_chart::api::{BarChart, CandlestickChart, ChartOptions};
use category_chart::core::{
    BarSeries, CandlestickChartData, CategoryLabels, CategorySeriesData, OhlcValue, Viewport,
};
use category_chart::render::Color;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn monthly_bar_data(categories: usize, series_count: usize) -> CategorySeriesData {
    let labels = CategoryLabels::new((0..categories).map(|i| format!("M{i}")));
    (0..series_count).fold(CategorySeriesData::new(labels), |data, s| {
        let values = (0..categories)
            .map(|i| ((i * 37 + s * 11) % 200) as f64 - 50.0)
            .collect();
        let series = BarSeries::new(Color::rgb(0.2, 0.4, 0.8), Color::rgb(0.1, 0.2, 0.4), values)
            .expect("valid generated series");
        data.with_series(series).expect("matching series length")
    })
}

fn daily_candles(count: usize) -> CandlestickChartData {
    let labels = CategoryLabels::new((0..count).map(|i| format!("D{i}")));
    let values = (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.05;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            OhlcValue::new(open, open.max(close) + 0.75, open.min(close) - 0.75, close)
                .expect("valid generated candle")
        })
        .collect();
    CandlestickChartData::new(labels, values).expect("matching candle count")
}

fn bench_bar_rebuild_on_resize(c: &mut Criterion) {
    let mut chart = BarChart::new(
        monthly_bar_data(120, 4),
        ChartOptions::default(),
        Viewport::new(1920, 1080),
    )
    .expect("chart");
    let mut wide = false;

    c.bench_function("bar_rebuild_120x4", |b| {
        b.iter(|| {
            wide = !wide;
            let width = if wide { 1920 } else { 1280 };
            chart.resize(black_box(Viewport::new(width, 1080)));
        })
    });
}

fn bench_candle_hit_test(c: &mut Criterion) {
    let chart = CandlestickChart::new(
        daily_candles(500),
        ChartOptions::default(),
        Viewport::new(1920, 1080),
    )
    .expect("chart");

    c.bench_function("candle_hit_test_500", |b| {
        b.iter(|| {
            let _ = chart.active_elements_at(black_box(960.0), black_box(540.0));
        })
    });
}

fn bench_build_frame(c: &mut Criterion) {
    let chart = BarChart::new(
        monthly_bar_data(120, 4),
        ChartOptions::default(),
        Viewport::new(1920, 1080),
    )
    .expect("chart");

    c.bench_function("bar_build_frame_120x4", |b| {
        b.iter(|| {
            let _ = black_box(chart.build_frame());
        })
    });
}

criterion_group!(
    benches,
    bench_bar_rebuild_on_resize,
    bench_candle_hit_test,
    bench_build_frame
);
criterion_main!(benches);
