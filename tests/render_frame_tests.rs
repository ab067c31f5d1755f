use category_chart::api::{BarChart, CandlestickChart, ChartOptions};
use category_chart::core::{
    BarSeries, CandlestickChartData, CategoryLabels, CategorySeriesData, OhlcValue, Viewport,
};
use category_chart::render::{Color, TextHAlign};

fn bar_chart(options: ChartOptions) -> BarChart {
    let data = CategorySeriesData::new(CategoryLabels::new(["Jan", "", "Mar"]))
        .with_series(
            BarSeries::new(
                Color::rgb(0.2, 0.4, 0.8),
                Color::rgb(0.1, 0.2, 0.4),
                vec![0.1, 0.25, 0.3],
            )
            .expect("series"),
        )
        .expect("data");
    BarChart::new(data, options, Viewport::new(480, 320)).expect("chart")
}

#[test]
fn grid_labels_use_step_precision_and_sit_left_of_plot() {
    let chart = bar_chart(ChartOptions::default());
    let frame = chart.build_frame();
    let plot = chart.plot_area();

    let grid_labels = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .map(|text| text.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(grid_labels, vec!["0.0", "0.1", "0.2", "0.3"]);
    assert!(
        frame
            .texts
            .iter()
            .filter(|text| text.h_align == TextHAlign::Right)
            .all(|text| text.x < plot.left())
    );
}

#[test]
fn empty_category_labels_are_skipped() {
    let frame = bar_chart(ChartOptions::default()).build_frame();
    let category_labels = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .map(|text| text.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(category_labels, vec!["Jan", "Mar"]);
    assert!(frame.validate().is_ok());
}

#[test]
fn grid_lines_come_before_axis_lines() {
    let options = ChartOptions::default();
    let chart = bar_chart(options);
    let frame = chart.build_frame();
    let grid_count = chart.scale().grid_line_count();

    assert!(
        frame.lines[..grid_count]
            .iter()
            .all(|line| line.color == options.grid_line_color)
    );
    assert!(
        frame.lines[grid_count..]
            .iter()
            .all(|line| line.color == options.axis_line_color)
    );
}

#[test]
fn hidden_grid_and_labels_leave_axes_and_bars() {
    let options = ChartOptions::default()
        .with_grid_lines(false)
        .with_axis_labels(false);
    let frame = bar_chart(options).build_frame();
    assert_eq!(frame.lines.len(), 2);
    assert!(frame.texts.is_empty());
    assert_eq!(frame.rects.len(), 3);
}

#[test]
fn candles_emit_wick_lines_and_body_rects() {
    let data = CandlestickChartData::new(
        CategoryLabels::new(["Mon", "Tue", "Wed"]),
        vec![
            OhlcValue::new(10.0, 15.0, 8.0, 12.0).expect("ohlc"),
            OhlcValue::new(12.0, 14.0, 9.0, 10.0).expect("ohlc"),
            OhlcValue::new(10.0, 11.0, 9.5, 10.5).expect("ohlc"),
        ],
    )
    .expect("data");
    let options = ChartOptions::default().with_grid_lines(false);
    let chart = CandlestickChart::new(data, options, Viewport::new(480, 320)).expect("chart");
    let frame = chart.build_frame();

    assert_eq!(frame.rects.len(), 3);
    // Two axis lines, then one wick per candle.
    assert_eq!(frame.lines.len(), 5);
    let wick = frame.lines[2];
    assert_eq!(wick.x1, wick.x2);
    assert!(wick.y1 < wick.y2);
    assert_eq!(wick.color, options.candle_colors.up_stroke);
    assert!(frame.validate().is_ok());
}
