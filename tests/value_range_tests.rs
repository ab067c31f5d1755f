use category_chart::core::{
    BarSeries, BoundsInput, BoundsMode, CandlestickChartData, CategoryLabels, CategorySeriesData,
    OhlcValue, ValueBounds, compute_bounds, cumulative_sums,
};
use category_chart::render::Color;
use rust_decimal::Decimal;

fn series(values: Vec<f64>) -> BarSeries {
    BarSeries::new(Color::rgb(0.3, 0.5, 0.8), Color::rgb(0.1, 0.2, 0.3), values)
        .expect("valid series")
}

#[test]
fn simple_bounds_cover_raw_values_and_zero() {
    let data = [series(vec![10.0, -5.0, 0.0])];
    assert_eq!(
        compute_bounds(BoundsInput::Simple(&data)),
        ValueBounds::new(-5.0, 10.0)
    );

    let negative_only = [series(vec![-3.0, -7.0])];
    assert_eq!(
        compute_bounds(BoundsInput::Simple(&negative_only)),
        ValueBounds::new(-7.0, 0.0)
    );
}

#[test]
fn stacked_bounds_use_category_sums() {
    let data = CategorySeriesData::new(CategoryLabels::new(["A", "B"]))
        .with_series(series(vec![3.0, 4.0]))
        .and_then(|data| data.with_series(series(vec![5.0, 2.0])))
        .expect("data");

    assert_eq!(cumulative_sums(data.series()), vec![8.0, 6.0]);

    let bounds = ValueBounds::of_stacked_bar_data(&data);
    assert_eq!(bounds.max, 8.0);
    assert_eq!(bounds.min, 0.0);

    // The same data read as grouped bars only reaches the largest raw value.
    assert_eq!(ValueBounds::of_bar_data(&data).max, 5.0);
}

#[test]
fn candlestick_bounds_span_lows_to_highs_without_zero() {
    let data = CandlestickChartData::new(
        CategoryLabels::new(["Mon", "Tue"]),
        vec![
            OhlcValue::new(10.0, 15.0, 8.0, 12.0).expect("ohlc"),
            OhlcValue::new(12.0, 18.0, 11.0, 17.0).expect("ohlc"),
        ],
    )
    .expect("data");

    assert_eq!(
        ValueBounds::of_candlestick_data(&data),
        ValueBounds::new(8.0, 18.0)
    );
}

#[test]
fn bounds_mode_follows_input_tag() {
    assert_eq!(BoundsInput::Simple(&[]).mode(), BoundsMode::Simple);
    assert_eq!(BoundsInput::Cumulative(&[]).mode(), BoundsMode::Cumulative);
    assert_eq!(BoundsInput::Range(&[]).mode(), BoundsMode::Range);
}

#[test]
fn series_without_categories_yields_empty_bounds() {
    let data = CategorySeriesData::new(CategoryLabels::default())
        .with_series(series(Vec::new()))
        .expect("empty series fits empty axis");
    assert_eq!(ValueBounds::of_bar_data(&data), ValueBounds::EMPTY);
    assert_eq!(ValueBounds::of_stacked_bar_data(&data), ValueBounds::EMPTY);
}

#[test]
fn decimal_amounts_convert_to_series_values() {
    let values = [Decimal::new(1250, 2), Decimal::new(-75, 1)];
    let series = BarSeries::from_decimals(
        Color::rgb(0.2, 0.2, 0.2),
        Color::rgb(0.0, 0.0, 0.0),
        &values,
    )
    .expect("decimal series");
    assert_eq!(series.values(), &[12.5, -7.5]);

    let ohlc = OhlcValue::from_decimals(
        Decimal::new(100, 1),
        Decimal::new(150, 1),
        Decimal::new(80, 1),
        Decimal::new(120, 1),
    )
    .expect("decimal ohlc");
    assert_eq!(ohlc, OhlcValue::new(10.0, 15.0, 8.0, 12.0).expect("ohlc"));
}
