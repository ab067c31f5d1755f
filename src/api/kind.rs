use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::api::ChartOptions;
use crate::core::{
    AxisScale, CandlestickChartData, CategoryLabels, CategorySeriesData, ChartElement,
    ValueBounds, layout_candles, layout_grouped_bars, layout_stacked_bars,
};

/// Tag of the closed set of supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    Bar,
    StackedBar,
    Candlestick,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::BarKind {}
    impl Sealed for super::StackedBarKind {}
    impl Sealed for super::CandlestickKind {}
}

/// Per-kind strategy plugged into the generic [`crate::api::Chart`] engine.
///
/// A kind decides which dataset it reads, how bounds are derived from it, and
/// how elements are packed into category bands. Everything else (scale,
/// hit testing, frame building) is shared.
pub trait ChartKind: sealed::Sealed + Debug + Clone + Copy + Default + 'static {
    type Data: Debug + Clone + PartialEq + Default;

    const CHART_TYPE: ChartType;

    fn labels(data: &Self::Data) -> &CategoryLabels;

    fn bounds(data: &Self::Data) -> ValueBounds;

    fn layout(scale: &AxisScale, data: &Self::Data, options: &ChartOptions) -> Vec<ChartElement>;

    fn series_count(data: &Self::Data) -> usize;

    fn series_name(data: &Self::Data, series_index: usize) -> Option<&str>;
}

/// Grouped bars: series side by side inside each category.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarKind;

/// Stacked bars: series piled up in insertion order inside each category.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackedBarKind;

#[derive(Debug, Clone, Copy, Default)]
pub struct CandlestickKind;

impl ChartKind for BarKind {
    type Data = CategorySeriesData;

    const CHART_TYPE: ChartType = ChartType::Bar;

    fn labels(data: &Self::Data) -> &CategoryLabels {
        data.labels()
    }

    fn bounds(data: &Self::Data) -> ValueBounds {
        ValueBounds::of_bar_data(data)
    }

    fn layout(scale: &AxisScale, data: &Self::Data, options: &ChartOptions) -> Vec<ChartElement> {
        layout_grouped_bars(scale, data.series(), options.inter_bar_gap_factor)
    }

    fn series_count(data: &Self::Data) -> usize {
        data.series().len()
    }

    fn series_name(data: &Self::Data, series_index: usize) -> Option<&str> {
        data.series().get(series_index)?.name()
    }
}

impl ChartKind for StackedBarKind {
    type Data = CategorySeriesData;

    const CHART_TYPE: ChartType = ChartType::StackedBar;

    fn labels(data: &Self::Data) -> &CategoryLabels {
        data.labels()
    }

    fn bounds(data: &Self::Data) -> ValueBounds {
        ValueBounds::of_stacked_bar_data(data)
    }

    fn layout(scale: &AxisScale, data: &Self::Data, options: &ChartOptions) -> Vec<ChartElement> {
        layout_stacked_bars(scale, data.series(), options.stacked_bar_width_ratio)
    }

    fn series_count(data: &Self::Data) -> usize {
        data.series().len()
    }

    fn series_name(data: &Self::Data, series_index: usize) -> Option<&str> {
        data.series().get(series_index)?.name()
    }
}

impl ChartKind for CandlestickKind {
    type Data = CandlestickChartData;

    const CHART_TYPE: ChartType = ChartType::Candlestick;

    fn labels(data: &Self::Data) -> &CategoryLabels {
        data.labels()
    }

    fn bounds(data: &Self::Data) -> ValueBounds {
        ValueBounds::of_candlestick_data(data)
    }

    fn layout(scale: &AxisScale, data: &Self::Data, options: &ChartOptions) -> Vec<ChartElement> {
        layout_candles(
            scale,
            data.values(),
            options.candle_body_width_ratio,
            options.candle_colors,
        )
    }

    fn series_count(_data: &Self::Data) -> usize {
        1
    }

    fn series_name(_data: &Self::Data, _series_index: usize) -> Option<&str> {
        None
    }
}
