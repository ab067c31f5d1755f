use serde::{Deserialize, Serialize};

use crate::core::{BarChartData, BarSeries, CandlestickChartData, OhlcValue, StackedBarChartData};

/// How a chart kind derives its value-axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsMode {
    /// Raw values of every series, plus the zero baseline.
    Simple,
    /// Per-category sums across series, plus the zero baseline.
    Cumulative,
    /// Lows and highs of OHLC values, no baseline.
    Range,
}

/// Data handed to [`compute_bounds`], tagged with the mode it is read in.
#[derive(Debug, Clone, Copy)]
pub enum BoundsInput<'a> {
    Simple(&'a [BarSeries]),
    Cumulative(&'a [BarSeries]),
    Range(&'a [OhlcValue]),
}

impl BoundsInput<'_> {
    #[must_use]
    pub fn mode(self) -> BoundsMode {
        match self {
            Self::Simple(_) => BoundsMode::Simple,
            Self::Cumulative(_) => BoundsMode::Cumulative,
            Self::Range(_) => BoundsMode::Range,
        }
    }
}

/// Min/max pair over the visible data of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    /// Bounds of an empty dataset.
    pub const EMPTY: Self = Self { min: 0.0, max: 0.0 };

    /// Builds bounds from two values in any order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// A zero span cannot be mapped to pixels as is; see `AxisScale::build`.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Simple bounds of a grouped-bar dataset.
    #[must_use]
    pub fn of_bar_data(data: &BarChartData) -> Self {
        compute_bounds(BoundsInput::Simple(data.series()))
    }

    /// Cumulative bounds of a stacked-bar dataset.
    #[must_use]
    pub fn of_stacked_bar_data(data: &StackedBarChartData) -> Self {
        compute_bounds(BoundsInput::Cumulative(data.series()))
    }

    #[must_use]
    pub fn of_candlestick_data(data: &CandlestickChartData) -> Self {
        compute_bounds(BoundsInput::Range(data.values()))
    }

    #[must_use]
    fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// Computes value-axis bounds for one chart's dataset.
///
/// Empty input (no series, no categories, no candles) yields
/// [`ValueBounds::EMPTY`].
#[must_use]
pub fn compute_bounds(input: BoundsInput<'_>) -> ValueBounds {
    match input {
        BoundsInput::Simple(series) => series
            .iter()
            .flat_map(|series| series.values().iter().copied())
            .fold(ValueBounds::EMPTY, ValueBounds::include),
        BoundsInput::Cumulative(series) => cumulative_sums(series)
            .into_iter()
            .fold(ValueBounds::EMPTY, ValueBounds::include),
        BoundsInput::Range(values) => {
            let Some(first) = values.first() else {
                return ValueBounds::EMPTY;
            };
            values
                .iter()
                .skip(1)
                .fold(ValueBounds::new(first.low, first.high), |bounds, value| {
                    bounds.include(value.low).include(value.high)
                })
        }
    }
}

/// Sums each category's values across series, in series order.
#[must_use]
pub fn cumulative_sums(series: &[BarSeries]) -> Vec<f64> {
    let category_count = series.iter().map(BarSeries::len).max().unwrap_or(0);
    (0..category_count)
        .map(|category| {
            series
                .iter()
                .filter_map(|series| series.values().get(category))
                .sum::<f64>()
        })
        .collect()
}
