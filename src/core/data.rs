use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_label, decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Ordered labels of the category (horizontal) axis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryLabels {
    labels: Vec<String>,
}

impl CategoryLabels {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds labels for time-period categories, e.g. `"%b %Y"` for monthly data.
    pub fn from_dates(dates: &[NaiveDate], pattern: &str) -> ChartResult<Self> {
        let labels = dates
            .iter()
            .map(|date| date_label(*date, pattern))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self { labels })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    fn push(&mut self, label: String) {
        self.labels.push(label);
    }
}

/// One run of values, one per category, sharing a fill and stroke color.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    name: Option<String>,
    fill_color: Color,
    stroke_color: Color,
    values: Vec<f64>,
}

impl BarSeries {
    pub fn new(fill_color: Color, stroke_color: Color, values: Vec<f64>) -> ChartResult<Self> {
        fill_color.validate()?;
        stroke_color.validate()?;
        for value in &values {
            ensure_finite(*value, "series value")?;
        }

        Ok(Self {
            name: None,
            fill_color,
            stroke_color,
            values,
        })
    }

    /// Converts exact business amounts into a series.
    pub fn from_decimals(
        fill_color: Color,
        stroke_color: Color,
        values: &[Decimal],
    ) -> ChartResult<Self> {
        let values = values
            .iter()
            .map(|value| decimal_to_f64(*value, "series value"))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(fill_color, stroke_color, values)
    }

    /// Sets the name shown in tooltips.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Open/high/low/close values of one candlestick category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcValue {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcValue {
    /// Builds a validated OHLC value.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            open,
            high,
            low,
            close,
        })
    }

    pub fn from_decimals(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Returns `true` when close is greater than or equal to open.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Category labels plus any number of equally sized value series.
///
/// Used by both grouped and stacked bar charts; the two differ only in how
/// the series are laid out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySeriesData {
    labels: CategoryLabels,
    series: Vec<BarSeries>,
}

pub type BarChartData = CategorySeriesData;
pub type StackedBarChartData = CategorySeriesData;

impl CategorySeriesData {
    #[must_use]
    pub fn new(labels: CategoryLabels) -> Self {
        Self {
            labels,
            series: Vec::new(),
        }
    }

    /// Builder form of [`CategorySeriesData::add_series`].
    pub fn with_series(mut self, series: BarSeries) -> ChartResult<Self> {
        self.add_series(series)?;
        Ok(self)
    }

    /// Adds a series after checking it has one value per category.
    pub fn add_series(&mut self, series: BarSeries) -> ChartResult<()> {
        if series.len() != self.labels.len() {
            return Err(ChartError::DataShapeMismatch {
                series_index: self.series.len(),
                expected: self.labels.len(),
                actual: series.len(),
            });
        }
        self.series.push(series);
        Ok(())
    }

    /// Appends one category with one value per existing series, in series order.
    pub fn append_category(&mut self, label: impl Into<String>, values: &[f64]) -> ChartResult<()> {
        if values.len() != self.series.len() {
            return Err(ChartError::AppendShapeMismatch {
                expected: self.series.len(),
                actual: values.len(),
            });
        }
        for value in values {
            ensure_finite(*value, "series value")?;
        }

        self.labels.push(label.into());
        for (series, value) in self.series.iter_mut().zip(values) {
            series.values.push(*value);
        }
        Ok(())
    }

    #[must_use]
    pub fn labels(&self) -> &CategoryLabels {
        &self.labels
    }

    #[must_use]
    pub fn series(&self) -> &[BarSeries] {
        &self.series
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.labels.len()
    }
}

/// Category labels plus one OHLC value per category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandlestickChartData {
    labels: CategoryLabels,
    values: Vec<OhlcValue>,
}

impl CandlestickChartData {
    pub fn new(labels: CategoryLabels, values: Vec<OhlcValue>) -> ChartResult<Self> {
        if values.len() != labels.len() {
            return Err(ChartError::DataShapeMismatch {
                series_index: 0,
                expected: labels.len(),
                actual: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    pub fn append(&mut self, label: impl Into<String>, value: OhlcValue) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    #[must_use]
    pub fn labels(&self) -> &CategoryLabels {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[OhlcValue] {
        &self.values
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{BarSeries, CategoryLabels, CategorySeriesData, OhlcValue};
    use crate::error::ChartError;
    use crate::render::Color;

    fn series(values: Vec<f64>) -> BarSeries {
        BarSeries::new(Color::rgb(0.2, 0.4, 0.8), Color::rgb(0.1, 0.2, 0.4), values)
            .expect("valid series")
    }

    #[test]
    fn short_series_is_rejected_with_shape_details() {
        let mut data = CategorySeriesData::new(CategoryLabels::new(["a", "b", "c"]));
        data.add_series(series(vec![1.0, 2.0, 3.0])).expect("first");

        let err = data.add_series(series(vec![1.0])).expect_err("mismatch");
        match err {
            ChartError::DataShapeMismatch {
                series_index,
                expected,
                actual,
            } => {
                assert_eq!(series_index, 1);
                assert_eq!(expected, 3);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(data.series().len(), 1);
    }

    #[test]
    fn append_category_extends_every_series() {
        let mut data = CategorySeriesData::new(CategoryLabels::new(["a"]))
            .with_series(series(vec![1.0]))
            .and_then(|data| data.with_series(series(vec![2.0])))
            .expect("data");

        data.append_category("b", &[3.0, 4.0]).expect("append");
        assert_eq!(data.category_count(), 2);
        assert_eq!(data.series()[0].values(), &[1.0, 3.0]);
        assert_eq!(data.series()[1].values(), &[2.0, 4.0]);

        assert!(data.append_category("c", &[5.0]).is_err());
        assert_eq!(data.category_count(), 2);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let result = BarSeries::new(
            Color::rgb(0.0, 0.0, 0.0),
            Color::rgb(0.0, 0.0, 0.0),
            vec![1.0, f64::NAN],
        );
        assert!(result.is_err());
    }

    #[test]
    fn ohlc_outside_range_is_rejected() {
        assert!(OhlcValue::new(120.0, 110.0, 90.0, 100.0).is_err());
        assert!(OhlcValue::new(10.0, 15.0, 8.0, 12.0).is_ok());
    }

    #[test]
    fn labels_from_dates_use_chrono_pattern() {
        let dates = [
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
            NaiveDate::from_ymd_opt(2024, 2, 1).expect("date"),
        ];
        let labels = CategoryLabels::from_dates(&dates, "%b %Y").expect("labels");
        assert_eq!(labels.as_slice(), &["Jan 2024".to_owned(), "Feb 2024".to_owned()]);
    }
}
