use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}

/// Formats a calendar date as a category label with a `chrono` strftime pattern.
pub fn date_label(date: NaiveDate, pattern: &str) -> ChartResult<String> {
    let mut label = String::new();
    write!(label, "{}", date.format(pattern)).map_err(|_| {
        ChartError::InvalidData(format!("invalid date label pattern `{pattern}`"))
    })?;
    Ok(label)
}
