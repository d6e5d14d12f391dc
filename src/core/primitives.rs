use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Abbreviated English month name used for axis tick labels.
#[must_use]
pub fn month_label(date: NaiveDate) -> &'static str {
    MONTH_ABBREVIATIONS[date.month0() as usize]
}

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite"
        )));
    }
    Ok(value)
}

/// Validates a ratio in the half-open interval `[0, 1)`.
pub fn ensure_unit_ratio(value: f64, field_name: &str) -> ChartResult<f64> {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite and in [0, 1)"
        )));
    }
    Ok(value)
}

/// Clamps into `[0, 1]`. NaN collapses to `0`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Clamps into `[0, 100]`. NaN collapses to `0`.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}
