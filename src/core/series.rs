use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, ensure_finite, month_label};
use crate::error::{ChartError, ChartResult};

/// One labeled sample. The label is only used for axis ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> ChartResult<Self> {
        Ok(Self {
            label: label.into(),
            value: ensure_finite(value, "series value")?,
        })
    }
}

/// Ordered numeric data with opaque labels.
///
/// Every value is guaranteed finite once constructed, so projection code never
/// has to re-check for NaN or infinities.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(points: Vec<SeriesPoint>) -> ChartResult<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series value at index {index} must be finite"
                )));
            }
        }
        Ok(Self { points })
    }

    /// Builds a series whose labels are the zero-based sample index.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        let points = values
            .iter()
            .enumerate()
            .map(|(index, value)| SeriesPoint::new(index.to_string(), *value))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self { points })
    }

    pub fn from_labeled<I, L>(pairs: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let points = pairs
            .into_iter()
            .map(|(label, value)| SeriesPoint::new(label, value))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self { points })
    }

    /// Builds a series from decimal amounts, e.g. account balances.
    pub fn from_decimal_amounts<I, L>(pairs: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (L, Decimal)>,
        L: Into<String>,
    {
        let points = pairs
            .into_iter()
            .map(|(label, amount)| -> ChartResult<SeriesPoint> {
                SeriesPoint::new(label, decimal_to_f64(amount, "amount")?)
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self { points })
    }

    /// Builds a series labeled by abbreviated month name (`Jan`, `Feb`, ...).
    pub fn from_monthly<I>(samples: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self::from_labeled(
            samples
                .into_iter()
                .map(|(date, value)| (month_label(date), value)),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value)
    }

    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.points.iter().map(|point| point.label.as_str())
    }

    /// Rejects series shorter than `required` samples.
    pub fn require_len(&self, required: usize) -> ChartResult<()> {
        if self.points.len() < required {
            return Err(ChartError::InsufficientData {
                required,
                actual: self.points.len(),
            });
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            points: Vec<SeriesPoint>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Series::new(raw.points).map_err(serde::de::Error::custom)
    }
}
