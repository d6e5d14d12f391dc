use std::f64::consts::TAU;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::primitives::ensure_unit_ratio;
use crate::error::{ChartError, ChartResult};

const FRACTION_SUM_EPSILON: f64 = 1e-9;

/// Stroke-dash parameters for one segment of a circular progress ring.
///
/// `radius` is the stroke centerline. Lengths are measured along that circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub radius: f64,
    pub stroke_width: f64,
    pub circumference: f64,
    pub drawn_length: f64,
    pub gap_length: f64,
    /// Distance along the ring at which this segment starts.
    pub offset: f64,
}

impl ArcGeometry {
    /// `(dash, gap)` pair for `stroke-dasharray`.
    #[must_use]
    pub fn dash_array(self) -> (f64, f64) {
        (self.drawn_length, self.gap_length)
    }

    /// `stroke-dashoffset` value: SVG shifts dashes backwards for positive offsets.
    #[must_use]
    pub fn svg_dash_offset(self) -> f64 {
        if self.offset == 0.0 { 0.0 } else { -self.offset }
    }

    #[must_use]
    pub fn start_angle_radians(self) -> f64 {
        self.offset / self.circumference * TAU
    }

    #[must_use]
    pub fn sweep_angle_radians(self) -> f64 {
        self.drawn_length / self.circumference * TAU
    }

    #[must_use]
    pub fn inner_radius(self) -> f64 {
        self.radius - self.stroke_width / 2.0
    }

    #[must_use]
    pub fn outer_radius(self) -> f64 {
        self.radius + self.stroke_width / 2.0
    }
}

/// One labeled category of a multi-segment ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub label: String,
    pub fraction: f64,
    pub arc: ArcGeometry,
}

pub type RingSegments = SmallVec<[ArcSegment; 8]>;

/// Ring stroke width implied by `cutout_ratio = inner_radius / outer_radius`
/// around a centerline of `radius`.
fn stroke_width_for(radius: f64, cutout_ratio: f64) -> f64 {
    2.0 * radius * (1.0 - cutout_ratio) / (1.0 + cutout_ratio)
}

fn validate_ring(radius: f64, cutout_ratio: f64) -> ChartResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "ring radius must be finite and > 0".to_owned(),
        ));
    }
    ensure_unit_ratio(cutout_ratio, "ring cutout ratio")?;
    Ok(())
}

fn validate_fraction(fraction: f64) -> ChartResult<f64> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(ChartError::InvalidData(
            "arc fraction must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(fraction)
}

/// Converts a fraction of the whole into a single arc starting at the top of the ring.
pub fn project_arc(fraction: f64, radius: f64, cutout_ratio: f64) -> ChartResult<ArcGeometry> {
    project_arc_at(fraction, radius, cutout_ratio, 0.0)
}

/// Like [`project_arc`] with an explicit start offset along the ring.
pub fn project_arc_at(
    fraction: f64,
    radius: f64,
    cutout_ratio: f64,
    offset: f64,
) -> ChartResult<ArcGeometry> {
    validate_ring(radius, cutout_ratio)?;
    let fraction = validate_fraction(fraction)?;
    if !offset.is_finite() || offset < 0.0 {
        return Err(ChartError::InvalidData(
            "arc offset must be finite and >= 0".to_owned(),
        ));
    }

    let circumference = TAU * radius;
    let drawn_length = fraction * circumference;
    Ok(ArcGeometry {
        radius,
        stroke_width: stroke_width_for(radius, cutout_ratio),
        circumference,
        drawn_length,
        gap_length: circumference - drawn_length,
        offset,
    })
}

/// Lays out categories contiguously around one ring, in the given order.
///
/// Each segment starts where the previous one ended. When the fractions sum
/// to one, the last segment absorbs rounding so the ring closes with no gap
/// or overlap.
pub fn project_ring<I, L>(
    categories: I,
    radius: f64,
    cutout_ratio: f64,
) -> ChartResult<RingSegments>
where
    I: IntoIterator<Item = (L, f64)>,
    L: Into<String>,
{
    validate_ring(radius, cutout_ratio)?;

    let categories: SmallVec<[(String, f64); 8]> = categories
        .into_iter()
        .map(|(label, fraction)| -> ChartResult<(String, f64)> {
            Ok((label.into(), validate_fraction(fraction)?))
        })
        .collect::<ChartResult<_>>()?;
    if categories.is_empty() {
        return Err(ChartError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let total: f64 = categories.iter().map(|(_, fraction)| fraction).sum();
    if total > 1.0 + FRACTION_SUM_EPSILON {
        return Err(ChartError::InvalidData(format!(
            "ring fractions must sum to at most 1, got {total}"
        )));
    }
    let closes_ring = (total - 1.0).abs() <= FRACTION_SUM_EPSILON;

    let circumference = TAU * radius;
    let stroke_width = stroke_width_for(radius, cutout_ratio);
    let last_index = categories.len() - 1;
    let mut offset = 0.0;
    let mut segments = RingSegments::with_capacity(categories.len());
    for (index, (label, fraction)) in categories.into_iter().enumerate() {
        let drawn_length = if closes_ring && index == last_index {
            (circumference - offset).max(0.0)
        } else {
            fraction * circumference
        };
        segments.push(ArcSegment {
            label,
            fraction,
            arc: ArcGeometry {
                radius,
                stroke_width,
                circumference,
                drawn_length,
                gap_length: circumference - drawn_length,
                offset,
            },
        });
        offset += drawn_length;
    }

    trace!(count = segments.len(), total, closes_ring, "project ring");
    Ok(segments)
}

/// Normalizes raw category amounts into fractions and projects a closed ring.
///
/// Insertion order of `amounts` is the segment order.
pub fn project_ring_from_amounts(
    amounts: &IndexMap<String, f64>,
    radius: f64,
    cutout_ratio: f64,
) -> ChartResult<RingSegments> {
    let mut total = 0.0;
    for (label, amount) in amounts {
        if !amount.is_finite() || *amount < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "category `{label}` amount must be finite and >= 0"
            )));
        }
        total += amount;
    }
    if total <= 0.0 {
        return Err(ChartError::InvalidData(
            "category amounts must sum to > 0".to_owned(),
        ));
    }

    project_ring(
        amounts
            .iter()
            .map(|(label, amount)| (label.clone(), (amount / total).min(1.0))),
        radius,
        cutout_ratio,
    )
}
