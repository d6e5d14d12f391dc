use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};

/// Renderer-agnostic path command in drawing-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: PlotPoint },
    LineTo { to: PlotPoint },
    CubicTo {
        control1: PlotPoint,
        control2: PlotPoint,
        to: PlotPoint,
    },
    Close,
}

/// Ordered path commands that can back an SVG `d` attribute, a canvas draw
/// call or a native graphics primitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, to: PlotPoint) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { to });
        self
    }

    pub fn line_to(&mut self, to: PlotPoint) -> &mut Self {
        self.commands.push(PathCommand::LineTo { to });
        self
    }

    pub fn cubic_to(
        &mut self,
        control1: PlotPoint,
        control2: PlotPoint,
        to: PlotPoint,
    ) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Renders the path as an SVG `d` string with at most `precision` decimals.
    #[must_use]
    pub fn to_svg_d(&self, precision: usize) -> String {
        let mut out = String::with_capacity(self.commands.len() * 16);
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match command {
                PathCommand::MoveTo { to } => {
                    out.push('M');
                    push_point(&mut out, *to, precision);
                }
                PathCommand::LineTo { to } => {
                    out.push('L');
                    push_point(&mut out, *to, precision);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    out.push('C');
                    push_point(&mut out, *control1, precision);
                    out.push(',');
                    push_point(&mut out, *control2, precision);
                    out.push(',');
                    push_point(&mut out, *to, precision);
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }
}

fn push_point(out: &mut String, point: PlotPoint, precision: usize) {
    push_number(out, point.x, precision);
    out.push(' ');
    push_number(out, point.y, precision);
}

fn push_number(out: &mut String, value: f64, precision: usize) {
    let mut text = String::new();
    let _ = write!(text, "{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.');
        text.truncate(trimmed.len());
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    out.push_str(&text);
}

/// Straight polyline through `points`.
pub fn line_path(points: &[PlotPoint]) -> ChartResult<Path> {
    let (first, rest) = points.split_first().ok_or(ChartError::InsufficientData {
        required: 1,
        actual: 0,
    })?;

    let mut path = Path::new();
    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
    Ok(path)
}

/// Smooth curve through every point using Catmull-Rom derived cubic segments.
///
/// `tension` in `[0, 1]`: `0` degenerates to straight segments, `1` is the
/// uniform Catmull-Rom curve. The curve passes through every input point in
/// order; end tangents reuse the end points as phantom neighbours.
pub fn smooth_path(points: &[PlotPoint], tension: f64) -> ChartResult<Path> {
    if !tension.is_finite() || !(0.0..=1.0).contains(&tension) {
        return Err(ChartError::InvalidData(
            "smoothing tension must be finite and in [0, 1]".to_owned(),
        ));
    }
    if points.len() < 2 {
        return Err(ChartError::InsufficientData {
            required: 2,
            actual: points.len(),
        });
    }

    let factor = tension / 6.0;
    let last = points.len() - 1;
    let mut path = Path::new();
    path.move_to(points[0]);
    for index in 0..last {
        let p0 = points[index.saturating_sub(1)];
        let p1 = points[index];
        let p2 = points[index + 1];
        let p3 = points[(index + 2).min(last)];

        let control1 = PlotPoint::new(p1.x + (p2.x - p0.x) * factor, p1.y + (p2.y - p0.y) * factor);
        let control2 = PlotPoint::new(p2.x - (p3.x - p1.x) * factor, p2.y - (p3.y - p1.y) * factor);
        path.cubic_to(control1, control2, p2);
    }
    Ok(path)
}
