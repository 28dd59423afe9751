//! Chart description types
//!
//! A `ChartSpec` is plain data: everything the SVG renderer needs, with no
//! reference back to the dataset it came from. Two specs built from the same
//! data compare equal.

use serde::Serialize;

use super::error::ChartError;
use super::scale::{self, Scale};

/// Target number of major ticks on a linear axis
const LINEAR_TICK_TARGET: usize = 5;

/// One axis: scale, visible range, and tick positions
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub label: String,
    pub scale: Scale,
    pub min: f64,
    pub max: f64,
    pub major_ticks: Vec<f64>,
    pub minor_ticks: Vec<f64>,
}

impl Axis {
    /// Categorical year axis with a tick at every year
    pub fn years(label: impl Into<String>, years: &[i32]) -> Result<Self, ChartError> {
        let (first, last) = match (years.first(), years.last()) {
            (Some(f), Some(l)) => (*f as f64, *l as f64),
            _ => return Err(ChartError::Empty),
        };

        Ok(Self {
            label: label.into(),
            scale: Scale::Linear,
            min: first - 0.5,
            max: last + 0.5,
            major_ticks: years.iter().map(|y| *y as f64).collect(),
            minor_ticks: Vec::new(),
        })
    }

    /// Linear value axis, padded around the data
    pub fn linear(label: impl Into<String>, values: &[f64]) -> Result<Self, ChartError> {
        let (lo, hi) = finite_bounds(values)?;
        let (min, max) = scale::padded_linear_range(lo, hi);

        Ok(Self {
            label: label.into(),
            scale: Scale::Linear,
            min,
            max,
            major_ticks: scale::linear_ticks(min, max, LINEAR_TICK_TARGET),
            minor_ticks: Vec::new(),
        })
    }

    /// Base-10 log axis spanning whole decades
    pub fn log10(label: impl Into<String>, values: &[f64]) -> Result<Self, ChartError> {
        let (lo, hi) = finite_bounds(values)?;
        if lo <= 0.0 {
            return Err(ChartError::NonPositiveOnLogAxis(lo));
        }

        let (min, max) = scale::decade_range(lo, hi);
        let (major_ticks, minor_ticks) = scale::log_ticks(min, max);

        Ok(Self {
            label: label.into(),
            scale: Scale::Log10,
            min,
            max,
            major_ticks,
            minor_ticks,
        })
    }

    /// Fraction of the axis length at which `value` falls
    pub fn project(&self, value: f64) -> f64 {
        self.scale.project(value, self.min, self.max)
    }
}

fn finite_bounds(values: &[f64]) -> Result<(f64, f64), ChartError> {
    if values.is_empty() {
        return Err(ChartError::Empty);
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(ChartError::NonFinite(*bad));
    }

    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((lo, hi))
}

/// Stroke pattern for grid lines
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// SVG `stroke-dasharray` value, if any
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some("6 4"),
            LineStyle::Dotted => Some("1.5 3"),
        }
    }
}

/// Grid line appearance
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GridLines {
    pub style: LineStyle,
    pub opacity: f64,
}

/// How the data is drawn
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mark {
    /// Connected line with a circular marker at each point
    Line { stroke_width: f64, marker_radius: f64 },
    /// Vertical bars rising from the bottom of the y axis
    Bar { width: f64, outline_width: f64 },
}

/// A single plotted value
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Point {
    pub year: i32,
    pub value: f64,
}

/// Complete description of one chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub mark: Mark,
    pub major_grid: GridLines,
    pub minor_grid: Option<GridLines>,
    pub color: String,
    pub points: Vec<Point>,
}

impl ChartSpec {
    pub fn is_bar(&self) -> bool {
        matches!(self.mark, Mark::Bar { .. })
    }

    /// X tick positions as years
    pub fn year_ticks(&self) -> Vec<i32> {
        self.x_axis
            .major_ticks
            .iter()
            .map(|t| t.round() as i32)
            .collect()
    }
}
