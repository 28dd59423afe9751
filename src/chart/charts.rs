//! The two charts on the page
//!
//! Both are pure functions of the dataset.

use crate::data::Dataset;

use super::error::ChartError;
use super::types::{Axis, ChartSpec, GridLines, LineStyle, Mark, Point};

/// Default series color
pub const SERIES_COLOR: &str = "#1f77b4";

/// Line chart of electricity consumption per year on linear axes
pub fn electricity_chart(dataset: &Dataset) -> Result<ChartSpec, ChartError> {
    let first = dataset.first().year;
    let last = dataset.last().year;

    Ok(ChartSpec {
        title: format!(
            "Global Data Center Electricity Consumption ({}\u{2013}{})",
            first, last
        ),
        x_axis: Axis::years("Year", &dataset.years())?,
        y_axis: Axis::linear("Electricity Consumption (TWh)", &dataset.electricity())?,
        mark: Mark::Line {
            stroke_width: 2.5,
            marker_radius: 5.0,
        },
        major_grid: GridLines {
            style: LineStyle::Dashed,
            opacity: 0.7,
        },
        minor_grid: None,
        color: SERIES_COLOR.to_string(),
        points: dataset
            .records()
            .iter()
            .map(|r| Point {
                year: r.year,
                value: r.electricity_twh,
            })
            .collect(),
    })
}

/// Bar chart of the compute index per year on a log10 y axis
///
/// The index grows multiplicatively, so a linear axis would flatten every
/// year but the last into the baseline.
pub fn compute_chart(dataset: &Dataset) -> Result<ChartSpec, ChartError> {
    let baseline = dataset.first().year;

    Ok(ChartSpec {
        title: format!(
            "Relative AI Training Compute Growth (Index, {} = 1)",
            baseline
        ),
        x_axis: Axis::years("Year", &dataset.years())?,
        y_axis: Axis::log10("AI Compute Index", &dataset.compute_index())?,
        mark: Mark::Bar {
            width: 0.6,
            outline_width: 1.5,
        },
        major_grid: GridLines {
            style: LineStyle::Solid,
            opacity: 0.7,
        },
        minor_grid: Some(GridLines {
            style: LineStyle::Dotted,
            opacity: 0.4,
        }),
        color: SERIES_COLOR.to_string(),
        points: dataset
            .records()
            .iter()
            .map(|r| Point {
                year: r.year,
                value: r.ai_compute_index,
            })
            .collect(),
    })
}
