//! Chart Renderer
//!
//! Turns a [`Dataset`](crate::data::Dataset) into chart descriptions and
//! renders those to SVG.
//!
//! - [`electricity_chart`]: line chart, linear axes, marker per year
//! - [`compute_chart`]: bar chart, log10 y axis
//! - [`svg::render`]: `ChartSpec` to SVG markup

mod charts;
mod error;
pub mod scale;
pub mod svg;
mod types;

pub use charts::{compute_chart, electricity_chart, SERIES_COLOR};
pub use error::ChartError;
pub use scale::Scale;
pub use types::{Axis, ChartSpec, GridLines, LineStyle, Mark, Point};
