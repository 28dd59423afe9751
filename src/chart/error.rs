//! Chart building error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("No data to plot")]
    Empty,

    #[error("Value {0} cannot be shown on a logarithmic axis")]
    NonPositiveOnLogAxis(f64),

    #[error("Value {0} is not a finite number")]
    NonFinite(f64),
}
