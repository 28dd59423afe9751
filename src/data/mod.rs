//! Data Loader
//!
//! Reads the yearly electricity / AI-compute table into an immutable
//! [`Dataset`]. Any failure here is fatal to the run.

mod error;
mod loader;
mod types;

pub use error::{DataError, DataResult};
pub use loader::{
    load_path, load_reader, load_str, COMPUTE_COLUMN, ELECTRICITY_COLUMN, YEAR_COLUMN,
};
pub use types::{Dataset, YearlyRecord};
