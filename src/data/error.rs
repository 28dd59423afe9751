//! Data loading error types
//!
//! Every variant is fatal to the run; nothing here is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// Source file does not exist
    #[error("Data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Source file exists but could not be read
    #[error("Failed to read data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row lacks a required column
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// A field could not be parsed as a number
    #[error("Line {line}: column {column} has non-numeric value {value:?}")]
    Parse {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// Row is structurally broken (wrong field count, bad quoting)
    #[error("Line {line}: malformed row: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// Rows parsed but the table violates a dataset invariant
    #[error("Invalid dataset: {0}")]
    Invalid(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::MissingColumn("Ai_Compute_Index");
        assert_eq!(err.to_string(), "Missing column: Ai_Compute_Index");

        let err = DataError::Parse {
            line: 3,
            column: "year",
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 3: column year has non-numeric value \"abc\""
        );
    }

    #[test]
    fn test_not_found_names_path() {
        let err = DataError::NotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert!(err.to_string().contains("missing.csv"));
    }
}
