//! CSV Loader
//!
//! Reads the fixed-schema yearly table:
//!
//! ```text
//! year, DataCenter_Electricity_Twh, Ai_Compute_Index
//! 2022, 331, 1
//! ```
//!
//! Columns are located by header name, so their order in the file does not
//! matter. Header names and fields are trimmed before use.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::error::{DataError, DataResult};
use super::types::{Dataset, YearlyRecord};

pub const YEAR_COLUMN: &str = "year";
pub const ELECTRICITY_COLUMN: &str = "DataCenter_Electricity_Twh";
pub const COMPUTE_COLUMN: &str = "Ai_Compute_Index";

/// Column positions resolved from the header row
struct ColumnMap {
    year: usize,
    electricity: usize,
    compute: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> DataResult<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DataError::MissingColumn(name))
        };

        Ok(Self {
            year: find(YEAR_COLUMN)?,
            electricity: find(ELECTRICITY_COLUMN)?,
            compute: find(COMPUTE_COLUMN)?,
        })
    }
}

/// Load the dataset from a CSV file
pub fn load_path(path: &Path) -> DataResult<Dataset> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DataError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let dataset = load_reader(file)?;
    tracing::debug!(path = %path.display(), rows = dataset.len(), "Loaded dataset");
    Ok(dataset)
}

/// Load the dataset from an in-memory CSV string
pub fn load_str(csv_data: &str) -> DataResult<Dataset> {
    load_reader(csv_data.as_bytes())
}

/// Load the dataset from any reader producing CSV bytes
pub fn load_reader<R: Read>(reader: R) -> DataResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(|e| malformed(&e, 1))?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // Header occupies line 1
        let fallback_line = idx as u64 + 2;
        let row = result.map_err(|e| malformed(&e, fallback_line))?;
        let line = row.position().map(|p| p.line()).unwrap_or(fallback_line);

        let year = parse_field::<i32>(&row, columns.year, YEAR_COLUMN, line)?;
        let electricity = parse_field::<f64>(&row, columns.electricity, ELECTRICITY_COLUMN, line)?;
        let compute = parse_field::<f64>(&row, columns.compute, COMPUTE_COLUMN, line)?;

        records.push(YearlyRecord::new(year, electricity, compute));
    }

    Dataset::new(records)
}

fn parse_field<T: std::str::FromStr>(
    row: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    line: u64,
) -> DataResult<T> {
    let raw = row.get(idx).ok_or_else(|| DataError::MalformedRow {
        line,
        reason: format!("missing field {}", column),
    })?;

    raw.parse::<T>().map_err(|_| DataError::Parse {
        line,
        column,
        value: raw.to_string(),
    })
}

fn malformed(err: &csv::Error, fallback_line: u64) -> DataError {
    let line = err.position().map(|p| p.line()).unwrap_or(fallback_line);
    DataError::MalformedRow {
        line,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIXTURE: &str = "year, DataCenter_Electricity_Twh, Ai_Compute_Index
2022, 331, 1
2023, 372.4, 5
2024, 415.2, 25
2025, 466.8, 125
2026, 520.6, 625
";

    #[test]
    fn test_load_fixture() {
        let ds = load_str(FIXTURE).unwrap();

        assert_eq!(ds.len(), 5);
        assert_eq!(ds.years(), vec![2022, 2023, 2024, 2025, 2026]);
        assert!(ds.years().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ds.get(2022).unwrap().electricity_twh, 331.0);
        assert_eq!(ds.get(2026).unwrap().electricity_twh, 520.6);
        assert_eq!(ds.compute_index(), vec![1.0, 5.0, 25.0, 125.0, 625.0]);
    }

    #[test]
    fn test_compute_index_is_five_fold() {
        let ds = load_str(FIXTURE).unwrap();
        let index = ds.compute_index();
        for pair in index.windows(2) {
            assert_eq!(pair[1] / pair[0], 5.0);
        }
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv_data = "Ai_Compute_Index,year,DataCenter_Electricity_Twh
5,2023,372.4
1,2022,331";
        let ds = load_str(csv_data).unwrap();
        assert_eq!(ds.years(), vec![2022, 2023]);
        assert_eq!(ds.first().ai_compute_index, 1.0);
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "year,DataCenter_Electricity_Twh
2022,331";
        let err = load_str(csv_data).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(COMPUTE_COLUMN)));
    }

    #[test]
    fn test_non_numeric_field() {
        let csv_data = "year,DataCenter_Electricity_Twh,Ai_Compute_Index
2022,331,1
2023,lots,5";
        match load_str(csv_data).unwrap_err() {
            DataError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, ELECTRICITY_COLUMN);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_is_malformed() {
        let csv_data = "year,DataCenter_Electricity_Twh,Ai_Compute_Index
2022,331";
        let err = load_str(csv_data).unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { .. }));
    }

    #[test]
    fn test_header_only_is_invalid() {
        let err = load_str("year,DataCenter_Electricity_Twh,Ai_Compute_Index\n").unwrap_err();
        assert!(matches!(err, DataError::Invalid(_)));
    }

    #[test]
    fn test_load_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let ds = load_path(file.path()).unwrap();
        assert_eq!(ds.len(), 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");

        let err = load_path(&path).unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
    }
}
