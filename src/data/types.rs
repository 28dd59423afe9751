//! Core data types for the yearly dataset
//!
//! - `YearlyRecord`: one row tying a year to its electricity and compute values
//! - `Dataset`: the validated, immutable, year-ordered table

use serde::Serialize;

use super::error::{DataError, DataResult};

/// One row of the dataset
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct YearlyRecord {
    /// Calendar year
    pub year: i32,
    /// Global data center electricity consumption in TWh
    pub electricity_twh: f64,
    /// Relative AI training compute (baseline year = 1)
    pub ai_compute_index: f64,
}

impl YearlyRecord {
    pub fn new(year: i32, electricity_twh: f64, ai_compute_index: f64) -> Self {
        Self {
            year,
            electricity_twh,
            ai_compute_index,
        }
    }
}

/// The loaded table, sorted by year with exactly one record per year
///
/// Construction goes through [`Dataset::new`], which enforces the
/// invariants; there is no way to mutate a `Dataset` afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dataset {
    records: Vec<YearlyRecord>,
}

impl Dataset {
    /// Sort and validate records into a dataset
    pub fn new(mut records: Vec<YearlyRecord>) -> DataResult<Self> {
        if records.is_empty() {
            return Err(DataError::Invalid("dataset has no rows".to_string()));
        }

        records.sort_by_key(|r| r.year);

        for pair in records.windows(2) {
            let (prev, next) = (pair[0].year, pair[1].year);
            if prev == next {
                return Err(DataError::Invalid(format!("duplicate year {}", next)));
            }
            if next != prev + 1 {
                return Err(DataError::Invalid(format!(
                    "years not contiguous: {} follows {}",
                    next, prev
                )));
            }
        }

        for r in &records {
            if !r.electricity_twh.is_finite() || r.electricity_twh < 0.0 {
                return Err(DataError::Invalid(format!(
                    "electricity for {} must be a non-negative number, got {}",
                    r.year, r.electricity_twh
                )));
            }
            if !r.ai_compute_index.is_finite() || r.ai_compute_index < 1.0 {
                return Err(DataError::Invalid(format!(
                    "compute index for {} must be >= 1, got {}",
                    r.year, r.ai_compute_index
                )));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[YearlyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    pub fn electricity(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.electricity_twh).collect()
    }

    pub fn compute_index(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.ai_compute_index).collect()
    }

    pub fn first(&self) -> &YearlyRecord {
        &self.records[0]
    }

    pub fn last(&self) -> &YearlyRecord {
        &self.records[self.records.len() - 1]
    }

    /// Look up the record for a year
    pub fn get(&self, year: i32) -> Option<&YearlyRecord> {
        let offset = year.checked_sub(self.first().year)?;
        usize::try_from(offset)
            .ok()
            .and_then(|idx| self.records.get(idx))
    }

    /// Percent change in electricity from the first to the last year
    pub fn electricity_growth_pct(&self) -> f64 {
        let first = self.first().electricity_twh;
        if first == 0.0 {
            return 0.0;
        }
        (self.last().electricity_twh - first) / first * 100.0
    }

    /// Last compute index divided by the first
    pub fn compute_multiple(&self) -> f64 {
        self.last().ai_compute_index / self.first().ai_compute_index
    }

    /// Per-year multiplicative compute growth (geometric mean over the span)
    pub fn compute_growth_factor(&self) -> f64 {
        let steps = (self.len() - 1) as f64;
        if steps == 0.0 {
            return 1.0;
        }
        self.compute_multiple().powf(1.0 / steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<YearlyRecord> {
        vec![
            YearlyRecord::new(2024, 415.2, 25.0),
            YearlyRecord::new(2022, 331.0, 1.0),
            YearlyRecord::new(2023, 372.4, 5.0),
        ]
    }

    #[test]
    fn test_new_sorts_by_year() {
        let ds = Dataset::new(fixture()).unwrap();
        assert_eq!(ds.years(), vec![2022, 2023, 2024]);
        assert_eq!(ds.first().year, 2022);
        assert_eq!(ds.last().year, 2024);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Dataset::new(vec![]), Err(DataError::Invalid(_))));
    }

    #[test]
    fn test_rejects_duplicate_year() {
        let mut records = fixture();
        records.push(YearlyRecord::new(2023, 380.0, 5.0));
        let err = Dataset::new(records).unwrap_err();
        assert!(err.to_string().contains("duplicate year 2023"));
    }

    #[test]
    fn test_rejects_gap() {
        let records = vec![
            YearlyRecord::new(2022, 331.0, 1.0),
            YearlyRecord::new(2024, 415.2, 25.0),
        ];
        let err = Dataset::new(records).unwrap_err();
        assert!(err.to_string().contains("not contiguous"));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let negative = vec![YearlyRecord::new(2022, -1.0, 1.0)];
        assert!(Dataset::new(negative).is_err());

        let below_baseline = vec![YearlyRecord::new(2022, 331.0, 0.5)];
        assert!(Dataset::new(below_baseline).is_err());

        let nan = vec![YearlyRecord::new(2022, f64::NAN, 1.0)];
        assert!(Dataset::new(nan).is_err());
    }

    #[test]
    fn test_get_by_year() {
        let ds = Dataset::new(fixture()).unwrap();
        assert_eq!(ds.get(2023).unwrap().ai_compute_index, 5.0);
        assert!(ds.get(2021).is_none());
        assert!(ds.get(2025).is_none());
    }

    #[test]
    fn test_derived_statistics() {
        let ds = Dataset::new(vec![
            YearlyRecord::new(2022, 331.0, 1.0),
            YearlyRecord::new(2023, 372.4, 5.0),
            YearlyRecord::new(2024, 415.2, 25.0),
            YearlyRecord::new(2025, 466.8, 125.0),
            YearlyRecord::new(2026, 520.6, 625.0),
        ])
        .unwrap();

        assert!((ds.electricity_growth_pct() - 57.28).abs() < 0.01);
        assert_eq!(ds.compute_multiple(), 625.0);
        assert!((ds.compute_growth_factor() - 5.0).abs() < 1e-9);
    }
}
