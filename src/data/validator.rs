use super::records::{Field, PassengerRecord};
use crate::error::{BaselineError, Result};
use std::collections::HashMap;

pub struct RecordValidator;

impl RecordValidator {
    /// Validate that every record exposes every required column
    pub fn validate_required(records: &[PassengerRecord]) -> Result<()> {
        for field in Field::required() {
            let name = field.as_str();
            for (row, record) in records.iter().enumerate() {
                if !record.has(name) {
                    return Err(BaselineError::MissingField {
                        field: name.to_string(),
                        row,
                    });
                }
            }
        }
        Ok(())
    }

    /// Count null cells per column. Nulls are reported, not rejected;
    /// models decide what a null means for them.
    pub fn check_nulls(records: &[PassengerRecord]) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for record in records {
            for (name, value) in record.columns() {
                if value.is_null() {
                    *counts.entry(name).or_insert(0) += 1;
                }
            }
        }

        let mut report: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        report.sort();
        report
    }
}
