use super::traits::SurvivalModel;
use crate::data::records::{Field, PassengerRecord};
use crate::error::Result;
use crate::types::{FieldValue, PredictionSequence};
use rayon::prelude::*;

/// Tables at or above this many rows use the parallel scan. Rows are
/// independent, so the split changes nothing observable.
const PAR_THRESHOLD: usize = 4096;

/// One-feature baseline: predict a passenger survived if they are female.
/// Stateless; every call is a fresh scan over the input.
pub struct GenderRule;

impl GenderRule {
    fn predict_row(record: &PassengerRecord, row: usize) -> Result<bool> {
        let value = record.require(Field::Sex.as_str(), row)?;
        // Anything other than the string "female" (male, unknown, null,
        // wrong casing, non-string) counts as not-female
        Ok(matches!(value, FieldValue::Str(s) if s == "female"))
    }
}

impl SurvivalModel for GenderRule {
    fn name(&self) -> &'static str {
        "gender_rule"
    }

    fn predict(&self, records: &[PassengerRecord]) -> Result<PredictionSequence> {
        let predictions: PredictionSequence = if records.len() >= PAR_THRESHOLD {
            records
                .par_iter()
                .enumerate()
                .map(|(row, record)| Self::predict_row(record, row))
                .collect::<Result<_>>()?
        } else {
            records
                .iter()
                .enumerate()
                .map(|(row, record)| Self::predict_row(record, row))
                .collect::<Result<_>>()?
        };

        log::debug!(
            "{}: predicted {} of {} passengers survived",
            self.name(),
            predictions.iter().filter(|p| **p).count(),
            predictions.len()
        );

        Ok(predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BaselineError;

    fn row(sex: &str) -> PassengerRecord {
        PassengerRecord::new().with("sex", sex)
    }

    #[test]
    fn test_female_survives_male_does_not() {
        let records = vec![row("female"), row("male"), row("female")];

        let predictions = GenderRule.predict(&records).unwrap();
        assert_eq!(predictions, vec![true, false, true]);
    }

    #[test]
    fn test_unknown_value_is_not_female() {
        let records = vec![row("unknown")];
        assert_eq!(GenderRule.predict(&records).unwrap(), vec![false]);
    }

    #[test]
    fn test_null_and_non_string_are_not_female() {
        let records = vec![
            PassengerRecord::new().with("sex", FieldValue::Null),
            PassengerRecord::new().with("sex", 1i64),
            // Casing matters; only the exact string counts
            row("Female"),
        ];

        assert_eq!(GenderRule.predict(&records).unwrap(), vec![false, false, false]);
    }

    #[test]
    fn test_missing_sex_column_aborts() {
        let records = vec![row("female"), PassengerRecord::new().with("age", 30.0)];

        let err = GenderRule.predict(&records).unwrap_err();
        match err {
            BaselineError::MissingField { field, row } => {
                assert_eq!(field, "sex");
                assert_eq!(row, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let predictions = GenderRule.predict(&[]).unwrap();
        assert!(predictions.is_empty());
    }
}
