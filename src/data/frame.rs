use super::records::{Field, PassengerRecord};
use super::validator::RecordValidator;
use crate::error::{BaselineError, Result};
use crate::types::FieldValue;
use polars::prelude::*;

/// Bridge between an in-memory polars DataFrame and the record table the
/// models consume. No file or network I/O happens here; whoever built the
/// frame owns that concern.
pub struct FrameBridge;

impl FrameBridge {
    /// Convert a DataFrame into one PassengerRecord per row, in row order
    pub fn to_records(df: &DataFrame) -> Result<Vec<PassengerRecord>> {
        let df = Self::normalize_columns(df.clone())?;
        let height = df.height();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut columns: Vec<(String, Vec<FieldValue>)> = Vec::with_capacity(names.len());
        for name in &names {
            let column = df.column(name)?;
            columns.push((name.clone(), Self::extract_column(column)?));
        }

        let mut records = Vec::with_capacity(height);
        for i in 0..height {
            let pairs = columns
                .iter()
                .map(|(name, values)| (name.clone(), values[i].clone()));
            records.push(PassengerRecord::from_pairs(pairs));
        }

        let null_report = RecordValidator::check_nulls(&records);
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        Ok(records)
    }

    /// Rename known columns to their canonical lowercase names so models
    /// see `sex` whether the frame said `sex`, `Sex`, or `SEX`
    pub fn normalize_columns(mut df: DataFrame) -> Result<DataFrame> {
        for field in Field::all() {
            let canonical = field.as_str();
            let actual = {
                let columns = df.get_column_names();
                field
                    .aliases()
                    .iter()
                    .find(|&&alias| columns.iter().any(|col| col.as_str() == alias))
                    .copied()
            };
            if let Some(actual) = actual {
                if actual != canonical {
                    df.rename(actual, canonical.into()).map_err(|e| {
                        BaselineError::Data(format!("Failed to rename column: {}", e))
                    })?;
                }
            }
        }
        Ok(df)
    }

    fn extract_column(column: &Column) -> Result<Vec<FieldValue>> {
        let mut out = Vec::with_capacity(column.len());

        match column.dtype() {
            DataType::String => {
                for value in column.str()?.into_iter() {
                    out.push(match value {
                        Some(s) => FieldValue::Str(s.to_string()),
                        None => FieldValue::Null,
                    });
                }
            }
            DataType::Boolean => {
                for value in column.bool()?.into_iter() {
                    out.push(match value {
                        Some(b) => FieldValue::Bool(b),
                        None => FieldValue::Null,
                    });
                }
            }
            DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32 => {
                let cast = column.cast(&DataType::Int64)?;
                for value in cast.i64()?.into_iter() {
                    out.push(match value {
                        Some(i) => FieldValue::Int(i),
                        None => FieldValue::Null,
                    });
                }
            }
            DataType::Float64 | DataType::Float32 => {
                let cast = column.cast(&DataType::Float64)?;
                for value in cast.f64()?.into_iter() {
                    out.push(match value {
                        Some(f) => FieldValue::Float(f),
                        None => FieldValue::Null,
                    });
                }
            }
            other => {
                return Err(BaselineError::Data(format!(
                    "Unsupported column type {:?} for '{}'",
                    other,
                    column.name()
                )));
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_to_records_preserves_rows_and_values() {
        let df = df! {
            "sex" => &["female", "male", "female"],
            "age" => &[38.0, 22.0, 26.0],
            "pclass" => &[1i64, 3, 3],
        }
        .unwrap();

        let records = FrameBridge::to_records(&df).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("sex"), Some(&FieldValue::Str("female".to_string())));
        assert_eq!(records[1].get("age"), Some(&FieldValue::Float(22.0)));
        assert_eq!(records[2].get("pclass"), Some(&FieldValue::Int(3)));
    }

    #[test]
    fn test_to_records_maps_nulls() {
        let df = df! {
            "sex" => &[Some("female"), None, Some("male")],
        }
        .unwrap();

        let records = FrameBridge::to_records(&df).unwrap();
        assert_eq!(records[1].get("sex"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_normalize_columns() {
        let df = df! {
            "Sex" => &["female", "male"],
            "AGE" => &[38.0, 22.0],
            "cabin" => &["C85", "E46"],
        }
        .unwrap();

        let df = FrameBridge::normalize_columns(df).unwrap();
        let cols = df.get_column_names();
        assert!(cols.iter().any(|c| c.as_str() == "sex"));
        assert!(cols.iter().any(|c| c.as_str() == "age"));
        // Unknown columns pass through untouched
        assert!(cols.iter().any(|c| c.as_str() == "cabin"));
    }
}
