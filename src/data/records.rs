use crate::error::{BaselineError, Result};
use crate::types::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known columns of the Titanic passenger table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sex,
    Age,
    Fare,
    Pclass,
    Survived,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sex => "sex",
            Self::Age => "age",
            Self::Fare => "fare",
            Self::Pclass => "pclass",
            Self::Survived => "survived",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Sex,
            Self::Age,
            Self::Fare,
            Self::Pclass,
            Self::Survived,
        ]
    }

    /// Columns a model cannot run without; everything else is optional
    pub fn required() -> Vec<Self> {
        vec![Self::Sex]
    }

    /// Common alternative column names
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Sex => vec!["sex", "Sex", "SEX"],
            Self::Age => vec!["age", "Age", "AGE"],
            Self::Fare => vec!["fare", "Fare", "FARE"],
            Self::Pclass => vec!["pclass", "Pclass", "PClass", "class"],
            Self::Survived => vec!["survived", "Survived", "SURVIVED"],
        }
    }
}

/// One row of passenger data: named columns mapped to cell values.
/// Columns the models do not read (cabin, embarked, ...) ride along
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassengerRecord {
    fields: HashMap<String, FieldValue>,
}

impl PassengerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, FieldValue)>,
        N: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        Self { fields }
    }

    /// Builder-style insert, mainly for tests and hand-built rows
    pub fn with<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Fetch a field, failing when the column is absent from this row.
    /// `row` is the caller's position in the table, carried into the error.
    pub fn require(&self, name: &str, row: usize) -> Result<&FieldValue> {
        self.fields.get(name).ok_or_else(|| BaselineError::MissingField {
            field: name.to_string(),
            row,
        })
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn num_columns(&self) -> usize {
        self.fields.len()
    }
}

impl TryFrom<&serde_json::Value> for PassengerRecord {
    type Error = BaselineError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            BaselineError::Data(format!("Expected a JSON object per row, got: {}", value))
        })?;

        let mut fields = HashMap::with_capacity(object.len());
        for (name, cell) in object {
            let value = match cell {
                serde_json::Value::Null => FieldValue::Null,
                serde_json::Value::Bool(b) => FieldValue::Bool(*b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => FieldValue::Int(i),
                    None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                serde_json::Value::String(s) => FieldValue::Str(s.clone()),
                other => {
                    return Err(BaselineError::Data(format!(
                        "Unsupported cell in column '{}': {}",
                        name, other
                    )))
                }
            };
            fields.insert(name.clone(), value);
        }

        Ok(Self { fields })
    }
}

/// Convert a JSON array of row objects into records. Purely in-memory;
/// reading the JSON from anywhere is the caller's problem.
pub fn records_from_json(rows: &serde_json::Value) -> Result<Vec<PassengerRecord>> {
    let array = rows.as_array().ok_or_else(|| {
        BaselineError::Data("Expected a JSON array of row objects".to_string())
    })?;

    array.iter().map(PassengerRecord::try_from).collect()
}
