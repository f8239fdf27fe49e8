use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaselineError {
    #[error("Record at row {row} has no '{field}' field")]
    MissingField { field: String, row: usize },

    #[error("Data error: {0}")]
    Data(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BaselineError>;
