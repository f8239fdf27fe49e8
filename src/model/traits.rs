use crate::data::records::PassengerRecord;
use crate::error::Result;
use crate::types::PredictionSequence;

/// Base trait for survival models
pub trait SurvivalModel: Send + Sync {
    /// Display name
    fn name(&self) -> &'static str;

    /// Map passenger records to one survival prediction per record.
    /// Output is positionally aligned with the input and exactly as long;
    /// any failure aborts the whole call with no partial result.
    fn predict(&self, records: &[PassengerRecord]) -> Result<PredictionSequence>;
}
