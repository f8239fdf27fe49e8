//! Titanic survival baseline: the classic one-feature gender rule from
//! introductory data science, as a small typed library. Feed it a table
//! of passenger records (or a polars DataFrame via the bridge) and get
//! back one boolean survival prediction per row, in row order.

pub mod data;
pub mod error;
pub mod model;
pub mod types;

pub use data::{records_from_json, Field, FrameBridge, PassengerRecord, RecordValidator};
pub use error::{BaselineError, Result};
pub use model::{GenderRule, SurvivalModel};
pub use types::{FieldValue, PredictionSequence};
