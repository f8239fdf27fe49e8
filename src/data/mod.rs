pub mod frame;
pub mod records;
pub mod validator;

pub use frame::FrameBridge;
pub use records::{records_from_json, Field, PassengerRecord};
pub use validator::RecordValidator;
