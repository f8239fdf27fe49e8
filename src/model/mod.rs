pub mod gender;
pub mod traits;

pub use gender::GenderRule;
pub use traits::SurvivalModel;
