pub mod errors;
pub mod models;
pub mod utils;

pub use errors::ScholarQuestError;
pub use models::{Profile, ScholarshipRecord, ScoredScholarship, ALL_FIELDS};
