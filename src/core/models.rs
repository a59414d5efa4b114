use serde::{
    Deserialize,
    Serialize,
};

/// Sentinel field value on a record that matches every field of study.
pub const ALL_FIELDS: &str = "All Fields";

pub const FIELDS_OF_STUDY: &[&str] = &[
    "Computer Science",
    "Engineering",
    "Medicine",
    "Business",
    "Law",
    "Natural Sciences",
    "Social Sciences",
    "Arts & Humanities",
];

pub const DEGREE_LEVELS: &[&str] = &["Bachelor's", "Master's", "PhD"];

pub const COUNTRIES: &[&str] =
    &["United States", "United Kingdom", "Germany", "Canada", "Australia"];

pub const GPA_RANGE: std::ops::RangeInclusive<f32> = 2.0..=4.0;
pub const BUDGET_MAX: u32 = 50_000;
pub const BUDGET_STEP: u32 = 1_000;

/// The user's self-reported academic and financial preferences.
///
/// Mutated in place by the wizard forms and persisted as a whole when the
/// final step commits. `#[serde(default)]` keeps a stale or partial saved
/// copy loadable field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub field_of_study: String,
    pub degree_level: String,
    pub gpa: f32,
    pub annual_budget_usd: u32,
    pub fully_funded_only: bool,
    pub preferred_country: String, // empty = no preference
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            field_of_study: String::new(),
            degree_level: String::new(),
            gpa: 3.0,
            annual_budget_usd: 10_000,
            fully_funded_only: false,
            preferred_country: String::new(),
        }
    }
}

/// One scholarship in the catalog. Read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScholarshipRecord {
    pub id: u32,
    pub title: String,
    pub country: String,
    pub deadline: String, // YYYY-MM-DD
    pub amount_description: String,
    pub field: String, // a field of study, or ALL_FIELDS
    pub min_gpa: f32,
    pub fully_funded: bool,
    pub eligibility_text: String,
    pub apply_link: String,
}

/// A catalog record paired with its match score for the current profile.
/// Recomputed on every search, never cached across profile edits.
#[derive(Debug, Clone)]
pub struct ScoredScholarship {
    pub record: ScholarshipRecord,
    pub match_score: u8, // 0..=100
}
