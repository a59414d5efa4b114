//! The scholarship catalog behind the matcher.
//!
//! The matcher and wizard only ever see an ordered, read-only sequence of
//! records, so a real data source could be dropped in without touching
//! either. The shipping provider is a small catalog compiled into the
//! binary.

use crate::core::{
    models::ALL_FIELDS,
    ScholarshipRecord,
};

pub trait CatalogProvider {
    /// Records in a fixed order. Rank ties are broken by this order, so
    /// providers must return a stable sequence.
    fn records(&self) -> &[ScholarshipRecord];
}

pub struct StaticCatalog {
    records: Vec<ScholarshipRecord>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self { records: builtin_records() }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for StaticCatalog {
    fn records(&self) -> &[ScholarshipRecord] {
        &self.records
    }
}

fn builtin_records() -> Vec<ScholarshipRecord> {
    vec![
        ScholarshipRecord {
            id: 1,
            title: "Global Excellence Scholarship".to_string(),
            country: "United Kingdom".to_string(),
            deadline: "2026-03-15".to_string(),
            amount_description: "Full tuition + £15,000 living stipend".to_string(),
            field: ALL_FIELDS.to_string(),
            min_gpa: 3.7,
            fully_funded: true,
            eligibility_text: "Open to international applicants with an outstanding \
                               academic record and two references."
                .to_string(),
            apply_link: "https://example.org/global-excellence/apply".to_string(),
        },
        ScholarshipRecord {
            id: 2,
            title: "STEM Futures Grant".to_string(),
            country: "United States".to_string(),
            deadline: "2026-01-31".to_string(),
            amount_description: "Up to $25,000 per year".to_string(),
            field: "Computer Science".to_string(),
            min_gpa: 3.2,
            fully_funded: false,
            eligibility_text: "Undergraduate or graduate study in computing. Requires a \
                               short research statement."
                .to_string(),
            apply_link: "https://example.org/stem-futures/apply".to_string(),
        },
        ScholarshipRecord {
            id: 3,
            title: "Mittelstand Engineering Award".to_string(),
            country: "Germany".to_string(),
            deadline: "2025-11-30".to_string(),
            amount_description: "€934 monthly stipend + travel allowance".to_string(),
            field: "Engineering".to_string(),
            min_gpa: 3.0,
            fully_funded: true,
            eligibility_text: "Master's applicants to a German technical university. \
                               German language skills are a plus, not a requirement."
                .to_string(),
            apply_link: "https://example.org/mittelstand-engineering/apply".to_string(),
        },
        ScholarshipRecord {
            id: 4,
            title: "Commonwealth Shared Scholarship".to_string(),
            country: "United Kingdom".to_string(),
            deadline: "2026-02-28".to_string(),
            amount_description: "Tuition, airfare and living allowance".to_string(),
            field: ALL_FIELDS.to_string(),
            min_gpa: 3.3,
            fully_funded: true,
            eligibility_text: "Candidates from eligible Commonwealth countries applying \
                               for a one-year taught Master's."
                .to_string(),
            apply_link: "https://example.org/commonwealth-shared/apply".to_string(),
        },
    ]
}
