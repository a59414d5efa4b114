//! Profile-to-scholarship matching.
//!
//! Scores are a 0-100 heuristic built from three weighted components:
//! field of study (40), GPA fit (30), funding fit (30). The component sum
//! stays in floating point until the final rounding so the GPA penalty is
//! not rounded twice.

use crate::core::{
    models::ALL_FIELDS,
    utils::text_matches_search,
    Profile,
    ScholarshipRecord,
    ScoredScholarship,
};

const FIELD_WEIGHT: f32 = 40.0;
const GPA_WEIGHT: f32 = 30.0;
const GPA_PENALTY_SLOPE: f32 = 15.0;
const FUNDED_WEIGHT: f32 = 30.0;
const PARTIAL_FUNDING_WEIGHT: f32 = 20.0;

fn field_component(profile: &Profile, record: &ScholarshipRecord) -> f32 {
    if record.field == ALL_FIELDS || record.field == profile.field_of_study {
        FIELD_WEIGHT
    } else {
        0.0
    }
}

/// Full credit at or above the record's minimum GPA, then a linear penalty
/// of 15 points per full grade point short, floored at zero.
fn gpa_component(profile: &Profile, record: &ScholarshipRecord) -> f32 {
    if profile.gpa >= record.min_gpa {
        GPA_WEIGHT
    } else {
        (GPA_WEIGHT - (record.min_gpa - profile.gpa) * GPA_PENALTY_SLOPE).max(0.0)
    }
}

fn funding_component(profile: &Profile, record: &ScholarshipRecord) -> f32 {
    if profile.fully_funded_only {
        if record.fully_funded {
            FUNDED_WEIGHT
        } else {
            0.0
        }
    } else {
        PARTIAL_FUNDING_WEIGHT
    }
}

/// Match score in [0, 100], rounded to the nearest integer.
pub fn score(profile: &Profile, record: &ScholarshipRecord) -> u8 {
    let sum =
        field_component(profile, record) + gpa_component(profile, record) + funding_component(profile, record);
    sum.round() as u8
}

/// Scores every record, applies the free-text and country filters, and
/// ranks descending by score. The sort is stable: records with equal scores
/// keep their catalog order.
pub fn filter_and_rank(
    profile: &Profile,
    records: &[ScholarshipRecord],
    query: &str,
    country_filter: &str,
) -> Vec<ScoredScholarship> {
    let query = query.trim();

    let mut scored: Vec<ScoredScholarship> = records
        .iter()
        .filter(|record| {
            query.is_empty()
                || text_matches_search(&record.title, query)
                || text_matches_search(&record.country, query)
                || text_matches_search(&record.field, query)
        })
        .filter(|record| country_filter.is_empty() || record.country == country_filter)
        .map(|record| ScoredScholarship { record: record.clone(), match_score: score(profile, record) })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ALL_FIELDS;

    fn profile(field: &str, gpa: f32, fully_funded_only: bool) -> Profile {
        Profile {
            field_of_study: field.to_string(),
            degree_level: "Master's".to_string(),
            gpa,
            fully_funded_only,
            ..Profile::default()
        }
    }

    fn record(id: u32, field: &str, min_gpa: f32, fully_funded: bool) -> ScholarshipRecord {
        ScholarshipRecord {
            id,
            title: format!("Scholarship {}", id),
            country: "Canada".to_string(),
            deadline: "2026-06-30".to_string(),
            amount_description: "CAD 10,000".to_string(),
            field: field.to_string(),
            min_gpa,
            fully_funded,
            eligibility_text: String::new(),
            apply_link: String::new(),
        }
    }

    #[test]
    fn matching_field_scores_forty() {
        let p = profile("Computer Science", 4.0, false);
        let r = record(1, "Computer Science", 2.0, false);
        assert_eq!(field_component(&p, &r), 40.0);
    }

    #[test]
    fn all_fields_sentinel_scores_forty() {
        let p = profile("Law", 4.0, false);
        let r = record(1, ALL_FIELDS, 2.0, false);
        assert_eq!(field_component(&p, &r), 40.0);
    }

    #[test]
    fn meeting_min_gpa_scores_thirty() {
        let p = profile("Law", 3.2, false);
        let r = record(1, "Law", 3.2, false);
        assert_eq!(gpa_component(&p, &r), 30.0);
    }

    #[test]
    fn gpa_penalty_is_linear_and_floored() {
        let p = profile("Law", 2.0, false);
        let far = record(1, "Law", 4.0, false);
        // 30 - 2.0 * 15 = 0, clamp keeps it there
        assert_eq!(gpa_component(&p, &far), 0.0);

        let near = record(2, "Law", 2.5, false);
        assert!((gpa_component(&p, &near) - 22.5).abs() < f32::EPSILON);
    }

    #[test]
    fn perfect_match_scores_one_hundred() {
        // Worked example: {CS, 3.5, fully funded only} vs {CS, 3.5, funded}
        let p = profile("Computer Science", 3.5, true);
        let r = record(1, "Computer Science", 3.5, true);
        assert_eq!(score(&p, &r), 100);
    }

    #[test]
    fn partial_match_scores_forty_seven() {
        // Worked example: field 0 + gpa 27 + funding 20
        let p = profile("Engineering", 3.0, false);
        let r = record(1, "Computer Science", 3.2, false);
        assert_eq!(score(&p, &r), 47);
    }

    #[test]
    fn funding_mismatch_scores_zero_component() {
        let p = profile("Law", 4.0, true);
        let r = record(1, "Law", 2.0, false);
        assert_eq!(funding_component(&p, &r), 0.0);
        assert_eq!(score(&p, &r), 70);
    }

    #[test]
    fn score_stays_in_bounds() {
        let gpas = [2.0, 2.7, 3.0, 3.5, 4.0];
        let fields = ["Computer Science", "Law", ""];
        let records = [
            record(1, ALL_FIELDS, 4.0, true),
            record(2, "Computer Science", 2.0, false),
            record(3, "Medicine", 3.9, true),
        ];

        for gpa in gpas {
            for field in fields {
                for funded_only in [true, false] {
                    for r in &records {
                        let s = score(&profile(field, gpa, funded_only), r);
                        assert!(s <= 100, "score {} out of range", s);
                    }
                }
            }
        }
    }

    #[test]
    fn ranking_is_descending() {
        let p = profile("Computer Science", 3.5, false);
        let records = vec![
            record(1, "Medicine", 4.0, false),
            record(2, "Computer Science", 3.0, false),
            record(3, ALL_FIELDS, 3.9, true),
        ];

        let ranked = filter_and_rank(&p, &records, "", "");
        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        assert_eq!(ranked[0].record.id, 2);
    }

    #[test]
    fn equal_scores_keep_catalog_order() {
        let p = profile("Computer Science", 4.0, false);
        // Identical scoring inputs, distinct ids
        let records = vec![
            record(10, "Computer Science", 3.0, false),
            record(11, "Computer Science", 3.0, false),
            record(12, "Computer Science", 3.0, false),
        ];

        let ranked = filter_and_rank(&p, &records, "", "");
        let ids: Vec<u32> = ranked.iter().map(|s| s.record.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn query_filters_title_country_and_field() {
        let p = profile("Computer Science", 3.5, false);
        let mut records = vec![
            record(1, "Computer Science", 3.0, false),
            record(2, "Medicine", 3.0, false),
        ];
        records[1].country = "Germany".to_string();

        let by_title = filter_and_rank(&p, &records, "scholarship 1", "");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].record.id, 1);

        let by_country = filter_and_rank(&p, &records, "germ", "");
        assert_eq!(by_country.len(), 1);
        assert_eq!(by_country[0].record.id, 2);

        let by_field = filter_and_rank(&p, &records, "medic", "");
        assert_eq!(by_field.len(), 1);

        let no_hit = filter_and_rank(&p, &records, "xyzzy", "");
        assert!(no_hit.is_empty());
    }

    #[test]
    fn country_filter_is_exact() {
        let p = profile("Computer Science", 3.5, false);
        let mut records = vec![
            record(1, "Computer Science", 3.0, false),
            record(2, "Computer Science", 3.0, false),
        ];
        records[1].country = "United Kingdom".to_string();

        let filtered = filter_and_rank(&p, &records, "", "United Kingdom");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].record.id, 2);

        // Substrings do not count for the country filter
        assert!(filter_and_rank(&p, &records, "", "United").is_empty());
    }

    #[test]
    fn empty_filters_return_every_record_scored() {
        let p = profile("Computer Science", 3.5, false);
        let records = vec![
            record(1, "Computer Science", 3.0, false),
            record(2, "Medicine", 3.0, false),
            record(3, ALL_FIELDS, 3.0, true),
        ];

        let ranked = filter_and_rank(&p, &records, "", "");
        assert_eq!(ranked.len(), records.len());
    }
}
