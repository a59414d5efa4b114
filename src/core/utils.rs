use chrono::NaiveDate;

use super::ScholarQuestError;

/// Case-insensitive substring match used by the refine-step search.
pub fn text_matches_search(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

pub fn parse_deadline(deadline: &str) -> Result<NaiveDate, ScholarQuestError> {
    NaiveDate::parse_from_str(deadline, "%Y-%m-%d")
        .map_err(|_| ScholarQuestError::InvalidDeadline(deadline.to_string()))
}

/// "2026-03-15" -> "Mar 15, 2026". Falls back to the raw string if the
/// catalog carries something unparseable.
pub fn format_deadline(deadline: &str) -> String {
    match parse_deadline(deadline) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => deadline.to_string(),
    }
}

pub fn deadline_has_passed(deadline: &str, today: NaiveDate) -> bool {
    match parse_deadline(deadline) {
        Ok(date) => date < today,
        Err(_) => false,
    }
}
