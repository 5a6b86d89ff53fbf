//! Value-column scoring.
//!
//! Grapher exports carry one or more value columns next to the entity, code
//! and year columns, plus footnote columns such as "countries without data".
//! The scorer favours primary-looking statistics and penalises footnotes.

use crate::error::{Result, TopicError};
use crate::topics::ColumnBoost;

const PRIMARY_HINTS: &[&str] = &["share", "percent", "rate", "expectancy", "literacy"];
const FOOTNOTE_HINTS: &[&str] = &["without", "missing", "unavailable"];

const PRIMARY_BONUS: i32 = 10;
const FOOTNOTE_PENALTY: i32 = 20;
const SHORT_NAME_BONUS: i32 = 5;
const SHORT_NAME_LEN: usize = 50;

/// Scores below or equal to this never win; the first eligible column is used
/// instead.
const SENTINEL: i32 = -1;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Whether `header` can hold a value at all.
fn is_eligible(index: usize, header: &str, entity_col: usize, year_col: usize) -> bool {
    index != entity_col && index != year_col && !header.to_lowercase().contains("code")
}

/// Relevance score of a single eligible header.
pub fn score_column(header: &str, boost: Option<ColumnBoost>) -> i32 {
    let lower = header.to_lowercase();
    let mut score = 0;

    if contains_any(&lower, PRIMARY_HINTS) {
        score += PRIMARY_BONUS;
    }
    if let Some(boost) = boost {
        if contains_any(&lower, boost.needles) {
            score += boost.bonus;
        }
    }
    if contains_any(&lower, FOOTNOTE_HINTS) {
        score -= FOOTNOTE_PENALTY;
    }
    if header.len() < SHORT_NAME_LEN {
        score += SHORT_NAME_BONUS;
    }

    score
}

/// Picks the value column for a table.
///
/// The highest score wins; ties go to the leftmost column. If every eligible
/// column scores at or below the sentinel, the first eligible column is used.
///
/// # Errors
///
/// Returns [`TopicError::NoValueColumn`] when every column is the entity
/// column, the year column, or a code column.
pub fn select_value_column(
    headers: &[String],
    entity_col: usize,
    year_col: usize,
    boost: Option<ColumnBoost>,
) -> Result<usize> {
    let mut best: Option<usize> = None;
    let mut best_score = SENTINEL;
    let mut first_eligible: Option<usize> = None;

    for (i, header) in headers.iter().enumerate() {
        if !is_eligible(i, header, entity_col, year_col) {
            continue;
        }
        first_eligible.get_or_insert(i);

        let score = score_column(header, boost);
        if score > best_score {
            best_score = score;
            best = Some(i);
        }
    }

    best.or(first_eligible).ok_or(TopicError::NoValueColumn)
}

/// Locates each contributing column of a composite topic. An entry is `None`
/// when no header matches; when several match, the last one wins.
pub fn locate_parts(headers: &[String], parts: &[&[&str]]) -> Vec<Option<usize>> {
    parts
        .iter()
        .map(|variants| {
            headers
                .iter()
                .rposition(|h| contains_any(&h.to_lowercase(), variants))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const PARITY: ColumnBoost = ColumnBoost {
        needles: &["parity"],
        bonus: 20,
    };

    #[test]
    fn test_score_primary_hint() {
        assert_eq!(score_column("Share of population", None), 15);
        assert_eq!(score_column("Life expectancy at birth", None), 15);
        assert_eq!(score_column("Deaths", None), 5);
    }

    #[test]
    fn test_score_footnote_penalty() {
        assert_eq!(score_column("Countries without data", None), -15);
        assert_eq!(score_column("Share missing", None), -5);
    }

    #[test]
    fn test_score_long_name_gets_no_bonus() {
        let long = "a".repeat(SHORT_NAME_LEN);
        assert_eq!(score_column(&long, None), 0);
        let short = "a".repeat(SHORT_NAME_LEN - 1);
        assert_eq!(score_column(&short, None), 5);
    }

    #[test]
    fn test_score_applies_boost() {
        assert_eq!(score_column("Gender parity index", Some(PARITY)), 25);
        assert_eq!(score_column("Gender parity index", None), 5);
    }

    #[test]
    fn test_select_skips_entity_year_and_code() {
        let h = headers(&["Entity", "Code", "Year", "Deaths"]);
        assert_eq!(select_value_column(&h, 0, 2, None).unwrap(), 3);
    }

    #[test]
    fn test_select_prefers_primary_statistic() {
        let h = headers(&["Entity", "Code", "Year", "Number of deaths", "Death rate"]);
        assert_eq!(select_value_column(&h, 0, 2, None).unwrap(), 4);
    }

    #[test]
    fn test_select_tie_keeps_leftmost() {
        let h = headers(&["Entity", "Year", "Share of A", "Share of B"]);
        assert_eq!(score_column("Share of A", None), 15);
        assert_eq!(score_column("Share of B", None), 15);
        assert_eq!(select_value_column(&h, 0, 1, None).unwrap(), 2);
    }

    #[test]
    fn test_select_penalises_footnote_columns() {
        let h = headers(&["Entity", "Year", "Countries without data", "Count"]);
        assert_eq!(select_value_column(&h, 0, 1, None).unwrap(), 3);
    }

    #[test]
    fn test_select_falls_back_to_first_eligible() {
        let h = headers(&["Entity", "Year", "Missing values", "Unavailable values"]);
        assert_eq!(select_value_column(&h, 0, 1, None).unwrap(), 2);
    }

    #[test]
    fn test_select_uses_topic_boost() {
        let h = headers(&["Entity", "Year", "Enrolment rate", "Gender parity index"]);
        assert_eq!(select_value_column(&h, 0, 1, None).unwrap(), 2);
        assert_eq!(select_value_column(&h, 0, 1, Some(PARITY)).unwrap(), 3);
    }

    #[test]
    fn test_select_without_eligible_columns() {
        let h = headers(&["Entity", "Code", "Year"]);
        assert!(matches!(
            select_value_column(&h, 0, 2, None),
            Err(TopicError::NoValueColumn)
        ));
    }

    #[test]
    fn test_locate_parts_accepts_variants() {
        let h = headers(&["Entity", "Year", "num_countries_electoral_democracy", "Liberal democracies"]);
        let parts: &[&[&str]] = &[
            &["electoral democracies", "electoral democracy", "electoral_democracy"],
            &["liberal democracies", "liberal democracy", "liberal_democracy"],
        ];
        assert_eq!(locate_parts(&h, parts), vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_locate_parts_missing_part() {
        let h = headers(&["Entity", "Year", "Electoral democracies"]);
        let parts: &[&[&str]] = &[&["electoral democracies"], &["liberal democracies"]];
        assert_eq!(locate_parts(&h, parts), vec![Some(2), None]);
    }
}
