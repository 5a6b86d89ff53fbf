//! CSV decoding and aggregate-row filtering.

use crate::error::{Result, TopicError};

/// Header names accepted for the entity role.
pub const ENTITY_CANDIDATES: &[&str] = &["Entity", "Country"];
/// Header names accepted for the year role.
pub const YEAR_CANDIDATES: &[&str] = &["Year"];

/// Entity names that denote the global aggregate, compared lowercased.
const AGGREGATE_ENTITIES: &[&str] = &["world", "global"];

/// A decoded CSV payload: one header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Decodes comma-separated bytes whose first record is the header row.
    ///
    /// # Errors
    ///
    /// Returns [`TopicError::Csv`] on malformed input, including rows whose
    /// field count differs from the header.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }
}

/// Returns the index of the first header equal (ignoring ASCII case) to any
/// of `candidates`.
pub fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| candidates.iter().any(|c| h.eq_ignore_ascii_case(c)))
}

/// The resolved entity/year columns and the rows for the global aggregate.
#[derive(Debug)]
pub struct AggregateRows<'a> {
    pub entity_col: usize,
    pub year_col: usize,
    pub rows: Vec<&'a [String]>,
}

/// Keeps the rows whose entity is "World" or "Global".
///
/// # Errors
///
/// Returns [`TopicError::NoUsableData`] when the table has no data rows, when
/// the entity or year column cannot be resolved, or when no row matches.
pub fn aggregate_rows(table: &RawTable) -> Result<AggregateRows<'_>> {
    if table.rows.is_empty() {
        return Err(TopicError::NoUsableData("table has no data rows"));
    }

    let (Some(entity_col), Some(year_col)) = (
        find_column(&table.headers, ENTITY_CANDIDATES),
        find_column(&table.headers, YEAR_CANDIDATES),
    ) else {
        return Err(TopicError::NoUsableData("missing entity or year column"));
    };

    let rows: Vec<&[String]> = table
        .rows
        .iter()
        .filter(|row| {
            row.get(entity_col).is_some_and(|entity| {
                let entity = entity.to_lowercase();
                AGGREGATE_ENTITIES.contains(&entity.as_str())
            })
        })
        .map(Vec::as_slice)
        .collect();

    if rows.is_empty() {
        return Err(TopicError::NoUsableData("no world data found"));
    }

    Ok(AggregateRows {
        entity_col,
        year_col,
        rows,
    })
}
