//! Predicate-based subsetting of in-memory record tables.
//!
//! Both filters are forgiving by design: an unrecognised pollutant query or an
//! unparsable year is a no-op that passes every row, never an error.

use crate::models::{MonitorRecord, ScenarioRecord};

/// Filter monitor records by pollutant query.
///
/// The query is case-folded; the recognised queries (`ozone`, `pm`) match as
/// a substring of each record's pollutant label. Anything else, including the
/// legacy `all` value, passes every row.
pub fn filter_by_pollutant<'a>(
    rows: &'a [MonitorRecord],
    query: &str,
) -> Vec<&'a MonitorRecord> {
    let query = query.trim().to_lowercase();
    match query.as_str() {
        "ozone" | "pm" => rows
            .iter()
            .filter(|row| row.pollutant.contains(query.as_str()))
            .collect(),
        _ => rows.iter().collect(),
    }
}

/// Filter scenario records by exact year.
///
/// A year argument that does not parse as an integer passes every row.
pub fn filter_by_year<'a>(rows: &'a [ScenarioRecord], year: &str) -> Vec<&'a ScenarioRecord> {
    match year.trim().parse::<i32>() {
        Ok(year) => rows.iter().filter(|row| row.year == year).collect(),
        Err(_) => rows.iter().collect(),
    }
}
