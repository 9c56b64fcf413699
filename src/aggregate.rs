//! Grouped aggregation over in-memory record tables.
//!
//! The dashboard's chart endpoints reduce a record table to per-group totals
//! or counts. Rows with a blank group key or an unusable value are excluded
//! rather than treated as errors. Output ordering is deterministic: value
//! descending, then group key ascending to break ties.

use std::cmp::Ordering;

use hashbrown::HashMap;

/// One group's summed value.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

/// One group's row count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: u64,
}

/// Sum a numeric column per group.
///
/// Rows whose key is blank or whitespace-only, or whose value accessor yields
/// `None` or a non-finite number, do not contribute. Summation runs at full
/// precision; totals are rounded to 2 decimal places only in the output.
pub fn aggregate_by<R, K, V>(rows: &[R], key: K, value: V) -> Vec<GroupTotal>
where
    K: Fn(&R) -> &str,
    V: Fn(&R) -> Option<f64>,
{
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in rows {
        let key = key(row).trim();
        if key.is_empty() {
            continue;
        }
        let Some(value) = value(row) else {
            continue;
        };
        if !value.is_finite() {
            continue;
        }
        *totals.entry(key.to_string()).or_insert(0.0) += value;
    }

    let mut out: Vec<GroupTotal> = totals
        .into_iter()
        .map(|(key, total)| GroupTotal { key, total })
        .collect();
    out.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });
    for group in &mut out {
        group.total = round2(group.total);
    }
    out
}

/// Count rows per group.
///
/// The key accessor returns the normalised group key, or `None` to exclude
/// the row. Output is sorted by count descending, then key ascending.
pub fn count_by<R, K>(rows: &[R], key: K) -> Vec<GroupCount>
where
    K: Fn(&R) -> Option<String>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for row in rows {
        if let Some(key) = key(row) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    let mut out: Vec<GroupCount> = counts
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    out
}

/// Round to 2 decimal places for output representation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        fuel: &'static str,
        value: Option<f64>,
    }

    fn row(fuel: &'static str, value: f64) -> Row {
        Row {
            fuel,
            value: Some(value),
        }
    }

    fn totals(rows: &[Row]) -> Vec<GroupTotal> {
        aggregate_by(rows, |r: &Row| r.fuel, |r| r.value)
    }

    #[test]
    fn sums_and_sorts_descending() {
        let rows = [row("Coal", 10.0), row("Gas", 30.0), row("Coal", 5.0)];
        let result = totals(&rows);
        assert_eq!(
            vec![
                GroupTotal {
                    key: "Gas".to_string(),
                    total: 30.0
                },
                GroupTotal {
                    key: "Coal".to_string(),
                    total: 15.0
                },
            ],
            result
        );
    }

    #[test]
    fn excludes_blank_keys_and_missing_values() {
        let rows = [
            row("Coal", 10.0),
            row("", 100.0),
            row("   ", 100.0),
            Row {
                fuel: "Gas",
                value: None,
            },
            row("Gas", f64::NAN),
        ];
        let result = totals(&rows);
        assert_eq!(1, result.len());
        assert_eq!("Coal", result[0].key);
        assert_eq!(10.0, result[0].total);
    }

    #[test]
    fn ties_break_by_key_order() {
        let rows = [row("Wind", 5.0), row("Hydro", 5.0), row("Solar", 5.0)];
        let result = totals(&rows);
        let keys: Vec<&str> = result.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(vec!["Hydro", "Solar", "Wind"], keys);
    }

    #[test]
    fn preserves_sum_of_included_rows() {
        let rows: Vec<Row> = (0..100)
            .map(|i| {
                row(
                    if i % 2 == 0 { "Coal" } else { "Gas" },
                    0.1 + (i as f64) * 0.013,
                )
            })
            .collect();
        let input_sum: f64 = rows.iter().filter_map(|r| r.value).sum();
        let output_sum: f64 = totals(&rows).iter().map(|g| g.total).sum();
        assert!((input_sum - output_sum).abs() < 1e-6);
    }

    #[test]
    fn rounds_output_to_two_decimals() {
        let rows = [row("Coal", 1.005), row("Coal", 2.12345)];
        let result = totals(&rows);
        assert_eq!(3.13, result[0].total);
    }

    #[test]
    fn counts_rows_per_group() {
        let rows = [row("Coal", 1.0), row("Gas", 1.0), row("Coal", 1.0)];
        let result = count_by(&rows, |r| {
            let key = r.fuel.trim();
            (!key.is_empty()).then(|| key.to_string())
        });
        assert_eq!(
            vec![
                GroupCount {
                    key: "Coal".to_string(),
                    count: 2
                },
                GroupCount {
                    key: "Gas".to_string(),
                    count: 1
                },
            ],
            result
        );
    }

    #[test]
    fn count_ties_break_by_key() {
        let rows = [row("b", 1.0), row("a", 1.0)];
        let result = count_by(&rows, |r| Some(r.fuel.to_string()));
        assert_eq!("a", result[0].key);
        assert_eq!("b", result[1].key);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(totals(&[]).is_empty());
        assert!(count_by(&[] as &[Row], |r| Some(r.fuel.to_string())).is_empty());
    }
}
