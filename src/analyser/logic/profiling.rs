//! Per-column descriptive statistics.
//!
//! Each column is profiled independently over its non-empty cells:
//!
//! - If any cell is numeric the column is numeric. Cells that fail to parse
//!   are left out of the aggregate rather than coerced, so a mostly numeric
//!   column with a little noise still reports sensible figures.
//! - Otherwise the column is categorical and reports distinct values and the
//!   most frequent one.
//!
//! Standard deviation is the population form (divisor `count`).

use super::classify::parse_numeric;
use super::types::{ColumnStatistic, ColumnStatsMap, ColumnSummary, NO_VALUE, Table};
use std::collections::HashMap;

/// How many of the most frequent values are kept per column.
pub const TOP_VALUES: usize = 3;

/// Computes statistics for every column of `table`, in column order.
///
/// A table without rows yields an empty map.
pub fn compute_stats(table: &Table) -> ColumnStatsMap {
    if table.is_empty() {
        return ColumnStatsMap::default();
    }

    let summaries = table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| summarise_column(name, table.column_values(index)))
        .collect();

    ColumnStatsMap::from_summaries(summaries)
}

/// Profiles one column from its raw cells.
pub fn summarise_column<'a>(name: &str, cells: impl IntoIterator<Item = &'a str>) -> ColumnSummary {
    let mut missing = 0;
    let mut present = Vec::new();
    for cell in cells {
        if cell.is_empty() {
            missing += 1;
        } else {
            present.push(cell);
        }
    }

    let frequencies = count_frequencies(&present);
    let stat = column_statistic(&present, &frequencies);

    ColumnSummary {
        name: name.to_owned(),
        stat,
        missing,
        top_values: top_values(&frequencies, TOP_VALUES),
    }
}

/// Statistic for a column's non-empty cells.
pub fn column_statistic(values: &[&str], frequencies: &[(String, usize)]) -> ColumnStatistic {
    let numeric: Vec<f64> = values.iter().filter_map(|v| parse_numeric(v)).collect();
    numeric_statistic(&numeric).unwrap_or_else(|| categorical_statistic(values.len(), frequencies))
}

/// Count, mean, extrema and population standard deviation; `None` for no values.
pub fn numeric_statistic(values: &[f64]) -> Option<ColumnStatistic> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let n = count as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Rounding in the sum can push the mean just past the extrema.
    let mean = (values.iter().sum::<f64>() / n).clamp(min, max);
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    Some(ColumnStatistic::Numeric {
        count,
        mean,
        min,
        max,
        std_dev: variance.sqrt(),
    })
}

fn categorical_statistic(count: usize, frequencies: &[(String, usize)]) -> ColumnStatistic {
    let most_frequent = top_values(frequencies, 1)
        .into_iter()
        .next()
        .unwrap_or_else(|| (NO_VALUE.to_owned(), 0));

    ColumnStatistic::Categorical {
        count,
        unique_count: frequencies.len(),
        most_frequent,
    }
}

/// Occurrence counts in first-seen order.
pub fn count_frequencies(values: &[&str]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for &value in values {
        match index.get(value) {
            Some(&slot) => {
                if let Some(entry) = counts.get_mut(slot) {
                    entry.1 += 1;
                }
            }
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_owned(), 1));
            }
        }
    }

    counts
}

/// The `n` most frequent entries; ties keep first-seen order.
pub fn top_values(frequencies: &[(String, usize)], n: usize) -> Vec<(String, usize)> {
    let mut ranked = frequencies.to_vec();
    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
