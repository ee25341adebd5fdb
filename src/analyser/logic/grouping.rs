//! Partitioning rows by the values of one or more key columns.

use super::types::{Group, GroupKey, Partition, Row, Table};
use crate::error::{Result, StatsError};
use std::collections::HashMap;

/// Splits `table` into groups keyed by the values of `keys`.
///
/// Key values are taken verbatim, empty strings included. Groups appear in
/// the order their key is first seen and keep their rows in table order.
///
/// # Errors
///
/// Returns [`StatsError::MissingGroupColumn`] for the first key column absent
/// from the table. Callers that want to skip unavailable groupings check
/// [`Table::missing_columns`] beforehand.
pub fn group_by(table: &Table, keys: &[&str]) -> Result<Partition> {
    let indices = keys
        .iter()
        .map(|&key| {
            table
                .column_index(key)
                .ok_or_else(|| StatsError::MissingGroupColumn(key.to_owned()))
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut slots: HashMap<GroupKey, usize> = HashMap::new();
    let mut buckets: Vec<(GroupKey, Vec<Row>)> = Vec::new();

    for row in table.rows() {
        let key = GroupKey(
            indices
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect(),
        );

        let slot = match slots.get(&key) {
            Some(&slot) => slot,
            None => {
                slots.insert(key.clone(), buckets.len());
                buckets.push((key, Vec::new()));
                buckets.len() - 1
            }
        };
        if let Some((_, rows)) = buckets.get_mut(slot) {
            rows.push(row.clone());
        }
    }

    tracing::debug!(
        keys = ?keys,
        groups = buckets.len(),
        rows = table.row_count(),
        "Partitioned table"
    );

    Ok(Partition {
        groups: buckets
            .into_iter()
            .map(|(key, rows)| Group {
                key,
                table: table.with_rows(rows),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_column_is_reported() {
        let table = Table::from_rows(&["page_id"], &[&["1"]]);
        let err = group_by(&table, &["page_id", "ad_id"]).expect_err("ad_id is absent");
        assert!(
            matches!(&err, StatsError::MissingGroupColumn(col) if col == "ad_id"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_empty_table_yields_empty_partition() -> anyhow::Result<()> {
        let table = Table::from_rows(&["page_id"], &[]);
        assert!(group_by(&table, &["page_id"])?.is_empty());
        Ok(())
    }
}
