use super::grouping::group_by;
use super::io::TableLoader;
use super::profiling::compute_stats;
use super::types::{
    DatasetReport, DatasetSource, GroupReport, GroupingOutcome, GroupingReport, Table,
};
use crate::config::{AnalysisConfig, GroupingPlan};
use crate::error::{Result, ResultExt as _, StatsError};

/// Loads and analyses every configured dataset, in order.
///
/// # Errors
///
/// Fails with [`StatsError::NoDatasets`] when none are configured, or with
/// the first load error.
pub fn analyse_datasets(
    config: &AnalysisConfig,
    loader: &dyn TableLoader,
) -> Result<Vec<DatasetReport>> {
    if config.datasets.is_empty() {
        return Err(StatsError::NoDatasets);
    }

    config
        .datasets
        .iter()
        .map(|source| analyse_dataset(source, config, loader))
        .collect()
}

/// Loads one dataset and runs [`analyse_table`] on it.
///
/// # Errors
///
/// Returns the loader's error with the dataset label attached.
pub fn analyse_dataset(
    source: &DatasetSource,
    config: &AnalysisConfig,
    loader: &dyn TableLoader,
) -> Result<DatasetReport> {
    let start = std::time::Instant::now();
    let table = loader
        .load(&source.path)
        .with_context(|| format!("Failed to load dataset '{}'", source.label))?;

    let report = analyse_table(source, &table, config)?;
    tracing::info!(
        label = %source.label,
        rows = report.row_count,
        columns = report.column_count,
        elapsed_ms = start.elapsed().as_millis(),
        "Dataset analysed"
    );
    Ok(report)
}

/// Overall statistics, then one entry per planned grouping.
///
/// Groupings whose columns are missing are reported as skipped.
///
/// # Errors
///
/// Only fails if grouping rejects a column that the plan checked as present.
pub fn analyse_table(
    source: &DatasetSource,
    table: &Table,
    config: &AnalysisConfig,
) -> Result<DatasetReport> {
    let overall = compute_stats(table);
    if table.is_empty() {
        tracing::warn!(label = %source.label, "Dataset has no rows, no statistics computed");
    }

    let groupings = match config.grouping_plan(table) {
        GroupingPlan::Keys(key_sets) => key_sets
            .iter()
            .map(|keys| analyse_grouping(table, keys, config.max_groups))
            .collect::<Result<Vec<_>>>()?,
        GroupingPlan::NoCandidates(candidates) => {
            tracing::warn!(?candidates, "No identifier columns found, skipping grouped analysis");
            vec![GroupingReport {
                keys: Vec::new(),
                outcome: GroupingOutcome::Skipped {
                    missing: candidates,
                },
            }]
        }
    };

    Ok(DatasetReport {
        label: source.label.clone(),
        path: source.path.clone(),
        row_count: table.row_count(),
        column_count: table.column_count(),
        columns: table.columns().to_vec(),
        overall,
        groupings,
    })
}

/// Statistics for the first `max_groups` groups of `keys`, or a skip when
/// a key column is absent.
///
/// # Errors
///
/// See [`analyse_table`].
pub fn analyse_grouping(table: &Table, keys: &[String], max_groups: usize) -> Result<GroupingReport> {
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();

    let missing = table.missing_columns(&key_refs);
    if !missing.is_empty() {
        tracing::warn!(?keys, ?missing, "Grouping column not found, skipping grouping");
        return Ok(GroupingReport {
            keys: keys.to_vec(),
            outcome: GroupingOutcome::Skipped {
                missing: missing.into_iter().map(str::to_owned).collect(),
            },
        });
    }

    let partition = group_by(table, &key_refs)?;
    let groups = partition
        .groups()
        .iter()
        .take(max_groups)
        .map(|group| GroupReport {
            key: group.key.clone(),
            size: group.table.row_count(),
            stats: compute_stats(&group.table),
        })
        .collect();

    Ok(GroupingReport {
        keys: keys.to_vec(),
        outcome: GroupingOutcome::Grouped {
            total_groups: partition.len(),
            groups,
        },
    })
}
