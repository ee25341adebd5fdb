//! Rendering of dataset reports for the console.
//!
//! Text output mirrors the layout analysts are used to from the notebook
//! version of this tool: a banner per dataset, the overall statistics, then
//! one section per reported group. JSON output is the serialized report list.

use super::types::{ColumnStatistic, ColumnStatsMap, DatasetReport, GroupingOutcome, GroupingReport};
use crate::error::Result;
use crate::utils::{fmt_float, fmt_pairs};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sections
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Renders reports in the requested format.
///
/// # Errors
///
/// Only JSON serialization can fail.
pub fn render(reports: &[DatasetReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

/// # Errors
///
/// Returns [`crate::error::StatsError::Config`] if serialization fails.
pub fn render_json(reports: &[DatasetReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

pub fn render_text(reports: &[DatasetReport]) -> String {
    let mut out = String::new();
    for report in reports {
        render_dataset(&mut out, report);
    }
    out
}

fn render_dataset(out: &mut String, report: &DatasetReport) {
    out.push_str(&format!(
        "\n==================== Analyzing: {} ====================\n",
        report.label
    ));
    out.push_str(&format!(
        "Shape: ({}, {})\n",
        report.row_count, report.column_count
    ));
    out.push_str(&format!("Columns: [{}]\n", report.columns.join(", ")));

    let numeric = report.overall.numeric_count();
    out.push_str(&format!(
        "Types: {numeric} numeric, {} non-numeric\n",
        report.overall.len() - numeric
    ));

    render_stats(out, "Overall Dataset", &report.overall);

    for grouping in &report.groupings {
        render_grouping(out, grouping);
    }

    out.push_str("\n--- Missing Values ---\n");
    let missing = report.missing_values();
    if missing.is_empty() {
        out.push_str("No missing values found!\n");
    } else {
        for (name, count) in missing {
            out.push_str(&format!("{name}: {count}\n"));
        }
    }
}

fn render_grouping(out: &mut String, grouping: &GroupingReport) {
    let keys_label = match grouping.keys.as_slice() {
        [single] => single.clone(),
        keys => format!("({})", keys.join(", ")),
    };

    match &grouping.outcome {
        GroupingOutcome::Skipped { missing } if grouping.keys.is_empty() => {
            out.push_str(&format!(
                "\nNo common ID columns found (checked: {}), skipping grouped analysis.\n",
                missing.join(", ")
            ));
        }
        GroupingOutcome::Skipped { missing } => {
            let quoted: Vec<String> = missing.iter().map(|m| format!("'{m}'")).collect();
            let noun = if missing.len() == 1 { "column" } else { "columns" };
            out.push_str(&format!(
                "\n{} {noun} not found, skipping {keys_label} grouping.\n",
                quoted.join(", ")
            ));
        }
        GroupingOutcome::Grouped {
            total_groups,
            groups,
        } => {
            for group in groups {
                let label = format!(
                    "Group by {keys_label}: {} [{} rows]",
                    group.key, group.size
                );
                render_stats(out, &label, &group.stats);
            }
            if *total_groups > groups.len() {
                out.push_str(&format!(
                    "\n({} of {total_groups} groups by {keys_label} shown)\n",
                    groups.len()
                ));
            }
        }
    }
}

fn render_stats(out: &mut String, label: &str, stats: &ColumnStatsMap) {
    out.push_str(&format!("\n--- {label} ---\n"));
    if stats.is_empty() {
        out.push_str("(no rows)\n");
        return;
    }

    for summary in stats {
        out.push_str(&format!("\nColumn: {}\n", summary.name));
        out.push_str(&format!("  type: {}\n", summary.stat.kind_label()));
        match &summary.stat {
            ColumnStatistic::Numeric {
                count,
                mean,
                min,
                max,
                std_dev,
            } => {
                out.push_str(&format!("  count: {count}\n"));
                out.push_str(&format!("  mean: {}\n", fmt_float(*mean)));
                out.push_str(&format!("  min: {}\n", fmt_float(*min)));
                out.push_str(&format!("  max: {}\n", fmt_float(*max)));
                out.push_str(&format!("  std_dev: {}\n", fmt_float(*std_dev)));
            }
            ColumnStatistic::Categorical {
                count,
                unique_count,
                most_frequent,
            } => {
                out.push_str(&format!("  count: {count}\n"));
                out.push_str(&format!("  unique_values: {unique_count}\n"));
                out.push_str(&format!(
                    "  most_frequent: ('{}', {})\n",
                    most_frequent.0, most_frequent.1
                ));
            }
        }
        out.push_str(&format!("  top_values: {}\n", fmt_pairs(&summary.top_values)));
        out.push_str(&format!("  missing: {}\n", summary.missing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyser::logic::types::{DatasetSource, Table};
    use crate::analyser::logic::flows::analyse_table;
    use crate::config::AnalysisConfig;

    fn sample_report() -> anyhow::Result<DatasetReport> {
        let table = Table::from_rows(
            &["page_id", "likes"],
            &[&["p1", "10"], &["p2", ""], &["p1", "30"]],
        );
        let source = DatasetSource {
            label: "Posts".to_owned(),
            path: "posts.csv".into(),
        };
        Ok(analyse_table(&source, &table, &AnalysisConfig::default())?)
    }

    #[test]
    fn test_text_report_sections() -> anyhow::Result<()> {
        let text = render_text(&[sample_report()?]);

        assert!(text.contains("Analyzing: Posts"), "{text}");
        assert!(text.contains("Shape: (3, 2)"), "{text}");
        assert!(text.contains("--- Overall Dataset ---"), "{text}");
        assert!(text.contains("Group by page_id: ('p1',) [2 rows]"), "{text}");
        assert!(
            text.contains("'ad_id' column not found, skipping (page_id, ad_id) grouping."),
            "{text}"
        );
        assert!(text.contains("likes: 1"), "{text}");
        Ok(())
    }

    #[test]
    fn test_json_report_is_parseable() -> anyhow::Result<()> {
        let json = render(&[sample_report()?], OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(value[0]["label"], "Posts");
        assert_eq!(value[0]["overall"][1]["stat"]["type"], "numeric");
        assert_eq!(value[0]["groupings"][1]["outcome"]["status"], "skipped");
        Ok(())
    }
}
