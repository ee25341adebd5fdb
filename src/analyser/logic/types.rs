use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder reported as the most frequent value of a column with no values.
pub const NO_VALUE: &str = "N/A";

/// One record of a [`Table`], cells aligned with the table's column list.
pub type Row = Vec<String>;

/// In-memory rectangular dataset: named columns, rows of raw string cells.
///
/// An empty string cell means "missing". Every row holds exactly one cell per
/// column; [`Table::new`] pads short rows and drops surplus cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: impl IntoIterator<Item = Row>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Convenience constructor for literals, mostly useful in tests.
    pub fn from_rows(columns: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            columns.iter().map(|c| (*c).to_owned()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|v| (*v).to_owned()).collect()),
        )
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Names from `names` that are absent from the schema, in the given order.
    pub fn missing_columns<'a>(&self, names: &[&'a str]) -> Vec<&'a str> {
        names
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }

    /// Iterates one column's cells in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(index).map(String::as_str))
    }

    /// Builds a table with the same columns over a subset of rows.
    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// Descriptive statistics for one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnStatistic {
    Numeric {
        count: usize,
        mean: f64,
        min: f64,
        max: f64,
        std_dev: f64,
    },
    Categorical {
        count: usize,
        unique_count: usize,
        most_frequent: (String, usize),
    },
}

impl ColumnStatistic {
    pub fn count(&self) -> usize {
        match self {
            Self::Numeric { count, .. } | Self::Categorical { count, .. } => *count,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Numeric { .. } => "numeric",
            Self::Categorical { .. } => "non-numeric",
        }
    }
}

/// A column's entry in a [`ColumnStatsMap`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub stat: ColumnStatistic,
    /// Number of empty cells excluded from the statistic.
    pub missing: usize,
    /// Up to three most frequent non-empty values, most frequent first.
    pub top_values: Vec<(String, usize)>,
}

/// Column name to statistics, in the source table's column order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnStatsMap {
    entries: Vec<ColumnSummary>,
}

impl ColumnStatsMap {
    pub(crate) fn from_summaries(entries: Vec<ColumnSummary>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSummary> {
        self.entries.iter().find(|s| s.name == name)
    }

    pub fn stat(&self, name: &str) -> Option<&ColumnStatistic> {
        self.get(name).map(|s| &s.stat)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnSummary> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn numeric_count(&self) -> usize {
        self.entries.iter().filter(|s| s.stat.is_numeric()).count()
    }
}

impl<'a> IntoIterator for &'a ColumnStatsMap {
    type Item = &'a ColumnSummary;
    type IntoIter = std::slice::Iter<'a, ColumnSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values of the grouping columns identifying one partition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupKey(pub Vec<String>);

impl GroupKey {
    pub fn values(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "('{single}',)"),
            values => {
                let quoted: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
                write!(f, "({})", quoted.join(", "))
            }
        }
    }
}

/// Rows sharing one [`GroupKey`], kept as a table with the parent's columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub key: GroupKey,
    pub table: Table,
}

/// Groups in first-occurrence key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub(crate) groups: Vec<Group>,
}

impl Partition {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, key: &GroupKey) -> Option<&Table> {
        self.groups.iter().find(|g| &g.key == key).map(|g| &g.table)
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> + '_ {
        self.groups.iter().map(|g| &g.key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// REPORTS

/// A labelled dataset location, as listed in the configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSource {
    pub label: String,
    pub path: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupReport {
    pub key: GroupKey,
    pub size: usize,
    pub stats: ColumnStatsMap,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupingOutcome {
    /// Some grouping columns are absent; nothing was partitioned.
    Skipped { missing: Vec<String> },
    /// The first groups in first-occurrence order, capped by `max_groups`.
    Grouped {
        total_groups: usize,
        groups: Vec<GroupReport>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupingReport {
    pub keys: Vec<String>,
    pub outcome: GroupingOutcome,
}

impl GroupingReport {
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, GroupingOutcome::Skipped { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    pub label: String,
    pub path: PathBuf,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
    pub overall: ColumnStatsMap,
    pub groupings: Vec<GroupingReport>,
}

impl DatasetReport {
    /// Columns with at least one missing cell, most missing first.
    pub fn missing_values(&self) -> Vec<(&str, usize)> {
        let mut missing: Vec<(&str, usize)> = self
            .overall
            .iter()
            .filter(|s| s.missing > 0)
            .map(|s| (s.name.as_str(), s.missing))
            .collect();
        missing.sort_by(|a, b| b.1.cmp(&a.1));
        missing
    }
}
