pub mod classify;
pub mod flows;
pub mod grouping;
pub mod io;
pub mod profiling;
pub mod report;
pub mod types;

pub use classify::{is_numeric, parse_numeric};
pub use flows::{analyse_dataset, analyse_datasets, analyse_grouping, analyse_table};
pub use grouping::group_by;
pub use io::{CsvLoader, LoaderKind, PolarsLoader, TableLoader};
pub use profiling::compute_stats;
pub use report::{OutputFormat, render, render_json, render_text};
pub use types::{
    ColumnStatistic, ColumnStatsMap, ColumnSummary, DatasetReport, DatasetSource, GroupKey,
    GroupReport, GroupingOutcome, GroupingReport, Partition, Row, Table,
};
