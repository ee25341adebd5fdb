//! Table loaders.
//!
//! The statistics engine only consumes a [`Table`]; how it is read is up to
//! the [`TableLoader`] the caller injects. Two readers ship with the crate:
//! a record-by-record CSV reader and a polars reader. Both hand every cell
//! over as a raw string, empty for missing values, so the engine sees the
//! same table regardless of the loader.

use super::types::{Row, Table};
use crate::error::{ResultExt as _, Result, StatsError};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Anything that can turn a source location into a [`Table`].
pub trait TableLoader {
    /// # Errors
    ///
    /// Returns an error if the source can't be opened or isn't valid CSV.
    fn load(&self, path: &Path) -> Result<Table>;
}

impl<F> TableLoader for F
where
    F: Fn(&Path) -> Result<Table>,
{
    fn load(&self, path: &Path) -> Result<Table> {
        self(path)
    }
}

/// Which built-in loader to use.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    /// Record-by-record CSV reader
    #[default]
    Csv,
    /// Polars CSV reader
    Polars,
}

impl LoaderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Polars => "polars",
        }
    }

    pub fn loader(self) -> Box<dyn TableLoader> {
        match self {
            Self::Csv => Box::new(CsvLoader::new()),
            Self::Polars => Box::new(PolarsLoader::new()),
        }
    }
}

impl std::fmt::Display for LoaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(StatsError::InvalidPath(format!(
            "{} does not exist or is not a file",
            path.display()
        )))
    }
}

// CSV

/// Reads CSV with a header row using the `csv` crate.
///
/// Records may be shorter or longer than the header: missing cells become
/// empty strings and extra cells are dropped.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    delimiter: u8,
}

impl CsvLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Sets the field delimiter (default: comma).
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads a table from any reader, e.g. an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Csv`] on malformed input.
    pub fn load_from_reader<R: std::io::Read>(&self, reader: R) -> Result<Table> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_owned).collect::<Row>()))
            .collect::<std::result::Result<Vec<Row>, csv::Error>>()?;

        Ok(Table::new(columns, rows))
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableLoader for CsvLoader {
    fn load(&self, path: &Path) -> Result<Table> {
        ensure_file(path)?;
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let table = self
            .load_from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Failed to read CSV {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "Loaded CSV"
        );
        Ok(table)
    }
}

// POLARS

/// Reads CSV through polars' lazy reader with schema inference turned off,
/// so every column arrives as a string column.
#[derive(Debug, Clone)]
pub struct PolarsLoader {
    separator: u8,
}

impl PolarsLoader {
    pub fn new() -> Self {
        Self { separator: b',' }
    }

    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }
}

impl Default for PolarsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableLoader for PolarsLoader {
    fn load(&self, path: &Path) -> Result<Table> {
        ensure_file(path)?;
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_separator(self.separator)
            .with_infer_schema_length(Some(0))
            .finish()
            .with_context(|| format!("Failed to scan CSV {}", path.display()))?
            .collect()
            .with_context(|| format!("Failed to read CSV {}", path.display()))?;

        let table = table_from_df(&df)?;
        tracing::debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "Loaded CSV with polars"
        );
        Ok(table)
    }
}

/// Converts a dataframe to a [`Table`], rendering every cell as a string.
/// Nulls become empty cells.
///
/// # Errors
///
/// Returns [`StatsError::DataProcessing`] if a column can't be cast to strings.
pub fn table_from_df(df: &DataFrame) -> Result<Table> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut rows: Vec<Row> = vec![Vec::with_capacity(columns.len()); df.height()];
    for column in df.get_columns() {
        let strings = column.as_materialized_series().cast(&DataType::String)?;
        for (row, value) in rows.iter_mut().zip(strings.str()?) {
            row.push(value.unwrap_or_default().to_owned());
        }
    }

    Ok(Table::new(columns, rows))
}
