//! Error handling for colstats.
//!
//! The statistics engine itself is total: an empty table produces an empty
//! result and an unparseable cell is routed to the categorical path. The
//! failures collected here come from the edges: loading files, reading the
//! configuration, and asking the grouping step for a column the table does
//! not have.
//!
//! ```
//! use colstats::error::StatsError;
//!
//! fn describe(err: &StatsError) -> String {
//!     match err {
//!         StatsError::MissingGroupColumn(col) => format!("'{col}' column not found"),
//!         StatsError::NoDatasets => "nothing to analyse".to_owned(),
//!         other => other.to_string(),
//!     }
//! }
//! # assert_eq!(describe(&StatsError::NoDatasets), "nothing to analyse");
//! ```
//!
//! The `ResultExt` trait adds `.context()` to any `Result` whose error
//! converts into [`StatsError`]:
//!
//! ```no_run
//! use colstats::error::ResultExt as _;
//!
//! fn read_header(path: &str) -> colstats::error::Result<String> {
//!     let text = std::fs::read_to_string(path).context("Failed to read dataset")?;
//!     Ok(text.lines().next().unwrap_or_default().to_owned())
//! }
//! ```

use std::fmt;

/// Main error type for colstats operations.
#[derive(Debug)]
pub enum StatsError {
    /// I/O errors (opening or reading a dataset)
    Io(std::io::Error),

    /// Malformed CSV input
    Csv(String),

    /// Dataframe errors raised by the polars loader
    DataProcessing(String),

    /// Configuration errors
    Config(String),

    /// File not found or invalid path
    InvalidPath(String),

    /// No dataset was configured or passed on the command line
    NoDatasets,

    /// A grouping column is absent from the table schema
    MissingGroupColumn(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::NoDatasets => write!(f, "No datasets to analyse"),
            Self::MissingGroupColumn(col) => write!(f, "Grouping column '{col}' not found"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StatsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StatsError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for StatsError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for colstats operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<StatsError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: StatsError = e.into();
            StatsError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: StatsError = e.into();
            StatsError::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::MissingGroupColumn("ad_id".to_owned());
        assert_eq!(err.to_string(), "Grouping column 'ad_id' not found");
    }

    #[test]
    fn test_json_error_is_config_error() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: StatsError = parse.expect_err("truncated JSON must fail").into();
        assert!(matches!(err, StatsError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "posts.csv",
        ));

        let result: Result<()> = result.context("Failed to open dataset");
        let msg = result.expect_err("context keeps the error").to_string();
        assert!(msg.contains("Failed to open dataset"), "message was {msg}");
        assert!(msg.contains("posts.csv"), "message was {msg}");
    }
}
