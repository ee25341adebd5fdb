//! # colstats - descriptive statistics for CSV datasets
//!
//! colstats reads a CSV file into an in-memory [`Table`](analyser::logic::Table)
//! and reports, per column:
//!
//! - numeric columns: count, mean, min, max and population standard deviation;
//! - other columns: count, number of distinct values and the most frequent one.
//!
//! The same statistics can be computed per group after partitioning the rows by
//! one key column, then by a two-column composite key.
//!
//! ## Quick Start
//!
//! ```
//! use colstats::analyser::logic::{ColumnStatistic, Table, compute_stats};
//!
//! let table = Table::from_rows(
//!     &["page_id", "likes"],
//!     &[&["p1", "2"], &["p1", "4"], &["p2", ""]],
//! );
//! let stats = compute_stats(&table);
//!
//! assert_eq!(
//!     stats.stat("likes"),
//!     Some(&ColumnStatistic::Numeric { count: 2, mean: 3.0, min: 2.0, max: 4.0, std_dev: 1.0 })
//! );
//! ```
//!
//! ## Loading data
//!
//! The engine never reads files itself. A [`TableLoader`](analyser::logic::TableLoader)
//! is injected by the caller; [`CsvLoader`](analyser::logic::CsvLoader) and
//! [`PolarsLoader`](analyser::logic::PolarsLoader) ship with the crate, and any
//! `Fn(&Path) -> Result<Table>` closure works too.
//!
//! ```no_run
//! use colstats::analyser::logic::{LoaderKind, analyse_datasets, render_text};
//! use colstats::config::AnalysisConfig;
//!
//! let mut config = AnalysisConfig::default();
//! config.push_path("2024_fb_posts.csv".into());
//!
//! let loader = LoaderKind::Csv.loader();
//! let reports = analyse_datasets(&config, loader.as_ref())?;
//! print!("{}", render_text(&reports));
//! # Ok::<(), colstats::error::StatsError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`analyser::logic`]: table model, classification, statistics, grouping,
//!   loaders, analysis flow and report rendering
//! - [`config`]: explicit analysis configuration
//! - [`error`]: error type and context helpers
//! - [`logging`]: tracing subscriber setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
pub mod utils;
