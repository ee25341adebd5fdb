//! Analysis configuration.
//!
//! Everything the analysis flow needs is passed in explicitly through an
//! [`AnalysisConfig`]: the datasets to read, the loader, and the grouping
//! policy. It can be read from a JSON file, where every field is optional:
//!
//! ```json
//! {
//!   "datasets": [{ "label": "Facebook Posts", "path": "fb_posts.csv" }],
//!   "loader": "polars",
//!   "max_groups": 5
//! }
//! ```
//!
//! Command-line flags are applied on top of the file.

use crate::analyser::logic::io::LoaderKind;
use crate::analyser::logic::types::{DatasetSource, Table};
use crate::error::{Result, ResultExt as _, StatsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PRIMARY_KEY: &str = "page_id";
pub const DEFAULT_SECONDARY_KEY: &str = "ad_id";
pub const DEFAULT_MAX_GROUPS: usize = 3;

/// Identifier columns probed, in order, when keys are detected automatically.
pub const DEFAULT_ID_CANDIDATES: &[&str] = &[
    "page_id",
    "ad_id",
    "user_id",
    "tweet_id",
    "post_id",
    "account_id",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Datasets to analyse, in order.
    pub datasets: Vec<DatasetSource>,
    pub loader: LoaderKind,
    /// Column for the single-key grouping.
    pub primary_key: String,
    /// Second column of the composite grouping.
    pub secondary_key: String,
    /// Number of groups reported per grouping, in first-occurrence order.
    pub max_groups: usize,
    /// Pick grouping keys from `id_candidates` instead of the fixed keys.
    pub auto_detect_keys: bool,
    pub id_candidates: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            datasets: Vec::new(),
            loader: LoaderKind::default(),
            primary_key: DEFAULT_PRIMARY_KEY.to_owned(),
            secondary_key: DEFAULT_SECONDARY_KEY.to_owned(),
            max_groups: DEFAULT_MAX_GROUPS,
            auto_detect_keys: false,
            id_candidates: DEFAULT_ID_CANDIDATES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

/// The groupings to run against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingPlan {
    /// Each entry is a list of key columns; absent columns make that
    /// grouping a reported skip.
    Keys(Vec<Vec<String>>),
    /// Automatic detection found none of the candidate columns.
    NoCandidates(Vec<String>),
}

impl AnalysisConfig {
    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read, isn't valid JSON, or
    /// fails [`AnalysisConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the default location if a file
    /// exists there, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`AnalysisConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(default) if default.is_file() => {
                tracing::debug!(path = %default.display(), "Using default config file");
                Self::load(&default)
            }
            _ => Ok(Self::default()),
        }
    }

    /// # Errors
    ///
    /// Returns [`StatsError::Config`] for a zero group cap or blank key names.
    pub fn validate(&self) -> Result<()> {
        if self.max_groups == 0 {
            return Err(StatsError::Config("max_groups must be at least 1".to_owned()));
        }
        if self.primary_key.trim().is_empty() || self.secondary_key.trim().is_empty() {
            return Err(StatsError::Config("grouping keys must not be blank".to_owned()));
        }
        Ok(())
    }

    /// Appends a dataset labelled with the file stem of `path`.
    pub fn push_path(&mut self, path: PathBuf) {
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.datasets.push(DatasetSource { label, path });
    }

    /// Resolves which groupings to run for `table`.
    ///
    /// With fixed keys this is always the primary key alone, then the
    /// primary and secondary keys together. With detection enabled the
    /// first two candidate columns present in the table take those roles,
    /// and only the groupings that can actually run are planned.
    pub fn grouping_plan(&self, table: &Table) -> GroupingPlan {
        if !self.auto_detect_keys {
            return GroupingPlan::Keys(vec![
                vec![self.primary_key.clone()],
                vec![self.primary_key.clone(), self.secondary_key.clone()],
            ]);
        }

        let available: Vec<&String> = self
            .id_candidates
            .iter()
            .filter(|c| table.has_column(c))
            .collect();
        tracing::debug!(?available, "Detected identifier columns");

        match available.as_slice() {
            [] => GroupingPlan::NoCandidates(self.id_candidates.clone()),
            [primary] => GroupingPlan::Keys(vec![vec![(*primary).clone()]]),
            [primary, secondary, ..] => GroupingPlan::Keys(vec![
                vec![(*primary).clone()],
                vec![(*primary).clone(), (*secondary).clone()],
            ]),
        }
    }
}

/// Default config file location, e.g. `~/.config/colstats/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("colstats").join("config.json"))
}
