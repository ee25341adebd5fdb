use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use colstats::analyser::logic::{
    LoaderKind, OutputFormat, TableLoader as _, analyse_datasets, compute_stats, render,
};
use colstats::config::AnalysisConfig;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "colstats",
    version,
    about = "Descriptive column statistics for CSV datasets"
)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute overall and grouped statistics for one or more datasets
    Analyze {
        /// CSV files to analyse, labelled by file stem. Added after any datasets from the config file.
        files: Vec<PathBuf>,

        /// Path to a JSON configuration file
        #[arg(long, env = "COLSTATS_CONFIG")]
        config: Option<PathBuf>,

        /// Table loader to read the files with
        #[arg(long, value_enum)]
        loader: Option<LoaderKind>,

        /// Column for the single-key grouping
        #[arg(long)]
        primary_key: Option<String>,

        /// Second column of the composite grouping
        #[arg(long)]
        secondary_key: Option<String>,

        /// Number of groups to report per grouping
        #[arg(long)]
        max_groups: Option<usize>,

        /// Detect grouping keys from common identifier columns
        #[arg(long)]
        auto_keys: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show the shape and columns of a dataset
    Columns {
        /// CSV file to inspect
        file: PathBuf,

        /// Table loader to read the file with
        #[arg(long, value_enum, default_value_t = LoaderKind::Csv)]
        loader: LoaderKind,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            files,
            config,
            loader,
            primary_key,
            secondary_key,
            max_groups,
            auto_keys,
            format,
        } => {
            let mut config = AnalysisConfig::load_or_default(config.as_deref())
                .context("Failed to load configuration")?;
            if let Some(loader) = loader {
                config.loader = loader;
            }
            if let Some(key) = primary_key {
                config.primary_key = key;
            }
            if let Some(key) = secondary_key {
                config.secondary_key = key;
            }
            if let Some(max) = max_groups {
                config.max_groups = max;
            }
            config.auto_detect_keys |= auto_keys;
            for file in files {
                config.push_path(file);
            }
            config.validate().context("Invalid options")?;

            handle_analyze(&config, format)
        }
        Commands::Columns { file, loader } => handle_columns(&file, loader),
    }
}

#[expect(clippy::print_stdout)]
fn handle_analyze(config: &AnalysisConfig, format: OutputFormat) -> Result<()> {
    tracing::info!(
        datasets = config.datasets.len(),
        loader = %config.loader,
        "Starting analysis"
    );

    let loader = config.loader.loader();
    let reports = analyse_datasets(config, loader.as_ref()).context("Analysis failed")?;
    let output = render(&reports, format).context("Failed to render report")?;
    print!("{output}");
    Ok(())
}

#[expect(clippy::print_stdout)]
fn handle_columns(file: &Path, loader: LoaderKind) -> Result<()> {
    let table = loader
        .loader()
        .load(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let stats = compute_stats(&table);

    println!("Shape: ({}, {})", table.row_count(), table.column_count());
    for name in table.columns() {
        let kind = stats.stat(name).map_or("empty", |s| s.kind_label());
        println!("  {name}: {kind}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_analyze_options() {
        let cli = Cli::try_parse_from([
            "colstats",
            "analyze",
            "posts.csv",
            "--loader",
            "polars",
            "--max-groups",
            "5",
            "--format",
            "json",
        ])
        .expect("arguments are valid");

        let Commands::Analyze {
            files,
            loader,
            max_groups,
            format,
            ..
        } = cli.command
        else {
            panic!("expected the analyze command");
        };
        assert_eq!(files, vec![PathBuf::from("posts.csv")]);
        assert_eq!(loader, Some(LoaderKind::Polars));
        assert_eq!(max_groups, Some(5));
        assert_eq!(format, OutputFormat::Json);
    }
}
