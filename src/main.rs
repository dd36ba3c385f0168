//! Stride Metrics CLI
//!
//! Builds dashboard reports (period stats, trends, weekly chart)
//! from a workout file or the workout store API.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use stride_metrics::aggregator::{Period, WorkoutFilter};
use stride_metrics::commands::{
    display_schema, display_version, execute_report, validate_args, validate_report_file,
    ReportArgs, WorkoutSource,
};
use stride_metrics::parser::parse_timestamp;
use stride_metrics::utils::config::DEFAULT_STORE_URL;

/// Stride Metrics - comparative workout dashboards
#[derive(Parser, Debug)]
#[command(name = "stride-metrics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a dashboard report
    Report {
        /// JSON file with an array of workouts
        #[arg(short, long, conflicts_with = "api", required_unless_present = "api")]
        file: Option<PathBuf>,

        /// Workout store base URL; `--api` alone uses http://localhost:8080/api
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_STORE_URL)]
        api: Option<String>,

        /// Bearer token for the workout store
        #[arg(long, env = "STRIDE_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Period to compare: week, month or all
        #[arg(short, long, default_value = "week")]
        period: Period,

        /// Reference instant (RFC 3339, or local time without offset); defaults to now
        #[arg(long)]
        as_of: Option<String>,

        /// Only include workouts of this type (easy, interval, tempo, long_run, race)
        #[arg(long = "type")]
        workout_type: Option<String>,

        /// Only include workouts from the last N months
        #[arg(long)]
        months: Option<u32>,

        /// Output path for JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            file,
            api,
            token,
            period,
            as_of,
            workout_type,
            months,
            output,
            summary,
        } => {
            let source = match (file, api) {
                (Some(path), _) => WorkoutSource::File(path),
                (None, Some(base_url)) => WorkoutSource::Api { base_url, token },
                (None, None) => anyhow::bail!("Either --file or --api is required"),
            };

            let as_of: Option<DateTime<Utc>> = as_of
                .as_deref()
                .map(parse_timestamp)
                .transpose()
                .context("Invalid --as-of value")?;

            let args = ReportArgs {
                source,
                period,
                as_of,
                filter: WorkoutFilter {
                    workout_type,
                    months_back: months,
                },
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
