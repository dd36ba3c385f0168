//! Report command implementation.
//!
//! The report command:
//! 1. Loads workouts from a file or the workout store
//! 2. Applies the optional type/month filter
//! 3. Builds the dashboard for the selected period
//! 4. Writes the JSON report and/or prints a text summary

use crate::aggregator::{build_dashboard, recent_workouts, Period, WorkoutFilter};
use crate::output::{generate_text_summary, report_to_string, write_report, Report};
use crate::parser::{parse_workouts_str, WorkoutRecord};
use crate::store::WorkoutStoreClient;
use crate::utils::config::{MAX_MONTHS_BACK, RECENT_WORKOUTS_LIMIT};
use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Where workouts are loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutSource {
    /// JSON file holding an array of workouts
    File(PathBuf),
    /// Workout store base URL
    Api { base_url: String, token: Option<String> },
}

impl WorkoutSource {
    /// Human-readable origin, recorded in the report
    pub fn describe(&self) -> String {
        match self {
            WorkoutSource::File(path) => path.display().to_string(),
            WorkoutSource::Api { base_url, .. } => base_url.clone(),
        }
    }
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub source: WorkoutSource,

    /// Period for comparative metrics
    pub period: Period,

    /// Reference instant (defaults to the current local time)
    pub as_of: Option<DateTime<Utc>>,

    /// Optional filter applied before aggregation
    pub filter: WorkoutFilter,

    /// Output path for JSON report (None = print JSON to stdout unless summary is requested)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            source: WorkoutSource::File(PathBuf::from("workouts.json")),
            period: Period::Week,
            as_of: None,
            filter: WorkoutFilter::default(),
            output_json: Some(PathBuf::from("report.json")),
            print_summary: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Store connection failures
/// * Workout decoding errors
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Building {} report from: {}", args.period, args.source.describe());

    // Step 1: Load workouts
    info!("Step 1/3: Loading workouts...");
    let workouts = load_workouts(&args.source).context("Failed to load workouts")?;

    // Step 2: Aggregate
    info!("Step 2/3: Aggregating {} workouts...", workouts.len());
    let now = args
        .as_of
        .map(|t| t.with_timezone(&Local))
        .unwrap_or_else(Local::now);

    let selected: Vec<WorkoutRecord> = if args.filter.is_empty() {
        workouts
    } else {
        args.filter.apply(&workouts, &now).into_iter().cloned().collect()
    };

    let dashboard = build_dashboard(&selected, args.period, &now);
    info!("Totals: {}", dashboard.totals.summary());
    debug!("Weekly chart scale: {:.1} km", dashboard.weekly_chart.scale);

    // Step 3: Write outputs
    info!("Step 3/3: Writing outputs...");
    let report = Report::new(args.source.describe(), now.to_rfc3339(), dashboard);

    match &args.output_json {
        Some(path) => {
            write_report(&report, path).context("Failed to write report JSON")?;
            info!("✓ Report written to: {}", path.display());
        }
        None if !args.print_summary => {
            println!("{}", report_to_string(&report).context("Failed to serialize report")?);
        }
        None => {}
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("DASHBOARD SUMMARY");
        println!("{}", "=".repeat(60));
        println!(
            "{}",
            generate_text_summary(&report.dashboard, recent_workouts(&selected, RECENT_WORKOUTS_LIMIT))
        );
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Load workouts from the configured source
///
/// **Public** - also used by tests and the validate flow
pub fn load_workouts(source: &WorkoutSource) -> Result<Vec<WorkoutRecord>> {
    match source {
        WorkoutSource::File(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let workouts = parse_workouts_str(&content)
                .with_context(|| format!("Failed to decode workouts in {}", path.display()))?;
            Ok(workouts)
        }
        WorkoutSource::Api { base_url, token } => {
            let mut client =
                WorkoutStoreClient::new(base_url.as_str()).context("Failed to create store client")?;
            if let Some(token) = token {
                client = client.with_token(token.as_str());
            }
            let workouts = client
                .fetch_workouts()
                .with_context(|| format!("Failed to fetch workouts from {}", base_url))?;
            Ok(workouts)
        }
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    match &args.source {
        WorkoutSource::File(path) => {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Workout file path cannot be empty");
            }
            if !path.is_file() {
                anyhow::bail!("Workout file not found: {}", path.display());
            }
        }
        WorkoutSource::Api { base_url, token } => {
            if base_url.is_empty() {
                anyhow::bail!("Store URL cannot be empty");
            }
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                anyhow::bail!("Store URL must start with http:// or https://");
            }
            if matches!(token, Some(t) if t.trim().is_empty()) {
                anyhow::bail!("Token cannot be blank");
            }
        }
    }

    if let Some(months) = args.filter.months_back {
        if months == 0 {
            anyhow::bail!("months must be greater than 0");
        }
        if months > MAX_MONTHS_BACK {
            anyhow::bail!("months is too large (max {})", MAX_MONTHS_BACK);
        }
    }

    if matches!(&args.filter.workout_type, Some(t) if t.trim().is_empty()) {
        anyhow::bail!("Workout type cannot be blank");
    }

    Ok(())
}
