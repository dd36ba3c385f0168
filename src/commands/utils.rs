use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;
    let dashboard = &report.dashboard;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  As of: {}", report.as_of);
    println!("  Period: {}", dashboard.comparison.period);
    println!("  Workouts (all time): {}", dashboard.totals.workouts);
    println!("  Workouts (period): {}", dashboard.comparison.current.count);
    println!(
        "  Trends: {}",
        if dashboard.comparison.trends.is_some() { "yes" } else { "no" }
    );

    if report.version != SCHEMA_VERSION {
        log::warn!(
            "Report schema v{} differs from current v{}",
            report.version,
            SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Stride Metrics Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  source: string             - Workout file or store URL");
        println!("  as_of: string              - Reference instant (RFC 3339)");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!("  dashboard: object");
        println!("    totals: object           - workouts, distance (km), duration_minutes");
        println!("    week_to_date: stats      - Workouts since Monday 00:00");
        println!("    comparison: object");
        println!("      period: string         - week | month | all");
        println!("      current: stats         - count, total_distance, avg_pace_seconds, avg_heart_rate");
        println!("      previous: stats?       - Previous period (absent for 'all')");
        println!("      current_window: object? - start/end of the current period");
        println!("      previous_window: object? - start/end of the previous period");
        println!("      trends: object?        - workouts, distance, pace, heart_rate");
        println!("        class: string        - up | down | neutral | none");
        println!("        percent_change: number? - Magnitude, one decimal");
        println!("        difference: number   - current - previous");
        println!("        style: string        - percent | pace");
        println!("    weekly_chart: object");
        println!("      bins: array[7]         - weekday, date, distance (Monday first)");
        println!("      scale: number          - Bar scale in km (>= 1)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Stride Metrics v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Comparative workout metrics and weekly distance charts.");
}
