//! Plain-text dashboard summary for the terminal.

use crate::aggregator::{Dashboard, Period, TrendDelta};
use crate::parser::{format_duration, pace_from_speed, WorkoutRecord};
use crate::utils::config::PACE_PLACEHOLDER;

/// Width of a full-height bar in the ASCII chart
const CHART_WIDTH: usize = 40;

/// Render the dashboard and the most recent workouts as text
///
/// **Public** - printed by `report --summary`
pub fn generate_text_summary(dashboard: &Dashboard, recent: &[WorkoutRecord]) -> String {
    let mut lines = Vec::new();
    let comparison = &dashboard.comparison;
    let trends = comparison.trends.as_ref();

    lines.push(format!("  {}", dashboard.headline()));
    lines.push(format!("  All time: {}", dashboard.totals.summary()));
    lines.push(String::new());

    lines.push(match comparison.period {
        Period::Week => "  THIS WEEK".to_string(),
        Period::Month => "  THIS MONTH".to_string(),
        Period::All => "  ALL TIME".to_string(),
    });
    lines.push(metric_line(
        "Workouts",
        comparison.current.count.to_string(),
        trends.map(|t| &t.workouts),
    ));
    lines.push(metric_line(
        "Distance",
        format!("{:.1} km", comparison.current.total_distance),
        trends.map(|t| &t.distance),
    ));
    lines.push(metric_line(
        "Avg pace",
        comparison
            .current
            .avg_pace_label()
            .unwrap_or_else(|| PACE_PLACEHOLDER.to_string()),
        trends.map(|t| &t.pace),
    ));
    lines.push(metric_line(
        "Avg HR",
        match comparison.current.avg_heart_rate {
            0 => "-- bpm".to_string(),
            bpm => format!("{} bpm", bpm),
        },
        trends.map(|t| &t.heart_rate),
    ));
    lines.push(String::new());

    lines.push("  WEEKLY DISTANCE".to_string());
    let chart = &dashboard.weekly_chart;
    for bin in &chart.bins {
        let bar_len = (chart.bar_height_percent(bin) / 100.0 * CHART_WIDTH as f64).round() as usize;
        let value = if bin.distance > 0.0 {
            format!("{:.1}", bin.distance)
        } else {
            String::new()
        };
        lines.push(format!(
            "  {} {:<pad$} {}",
            bin.label(),
            "█".repeat(bar_len),
            value,
            pad = CHART_WIDTH
        ));
    }

    if !recent.is_empty() {
        lines.push(String::new());
        lines.push("  RECENT WORKOUTS".to_string());
        for workout in recent {
            lines.push(format!(
                "  {}  {:<10} {:>6.1} km  {:>8}  {}",
                workout.date.format("%Y-%m-%d"),
                workout.workout_type.as_deref().unwrap_or("-"),
                workout.distance_km(),
                recent_duration(workout),
                recent_pace(workout),
            ));
        }
    }

    lines.join("\n")
}

fn recent_duration(workout: &WorkoutRecord) -> String {
    match workout.duration {
        Some(minutes) if minutes > 0 => format_duration(u64::from(minutes) * 60),
        _ => "-".to_string(),
    }
}

/// Stored pace when well-formed, otherwise derived from distance and duration
fn recent_pace(workout: &WorkoutRecord) -> String {
    if workout.pace_seconds().is_some() {
        return workout.avg_pace.clone().unwrap_or_default();
    }

    let seconds = f64::from(workout.duration_minutes()) * 60.0;
    let meters = workout.distance_km() * 1000.0;
    if seconds <= 0.0 {
        return PACE_PLACEHOLDER.to_string();
    }

    pace_from_speed(meters / seconds).unwrap_or_else(|| PACE_PLACEHOLDER.to_string())
}

fn metric_line(name: &str, value: String, trend: Option<&TrendDelta>) -> String {
    let label = trend.map(TrendDelta::label).unwrap_or_default();
    format!("  {:<10} {:>10}  {}", name, value, label).trim_end().to_string()
}
