//! Full dashboard in one pass: lifetime totals, the week-to-date header,
//! the comparative metrics for the selected period and the weekly chart.

use super::period::{compare, ComparativeMetrics, Period};
use super::stats::{summarize, LifetimeTotals, PeriodStats};
use super::weekly::{compute_weekly_bins, start_of_week, WeeklyChart};
use crate::parser::WorkoutRecord;
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything the dashboard view needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub totals: LifetimeTotals,

    /// Workouts since Monday 00:00 of the current week
    pub week_to_date: PeriodStats,

    pub comparison: ComparativeMetrics,

    /// Distance per day for the week containing `now`
    pub weekly_chart: WeeklyChart,
}

/// Build the dashboard for `period` as seen from `now`
///
/// **Public** - main entry point used by the report command
///
/// # Arguments
/// * `records` - Workouts as supplied by the store
/// * `period` - Period selected for the comparative metrics
/// * `now` - Reference instant; its timezone decides calendar days
pub fn build_dashboard<Tz: TimeZone>(
    records: &[WorkoutRecord],
    period: Period,
    now: &DateTime<Tz>,
) -> Dashboard {
    debug!("Building {} dashboard from {} workouts", period, records.len());

    let week_start = start_of_week(now);
    let week_start_utc = week_start.with_timezone(&Utc);

    let totals = LifetimeTotals::from_records(records);
    let week_to_date = summarize(records.iter().filter(|w| w.date >= week_start_utc));
    let comparison = compare(records, period, now);
    let weekly_chart = WeeklyChart::from_bins(compute_weekly_bins(records, &week_start));

    Dashboard {
        totals,
        week_to_date,
        comparison,
        weekly_chart,
    }
}

impl Dashboard {
    /// One-line header, e.g. "3 workouts this week • 21.5 km"
    pub fn headline(&self) -> String {
        if self.totals.workouts == 0 {
            return "Start your first workout!".to_string();
        }

        format!(
            "{} workout{} this week • {:.1} km",
            self.week_to_date.count,
            if self.week_to_date.count == 1 { "" } else { "s" },
            self.week_to_date.total_distance
        )
    }
}
