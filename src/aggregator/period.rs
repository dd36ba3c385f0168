//! Period selection and current-vs-previous comparison.

use super::stats::{compute_stats, summarize, PeriodStats};
use super::trend::MetricTrends;
use super::weekly::{local_midnight, start_of_week};
use crate::parser::WorkoutRecord;
use crate::utils::error::ParseError;
use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard period selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Monday to Sunday, compared with the previous week
    #[default]
    Week,
    /// Calendar month, compared with the previous month
    Month,
    /// Every workout, no comparison
    All,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::All => "all",
        })
    }
}

impl FromStr for Period {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "all" => Ok(Period::All),
            other => Err(ParseError::InvalidPeriod(other.to_string())),
        }
    }
}

/// Half-open time range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PeriodWindow {
    fn new<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self {
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
        }
    }

    pub fn contains(&self, moment: &DateTime<Utc>) -> bool {
        *moment >= self.start && *moment < self.end
    }
}

impl Period {
    /// Current and previous windows for this period as seen from `now`
    ///
    /// Returns `None` for `All`, which has no window.
    pub fn windows<Tz: TimeZone>(self, now: &DateTime<Tz>) -> Option<(PeriodWindow, PeriodWindow)> {
        let tz = now.timezone();

        match self {
            Period::Week => {
                let monday = start_of_week(now).date_naive();
                let start = local_midnight(&tz, monday);
                let end = local_midnight(&tz, monday + Duration::days(7));
                let prev_start = local_midnight(&tz, monday - Duration::days(7));

                Some((
                    PeriodWindow::new(start.clone(), end),
                    PeriodWindow::new(prev_start, start),
                ))
            }
            Period::Month => {
                let today = now.date_naive();
                let first = today - Duration::days(i64::from(today.day0()));
                let next_first = first.checked_add_months(Months::new(1))?;
                let prev_first = first.checked_sub_months(Months::new(1))?;

                let start = local_midnight(&tz, first);

                Some((
                    PeriodWindow::new(start.clone(), local_midnight(&tz, next_first)),
                    PeriodWindow::new(local_midnight(&tz, prev_first), start),
                ))
            }
            Period::All => None,
        }
    }
}

/// Current period statistics with an optional comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeMetrics {
    pub period: Period,

    pub current: PeriodStats,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_window: Option<PeriodWindow>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<PeriodStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_window: Option<PeriodWindow>,

    /// Present only when the previous period had at least one workout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<MetricTrends>,
}

/// Compute current-period stats and trends against the previous period
///
/// **Public** - main entry point for comparative metrics
///
/// # Arguments
/// * `records` - Workouts as supplied by the store
/// * `period` - Which period to show
/// * `now` - Reference instant; its timezone decides calendar boundaries
pub fn compare<Tz: TimeZone>(
    records: &[WorkoutRecord],
    period: Period,
    now: &DateTime<Tz>,
) -> ComparativeMetrics {
    let Some((current_window, previous_window)) = period.windows(now) else {
        debug!("Period {} has no window, summarizing all {} workouts", period, records.len());
        return ComparativeMetrics {
            period,
            current: summarize(records),
            current_window: None,
            previous: None,
            previous_window: None,
            trends: None,
        };
    };

    let current = compute_stats(records, &current_window.start, &current_window.end);
    let previous = compute_stats(records, &previous_window.start, &previous_window.end);

    let trends = (!previous.is_empty()).then(|| MetricTrends::between(&current, &previous));

    debug!(
        "Period {}: {} workouts now, {} before, trends {}",
        period,
        current.count,
        previous.count,
        if trends.is_some() { "shown" } else { "hidden" }
    );

    ComparativeMetrics {
        period,
        current,
        current_window: Some(current_window),
        previous: Some(previous),
        previous_window: Some(previous_window),
        trends,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::trend::TrendClass;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("Month".parse::<Period>().unwrap(), Period::Month);
        assert_eq!(" all ".parse::<Period>().unwrap(), Period::All);
        assert!(matches!(
            "year".parse::<Period>(),
            Err(ParseError::InvalidPeriod(p)) if p == "year"
        ));
    }

    #[test]
    fn test_week_windows() {
        let now = utc(2024, 3, 14, 18);
        let (current, previous) = Period::Week.windows(&now).unwrap();

        assert_eq!(current.start, utc(2024, 3, 11, 0));
        assert_eq!(current.end, utc(2024, 3, 18, 0));
        assert_eq!(previous.start, utc(2024, 3, 4, 0));
        assert_eq!(previous.end, utc(2024, 3, 11, 0));
    }

    #[test]
    fn test_month_windows_cross_year() {
        let now = utc(2024, 1, 20, 9);
        let (current, previous) = Period::Month.windows(&now).unwrap();

        assert_eq!(current.start, utc(2024, 1, 1, 0));
        assert_eq!(current.end, utc(2024, 2, 1, 0));
        assert_eq!(previous.start, utc(2023, 12, 1, 0));
        assert_eq!(previous.end, utc(2024, 1, 1, 0));
    }

    #[test]
    fn test_month_includes_last_evening() {
        let now = utc(2024, 2, 10, 9);
        let (current, _) = Period::Month.windows(&now).unwrap();
        assert!(current.contains(&Utc.with_ymd_and_hms(2024, 2, 29, 21, 30, 0).unwrap()));
        assert!(!current.contains(&utc(2024, 3, 1, 0)));
    }

    #[test]
    fn test_all_has_no_windows() {
        assert!(Period::All.windows(&utc(2024, 3, 14, 18)).is_none());
    }

    #[test]
    fn test_compare_week_with_trends() {
        let records = vec![
            WorkoutRecord::new(utc(2024, 3, 12, 7)).with_distance(11.0),
            WorkoutRecord::new(utc(2024, 3, 5, 7)).with_distance(10.0),
        ];

        let metrics = compare(&records, Period::Week, &utc(2024, 3, 14, 18));

        assert_eq!(metrics.current.count, 1);
        assert_eq!(metrics.previous.map(|p| p.count), Some(1));
        let trends = metrics.trends.unwrap();
        assert_eq!(trends.distance.class, TrendClass::Up);
        assert_eq!(trends.distance.percent_change, Some(10.0));
        assert_eq!(trends.workouts.class, TrendClass::Neutral);
    }

    #[test]
    fn test_compare_without_previous_workouts_hides_trends() {
        let records = vec![WorkoutRecord::new(utc(2024, 3, 12, 7)).with_distance(11.0)];

        let metrics = compare(&records, Period::Week, &utc(2024, 3, 14, 18));

        assert_eq!(metrics.current.count, 1);
        assert!(metrics.trends.is_none());
    }

    #[test]
    fn test_compare_all() {
        let records = vec![
            WorkoutRecord::new(utc(2021, 6, 1, 7)).with_distance(3.0),
            WorkoutRecord::new(utc(2024, 3, 12, 7)).with_distance(4.0),
        ];

        let metrics = compare(&records, Period::All, &utc(2024, 3, 14, 18));

        assert_eq!(metrics.current.count, 2);
        assert_eq!(metrics.current.total_distance, 7.0);
        assert!(metrics.previous.is_none());
        assert!(metrics.trends.is_none());
    }
}
