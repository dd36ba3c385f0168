//! Period statistics over workout records.
//!
//! Averages only use records that carry a valid value for that field, while
//! every record in the window counts toward `count` and `total_distance`.

use crate::parser::WorkoutRecord;
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Summary of the workouts inside one period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Number of workouts in the period
    pub count: usize,

    /// Summed distance in km
    pub total_distance: f64,

    /// Mean pace in seconds per km (0 = no pace samples)
    pub avg_pace_seconds: f64,

    /// Rounded mean heart rate in bpm (0 = no heart-rate samples)
    pub avg_heart_rate: u32,
}

impl PeriodStats {
    /// Average pace as `"M:SS"`, if any pace samples existed
    pub fn avg_pace_label(&self) -> Option<String> {
        (self.avg_pace_seconds > 0.0).then(|| crate::parser::format_pace(self.avg_pace_seconds))
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Compute statistics for workouts dated in `[period_start, period_end)`
///
/// **Public** - main entry point for period statistics
///
/// # Arguments
/// * `records` - Workouts as supplied by the store (not modified)
/// * `period_start` - Inclusive start of the window
/// * `period_end` - Exclusive end of the window
///
/// # Returns
/// Statistics for the filtered workouts; an empty window yields all zeros
pub fn compute_stats<Tz: TimeZone>(
    records: &[WorkoutRecord],
    period_start: &DateTime<Tz>,
    period_end: &DateTime<Tz>,
) -> PeriodStats {
    let start = period_start.with_timezone(&Utc);
    let end = period_end.with_timezone(&Utc);

    let stats = summarize(records.iter().filter(|w| w.date >= start && w.date < end));

    debug!(
        "Stats for [{}, {}): {} workouts, {:.1} km",
        start, end, stats.count, stats.total_distance
    );

    stats
}

/// Compute statistics over every workout yielded by `records`
///
/// **Public** - used directly for the "all time" view
pub fn summarize<'a, I>(records: I) -> PeriodStats
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    let mut count = 0usize;
    let mut total_distance = 0.0;

    let mut pace_total = 0u64;
    let mut pace_samples = 0u64;
    let mut hr_total = 0u64;
    let mut hr_samples = 0u64;

    for workout in records {
        count += 1;
        total_distance += workout.distance_km();

        if let Some(seconds) = workout.pace_seconds() {
            pace_total += u64::from(seconds);
            pace_samples += 1;
        }

        if let Some(bpm) = workout.heart_rate() {
            hr_total += u64::from(bpm);
            hr_samples += 1;
        }
    }

    let avg_pace_seconds = if pace_samples > 0 {
        pace_total as f64 / pace_samples as f64
    } else {
        0.0
    };

    let avg_heart_rate = if hr_samples > 0 {
        (hr_total as f64 / hr_samples as f64).round() as u32
    } else {
        0
    };

    PeriodStats {
        count,
        total_distance,
        avg_pace_seconds,
        avg_heart_rate,
    }
}

/// All-time totals shown at the top of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LifetimeTotals {
    /// Number of workouts on record
    pub workouts: usize,

    /// Total distance in km
    pub distance: f64,

    /// Total time in minutes
    pub duration_minutes: u64,
}

impl LifetimeTotals {
    pub fn from_records(records: &[WorkoutRecord]) -> Self {
        Self {
            workouts: records.len(),
            distance: records.iter().map(WorkoutRecord::distance_km).sum(),
            duration_minutes: records
                .iter()
                .map(|w| u64::from(w.duration_minutes()))
                .sum(),
        }
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Workouts: {} | Distance: {:.1} km | Time: {} min",
            self.workouts, self.distance, self.duration_minutes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_compute_stats_window_is_half_open() {
        let records = vec![
            WorkoutRecord::new(at(11, 0)).with_distance(5.0),
            WorkoutRecord::new(at(14, 12)).with_distance(8.0),
            WorkoutRecord::new(at(18, 0)).with_distance(12.0),
        ];

        let stats = compute_stats(&records, &at(11, 0), &at(18, 0));

        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_distance, 13.0);
    }

    #[test]
    fn test_averages_skip_missing_values() {
        let records = vec![
            WorkoutRecord::new(at(12, 7))
                .with_distance(10.0)
                .with_pace("5:00")
                .with_heart_rate(150),
            WorkoutRecord::new(at(13, 7))
                .with_distance(6.0)
                .with_pace("--:--")
                .with_heart_rate(0),
            WorkoutRecord::new(at(14, 7)).with_pace("4:40").with_heart_rate(161),
        ];

        let stats = summarize(&records);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_distance, 16.0);
        assert_eq!(stats.avg_pace_seconds, 290.0);
        // (150 + 161) / 2 = 155.5 rounds up
        assert_eq!(stats.avg_heart_rate, 156);
        assert_eq!(stats.avg_pace_label().as_deref(), Some("4:50"));
    }

    #[test]
    fn test_empty_input_yields_sentinels() {
        let records: Vec<WorkoutRecord> = Vec::new();
        let stats = summarize(&records);
        assert_eq!(stats, PeriodStats::default());
        assert!(stats.is_empty());
        assert!(stats.avg_pace_label().is_none());
    }

    #[test]
    fn test_lifetime_totals() {
        let records = vec![
            WorkoutRecord::new(at(1, 7)).with_distance(5.0).with_duration(30),
            WorkoutRecord::new(at(2, 7)).with_duration(45),
            WorkoutRecord::new(at(3, 7)).with_distance(2.5),
        ];

        let totals = LifetimeTotals::from_records(&records);

        assert_eq!(totals.workouts, 3);
        assert_eq!(totals.distance, 7.5);
        assert_eq!(totals.duration_minutes, 75);
        assert_eq!(totals.summary(), "Workouts: 3 | Distance: 7.5 km | Time: 75 min");
    }
}
