//! Weekly distance chart.
//!
//! Weeks start on Monday (ISO 8601). Workouts are binned by their calendar
//! date in the timezone of the week start, not by timestamp ranges.

use crate::parser::WorkoutRecord;
use crate::utils::config::MIN_CHART_SCALE_KM;
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

/// Distance run on one day of the week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBin {
    pub weekday: Weekday,

    /// Local calendar date of this day
    pub date: NaiveDate,

    /// Summed distance in km
    pub distance: f64,
}

impl WeeklyBin {
    /// Short weekday label for chart axes
    pub fn label(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

/// Monday 00:00 (local to `moment`'s timezone) of the week containing `moment`
pub fn start_of_week<Tz: TimeZone>(moment: &DateTime<Tz>) -> DateTime<Tz> {
    let date = moment.date_naive();
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    local_midnight(&moment.timezone(), monday)
}

/// Midnight at the start of `date` in `tz`
///
/// Ambiguous midnights take the earlier instant; a midnight skipped by a DST
/// jump falls back to reading the wall-clock time as UTC.
pub(crate) fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz.from_utc_datetime(&naive),
    }
}

/// Sum workout distances per day for the 7 days starting at `week_start`
///
/// **Public** - main entry point for chart binning
///
/// # Arguments
/// * `records` - Workouts as supplied by the store
/// * `week_start` - Monday 00:00 of the target week, see `start_of_week`
///
/// # Returns
/// Seven bins, Monday first; days without workouts hold 0
pub fn compute_weekly_bins<Tz: TimeZone>(
    records: &[WorkoutRecord],
    week_start: &DateTime<Tz>,
) -> [WeeklyBin; 7] {
    let tz = week_start.timezone();
    let first_day = week_start.date_naive();

    // Local date of each workout, computed once
    let dated: Vec<(NaiveDate, f64)> = records
        .iter()
        .map(|w| (w.date.with_timezone(&tz).date_naive(), w.distance_km()))
        .collect();

    std::array::from_fn(|offset| {
        let date = first_day + Duration::days(offset as i64);
        let distance = dated
            .iter()
            .filter(|(day, _)| *day == date)
            .map(|(_, km)| km)
            .sum();

        WeeklyBin {
            weekday: date.weekday(),
            date,
            distance,
        }
    })
}

/// Weekly bins plus the scale used to size their bars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyChart {
    pub bins: [WeeklyBin; 7],

    /// Largest bin distance, never below 1 km
    pub scale: f64,
}

impl WeeklyChart {
    pub fn from_bins(bins: [WeeklyBin; 7]) -> Self {
        let scale = bins
            .iter()
            .map(|b| b.distance)
            .fold(MIN_CHART_SCALE_KM, f64::max);

        Self { bins, scale }
    }

    /// Bar height for `bin` as a percentage of the chart height
    pub fn bar_height_percent(&self, bin: &WeeklyBin) -> f64 {
        bin.distance / self.scale * 100.0
    }

    /// Bar heights for all seven days, Monday first
    pub fn bar_heights(&self) -> [f64; 7] {
        self.bins.map(|bin| self.bar_height_percent(&bin))
    }

    pub fn total_distance(&self) -> f64 {
        self.bins.iter().map(|b| b.distance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_start_of_week_midweek() {
        // Thursday afternoon
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 16, 45, 10).unwrap();
        let start = start_of_week(&now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_start_of_week_sunday_walks_back() {
        let sunday = Utc.with_ymd_and_hms(2024, 3, 17, 23, 59, 0).unwrap();
        let start = start_of_week(&sunday);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    }

    #[test]
    fn test_start_of_week_monday_is_itself() {
        let monday = Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap();
        assert_eq!(start_of_week(&monday), monday);
    }

    #[test]
    fn test_bins_use_local_date() {
        let madrid = FixedOffset::east_opt(2 * 3600).unwrap();
        let week_start = madrid.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap();

        // 23:30 UTC Tuesday is already Wednesday at UTC+2
        let records = vec![
            WorkoutRecord::new(Utc.with_ymd_and_hms(2024, 3, 12, 23, 30, 0).unwrap())
                .with_distance(7.0),
        ];

        let bins = compute_weekly_bins(&records, &week_start);

        assert_eq!(bins[1].distance, 0.0);
        assert_eq!(bins[2].distance, 7.0);
        assert_eq!(bins[2].label(), "Wed");
    }

    #[test]
    fn test_chart_scale_has_floor() {
        let week_start = Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap();
        let chart = WeeklyChart::from_bins(compute_weekly_bins(&[], &week_start));

        assert_eq!(chart.scale, 1.0);
        assert_eq!(chart.bar_heights(), [0.0; 7]);
    }

    #[test]
    fn test_chart_bar_heights() {
        let week_start = Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap();
        let records = vec![
            WorkoutRecord::new(Utc.with_ymd_and_hms(2024, 3, 11, 7, 0, 0).unwrap())
                .with_distance(5.0),
            WorkoutRecord::new(Utc.with_ymd_and_hms(2024, 3, 16, 9, 0, 0).unwrap())
                .with_distance(20.0),
        ];

        let chart = WeeklyChart::from_bins(compute_weekly_bins(&records, &week_start));

        assert_eq!(chart.scale, 20.0);
        assert_eq!(chart.bar_heights(), [25.0, 0.0, 0.0, 0.0, 0.0, 100.0, 0.0]);
        assert_eq!(chart.total_distance(), 25.0);
    }
}
