//! Workout list filtering.

use crate::parser::WorkoutRecord;
use chrono::{DateTime, Months, TimeZone, Utc};
use log::debug;

/// Filter applied to the workout list before aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutFilter {
    /// Keep only workouts of this type (exact match)
    pub workout_type: Option<String>,

    /// Keep only workouts from the last N calendar months
    pub months_back: Option<u32>,
}

impl WorkoutFilter {
    pub fn is_empty(&self) -> bool {
        self.workout_type.is_none() && self.months_back.is_none()
    }

    /// Select the workouts that pass the filter, keeping store order
    pub fn apply<'a, Tz: TimeZone>(
        &self,
        records: &'a [WorkoutRecord],
        now: &DateTime<Tz>,
    ) -> Vec<&'a WorkoutRecord> {
        let cutoff: Option<DateTime<Utc>> = self.months_back.and_then(|months| {
            now.clone()
                .checked_sub_months(Months::new(months))
                .map(|dt| dt.with_timezone(&Utc))
        });

        let selected: Vec<&WorkoutRecord> = records
            .iter()
            .filter(|w| match &self.workout_type {
                Some(wanted) => w.workout_type.as_deref() == Some(wanted.as_str()),
                None => true,
            })
            .filter(|w| cutoff.map_or(true, |cutoff| w.date >= cutoff))
            .collect();

        debug!("Filter kept {} of {} workouts", selected.len(), records.len());

        selected
    }
}

/// The first `limit` workouts, in the order the store supplied them
pub fn recent_workouts(records: &[WorkoutRecord], limit: usize) -> &[WorkoutRecord] {
    &records[..limit.min(records.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WorkoutRecord> {
        vec![
            WorkoutRecord::new(Utc.with_ymd_and_hms(2024, 3, 12, 7, 0, 0).unwrap()).with_type("easy"),
            WorkoutRecord::new(Utc.with_ymd_and_hms(2024, 2, 20, 7, 0, 0).unwrap()).with_type("interval"),
            WorkoutRecord::new(Utc.with_ymd_and_hms(2023, 11, 2, 7, 0, 0).unwrap()).with_type("easy"),
        ]
    }

    #[test]
    fn test_filter_by_type() {
        let records = sample();
        let filter = WorkoutFilter {
            workout_type: Some("easy".to_string()),
            months_back: None,
        };

        let kept = filter.apply(&records, &Utc::now());

        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|w| w.workout_type.as_deref() == Some("easy")));
    }

    #[test]
    fn test_filter_by_months() {
        let records = sample();
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap();
        let filter = WorkoutFilter {
            workout_type: None,
            months_back: Some(1),
        };

        let kept = filter.apply(&records, &now);

        // cutoff is 2024-02-14 12:00
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let records = sample();
        let filter = WorkoutFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&records, &Utc::now()).len(), 3);
    }

    #[test]
    fn test_recent_workouts() {
        let records = sample();
        assert_eq!(recent_workouts(&records, 2).len(), 2);
        assert_eq!(recent_workouts(&records, 10).len(), 3);
    }
}
