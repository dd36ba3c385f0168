//! Period-over-period trend classification.
//!
//! Count, distance and heart rate use a percentage deadband. Pace is compared
//! in absolute seconds instead, because a few seconds per km is already a
//! large relative change on short windows.

use super::stats::PeriodStats;
use crate::utils::config::{PACE_NEUTRAL_SECONDS, TREND_NEUTRAL_PERCENT};
use serde::{Deserialize, Serialize};

/// Qualitative direction of a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendClass {
    /// Moved in the "better" direction
    Up,
    /// Moved in the "worse" direction
    Down,
    /// Within the deadband
    Neutral,
    /// No baseline to compare against
    None,
}

/// How a trend is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStyle {
    /// Signed percentage (`+10.0%`)
    Percent,
    /// Faster/slower wording for paces
    Pace,
}

/// Change between a current and a previous value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendDelta {
    pub class: TrendClass,

    /// Magnitude of the change in percent, rounded to one decimal
    pub percent_change: Option<f64>,

    /// `current - previous`
    pub difference: f64,

    pub style: TrendStyle,
}

impl TrendDelta {
    fn unavailable(style: TrendStyle) -> Self {
        Self {
            class: TrendClass::None,
            percent_change: None,
            difference: 0.0,
            style,
        }
    }

    /// Display label for the trend badge
    pub fn label(&self) -> String {
        let percent = self.percent_change.unwrap_or(0.0);

        match (self.class, self.style) {
            (TrendClass::None, _) => String::new(),
            (TrendClass::Neutral, _) => "Similar".to_string(),
            (_, TrendStyle::Pace) if self.difference < 0.0 => format!("{:.1}% faster", percent),
            (_, TrendStyle::Pace) => format!("{:.1}% slower", percent),
            (_, TrendStyle::Percent) if self.difference < 0.0 => format!("-{:.1}%", percent),
            (_, TrendStyle::Percent) => format!("+{:.1}%", percent),
        }
    }
}

/// Classify the change from `previous` to `current`
///
/// **Public** - used for count, distance and heart-rate trends
///
/// # Arguments
/// * `current` - Value for the current period
/// * `previous` - Value for the previous period (the baseline)
/// * `higher_is_better` - Whether an increase counts as `Up`
///
/// # Returns
/// `None` class when there is no baseline, `Neutral` when the change is
/// under 2%, otherwise `Up`/`Down`
pub fn compute_trend(current: f64, previous: f64, higher_is_better: bool) -> TrendDelta {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return TrendDelta::unavailable(TrendStyle::Percent);
    }

    let difference = current - previous;
    let percent_change = round_one_decimal(difference.abs() / previous.abs() * 100.0);

    let class = if percent_change < TREND_NEUTRAL_PERCENT {
        TrendClass::Neutral
    } else if (difference > 0.0) == higher_is_better {
        TrendClass::Up
    } else {
        TrendClass::Down
    };

    TrendDelta {
        class,
        percent_change: Some(percent_change),
        difference,
        style: TrendStyle::Percent,
    }
}

/// Classify a pace change (lower seconds per km is better)
///
/// **Public** - pace counterpart of `compute_trend`
///
/// A change of less than 2 seconds is `Neutral` whatever the percentage.
/// Either side being 0 means "no pace samples" and yields the `None` class.
pub fn compute_pace_trend(current_seconds: f64, previous_seconds: f64) -> TrendDelta {
    if previous_seconds == 0.0
        || current_seconds == 0.0
        || !previous_seconds.is_finite()
        || !current_seconds.is_finite()
    {
        return TrendDelta::unavailable(TrendStyle::Pace);
    }

    let difference = current_seconds - previous_seconds;
    let percent_change = round_one_decimal(difference.abs() / previous_seconds.abs() * 100.0);

    let class = if difference.abs() < PACE_NEUTRAL_SECONDS {
        TrendClass::Neutral
    } else if difference < 0.0 {
        TrendClass::Up
    } else {
        TrendClass::Down
    };

    TrendDelta {
        class,
        percent_change: Some(percent_change),
        difference,
        style: TrendStyle::Pace,
    }
}

/// Trends for the four dashboard metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTrends {
    pub workouts: TrendDelta,
    pub distance: TrendDelta,
    pub pace: TrendDelta,
    pub heart_rate: TrendDelta,
}

impl MetricTrends {
    pub fn between(current: &PeriodStats, previous: &PeriodStats) -> Self {
        Self {
            workouts: compute_trend(current.count as f64, previous.count as f64, true),
            distance: compute_trend(current.total_distance, previous.total_distance, true),
            pace: compute_pace_trend(current.avg_pace_seconds, previous.avg_pace_seconds),
            heart_rate: compute_trend(
                f64::from(current.avg_heart_rate),
                f64::from(previous.avg_heart_rate),
                true,
            ),
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_baseline() {
        let trend = compute_trend(10.0, 0.0, true);
        assert_eq!(trend.class, TrendClass::None);
        assert_eq!(trend.percent_change, None);
        assert_eq!(trend.label(), "");
    }

    #[test]
    fn test_increase_is_up() {
        let trend = compute_trend(110.0, 100.0, true);
        assert_eq!(trend.class, TrendClass::Up);
        assert_eq!(trend.percent_change, Some(10.0));
        assert_eq!(trend.label(), "+10.0%");
    }

    #[test]
    fn test_decrease_is_down() {
        let trend = compute_trend(75.0, 100.0, true);
        assert_eq!(trend.class, TrendClass::Down);
        assert_eq!(trend.label(), "-25.0%");
    }

    #[test]
    fn test_lower_is_better_flips_direction() {
        let trend = compute_trend(75.0, 100.0, false);
        assert_eq!(trend.class, TrendClass::Up);
    }

    #[test]
    fn test_small_percentage_is_neutral() {
        let trend = compute_trend(100.0, 101.0, true);
        assert_eq!(trend.class, TrendClass::Neutral);
        assert_eq!(trend.percent_change, Some(1.0));
        assert_eq!(trend.label(), "Similar");
    }

    #[test]
    fn test_pace_deadband_is_absolute() {
        // 1 second on a 30-second baseline is 3.3%, still neutral
        let trend = compute_pace_trend(29.0, 30.0);
        assert_eq!(trend.class, TrendClass::Neutral);
        assert_eq!(trend.percent_change, Some(3.3));

        let trend = compute_pace_trend(299.0, 300.0);
        assert_eq!(trend.class, TrendClass::Neutral);
    }

    #[test]
    fn test_faster_pace_is_up() {
        let trend = compute_pace_trend(290.0, 300.0);
        assert_eq!(trend.class, TrendClass::Up);
        assert_eq!(trend.label(), "3.3% faster");

        let trend = compute_pace_trend(310.0, 300.0);
        assert_eq!(trend.class, TrendClass::Down);
        assert_eq!(trend.label(), "3.3% slower");
    }

    #[test]
    fn test_pace_without_samples() {
        assert_eq!(compute_pace_trend(0.0, 300.0).class, TrendClass::None);
        assert_eq!(compute_pace_trend(300.0, 0.0).class, TrendClass::None);
    }

    #[test]
    fn test_metric_trends_between() {
        let current = PeriodStats {
            count: 4,
            total_distance: 30.0,
            avg_pace_seconds: 290.0,
            avg_heart_rate: 150,
        };
        let previous = PeriodStats {
            count: 2,
            total_distance: 30.3,
            avg_pace_seconds: 300.0,
            avg_heart_rate: 0,
        };

        let trends = MetricTrends::between(&current, &previous);

        assert_eq!(trends.workouts.class, TrendClass::Up);
        assert_eq!(trends.workouts.percent_change, Some(100.0));
        assert_eq!(trends.distance.class, TrendClass::Neutral);
        assert_eq!(trends.pace.class, TrendClass::Up);
        assert_eq!(trends.heart_rate.class, TrendClass::None);
    }
}
