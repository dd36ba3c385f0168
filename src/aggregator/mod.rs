//! Aggregation of workout records into dashboard metrics.
//!
//! This module transforms decoded workouts into:
//! - Period statistics (count, distance, average pace and heart rate)
//! - Period-over-period trends
//! - A Monday-first weekly distance chart
//!
//! Every function is pure: inputs are borrowed, nothing is cached, and
//! "now" is always passed in by the caller.

pub mod dashboard;
pub mod filter;
pub mod period;
pub mod stats;
pub mod trend;
pub mod weekly;

// Re-export main types and functions
pub use dashboard::{build_dashboard, Dashboard};
pub use filter::{recent_workouts, WorkoutFilter};
pub use period::{compare, ComparativeMetrics, Period, PeriodWindow};
pub use stats::{compute_stats, summarize, LifetimeTotals, PeriodStats};
pub use trend::{compute_pace_trend, compute_trend, MetricTrends, TrendClass, TrendDelta, TrendStyle};
pub use weekly::{compute_weekly_bins, start_of_week, WeeklyBin, WeeklyChart};
