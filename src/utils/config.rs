//! Configuration and constants for the CLI and aggregator.

use std::time::Duration;

/// Default timeout for workout store requests
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default base URL of the workout store API
pub const DEFAULT_STORE_URL: &str = "http://localhost:8080/api";

/// Path (relative to the base URL) that lists workouts
pub const WORKOUTS_ENDPOINT: &str = "workouts";

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Placeholder the store uses when a workout has no pace
pub const PACE_PLACEHOLDER: &str = "--:--";

// Trend deadbands. Count, distance and heart rate compare in percent,
// pace compares in absolute seconds.
pub const TREND_NEUTRAL_PERCENT: f64 = 2.0;
pub const PACE_NEUTRAL_SECONDS: f64 = 2.0;

/// Smallest denominator used when scaling chart bars
pub const MIN_CHART_SCALE_KM: f64 = 1.0;

/// Number of workouts shown in the "recent" list
pub const RECENT_WORKOUTS_LIMIT: usize = 5;

/// Upper bound accepted for `--months`
pub const MAX_MONTHS_BACK: u32 = 120;
