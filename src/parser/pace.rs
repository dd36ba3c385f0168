//! Pace and duration parsing/formatting.
//!
//! Paces are carried as `"M:SS"` strings per kilometer. Minutes may have any
//! number of digits; seconds are always two digits.

/// Parse a `"M+:SS"` pace string into seconds per km
///
/// Returns `None` for placeholders (`"--:--"`), empty strings and anything
/// that is not strictly `digits:two-digits` with seconds below 60.
pub fn parse_pace(value: &str) -> Option<u32> {
    let (minutes, seconds) = value.trim().split_once(':')?;

    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;

    if seconds >= 60 {
        return None;
    }

    minutes.checked_mul(60)?.checked_add(seconds)
}

/// Format seconds per km as `"M:SS"`
///
/// The total is rounded to whole seconds before splitting, so 299.6 becomes
/// `"5:00"` rather than `"4:60"`.
pub fn format_pace(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a duration in seconds as `"H:MM:SS"`, or `"M:SS"` under an hour
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Convert a speed in meters per second into a `"M:SS"` min/km pace
///
/// Seconds are truncated, matching how the detail view shows split paces.
pub fn pace_from_speed(meters_per_second: f64) -> Option<String> {
    if !meters_per_second.is_finite() || meters_per_second <= 0.0 {
        return None;
    }

    let minutes_per_km = 1000.0 / (meters_per_second * 60.0);
    let minutes = minutes_per_km.floor();
    let seconds = ((minutes_per_km - minutes) * 60.0).floor();

    Some(format!("{}:{:02}", minutes as u64, seconds as u64))
}
