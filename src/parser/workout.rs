//! Workout record decoding.
//!
//! The workout store is loose about field types: distances sometimes arrive
//! as strings, missing heart rates are sent as `0`, and paces without data
//! use a `"--:--"` placeholder. Decoding is lenient per field so that a bad
//! value only drops that value, never the whole record.

use super::pace::parse_pace;
use crate::utils::error::ParseError;
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};

/// A single workout as returned by the workout store
///
/// Read-only input to the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Store identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// When the workout took place
    #[serde(deserialize_with = "de_timestamp")]
    pub date: DateTime<Utc>,

    /// Distance in kilometers
    #[serde(default, deserialize_with = "de_non_negative_f64", skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Duration in minutes
    #[serde(default, deserialize_with = "de_non_negative_u32", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Average pace as `"M:SS"` per km, kept verbatim
    #[serde(default, deserialize_with = "de_string", skip_serializing_if = "Option::is_none")]
    pub avg_pace: Option<String>,

    /// Average heart rate in bpm (0 from the store means "not recorded")
    #[serde(default, deserialize_with = "de_non_negative_u32", skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<u32>,

    /// Workout category (easy, interval, tempo, long_run, race)
    #[serde(default, rename = "type", deserialize_with = "de_string", skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,

    /// Subjective feeling (great, good, ok, tired, exhausted)
    #[serde(default, deserialize_with = "de_string", skip_serializing_if = "Option::is_none")]
    pub feeling: Option<String>,
}

impl WorkoutRecord {
    /// Create a record with only a date; other fields are absent
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            date,
            distance: None,
            duration: None,
            avg_pace: None,
            avg_heart_rate: None,
            workout_type: None,
            feeling: None,
        }
    }

    pub fn with_distance(mut self, km: f64) -> Self {
        self.distance = Some(km);
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn with_pace(mut self, pace: impl Into<String>) -> Self {
        self.avg_pace = Some(pace.into());
        self
    }

    pub fn with_heart_rate(mut self, bpm: u32) -> Self {
        self.avg_heart_rate = Some(bpm);
        self
    }

    pub fn with_type(mut self, workout_type: impl Into<String>) -> Self {
        self.workout_type = Some(workout_type.into());
        self
    }

    /// Distance in km, 0 when absent
    pub fn distance_km(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }

    /// Duration in minutes, 0 when absent
    pub fn duration_minutes(&self) -> u32 {
        self.duration.unwrap_or(0)
    }

    /// Pace in seconds per km, if the pace string is well-formed
    pub fn pace_seconds(&self) -> Option<u32> {
        self.avg_pace.as_deref().and_then(parse_pace)
    }

    /// Heart rate in bpm, if recorded (0 counts as not recorded)
    pub fn heart_rate(&self) -> Option<u32> {
        self.avg_heart_rate.filter(|bpm| *bpm > 0)
    }
}

/// Decode a list of workouts from the store's JSON payload
///
/// **Public** - main entry point for record decoding
///
/// # Arguments
/// * `raw` - JSON value returned by the store (array or `null`)
///
/// # Returns
/// Decoded records in the order the store supplied them
///
/// # Errors
/// * `ParseError::InvalidFormat` - payload is not an array, or every element was rejected
pub fn parse_workouts(raw: &serde_json::Value) -> Result<Vec<WorkoutRecord>, ParseError> {
    let items = match raw {
        // The store answers `null` when a user has no workouts yet
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Array(items) => items,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "expected a JSON array of workouts, found {}",
                json_kind(other)
            )))
        }
    };

    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match WorkoutRecord::deserialize(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                // Log but don't fail - one broken record should not hide the rest
                warn!("Skipping workout {}: {}", index, e);
            }
        }
    }

    if records.is_empty() && !items.is_empty() {
        return Err(ParseError::InvalidFormat(
            "All workouts failed to decode".to_string(),
        ));
    }

    debug!("Decoded {} of {} workouts", records.len(), items.len());

    Ok(records)
}

/// Decode workouts from a JSON string
pub fn parse_workouts_str(input: &str) -> Result<Vec<WorkoutRecord>, ParseError> {
    let raw: serde_json::Value = serde_json::from_str(input)?;
    parse_workouts(&raw)
}

/// Offset-less datetime layouts written by the store and the entry form
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a workout timestamp
///
/// Accepted forms:
/// * RFC 3339 (`2024-03-13T07:30:00Z`, `...+02:00`)
/// * ISO 8601 without an offset (`2024-03-13T07:30:00`, `2024-03-13T07:30`),
///   read as local time
/// * A bare date (`2024-03-13`), taken as midnight UTC
///
/// # Errors
/// * `ParseError::InvalidTimestamp` - none of the forms matched
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ParseError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(naive) = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Ok(resolve_local(&Local, &naive));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| ParseError::InvalidTimestamp(value.to_string()))
}

/// Resolve a wall-clock time in `tz` to an instant
///
/// A repeated hour takes the earliest instant; a skipped hour is read as UTC.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => naive.and_utc(),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Read a JSON number or numeric string as a finite, non-negative f64
fn lenient_number(value: &serde_json::Value) -> Option<f64> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    (number.is_finite() && number >= 0.0).then_some(number)
}

fn de_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

fn de_non_negative_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(lenient_number))
}

fn de_non_negative_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(lenient_number)
        .filter(|n| *n <= u32::MAX as f64)
        .map(|n| n.round() as u32))
}

fn de_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
