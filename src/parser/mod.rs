//! Workout record decoding and pace helpers.
//!
//! This module handles:
//! - Decoding raw JSON from the workout store
//! - Parsing and formatting `"M:SS"` paces
//! - Duration and speed formatting for display

pub mod pace;
pub mod workout;

// Re-export main types
pub use pace::{format_duration, format_pace, pace_from_speed, parse_pace};
pub use workout::{parse_timestamp, parse_workouts, parse_workouts_str, WorkoutRecord};
