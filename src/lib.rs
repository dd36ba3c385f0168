//! Stride Metrics
//!
//! Comparative workout metrics and weekly distance charts for
//! running dashboards.
//!
//! The library turns a flat list of workouts (as served by the workout
//! store API) into period statistics, period-over-period trends and a
//! Monday-first weekly distance chart. All aggregation is pure: the caller
//! supplies the records and the reference instant.
//!
//! ## Getting Started
//!
//! ```bash
//! stride-metrics report --file workouts.json --period week --summary
//! stride-metrics --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod store;
pub mod utils;
