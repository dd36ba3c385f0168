//! Output JSON schema for dashboard reports.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::Dashboard;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the workouts came from (file path or store URL)
    pub source: String,

    /// Reference instant the periods were computed from (RFC 3339)
    pub as_of: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub dashboard: Dashboard,
}

impl Report {
    /// Wrap a dashboard with the current schema version and timestamp
    pub fn new(source: impl Into<String>, as_of: impl Into<String>, dashboard: Dashboard) -> Self {
        Self {
            version: crate::utils::config::SCHEMA_VERSION.to_string(),
            source: source.into(),
            as_of: as_of.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            dashboard,
        }
    }
}
