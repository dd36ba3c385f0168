//! Output writers for dashboard reports.
//!
//! This module handles writing data in various formats:
//! - Versioned JSON reports
//! - Text summaries with an ASCII weekly chart

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use schema::Report;
pub use text::generate_text_summary;
