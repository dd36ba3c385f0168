//! Blocking HTTP client for the workout store API.

use crate::parser::{parse_workouts, WorkoutRecord};
use crate::utils::config::{DEFAULT_STORE_TIMEOUT, WORKOUTS_ENDPOINT};
use crate::utils::error::StoreError;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Client for fetching workouts from the store
pub struct WorkoutStoreClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl WorkoutStoreClient {
    /// Create a new store client
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        Self::with_timeout(base_url, DEFAULT_STORE_TIMEOUT)
    }

    /// Create a client with custom timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(StoreError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    /// Attach a bearer token issued by the session provider
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// URL of the workouts listing
    pub fn workouts_url(&self) -> String {
        join_url(&self.base_url, WORKOUTS_ENDPOINT)
    }

    /// Fetch every workout for the current user
    pub fn fetch_workouts(&self) -> Result<Vec<WorkoutRecord>, StoreError> {
        let url = self.workouts_url();

        info!("Fetching workouts from: {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(StoreError::RequestFailed)?;

        // Check HTTP status
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            return Err(StoreError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                response.text().unwrap_or_default()
            )));
        }

        let raw: serde_json::Value = response.json().map_err(StoreError::RequestFailed)?;

        let workouts = parse_workouts(&raw)?;

        debug!("Store returned {} workouts", workouts.len());

        Ok(workouts)
    }
}

/// Join a base URL and a path with exactly one slash between them
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:8080/api", "workouts"), "http://localhost:8080/api/workouts");
        assert_eq!(join_url("http://localhost:8080/api/", "/workouts"), "http://localhost:8080/api/workouts");
    }

    #[test]
    fn test_workouts_url() {
        let client = WorkoutStoreClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.workouts_url(), "http://localhost:8080/api/workouts");
    }
}
