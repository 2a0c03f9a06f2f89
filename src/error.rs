//! Error Types
//!
//! Failures of the location store client and of dashboard operations.

use thiserror::Error;

/// A failed call to the location store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("store responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

/// Failures the dashboard recovers from locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// Either the location list or the starred-id set could not be read.
    #[error("could not load locations: {0}")]
    FetchFailure(#[source] ApiError),

    /// The starred-id set could not be replaced.
    #[error("could not update starred locations (location {location_id}): {source}")]
    StarWriteFailure {
        location_id: u32,
        #[source]
        source: ApiError,
    },
}

impl DashboardError {
    /// Text for the user-facing notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            DashboardError::FetchFailure(_) => "Could not load locations. Please try again.",
            DashboardError::StarWriteFailure { .. } => {
                "Could not star an item due to unexpected error"
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
