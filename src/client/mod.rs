//! Client-side data layer: thin HTTP wrappers over the REST API and the
//! listing-view state machine consuming them.

use std::fmt::{Display, Formatter};

pub mod auth;
pub mod listing;
pub mod properties;

pub use listing::{FetchToken, ListingView, ViewState};
pub use properties::{ListingFilters, PropertyClient};

/// Normalized client-side failure: whatever went wrong, callers get one
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub message: String,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
