//! Request/response shapes exposed by the API endpoints.

pub mod auth;
pub mod lead;
pub mod property;
