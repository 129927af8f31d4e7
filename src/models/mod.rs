//! Database models backing the domain entities.

pub mod auth;
pub mod config;
pub mod lead;
pub mod property;
pub mod user;
