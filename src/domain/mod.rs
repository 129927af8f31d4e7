//! Domain entities shared across the repository and service layers.

pub mod lead;
pub mod property;
pub mod user;
