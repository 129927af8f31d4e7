//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub secret: String,
    /// Root directory where uploaded listing images are stored.
    pub media_dir: String,
    /// When set, error responses include failure detail.
    #[serde(default)]
    pub development: bool,
}
