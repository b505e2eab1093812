//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; a bare `brickline-server` serves the API on
//! `127.0.0.1:3000` with documents under `./data`.
//!
//! - `BRICKLINE_HOST` - Bind address (default: 127.0.0.1)
//! - `BRICKLINE_PORT` - Listen port (default: 3000)
//! - `BRICKLINE_DATA_DIR` - Directory holding the JSON documents (default: data)
//! - `BRICKLINE_FRONTEND_DIR` - Static frontend to serve (unset: API only)
//! - `SHOP_NAME` - Shop name for `GET /api/config`
//! - `SHOP_TAGLINE` - Tagline shown under the shop name
//! - `SHOP_ADDRESS` - Street address
//! - `SHOP_PHONE` - Contact phone (also used for the call button)
//! - `OPEN_HOURS` - Opening hours blurb

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory the JSON documents live under
    pub data_dir: PathBuf,
    /// Static frontend directory, if one should be served
    pub frontend_dir: Option<PathBuf>,
    /// Shop identity served to the frontend
    pub shop: ShopIdentity,
}

/// Static shop identity, independent of the editable settings document.
///
/// This is deployment configuration (what the site is), while the settings
/// document holds what the shopkeeper edits day to day.
#[derive(Debug, Clone)]
pub struct ShopIdentity {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BRICKLINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BRICKLINE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BRICKLINE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BRICKLINE_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("BRICKLINE_DATA_DIR", "data"));
        let frontend_dir = get_optional_env("BRICKLINE_FRONTEND_DIR").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            data_dir,
            frontend_dir,
            shop: ShopIdentity::from_env(),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopIdentity {
    fn from_env() -> Self {
        Self {
            name: get_env_or_default("SHOP_NAME", "Brickline Traders"),
            tagline: get_env_or_default("SHOP_TAGLINE", "Cement, Steel & Building Materials"),
            address: get_env_or_default("SHOP_ADDRESS", ""),
            phone: get_env_or_default("SHOP_PHONE", ""),
            hours: get_env_or_default("OPEN_HOURS", ""),
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
