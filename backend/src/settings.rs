//! Server configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `FACTORY_*` environment variables over
//! configuration files; anything unset falls back to the defaults below.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host address `{host}`: {message}")]
    InvalidHost { host: String, message: String },
}

/// Configuration for the dashboard server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FACTORY")]
pub struct DashboardSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Seed for the random source. Unset draws from OS entropy.
    pub seed: Option<u64>,
}

impl DashboardSettings {
    /// Configured host, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 5000.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port()))
            .map_err(|err| SettingsError::InvalidHost {
                host: host.to_owned(),
                message: err.to_string(),
            })
    }
}
