//! Application settings loaded via OrthoConfig.
//!
//! Values layer from defaults, configuration files, `LOOKUP_API_*`
//! environment variables, and command-line flags.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::not_found::{NotFoundStyle, UnknownNotFoundStyle};

/// Settings that cannot be turned into a runnable server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("host `{0}` is not an IP address")]
    InvalidHost(String),
    #[error(transparent)]
    NotFoundStyle(#[from] UnknownNotFoundStyle),
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOOKUP_API")]
pub struct AppSettings {
    /// Interface to bind.
    #[ortho_config(default = String::from("0.0.0.0"))]
    pub host: String,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// `status` (404) or `sentinel` (200 with an `error` body).
    #[ortho_config(default = String::from("status"))]
    pub not_found_style: String,
}

impl AppSettings {
    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self
            .host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| SettingsError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(host, self.port))
    }

    /// Configured not-found policy.
    pub fn not_found_style(&self) -> Result<NotFoundStyle, SettingsError> {
        Ok(self.not_found_style.parse()?)
    }
}
