//! HTTP server configuration object.

use std::net::SocketAddr;

use lookup_api::domain::ports::CatalogueReadError;
use lookup_api::inbound::http::not_found::NotFoundStyle;
use lookup_api::outbound::memory::FixtureTables;
use lookup_api::settings::{AppSettings, SettingsError};

/// Reasons the service cannot start.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("fixture tables are inconsistent: {0}")]
    Fixtures(#[from] CatalogueReadError),
}

/// Everything `create_server` needs to bind and serve.
#[derive(Debug)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) not_found: NotFoundStyle,
    pub(crate) tables: FixtureTables,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, tables: FixtureTables) -> Self {
        Self {
            bind_addr,
            not_found: NotFoundStyle::default(),
            tables,
        }
    }

    /// Resolve loaded settings and build the bundled fixture tables.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, StartupError> {
        let bind_addr = settings.bind_addr()?;
        let not_found = settings.not_found_style()?;
        let tables = FixtureTables::seeded()?;
        Ok(Self::new(bind_addr, tables).with_not_found_style(not_found))
    }

    /// Override how single-record lookups report a miss.
    #[must_use]
    pub fn with_not_found_style(mut self, style: NotFoundStyle) -> Self {
        self.not_found = style;
        self
    }
}
