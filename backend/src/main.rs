//! Service entry-point: loads settings and fixture tables, then serves the
//! lookup endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use lookup_api::inbound::http::health::HealthState;
use lookup_api::settings::AppSettings;
use server::{ServerConfig, create_server};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!(error = %err, "{context}");
    std::io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| startup_error("failed to load settings", e))?;
    let config = ServerConfig::from_settings(&settings)
        .map_err(|e| startup_error("cannot start server", e))?;

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
