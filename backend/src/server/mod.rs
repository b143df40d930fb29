//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use lookup_api::Trace;
#[cfg(debug_assertions)]
use lookup_api::doc::ApiDoc;
use lookup_api::inbound::http::configure;
use lookup_api::inbound::http::health::HealthState;
use lookup_api::inbound::http::state::{HttpState, HttpStatePorts};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Last: the lookup scope claims every remaining path.
    app.configure(configure)
}

/// Construct an Actix HTTP server over the configured fixture tables.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        not_found,
        tables,
    } = config;
    let rows = tables.row_count();
    let http_state = web::Data::new(HttpState::new(HttpStatePorts::from(tables), not_found));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, rows, not_found_style = %not_found, "server listening");
    health_state.mark_ready();
    Ok(server)
}
