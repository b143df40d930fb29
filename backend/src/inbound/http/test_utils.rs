//! Test helpers for inbound HTTP components.

use actix_web::body::BoxBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::middleware::Trace;
use crate::outbound::memory::FixtureTables;

use super::configure;
use super::not_found::NotFoundStyle;
use super::state::{HttpState, HttpStatePorts};

/// Ports backed by the bundled fixture tables.
pub fn fixture_ports() -> HttpStatePorts {
    HttpStatePorts::from(FixtureTables::seeded().expect("seed data is consistent"))
}

pub fn fixture_state(style: NotFoundStyle) -> HttpState {
    HttpState::new(fixture_ports(), style)
}

/// Build an app wired the way the server wires the API routes.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}

/// Issue a GET against a fresh app and decode the JSON body.
pub async fn get_json(state: HttpState, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(state)).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("response body is JSON");
    (status, value)
}

/// `id` of every object in a JSON array.
pub fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .expect("response body is an array")
        .iter()
        .map(|row| row["id"].as_u64().expect("row has a numeric id"))
        .collect()
}
