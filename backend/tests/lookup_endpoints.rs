//! End-to-end checks of the lookup endpoints through the public library API.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use lookup_api::Trace;
use lookup_api::domain::TRACE_ID_HEADER;
use lookup_api::inbound::http::configure;
use lookup_api::inbound::http::not_found::NotFoundStyle;
use lookup_api::inbound::http::state::{HttpState, HttpStatePorts};
use lookup_api::outbound::memory::FixtureTables;
use rstest::rstest;
use serde_json::{Value, json};

async fn app(
    style: NotFoundStyle,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let tables = FixtureTables::seeded().expect("seed data is consistent");
    let state = HttpState::new(HttpStatePorts::from(tables), style);
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn get(style: NotFoundStyle, uri: &str) -> (StatusCode, Option<String>, Value) {
    let app = app(style).await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("response body is JSON");
    (status, trace_id, value)
}

#[rstest]
#[case("/users/1", StatusCode::OK)]
#[case("/users/404", StatusCode::NOT_FOUND)]
#[case("/users/abc", StatusCode::UNPROCESSABLE_ENTITY)]
#[case("/products/?price_range=oops", StatusCode::UNPROCESSABLE_ENTITY)]
#[case("/restaurants/1?min_rating=7", StatusCode::UNPROCESSABLE_ENTITY)]
#[case("/items/?start_date=yesterday", StatusCode::UNPROCESSABLE_ENTITY)]
#[case("/orders/?status=returned", StatusCode::UNPROCESSABLE_ENTITY)]
#[actix_web::test]
async fn every_response_carries_a_trace_id(#[case] uri: &str, #[case] expected: StatusCode) {
    let (status, trace_id, body) = get(NotFoundStyle::Status, uri).await;
    assert_eq!(status, expected);
    let trace_id = trace_id.expect("trace-id header present");
    if status.is_client_error() {
        assert_eq!(body["trace_id"], trace_id.as_str());
    }
}

#[actix_web::test]
async fn sentinel_style_reports_misses_with_ok() {
    let (status, _, body) = get(NotFoundStyle::Sentinel, "/products/77").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Product not found" }));
}

#[actix_web::test]
async fn validation_still_applies_in_sentinel_style() {
    let (status, _, body) = get(NotFoundStyle::Sentinel, "/users/-1").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "validation_failed");
}

#[rstest]
#[case("/products/?category=books&limit=1", json!([
    { "id": 4, "name": "Rust in Action", "category": "books", "price": 39.99 }
]))]
#[case("/restaurants/3?cuisine=mexican", json!([
    { "id": 6, "name": "Taco Stand", "city_id": 3, "cuisine": "Mexican", "rating": 3.5 }
]))]
#[case("/orders/?product_id=2", json!([
    { "id": 2, "product_id": 2, "quantity": 2, "status": "shipped" }
]))]
#[actix_web::test]
async fn filtered_listings_return_exact_records(#[case] uri: &str, #[case] expected: Value) {
    let (status, _, body) = get(NotFoundStyle::Status, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn booking_round_trip_through_public_api() {
    let app = app(NotFoundStyle::Status).await;
    let request = actix_test::TestRequest::post()
        .uri("/booking/")
        .set_json(json!({
            "contact_details": {
                "name": "Ada Obi",
                "age": 31,
                "email": "ada@example.org",
                "phone": "+2348123456789",
                "next_of_kin": "Chidi Obi"
            },
            "flight_details": {
                "origin": "Port Harcourt",
                "destination": "Kano",
                "flight_date": "2025-02-14"
            },
            "seat_pref": "C3"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Booking successful");
    assert_eq!(body["data"]["customer_phone"], "tel:+234-812-345-6789");
    assert_eq!(body["data"]["seat_preference"], "C3");
}
