//! Flight booking handler.
//!
//! ```text
//! POST /booking/ {"contact_details": {...}, "flight_details": {...}, "seat_pref": "A1"}
//! ```
//!
//! Bookings are validated and echoed back; nothing is stored.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{
    Booking, BookingConfirmation, BookingValidationError, ContactDetails, Error, FlightDetails,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::validation::body_field_error;

/// Message accompanying every accepted booking.
pub const BOOKING_ACCEPTED: &str = "Booking successful";

/// Passenger contact block of [`BookingRequest`].
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ContactDetailsBody {
    /// 3 to 50 letters and spaces.
    #[schema(example = "John Doe")]
    pub name: String,
    /// Greater than 0 and less than 120.
    #[schema(example = 25)]
    pub age: u32,
    #[schema(example = "user@example.com")]
    pub email: String,
    /// International number with leading `+`.
    #[schema(example = "+2348123456789")]
    pub phone: String,
    /// 3 to 50 letters and spaces.
    #[schema(example = "Jane Doe")]
    pub next_of_kin: String,
}

/// Itinerary block of [`BookingRequest`].
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct FlightDetailsBody {
    #[schema(example = "Lagos")]
    pub origin: String,
    #[schema(example = "Abuja")]
    pub destination: String,
    /// `YYYY-MM-DD`.
    #[schema(example = "2021-12-25")]
    pub flight_date: String,
}

/// Request body for `POST /booking/`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookingRequest {
    pub contact_details: ContactDetailsBody,
    pub flight_details: FlightDetailsBody,
    /// Row letter followed by seat 1-4.
    #[schema(example = "A1")]
    pub seat_pref: String,
}

impl From<BookingRequest> for Booking {
    fn from(value: BookingRequest) -> Self {
        let BookingRequest {
            contact_details,
            flight_details,
            seat_pref,
        } = value;
        Self {
            contact_details: ContactDetails {
                name: contact_details.name,
                age: contact_details.age,
                email: contact_details.email,
                phone: contact_details.phone,
                next_of_kin: contact_details.next_of_kin,
            },
            flight_details: FlightDetails {
                origin: flight_details.origin,
                destination: flight_details.destination,
                flight_date: flight_details.flight_date,
            },
            seat_pref,
        }
    }
}

/// Response body for an accepted booking.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    #[schema(value_type = crate::inbound::http::schemas::BookingConfirmationSchema)]
    pub data: BookingConfirmation,
    #[schema(example = "Booking successful")]
    pub message: String,
}

fn map_booking_validation_error(err: &BookingValidationError) -> Error {
    body_field_error(err.field().path(), err.code(), err.to_string())
}

/// Validate a booking and echo the confirmed details.
#[utoipa::path(
    post,
    path = "/booking",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking accepted", body = BookingResponse),
        (status = 422, description = "Malformed body or field constraint violated", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/booking")]
pub async fn create_booking(payload: web::Json<BookingRequest>) -> ApiResult<HttpResponse> {
    let confirmation = Booking::from(payload.into_inner())
        .confirm()
        .map_err(|err| map_booking_validation_error(&err))?;
    info!(
        origin = confirmation.flight_origin.as_str(),
        destination = confirmation.flight_destination.as_str(),
        "booking accepted"
    );
    Ok(HttpResponse::Created().json(BookingResponse {
        data: confirmation,
        message: BOOKING_ACCEPTED.to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::not_found::NotFoundStyle;
    use crate::inbound::http::test_utils::{fixture_state, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn request() -> BookingRequest {
        BookingRequest {
            contact_details: ContactDetailsBody {
                name: "John Doe".into(),
                age: 25,
                email: "user@example.com".into(),
                phone: "+2348123456789".into(),
                next_of_kin: "Jane Doe".into(),
            },
            flight_details: FlightDetailsBody {
                origin: "Lagos".into(),
                destination: "Abuja".into(),
                flight_date: "2021-12-25".into(),
            },
            seat_pref: "A1".into(),
        }
    }

    async fn post_booking(body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(fixture_state(NotFoundStyle::Status))).await;
        let request = actix_test::TestRequest::post()
            .uri("/booking/")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("response body is JSON"))
    }

    fn as_json(request: &BookingRequest) -> Value {
        serde_json::to_value(request).expect("request serialises")
    }

    #[rstest]
    #[actix_web::test]
    async fn valid_booking_is_created(request: BookingRequest) {
        let (status, body) = post_booking(as_json(&request)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "data": {
                    "customer_name": "John Doe",
                    "customer_age": 25,
                    "customer_email": "user@example.com",
                    "customer_phone": "tel:+234-812-345-6789",
                    "flight_origin": "Lagos",
                    "flight_destination": "Abuja",
                    "flight_date": "2021-12-25",
                    "seat_preference": "A1"
                },
                "message": "Booking successful"
            })
        );
    }

    #[rstest]
    #[case::name(|r: &mut BookingRequest| r.contact_details.name = "J0hn".into(), "contact_details.name", "invalid_characters")]
    #[case::age(|r: &mut BookingRequest| r.contact_details.age = 130, "contact_details.age", "out_of_range")]
    #[case::email(|r: &mut BookingRequest| r.contact_details.email = "not-an-email".into(), "contact_details.email", "invalid_email")]
    #[case::double_dot_email(|r: &mut BookingRequest| r.contact_details.email = "a..b@example.com".into(), "contact_details.email", "invalid_email")]
    #[case::unassigned_country_code(|r: &mut BookingRequest| r.contact_details.phone = "+99912345678".into(), "contact_details.phone", "invalid_phone")]
    #[case::phone(|r: &mut BookingRequest| r.contact_details.phone = "12345".into(), "contact_details.phone", "invalid_phone")]
    #[case::date(|r: &mut BookingRequest| r.flight_details.flight_date = "2021-13-01".into(), "flight_details.flight_date", "invalid_date")]
    #[case::seat(|r: &mut BookingRequest| r.seat_pref = "B7".into(), "seat_pref", "invalid_seat")]
    #[actix_web::test]
    async fn constraint_violations_are_unprocessable(
        mut request: BookingRequest,
        #[case] mutate: fn(&mut BookingRequest),
        #[case] field: &str,
        #[case] code: &str,
    ) {
        mutate(&mut request);
        let (status, body) = post_booking(as_json(&request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["details"],
            json!({ "location": "body", "field": field, "code": code })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_section_is_unprocessable(request: BookingRequest) {
        let mut body = as_json(&request);
        if let Some(object) = body.as_object_mut() {
            object.remove("flight_details");
        }
        let (status, payload) = post_booking(body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(payload["details"]["location"], "body");
        assert_eq!(payload["details"]["code"], "malformed");
    }

    #[rstest]
    #[actix_web::test]
    async fn negative_age_is_rejected_during_decoding(request: BookingRequest) {
        let mut body = as_json(&request);
        body["contact_details"]["age"] = json!(-1);
        let (status, _) = post_booking(body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
