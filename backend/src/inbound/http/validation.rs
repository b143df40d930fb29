//! Shared validation helpers for inbound HTTP adapters.
//!
//! Handlers extract path and query parameters as raw strings and convert them
//! here, so every rejection carries the same structured details:
//!
//! ```json
//! {"location": "query", "field": "min_rating", "value": "9", "code": "out_of_range"}
//! ```

use chrono::NaiveDate;
use serde_json::{Value, json};
use tracing::warn;

use crate::domain::{
    Error, LimitOutOfRange, MinRating, OrderStatus, Page, PriceRange, parse_date, DEFAULT_LIMIT,
    DEFAULT_SKIP, MAX_LIMIT, RATING_MAX, RATING_MIN,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidInteger,
    InvalidNumber,
    InvalidDate,
    InvalidFormat,
    InvalidChoice,
    OutOfRange,
}

impl ErrorCode {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidFormat => "invalid_format",
            ErrorCode::InvalidChoice => "invalid_choice",
            ErrorCode::OutOfRange => "out_of_range",
        }
    }
}

/// Part of the request a parameter was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    Path,
    Query,
    Body,
}

impl Location {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Location::Path => "path",
            Location::Query => "query",
            Location::Body => "body",
        }
    }
}

/// Named request parameter together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName {
    location: Location,
    name: &'static str,
}

impl FieldName {
    pub(crate) const fn path(name: &'static str) -> Self {
        Self {
            location: Location::Path,
            name,
        }
    }

    pub(crate) const fn query(name: &'static str) -> Self {
        Self {
            location: Location::Query,
            name,
        }
    }

    pub(crate) const fn body(name: &'static str) -> Self {
        Self {
            location: Location::Body,
            name,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.name
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: FieldName,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        self.finish(code.as_str(), Some(value.into()))
    }

    fn finish(self, code: &str, value: Option<String>) -> Error {
        warn!(
            location = self.field.location.as_str(),
            field = self.field.as_str(),
            code,
            "rejected request parameter"
        );
        let mut details = json!({
            "location": self.field.location.as_str(),
            "field": self.field.as_str(),
            "code": code,
        });
        if let (Some(value), Some(map)) = (value, details.as_object_mut()) {
            map.insert("value".to_owned(), Value::String(value));
        }
        Error::validation_failed(self.message).with_details(details)
    }
}

/// Build a validation error for a body field. Body values are not echoed.
pub(crate) fn body_field_error(
    name: &'static str,
    code: &'static str,
    message: impl Into<String>,
) -> Error {
    ValidationError::new(FieldName::body(name), message).finish(code, None)
}

/// Treat absent and blank parameters alike; trims surrounding whitespace.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

pub(crate) fn parse_u32(value: &str, field: FieldName) -> Result<u32, Error> {
    value.trim().parse::<u32>().map_err(|_| {
        let name = field.as_str();
        ValidationError::new(field, format!("{name} must be a non-negative integer"))
            .with_value(ErrorCode::InvalidInteger, value)
    })
}

pub(crate) fn parse_optional_u32(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<u32>, Error> {
    non_blank(value)
        .map(|raw| parse_u32(&raw, field))
        .transpose()
}

fn parse_usize(value: &str, field: FieldName) -> Result<usize, Error> {
    value.trim().parse::<usize>().map_err(|_| {
        let name = field.as_str();
        ValidationError::new(field, format!("{name} must be a non-negative integer"))
            .with_value(ErrorCode::InvalidInteger, value)
    })
}

/// Resolve `skip`/`limit`, applying defaults for absent values.
pub(crate) fn parse_page(
    skip: Option<String>,
    limit: Option<String>,
    skip_field: FieldName,
    limit_field: FieldName,
) -> Result<Page, Error> {
    let skip = non_blank(skip)
        .map(|raw| parse_usize(&raw, skip_field))
        .transpose()?
        .unwrap_or(DEFAULT_SKIP);
    let limit = non_blank(limit)
        .map(|raw| parse_usize(&raw, limit_field))
        .transpose()?
        .unwrap_or(DEFAULT_LIMIT);
    Page::new(skip, limit).map_err(|LimitOutOfRange(rejected)| {
        let name = limit_field.as_str();
        ValidationError::new(limit_field, format!("{name} must be between 1 and {MAX_LIMIT}"))
            .with_value(ErrorCode::OutOfRange, rejected.to_string())
    })
}

pub(crate) fn parse_optional_min_rating(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<MinRating>, Error> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };
    let name = field.as_str();
    let rating = raw.parse::<f32>().map_err(|_| {
        ValidationError::new(field, format!("{name} must be a number"))
            .with_value(ErrorCode::InvalidNumber, raw.as_str())
    })?;
    MinRating::new(rating).map(Some).map_err(|_| {
        ValidationError::new(
            field,
            format!("{name} must be between {RATING_MIN} and {RATING_MAX}"),
        )
        .with_value(ErrorCode::OutOfRange, raw.as_str())
    })
}

pub(crate) fn parse_optional_price_range(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<PriceRange>, Error> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<PriceRange>().map_err(|err| {
                let name = field.as_str();
                ValidationError::new(field, format!("{name} is invalid: {err}"))
                    .with_value(ErrorCode::InvalidFormat, raw.as_str())
            })
        })
        .transpose()
}

pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    non_blank(value)
        .map(|raw| {
            parse_date(&raw).map_err(|_| {
                let name = field.as_str();
                ValidationError::new(field, format!("{name} must be a date in YYYY-MM-DD format"))
                    .with_value(ErrorCode::InvalidDate, raw.as_str())
            })
        })
        .transpose()
}

pub(crate) fn parse_optional_order_status(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<OrderStatus>, Error> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<OrderStatus>().map_err(|_| {
                let name = field.as_str();
                let choices = OrderStatus::ALL.map(OrderStatus::as_str).join(", ");
                ValidationError::new(field, format!("{name} must be one of: {choices}"))
                    .with_value(ErrorCode::InvalidChoice, raw.as_str())
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    const USER_ID: FieldName = FieldName::path("user_id");
    const MIN_RATING: FieldName = FieldName::query("min_rating");
    const SKIP: FieldName = FieldName::query("skip");
    const LIMIT: FieldName = FieldName::query("limit");

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a str> {
        error.details().and_then(|d| d.get(key)).and_then(Value::as_str)
    }

    #[rstest]
    #[case("7", 7)]
    #[case(" 42 ", 42)]
    fn parses_path_integers(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_u32(raw, USER_ID).expect("integer parses"), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("-1")]
    #[case("1.5")]
    #[case("99999999999")]
    fn rejects_non_integer_path_values(#[case] raw: &str) {
        let error = parse_u32(raw, USER_ID).expect_err("value is rejected");
        assert_eq!(error.code(), DomainErrorCode::ValidationFailed);
        assert_eq!(error.message(), "user_id must be a non-negative integer");
        assert_eq!(detail(&error, "location"), Some("path"));
        assert_eq!(detail(&error, "field"), Some("user_id"));
        assert_eq!(detail(&error, "value"), Some(raw));
        assert_eq!(detail(&error, "code"), Some("invalid_integer"));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn blank_optional_values_are_absent(#[case] raw: Option<String>) {
        assert_eq!(parse_optional_u32(raw, FieldName::query("product_id")), Ok(None));
    }

    #[test]
    fn page_defaults_apply_when_absent() {
        let page = parse_page(None, None, SKIP, LIMIT).expect("defaults are valid");
        assert_eq!(page, Page::default());
    }

    #[rstest]
    #[case("0")]
    #[case("101")]
    fn page_limit_out_of_range_is_rejected(#[case] limit: &str) {
        let error = parse_page(None, Some(limit.to_owned()), SKIP, LIMIT)
            .expect_err("limit is rejected");
        assert_eq!(detail(&error, "field"), Some("limit"));
        assert_eq!(detail(&error, "code"), Some("out_of_range"));
    }

    #[rstest]
    #[case("x", "invalid_number")]
    #[case("5.5", "out_of_range")]
    #[case("-1", "out_of_range")]
    fn min_rating_rejections_carry_codes(#[case] raw: &str, #[case] code: &str) {
        let error = parse_optional_min_rating(Some(raw.to_owned()), MIN_RATING)
            .expect_err("rating is rejected");
        assert_eq!(detail(&error, "location"), Some("query"));
        assert_eq!(detail(&error, "code"), Some(code));
    }

    #[test]
    fn price_range_message_includes_reason() {
        let error = parse_optional_price_range(
            Some("50-10".to_owned()),
            FieldName::query("price_range"),
        )
        .expect_err("inverted range is rejected");
        assert_eq!(
            error.message(),
            "price_range is invalid: minimum price must not exceed maximum price"
        );
    }

    #[test]
    fn order_status_message_lists_choices() {
        let error = parse_optional_order_status(Some("lost".to_owned()), FieldName::query("status"))
            .expect_err("unknown status is rejected");
        assert_eq!(
            error.message(),
            "status must be one of: pending, shipped, delivered, cancelled"
        );
        assert_eq!(detail(&error, "code"), Some("invalid_choice"));
    }

    #[test]
    fn date_rejection_names_format() {
        let error = parse_optional_date(Some("15/01/2024".to_owned()), FieldName::query("start_date"))
            .expect_err("date is rejected");
        assert_eq!(error.message(), "start_date must be a date in YYYY-MM-DD format");
    }

    #[test]
    fn body_fields_omit_the_submitted_value() {
        let error = body_field_error("seat_pref", "invalid_seat", "bad seat");
        assert_eq!(
            error.details(),
            Some(&serde_json::json!({
                "location": "body",
                "field": "seat_pref",
                "code": "invalid_seat",
            }))
        );
        assert_eq!(error.message(), "bad seat");
    }
}
