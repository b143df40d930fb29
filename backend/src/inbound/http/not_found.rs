//! Policy for reporting lookups that match no record.
//!
//! `status` answers with a 404 [`Error`]; `sentinel` answers 200 with an
//! `{"error": "<Entity> not found"}` body for clients written against the
//! older contract.

use std::fmt;
use std::str::FromStr;

use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

use super::ApiResult;

/// How single-record lookups report a miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotFoundStyle {
    /// 404 with the standard error envelope.
    #[default]
    Status,
    /// 200 with an `error` sentinel payload.
    Sentinel,
}

/// Raised when a configured style name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown not-found style `{0}`; expected `status` or `sentinel`")]
pub struct UnknownNotFoundStyle(pub String);

impl NotFoundStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Sentinel => "sentinel",
        }
    }
}

impl fmt::Display for NotFoundStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotFoundStyle {
    type Err = UnknownNotFoundStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "sentinel" => Ok(Self::Sentinel),
            _ => Err(UnknownNotFoundStyle(s.to_owned())),
        }
    }
}

/// Respond with `record` as JSON, or report the miss per `style`.
pub(crate) fn record_or_missing<T: Serialize>(
    style: NotFoundStyle,
    entity: &'static str,
    record: Option<T>,
) -> ApiResult<HttpResponse> {
    if let Some(record) = record {
        return Ok(HttpResponse::Ok().json(record));
    }
    let message = format!("{entity} not found");
    debug!(entity, style = style.as_str(), "lookup matched no record");
    match style {
        NotFoundStyle::Status => Err(Error::not_found(message)),
        NotFoundStyle::Sentinel => Ok(HttpResponse::Ok().json(json!({ "error": message }))),
    }
}
