//! Extractor configuration for malformed requests.
//!
//! Actix rejects undecodable paths, query strings, and JSON bodies with
//! plain-text 400/404 responses by default. The handlers registered here
//! turn those rejections into the same 422 JSON envelope the handlers emit
//! themselves, so clients see one error shape.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::warn;

use crate::domain::Error;

fn malformed(location: &'static str, reason: String) -> actix_web::Error {
    warn!(location, reason = reason.as_str(), "malformed request rejected");
    Error::validation_failed(format!("malformed {location}: {reason}"))
        .with_details(json!({ "location": location, "code": "malformed" }))
        .into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    malformed("query", err.to_string())
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    malformed("path", err.to_string())
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    malformed("body", err.to_string())
}

/// Register the extractor error handlers on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::JsonConfig::default().error_handler(json_error));
}
