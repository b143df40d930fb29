//! Item availability handler.
//!
//! ```text
//! GET /items/?start_date=2024-03-01
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::ItemFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_date};

const START_DATE: FieldName = FieldName::query("start_date");

#[derive(Debug, Default, Deserialize)]
pub struct ItemListParams {
    start_date: Option<String>,
}

/// List items available on or after `start_date`.
#[utoipa::path(
    get,
    path = "/items",
    params(
        ("start_date" = Option<String>, Query, description = "Earliest availability date, `YYYY-MM-DD`")
    ),
    responses(
        (status = 200, description = "Matching items in table order", body = [crate::inbound::http::schemas::ItemSchema]),
        (status = 422, description = "start_date is not a YYYY-MM-DD date", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(
    state: web::Data<HttpState>,
    query: web::Query<ItemListParams>,
) -> ApiResult<HttpResponse> {
    let filter = ItemFilter {
        start_date: parse_optional_date(query.into_inner().start_date, START_DATE)?,
    };
    debug!(?filter, "listing items");

    let items = state.items.list_items(&filter).await?;
    Ok(HttpResponse::Ok().json(items))
}
