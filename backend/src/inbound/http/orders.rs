//! Order listing handler.
//!
//! ```text
//! GET /orders/?product_id=1&status=shipped
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::OrderFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_optional_order_status, parse_optional_u32,
};

const PRODUCT_ID: FieldName = FieldName::query("product_id");
const STATUS: FieldName = FieldName::query("status");

#[derive(Debug, Default, Deserialize)]
pub struct OrderListParams {
    product_id: Option<String>,
    status: Option<String>,
}

/// List orders, optionally by product and status.
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("product_id" = Option<u32>, Query, description = "Only orders for this product"),
        ("status" = Option<crate::inbound::http::schemas::OrderStatusSchema>, Query, description = "Only orders in this status, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching orders in table order", body = [crate::inbound::http::schemas::OrderSchema]),
        (status = 422, description = "Malformed product id or unknown status", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders")]
pub async fn list_orders(
    state: web::Data<HttpState>,
    query: web::Query<OrderListParams>,
) -> ApiResult<HttpResponse> {
    let OrderListParams { product_id, status } = query.into_inner();
    let filter = OrderFilter {
        product_id: parse_optional_u32(product_id, PRODUCT_ID)?,
        status: parse_optional_order_status(status, STATUS)?,
    };
    debug!(?filter, "listing orders");

    let orders = state.orders.list_orders(&filter).await?;
    Ok(HttpResponse::Ok().json(orders))
}
