use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use stockflow_inventory::StockMovementInput;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/stock", post(record_movement))
        .route("/stock/movement", post(record_movement))
}

/// Record one stock movement; responds with the movement and the item's new stock.
///
/// `item_id`, `quantity` and `operation` are type-checked by the use case. A body
/// that is not a JSON object, or a malformed `description`/`created_at`, is
/// answered with `invalid_body`.
pub async fn record_movement(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<StockMovementInput>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match services.stock.execute(body) {
        Ok(outcome) => (StatusCode::CREATED, Json(outcome)).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}
