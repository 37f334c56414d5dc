use axum::Router;

pub mod items;
pub mod stock;
pub mod system;

/// Router for all inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(items::router())
        .merge(stock::router())
}
