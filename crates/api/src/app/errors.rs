use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockflow_core::DomainError;
use stockflow_inventory::{ItemServiceError, RepositoryError, StockMovementError};

pub fn stock_error_to_response(err: StockMovementError) -> axum::response::Response {
    let message = err.to_string();
    let (status, code) = match err {
        StockMovementError::ResourceNotFound => (StatusCode::NOT_FOUND, "not_found"),
        StockMovementError::OnlyNaturalNumbers => (StatusCode::BAD_REQUEST, "only_natural_numbers"),
        StockMovementError::InvalidOption => (StatusCode::BAD_REQUEST, "invalid_option"),
        StockMovementError::StockCannotBeNegative => {
            (StatusCode::BAD_REQUEST, "stock_cannot_be_negative")
        }
        StockMovementError::StockOverflow => (StatusCode::BAD_REQUEST, "stock_overflow"),
        StockMovementError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
        StockMovementError::Repository(e) => return repository_error_to_response(e),
    };
    json_error(status, code, message)
}

pub fn item_error_to_response(err: ItemServiceError) -> axum::response::Response {
    match err {
        ItemServiceError::Validation(e) => domain_error_to_response(e),
        ItemServiceError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "item not found")
        }
        ItemServiceError::Repository(e) => repository_error_to_response(e),
    }
}

/// A path id that does not parse names no item, so it is a 404 like any unknown id.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
    }
}

/// Body that is not JSON, or does not fit the request shape at all.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection, "request body rejected");
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

fn repository_error_to_response(err: RepositoryError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        RepositoryError::Conflict { .. } | RepositoryError::DuplicateItem(_) => {
            tracing::warn!(error = %message, "repository conflict");
            json_error(StatusCode::CONFLICT, "conflict", message)
        }
        RepositoryError::ItemNotFound(_) => {
            tracing::warn!(error = %message, "item vanished during write");
            json_error(StatusCode::NOT_FOUND, "not_found", message)
        }
        RepositoryError::Unavailable(_) => {
            tracing::error!(error = %message, "repository failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "repository_error", message)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use stockflow_core::ItemId;

    use super::*;

    async fn body_of(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let resp = stock_error_to_response(StockMovementError::Conflict("stock moved".into()));
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(body_of(resp).await["error"], "conflict");
    }

    #[tokio::test]
    async fn repository_conflict_also_maps_to_409() {
        let err = StockMovementError::from(RepositoryError::Conflict { expected: 2, actual: 1 });
        let resp = stock_error_to_response(err);
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(body_of(resp).await["error"], "conflict");
    }

    #[tokio::test]
    async fn unavailable_store_is_a_500() {
        let err = StockMovementError::Repository(RepositoryError::Unavailable("down".into()));
        let resp = stock_error_to_response(err);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(resp).await["error"], "repository_error");
    }

    #[tokio::test]
    async fn unparseable_id_is_not_found() {
        let err = "not-a-uuid".parse::<ItemId>().unwrap_err();
        let resp = domain_error_to_response(err);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(resp).await["error"], "not_found");
    }

    #[tokio::test]
    async fn validation_is_a_400() {
        let resp = domain_error_to_response(DomainError::validation("name cannot be empty"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_of(resp).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "name cannot be empty");
    }
}
