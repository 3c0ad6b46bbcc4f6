use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use souq_auth::Role;
use souq_core::DomainError;
use souq_engine::{QueryError, WriteError};
use souq_store::StoreError;

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Store failures are the one place the envelope carries a detail field next
/// to the human message.
pub fn store_error_to_response(
    context: &'static str,
    err: StoreError,
) -> axum::response::Response {
    tracing::error!(error = %err, "{}", context);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "success": false,
            "message": context,
            "error": err.to_string(),
        })),
    )
        .into_response()
}

pub fn query_error_to_response(
    err: QueryError,
    store_context: &'static str,
) -> axum::response::Response {
    match err {
        QueryError::CategoryNotFound => json_error(StatusCode::NOT_FOUND, "Category not found"),
        QueryError::ProductNotFound => json_error(StatusCode::NOT_FOUND, "Product not found"),
        QueryError::Domain(e) => domain_error_to_response(e),
        QueryError::Store(e) => store_error_to_response(store_context, e),
    }
}

/// `missing` is the 404 message for this route's resource; write paths report
/// absence as a plain `DomainError::NotFound`.
pub fn write_error_to_response(
    err: WriteError,
    missing: &'static str,
    store_context: &'static str,
) -> axum::response::Response {
    match err {
        WriteError::Domain(DomainError::NotFound) => json_error(StatusCode::NOT_FOUND, missing),
        WriteError::Domain(e) => domain_error_to_response(e),
        WriteError::Store(e) => store_error_to_response(store_context, e),
    }
}

fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "Resource not found"),
        DomainError::Unauthorized => json_error(StatusCode::FORBIDDEN, err.to_string()),
        other => json_error(StatusCode::BAD_REQUEST, other.to_string()),
    }
}

pub fn parse_role(s: &str) -> Result<Role, axum::response::Response> {
    match s {
        "admin" => Ok(Role::Admin),
        "customer" => Ok(Role::Customer),
        _ => Err(json_error(
            StatusCode::BAD_REQUEST,
            "role must be one of: admin, customer",
        )),
    }
}
