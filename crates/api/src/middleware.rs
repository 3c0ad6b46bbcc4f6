use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use souq_auth::JwtVerifier;
use souq_store::UserStore;

use crate::app::errors;
use crate::context::ActorContext;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtVerifier>,
    pub users: Arc<dyn UserStore>,
}

/// Resolve the bearer token to an active user and stash it in request
/// extensions. The token only proves identity; role and active status come
/// from the stored record at request time.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers())?;

    let claims = match state.jwt.verify(token, Utc::now()) {
        Ok(claims) => claims,
        Err(_) => {
            return Err(errors::json_error(
                StatusCode::UNAUTHORIZED,
                "Token is invalid or has expired. Please login again.",
            ));
        }
    };

    let user = match state.users.get_user(claims.sub) {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Err(errors::json_error(
                StatusCode::UNAUTHORIZED,
                "User not found. Token is invalid.",
            ));
        }
        Err(e) => return Err(errors::store_error_to_response("Error authenticating request", e)),
    };

    if !user.is_active {
        return Err(errors::json_error(
            StatusCode::UNAUTHORIZED,
            "User account is deactivated.",
        ));
    }

    req.extensions_mut().insert(ActorContext::new(user));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(not_logged_in)?;

    let header = header.to_str().map_err(|_| not_logged_in())?;

    let header = header.strip_prefix("Bearer ").ok_or_else(not_logged_in)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(not_logged_in());
    }

    Ok(token)
}

fn not_logged_in() -> Response {
    errors::json_error(
        StatusCode::UNAUTHORIZED,
        "Not authorized to access this route. Please login.",
    )
}
