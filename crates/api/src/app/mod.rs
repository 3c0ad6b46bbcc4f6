//! HTTP application wiring (axum router + service construction).
//!
//! The folder is structured like:
//! - `services.rs`: store/engine wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and JSON envelope helpers
//! - `errors.rs`: consistent error responses
//! - `seed.rs`: demo fixture for local development

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod seed;
pub mod services;

/// Runtime configuration for [`build_app`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub seed_demo: bool,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: AppConfig) -> Router {
    let services = Arc::new(services::build_services());

    if config.seed_demo {
        if let Err(e) = seed::seed_demo_data(&services.store) {
            tracing::error!(error = %e, "failed to seed demo data");
        }
    }

    let auth_state = middleware::AuthState {
        jwt: Arc::new(souq_auth::Hs256JwtVerifier::new(
            config.jwt_secret.as_bytes(),
        )),
        users: services.store.clone(),
    };

    // Catalog writes and user administration require auth; reads do not.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    let api = routes::public_router().merge(protected);

    Router::new()
        .nest("/api", api)
        .fallback(fallback)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}

async fn fallback() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "Route not found")
}
