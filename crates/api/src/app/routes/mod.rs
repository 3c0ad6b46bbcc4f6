use axum::{routing::get, Router};

pub mod auth;
pub mod categories;
pub mod products;
pub mod system;

/// Routes served without authentication: health plus all catalog reads.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/products", products::public_router())
        .nest("/categories", categories::public_router())
}

/// Routes behind the auth middleware: catalog writes and user administration.
pub fn protected_router() -> Router {
    Router::new()
        .nest("/products", products::admin_router())
        .nest("/categories", categories::admin_router())
        .nest("/auth", auth::router())
}
