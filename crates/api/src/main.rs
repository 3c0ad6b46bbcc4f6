use souq_api::app::{self, AppConfig};

#[tokio::main]
async fn main() {
    souq_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using insecure default (dev only)");
        "dev-secret".to_string()
    });

    let seed_demo = std::env::var("SEED_DEMO_DATA")
        .map(|v| v == "true")
        .unwrap_or(false);

    let app = app::build_app(AppConfig {
        jwt_secret,
        seed_demo,
    });

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");

    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.unwrap();
}
