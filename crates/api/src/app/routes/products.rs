use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;

use souq_auth::Capability;
use souq_catalog::{NewProduct, Product, ProductPatch};
use souq_core::{CategoryId, Lang, ProductId};
use souq_engine::{CategoryFilter, PageRequest};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::ActorContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/category/:id", get(list_by_category))
        .route("/id/:id", get(get_product_by_id))
        // Positional params: the first segment is the language code, but the
        // router has to name it `:id` because the admin routes own
        // `/products/:id` and axum requires one param name per position.
        .route("/:id/:slug", get(get_product_by_slug))
}

pub fn admin_router() -> Router {
    Router::new()
        .route("/", post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListProductsParams>,
) -> axum::response::Response {
    let category = match (params.category, params.lang) {
        (Some(slug), Some(lang)) => match lang.parse::<Lang>() {
            Ok(lang) => Some(CategoryFilter { lang, slug }),
            Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
        },
        (Some(_), None) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                r#"Invalid language. Use "en" or "ar""#,
            );
        }
        (None, _) => None,
    };

    let request = match PageRequest::from_query(
        category,
        params.page.as_deref(),
        params.limit.as_deref(),
        params.sort.as_deref(),
    ) {
        Ok(request) => request,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match services.query.list_products(&request) {
        Ok(page) => (StatusCode::OK, Json(dto::page_to_json(page))).into_response(),
        Err(e) => errors::query_error_to_response(e, "Error fetching products"),
    }
}

pub async fn list_by_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(params): Query<dto::ListProductsParams>,
) -> axum::response::Response {
    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid category id"),
    };

    let request = match PageRequest::from_query(
        None,
        params.page.as_deref(),
        params.limit.as_deref(),
        params.sort.as_deref(),
    ) {
        Ok(request) => request,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match services.query.list_by_category(id, &request) {
        Ok(scoped) => (StatusCode::OK, Json(dto::category_page_to_json(scoped))).into_response(),
        Err(e) => errors::query_error_to_response(e, "Error fetching products"),
    }
}

pub async fn get_product_by_slug(
    Extension(services): Extension<Arc<AppServices>>,
    Path((lang, slug)): Path<(String, String)>,
) -> axum::response::Response {
    let lang: Lang = match lang.parse() {
        Ok(v) => v,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match services.query.get_by_slug(lang, &slug) {
        Ok(view) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "data": view })),
        )
            .into_response(),
        Err(e) => errors::query_error_to_response(e, "Error fetching product"),
    }
}

pub async fn get_product_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid product id"),
    };

    match services.query.get_by_id(id) {
        Ok(view) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "data": view })),
        )
            .into_response(),
        Err(e) => errors::query_error_to_response(e, "Error fetching product"),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageCatalog) {
        return resp;
    }

    let category: CategoryId = match body.category.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid category id"),
    };

    let draft = NewProduct {
        name: body.name,
        description: body.description,
        slug: body.slug,
        price: body.price,
        image: body.image,
        category,
        is_active: body.is_active,
    };

    let product = match services.writer.create_product(draft, actor.id(), Utc::now()) {
        Ok(p) => p,
        Err(e) => {
            return errors::write_error_to_response(e, "Product not found", "Error creating product");
        }
    };

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Product created successfully",
            "data": resolve_view(&services, product),
        })),
    )
        .into_response()
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageCatalog) {
        return resp;
    }

    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid product id"),
    };

    let category = match body.category {
        Some(raw) => match raw.parse::<CategoryId>() {
            Ok(v) => Some(v),
            Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid category id"),
        },
        None => None,
    };

    let patch = ProductPatch {
        name: body.name,
        description: body.description,
        slug: body.slug,
        price: body.price,
        image: body.image,
        category,
        is_active: body.is_active,
    };

    let product = match services.writer.update_product(id, patch, actor.id(), Utc::now()) {
        Ok(p) => p,
        Err(e) => {
            return errors::write_error_to_response(e, "Product not found", "Error updating product");
        }
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "message": "Product updated successfully",
            "data": resolve_view(&services, product),
        })),
    )
        .into_response()
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageCatalog) {
        return resp;
    }

    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid product id"),
    };

    match services.writer.delete_product(id) {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Product deleted successfully",
                "data": product,
            })),
        )
            .into_response(),
        Err(e) => errors::write_error_to_response(e, "Product not found", "Error deleting product"),
    }
}

/// Write responses echo the record with category and audit actors resolved,
/// like reads do. Falls back to the bare record if the re-read loses a race.
fn resolve_view(services: &AppServices, product: Product) -> serde_json::Value {
    match services.query.get_by_id(product.id) {
        Ok(view) => serde_json::json!(view),
        Err(_) => serde_json::json!(product),
    }
}
