use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;

use souq_auth::Capability;
use souq_catalog::{CategoryPatch, NewCategory};
use souq_core::{CategoryId, Lang};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::ActorContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/", get(list_categories))
        .route("/slug/:lang/:slug", get(get_category_by_slug))
        .route("/:id", get(get_category))
}

pub fn admin_router() -> Router {
    Router::new()
        .route("/", post(create_category))
        .route("/:id", put(update_category).delete(delete_category))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.query.list_categories() {
        Ok(categories) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "count": categories.len(),
                "data": categories,
            })),
        )
            .into_response(),
        Err(e) => errors::query_error_to_response(e, "Error fetching categories"),
    }
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid category id"),
    };

    match services.query.get_category(id) {
        Ok(category) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "data": category })),
        )
            .into_response(),
        Err(e) => errors::query_error_to_response(e, "Error fetching category"),
    }
}

pub async fn get_category_by_slug(
    Extension(services): Extension<Arc<AppServices>>,
    Path((lang, slug)): Path<(String, String)>,
) -> axum::response::Response {
    let lang: Lang = match lang.parse() {
        Ok(v) => v,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match services.query.get_category_by_slug(lang, &slug) {
        Ok(category) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "data": category })),
        )
            .into_response(),
        Err(e) => errors::query_error_to_response(e, "Error fetching category"),
    }
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageCatalog) {
        return resp;
    }

    let draft = NewCategory {
        name: body.name,
        slug: body.slug,
        is_active: body.is_active,
    };

    match services.writer.create_category(draft, Utc::now()) {
        Ok(category) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Category created successfully",
                "data": category,
            })),
        )
            .into_response(),
        Err(e) => {
            errors::write_error_to_response(e, "Category not found", "Error creating category")
        }
    }
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCategoryRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageCatalog) {
        return resp;
    }

    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid category id"),
    };

    let patch = CategoryPatch {
        name: body.name,
        slug: body.slug,
        is_active: body.is_active,
    };

    match services.writer.update_category(id, patch, Utc::now()) {
        Ok(category) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Category updated successfully",
                "data": category,
            })),
        )
            .into_response(),
        Err(e) => {
            errors::write_error_to_response(e, "Category not found", "Error updating category")
        }
    }
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageCatalog) {
        return resp;
    }

    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid category id"),
    };

    match services.writer.delete_category(id) {
        Ok(category) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Category deleted successfully",
                "data": category,
            })),
        )
            .into_response(),
        Err(e) => {
            errors::write_error_to_response(e, "Category not found", "Error deleting category")
        }
    }
}
