use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;

use souq_auth::{Capability, NewUser, Role, UserPatch};
use souq_core::UserId;
use souq_store::{StoreError, UserStore};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::ActorContext;

/// User administration talks to the store directly; the catalog engine has
/// no part in it.
pub fn router() -> Router {
    Router::new()
        .route("/me", get(me))
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
}

pub async fn me(Extension(actor): Extension<ActorContext>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "user": actor.user() })),
    )
        .into_response()
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageUsers) {
        return resp;
    }

    match services.store.list_users() {
        Ok(users) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "count": users.len(),
                "data": users,
            })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response("Error fetching users", e),
    }
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageUsers) {
        return resp;
    }

    let role = match body.role.as_deref() {
        Some(raw) => match errors::parse_role(raw) {
            Ok(role) => role,
            Err(resp) => return resp,
        },
        None => Role::Customer,
    };

    let draft = NewUser {
        name: body.name,
        email: body.email,
        role,
        is_active: body.is_active,
    };

    let user = match draft.into_user(UserId::new(), Utc::now()) {
        Ok(user) => user,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match services.store.insert_user(user.clone()) {
        Ok(()) => {}
        Err(StoreError::DuplicateKey(_)) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "User with this email already exists",
            );
        }
        Err(e) => return errors::store_error_to_response("Error creating user", e),
    }

    tracing::info!(user_id = %user.id, "user created");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "User created successfully",
            "user": user,
        })),
    )
        .into_response()
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateUserRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageUsers) {
        return resp;
    }

    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid user id"),
    };

    let role = match body.role.as_deref() {
        Some(raw) => match errors::parse_role(raw) {
            Ok(role) => Some(role),
            Err(resp) => return resp,
        },
        None => None,
    };

    let mut user = match services.store.get_user(id) {
        Ok(Some(user)) => user,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "User not found"),
        Err(e) => return errors::store_error_to_response("Error updating user", e),
    };

    let patch = UserPatch {
        name: body.name,
        email: body.email,
        role,
        is_active: body.is_active,
    };
    if let Err(e) = patch.apply_to(&mut user, Utc::now()) {
        return errors::json_error(StatusCode::BAD_REQUEST, e.to_string());
    }

    match services.store.update_user(user.clone()) {
        Ok(Some(_)) => {}
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "User not found"),
        Err(StoreError::DuplicateKey(_)) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "Email already in use");
        }
        Err(e) => return errors::store_error_to_response("Error updating user", e),
    }

    tracing::info!(user_id = %user.id, "user updated");
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "message": "User updated successfully",
            "user": user,
        })),
    )
        .into_response()
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&actor, Capability::ManageUsers) {
        return resp;
    }

    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid user id"),
    };

    match services.store.delete_user(id) {
        Ok(Some(user)) => {
            tracing::info!(user_id = %user.id, "user deleted");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "message": "User deleted successfully",
                    "user": user,
                })),
            )
                .into_response()
        }
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "User not found"),
        Err(e) => errors::store_error_to_response("Error deleting user", e),
    }
}
