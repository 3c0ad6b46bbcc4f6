use axum::http::StatusCode;

use souq_auth::{authorize, Capability};

use crate::app::errors;
use crate::context::ActorContext;

/// Check one capability against the actor's role, producing the 403 payload
/// on failure so handlers can return it directly.
pub fn require(
    actor: &ActorContext,
    capability: Capability,
) -> Result<(), axum::response::Response> {
    authorize(actor.role(), capability)
        .map_err(|e| errors::json_error(StatusCode::FORBIDDEN, e.to_string()))
}
