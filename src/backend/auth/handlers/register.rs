/**
 * Register Handler
 *
 * POST /api/v1/users/register
 *
 * ```http
 * POST /api/v1/users/register HTTP/1.1
 * Content-Type: application/json
 *
 * {"username": "alice", "email": "a@x.io", "password": "secret1"}
 * ```
 *
 * Responds `201 {"username": "alice", "email": "a@x.io"}`. A taken email is a
 * 409; invalid input is a 400.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;
use crate::shared::SharedError;

pub async fn register(
    State(users): State<UserService>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), BackendError> {
    let Json(request) = payload.map_err(|e| SharedError::malformed(e.body_text()))?;
    request.validate()?;

    tracing::info!(username = %request.username, "Register request");
    let user = users.register(request.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
