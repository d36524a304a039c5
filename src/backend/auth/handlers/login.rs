/**
 * Login Handler
 *
 * POST /api/v1/users/login
 *
 * Responds `201 {"username", "email", "access_token"}`. Unknown email and
 * wrong password both produce the same 400.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;
use crate::shared::SharedError;

pub async fn login(
    State(users): State<UserService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LoginResponse>), BackendError> {
    let Json(request) = payload.map_err(|e| SharedError::malformed(e.body_text()))?;
    request.validate()?;

    let user = users.login(request.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
