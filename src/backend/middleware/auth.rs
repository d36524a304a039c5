/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in user. The middleware reads the
 * `Authorization` header, verifies the bearer token, resolves its subject to
 * a stored user and attaches that user to the request extensions. Handlers
 * take it back out with the `AuthUser` extractor.
 *
 * # Rejections
 *
 * | Condition                                   | Status |
 * |---------------------------------------------|--------|
 * | header absent                               | 401    |
 * | fewer than two whitespace-separated fields  | 401    |
 * | scheme other than `bearer` (any case)       | 401    |
 * | token invalid or expired                    | 401    |
 * | subject does not resolve to a user          | 401    |
 * | credential store failure                    | 500    |
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;

/// Authorization scheme accepted by the middleware, compared case-insensitively
const BEARER: &str = "bearer";

/// The user a verified token resolved to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Pull the token out of `Authorization: <scheme> <token>`
fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| BackendError::unauthorized("authorization header is not provided"))?
        .to_str()
        .map_err(|_| BackendError::unauthorized("authorization header is not valid text"))?;

    let mut fields = header.split_whitespace();
    let (Some(scheme), Some(token)) = (fields.next(), fields.next()) else {
        return Err(BackendError::unauthorized("invalid authorization header format"));
    };

    if !scheme.eq_ignore_ascii_case(BEARER) {
        return Err(BackendError::unauthorized(format!(
            "unsupported authorization type {scheme}"
        )));
    }

    Ok(token)
}

/// Authentication middleware
///
/// Install with `axum::middleware::from_fn_with_state(user_service, auth_middleware)`.
pub async fn auth_middleware(
    State(users): State<UserService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let payload = users
        .token_maker()
        .verify_token(token)
        .map_err(|e| BackendError::unauthorized(e.to_string()))?;

    let user = users
        .find_by_username(&payload.subject)
        .await
        .map_err(|e| BackendError::internal("userRepository.find_by_username", e))?
        .ok_or_else(|| {
            BackendError::unauthorized(format!("token subject {} has no user", payload.subject))
        })?;

    tracing::debug!(user_id = user.id, token_id = %payload.id, "Request authenticated");

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Takes the `CurrentUser` out of the request extensions, so it can be
/// extracted once per request. Rejects with 401 when the middleware did not
/// run or the user was already taken.
#[derive(Clone, Debug)]
pub struct AuthUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<CurrentUser>()
            .map(AuthUser)
            .ok_or_else(|| BackendError::unauthorized("no authenticated user on request"))
    }
}
