/**
 * API Route Table
 *
 * Everything served under `/api/v1`.
 *
 * ## Users
 * - `POST /users/register` - User registration
 * - `POST /users/login` - User login
 *
 * ## Movies
 * - `GET /movies` - Search (`?search=`), popular movies when blank
 * - `GET /movies/{id}` - Single movie
 *
 * ## Favorites (bearer token required)
 * - `GET /favorites` - The caller's favorite movies
 * - `POST /favorites/{id}` - Favorite a movie
 *
 * ## Health
 * - `GET /health` - Liveness probe
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::handlers::{login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::movies::handlers::{add_favorite, get_movie, list_favorites, search_movies};
use crate::backend::server::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

/// Build the `/api/v1` routes
///
/// The auth middleware is attached with `route_layer` to the favorites
/// routes only, so unmatched paths still fall through to the 404 fallback.
pub fn configure_api_routes(app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/favorites", get(list_favorites))
        .route("/favorites/{id}", post(add_favorite))
        .route_layer(from_fn_with_state(app_state.users.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health))
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/movies", get(search_movies))
        .route("/movies/{id}", get(get_movie))
        .merge(protected)
}
