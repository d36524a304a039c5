/**
 * Router Configuration
 *
 * Assembles the API routes under `/api/v1` and wraps them in the
 * cross-cutting layers, outermost first:
 *
 * 1. `TraceLayer` - one span per request
 * 2. `CorsLayer` - permissive CORS
 * 3. `TimeoutLayer` - abandons requests past the configured deadline
 *
 * Unknown paths get a JSON 404.
 */

use std::time::Duration;

use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::backend::error::not_found_fallback;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Base path of every API route
pub const API_PREFIX: &str = "/api/v1";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, request_timeout: Duration) -> Router<()> {
    Router::new()
        .nest(API_PREFIX, configure_api_routes(&app_state))
        .fallback(not_found_fallback)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
