/**
 * Movie and Favorite Handlers
 *
 * - GET  /api/v1/movies?search=kw   - keyword search, popular movies when blank
 * - GET  /api/v1/movies/{id}        - single movie
 * - GET  /api/v1/favorites          - the caller's favorites (auth)
 * - POST /api/v1/favorites/{id}     - favorite a movie (auth)
 */

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::movies::service::MovieService;
use crate::shared::{Movie, SharedError};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

fn movie_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, BackendError> {
    let Path(id) = path.map_err(|e| SharedError::validation("id", e.body_text()))?;
    if id <= 0 {
        return Err(SharedError::validation("id", "must be a positive integer").into());
    }
    Ok(id)
}

pub async fn search_movies(
    State(movies): State<MovieService>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Movie>>, BackendError> {
    Ok(Json(movies.search(&query.search).await?))
}

pub async fn get_movie(
    State(movies): State<MovieService>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Movie>, BackendError> {
    let id = movie_id(path)?;
    Ok(Json(movies.get_movie(id).await?))
}

pub async fn list_favorites(
    State(movies): State<MovieService>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Movie>>, BackendError> {
    Ok(Json(movies.list_favorites(user.id).await?))
}

pub async fn add_favorite(
    State(movies): State<MovieService>,
    AuthUser(user): AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, BackendError> {
    let movie_id = movie_id(path)?;
    movies.add_favorite(user.id, movie_id).await?;
    Ok(StatusCode::OK)
}
