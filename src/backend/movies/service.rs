/**
 * Movie Service
 *
 * Movie lookup and search, plus the favorite workflow: the movie must exist
 * and the edge must not, checked in that order before anything is written.
 * The check and the insert are not atomic; two concurrent requests for the
 * same pair can both pass the check, and the store's uniqueness constraint
 * decides which one wins.
 */

use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::movies::db::{FavoriteRepository, MovieRepository};
use crate::backend::store::StoreError;
use crate::shared::Movie;

/// Number of movies returned by a search without a keyword
pub const POPULAR_MOVIE_LIMIT: u32 = 100;

/// Message for a second favorite of the same movie
pub const ALREADY_FAVORITED: &str = "movie is already favorited";

#[derive(Clone)]
pub struct MovieService {
    movies: Arc<dyn MovieRepository>,
    favorites: Arc<dyn FavoriteRepository>,
}

impl MovieService {
    pub fn new(movies: Arc<dyn MovieRepository>, favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { movies, favorites }
    }

    pub async fn get_movie(&self, id: i64) -> Result<Movie, BackendError> {
        self.movies
            .find_by_id(id)
            .await
            .map_err(|e| BackendError::internal("movieRepository.find_by_id", e))?
            .ok_or_else(|| BackendError::not_found(format!("movie {id} not found")))
    }

    /// Keyword search; a blank keyword returns the most favorited movies
    pub async fn search(&self, keyword: &str) -> Result<Vec<Movie>, BackendError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return self
                .movies
                .find_popular(POPULAR_MOVIE_LIMIT)
                .await
                .map_err(|e| BackendError::internal("movieRepository.find_popular", e));
        }

        self.movies
            .find_by_keyword(keyword)
            .await
            .map_err(|e| BackendError::internal("movieRepository.find_by_keyword", e))
    }

    /// Record that `user_id` likes `movie_id`
    ///
    /// # Errors
    /// * `NotFound` - no such movie
    /// * `Conflict` - the edge already exists
    /// * `Internal` - store failure
    pub async fn add_favorite(&self, user_id: i64, movie_id: i64) -> Result<(), BackendError> {
        self.get_movie(movie_id).await?;

        let exists = self
            .favorites
            .edge_exists(user_id, movie_id)
            .await
            .map_err(|e| BackendError::internal("favoriteRepository.edge_exists", e))?;
        if exists {
            return Err(BackendError::conflict(ALREADY_FAVORITED));
        }

        self.favorites
            .insert_edge(user_id, movie_id)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => {
                    tracing::warn!(user_id, movie_id, "Concurrent favorite rejected by store");
                    BackendError::conflict(ALREADY_FAVORITED)
                }
                other => BackendError::internal("favoriteRepository.insert_edge", other),
            })?;

        tracing::info!(user_id, movie_id, "Favorite added");
        Ok(())
    }

    pub async fn list_favorites(&self, user_id: i64) -> Result<Vec<Movie>, BackendError> {
        self.favorites
            .find_movies_by_user(user_id)
            .await
            .map_err(|e| BackendError::internal("favoriteRepository.find_movies_by_user", e))
    }
}
