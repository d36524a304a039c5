/**
 * In-Memory Store
 *
 * One struct implementing every repository trait over `tokio::sync::RwLock`ed
 * collections. Used by service tests and for running the router without a
 * database file.
 *
 * Favorite uniqueness is a switch: with it off, `insert_edge` appends blindly
 * and only the service's check-then-insert keeps edges unique, which is the
 * store policy the race tests exercise.
 */

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::auth::users::{User, UserRepository};
use crate::backend::movies::db::{FavoriteRepository, MovieRepository};
use crate::backend::store::StoreError;
use crate::shared::Movie;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FavoriteEdge {
    user_id: i64,
    movie_id: i64,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    movies: BTreeMap<i64, Movie>,
    favorites: Vec<FavoriteEdge>,
}

#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unique_favorites: bool,
    failing: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// A store that rejects duplicate favorites, like the SQLite schema
    pub fn new() -> Self {
        Self::with_unique_favorites(true)
    }

    pub fn with_unique_favorites(unique_favorites: bool) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            unique_favorites,
            failing: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a database error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    pub async fn add_movie(&self, movie: Movie) {
        self.tables.write().await.movies.insert(movie.id, movie);
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Number of stored edges for the pair, duplicates included
    pub async fn edge_count(&self, user_id: i64, movie_id: i64) -> usize {
        self.tables
            .read()
            .await
            .favorites
            .iter()
            .filter(|e| e.user_id == user_id && e.movie_id == movie_id)
            .count()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.email == email) {
            return Err(StoreError::Duplicate("users.email".to_string()));
        }
        if tables.users.iter().any(|u| u.username == username) {
            return Err(StoreError::Duplicate("users.username".to_string()));
        }

        let user = User {
            id: tables.users.len() as i64 + 1,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl MovieRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.movies.get(&id).cloned())
    }

    async fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Movie>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .movies
            .values()
            .filter(|m| m.matches_keyword(keyword))
            .cloned()
            .collect())
    }

    async fn find_popular(&self, limit: u32) -> Result<Vec<Movie>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;

        let mut ranked: Vec<(usize, &Movie)> = tables
            .movies
            .values()
            .map(|m| {
                let count = tables.favorites.iter().filter(|e| e.movie_id == m.id).count();
                (count, m)
            })
            .collect();
        // movies iterate in id order and the sort is stable, so ties stay by id
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(ranked
            .into_iter()
            .take(limit as usize)
            .map(|(_, m)| m.clone())
            .collect())
    }
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    async fn insert_edge(&self, user_id: i64, movie_id: i64) -> Result<(), StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;

        if self.unique_favorites
            && tables
                .favorites
                .iter()
                .any(|e| e.user_id == user_id && e.movie_id == movie_id)
        {
            return Err(StoreError::Duplicate(
                "favorites.user_id, favorites.movie_id".to_string(),
            ));
        }

        tables.favorites.push(FavoriteEdge { user_id, movie_id });
        Ok(())
    }

    async fn edge_exists(&self, user_id: i64, movie_id: i64) -> Result<bool, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .favorites
            .iter()
            .any(|e| e.user_id == user_id && e.movie_id == movie_id))
    }

    async fn find_movies_by_user(&self, user_id: i64) -> Result<Vec<Movie>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        // BTreeMap iteration keeps the result ordered by movie id
        Ok(tables
            .movies
            .values()
            .filter(|m| {
                tables
                    .favorites
                    .iter()
                    .any(|e| e.user_id == user_id && e.movie_id == m.id)
            })
            .cloned()
            .collect())
    }
}
