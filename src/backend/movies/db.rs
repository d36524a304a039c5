/**
 * Movie and Favorite Database Operations
 *
 * Movies are read-only. A favorite is an edge between a user and a movie; the
 * `favorites` table declares `UNIQUE (user_id, movie_id)`, so a duplicate that
 * slips past the service check fails as `StoreError::Duplicate`.
 */

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::backend::store::StoreError;
use crate::shared::Movie;

/// Read access to the movie catalog
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, StoreError>;

    /// Case-insensitive substring search over title, overview and language,
    /// ordered by id
    async fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Movie>, StoreError>;

    /// The `limit` most favorited movies, ties broken by id
    async fn find_popular(&self, limit: u32) -> Result<Vec<Movie>, StoreError>;
}

/// User-to-movie favorite edges
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn insert_edge(&self, user_id: i64, movie_id: i64) -> Result<(), StoreError>;

    async fn edge_exists(&self, user_id: i64, movie_id: i64) -> Result<bool, StoreError>;

    /// Movies favorited by `user_id`, ordered by movie id
    async fn find_movies_by_user(&self, user_id: i64) -> Result<Vec<Movie>, StoreError>;
}

/// Escape LIKE wildcards so the keyword only ever matches literally
fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[derive(Debug, Clone)]
pub struct SqliteMovieRepository {
    pool: SqlitePool,
}

impl SqliteMovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, original_title, original_language, overview, poster_path, backdrop_path,
                   adult, release_date, budget, revenue, created_at, updated_at
            FROM movies
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Movie>, StoreError> {
        let pattern = like_pattern(keyword);
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, original_title, original_language, overview, poster_path, backdrop_path,
                   adult, release_date, budget, revenue, created_at, updated_at
            FROM movies
            WHERE original_title LIKE ?1 ESCAPE '\'
               OR overview LIKE ?1 ESCAPE '\'
               OR original_language LIKE ?1 ESCAPE '\'
            ORDER BY id ASC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    async fn find_popular(&self, limit: u32) -> Result<Vec<Movie>, StoreError> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.original_title, m.original_language, m.overview, m.poster_path,
                   m.backdrop_path, m.adult, m.release_date, m.budget, m.revenue,
                   m.created_at, m.updated_at
            FROM movies m
            LEFT JOIN (
                SELECT movie_id, COUNT(*) AS favorite_number
                FROM favorites
                GROUP BY movie_id
            ) f ON m.id = f.movie_id
            ORDER BY IFNULL(f.favorite_number, 0) DESC, m.id ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }
}

#[derive(Debug, Clone)]
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for SqliteFavoriteRepository {
    async fn insert_edge(&self, user_id: i64, movie_id: i64) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO favorites (user_id, movie_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(movie_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_insert)?;

        Ok(())
    }

    async fn edge_exists(&self, user_id: i64, movie_id: i64) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = ? AND movie_id = ?)",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_movies_by_user(&self, user_id: i64) -> Result<Vec<Movie>, StoreError> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.original_title, m.original_language, m.overview, m.poster_path,
                   m.backdrop_path, m.adult, m.release_date, m.budget, m.revenue,
                   m.created_at, m.updated_at
            FROM movies m
            INNER JOIN favorites f ON m.id = f.movie_id
            WHERE f.user_id = ?
            ORDER BY m.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }
}
