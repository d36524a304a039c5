//! Concurrent favorite requests
//!
//! The service checks for an existing edge before inserting, but the check and
//! the insert are separate statements. These tests pin down what happens when
//! two requests for the same pair overlap, under both store policies.

use std::sync::Arc;

use moviefav::backend::error::BackendError;
use moviefav::backend::movies::db::{FavoriteRepository, SqliteFavoriteRepository, SqliteMovieRepository};
use moviefav::backend::movies::MovieService;
use moviefav::backend::store::{MemoryStore, StoreError};
use moviefav::shared::Movie;

use crate::common::TestDatabase;

async fn seed_user(db: &TestDatabase) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash) VALUES ('alice', 'a@x.io', 'h') RETURNING id",
    )
    .fetch_one(db.pool())
    .await
    .unwrap()
}

#[tokio::test]
async fn test_concurrent_favorites_leave_one_edge() {
    let db = TestDatabase::new().await;
    db.insert_movie(42, "The Matrix", None).await;
    let user = seed_user(&db).await;

    let service = MovieService::new(
        Arc::new(SqliteMovieRepository::new(db.pool().clone())),
        Arc::new(SqliteFavoriteRepository::new(db.pool().clone())),
    );

    let (a, b) = tokio::join!(
        {
            let service = service.clone();
            async move { service.add_favorite(user, 42).await }
        },
        {
            let service = service.clone();
            async move { service.add_favorite(user, 42).await }
        }
    );

    let results = [a, b];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(BackendError::Conflict { .. }))));
    assert_eq!(db.count("favorites").await, 1);
}

#[tokio::test]
async fn test_spawned_favorites_leave_one_edge() {
    let db = TestDatabase::new().await;
    db.insert_movie(42, "The Matrix", None).await;
    let user = seed_user(&db).await;

    let service = MovieService::new(
        Arc::new(SqliteMovieRepository::new(db.pool().clone())),
        Arc::new(SqliteFavoriteRepository::new(db.pool().clone())),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.add_favorite(user, 42).await })
        })
        .collect();

    let mut ok = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => ok += 1,
            Err(err) => assert!(matches!(err, BackendError::Conflict { .. }), "{err:?}"),
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(db.count("favorites").await, 1);
}

#[tokio::test]
async fn test_store_uniqueness_is_the_backstop() {
    let db = TestDatabase::new().await;
    db.insert_movie(42, "The Matrix", None).await;
    let user = seed_user(&db).await;
    let favorites = SqliteFavoriteRepository::new(db.pool().clone());

    // Both racers passed the existence check; only the insert remains
    assert_ok!(favorites.insert_edge(user, 42).await);
    assert_err!(favorites.insert_edge(user, 42).await, StoreError::Duplicate(_));
}

#[tokio::test]
async fn test_store_without_uniqueness_accepts_the_race() {
    let store = Arc::new(MemoryStore::with_unique_favorites(false));
    store.add_movie(Movie::new(42, "The Matrix", "en")).await;

    // Both racers passed the existence check; only the insert remains
    assert_ok!(store.insert_edge(1, 42).await);
    assert_ok!(store.insert_edge(1, 42).await);
    assert_eq!(store.edge_count(1, 42).await, 2);

    // Once the duplicate exists, the service check still refuses a third
    let service = MovieService::new(store.clone(), store.clone());
    assert_err!(service.add_favorite(1, 42).await, BackendError::Conflict { .. });
    assert_eq!(store.edge_count(1, 42).await, 2);
}
