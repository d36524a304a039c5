/**
 * Application State Management
 *
 * `AppState` holds the two services handlers work with. The `FromRef`
 * implementations let a handler extract just the service it needs with
 * `State<UserService>` or `State<MovieService>`.
 *
 * Everything inside is cheap to clone: services are handles over
 * `Arc`'d repositories and an `Arc`'d token maker.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::UserService;
use crate::backend::auth::sessions::TokenMaker;
use crate::backend::auth::users::UserRepository;
use crate::backend::movies::db::{FavoriteRepository, MovieRepository};
use crate::backend::movies::service::MovieService;
use crate::backend::server::init::ServerError;
use crate::shared::config::ServerConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub movies: MovieService,
}

impl AppState {
    /// Wire services over the given repositories
    ///
    /// Fails when the configured JWT secret is unusable.
    pub fn new(
        server: &ServerConfig,
        users: Arc<dyn UserRepository>,
        movies: Arc<dyn MovieRepository>,
        favorites: Arc<dyn FavoriteRepository>,
    ) -> Result<Self, ServerError> {
        let tokens = Arc::new(TokenMaker::new(&server.jwt_secret_key)?);

        Ok(Self {
            users: UserService::new(
                users,
                tokens,
                PasswordHasher::new(server.bcrypt_cost),
                server.access_token_duration(),
            ),
            movies: MovieService::new(movies, favorites),
        })
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for MovieService {
    fn from_ref(state: &AppState) -> Self {
        state.movies.clone()
    }
}
