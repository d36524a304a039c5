/**
 * User Service
 *
 * Registration and login on top of the credential store, the password hasher
 * and the token maker. Inputs are assumed to be validated by the handlers;
 * this layer owns uniqueness, hashing and token issuance.
 *
 * Login never tells the caller which part of the credentials was wrong.
 */

use std::sync::Arc;

use chrono::Duration;

use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::sessions::TokenMaker;
use crate::backend::auth::users::{User, UserRepository};
use crate::backend::error::BackendError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message for every failed login
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Message for a registration with a taken email
pub const EMAIL_TAKEN: &str = "email already exists";

#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

/// A logged-in user and the token issued to them
#[derive(Debug, Clone)]
pub struct UserWithAccessToken {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub access_token: String,
}

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenMaker>,
    hasher: PasswordHasher,
    access_token_duration: Duration,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<TokenMaker>,
        hasher: PasswordHasher,
        access_token_duration: Duration,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
            access_token_duration,
        }
    }

    pub fn token_maker(&self) -> &TokenMaker {
        &self.tokens
    }

    /// Create a user with a unique email
    ///
    /// # Errors
    /// * `Conflict` - the email (or, in a race, the username) is taken
    /// * `SharedError` - the password is longer than bcrypt accepts
    /// * `Internal` - store or hashing failure
    pub async fn register(&self, params: RegisterParams) -> Result<User, BackendError> {
        let existing = self
            .users
            .find_by_email(&params.email)
            .await
            .map_err(|e| BackendError::internal("userRepository.find_by_email", e))?;

        if existing.is_some() {
            return Err(BackendError::conflict(EMAIL_TAKEN));
        }

        let hasher = self.hasher;
        let password = params.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| BackendError::internal("passwordHasher.hash", e))?
            .map_err(|e| match e {
                PasswordError::TooLong { .. } => {
                    BackendError::from(SharedError::validation("password", e.to_string()))
                }
                other => BackendError::internal("passwordHasher.hash", other),
            })?;

        let user = self
            .users
            .insert(&params.username, &params.email, &password_hash)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(detail) => {
                    tracing::warn!(%detail, "Registration lost a uniqueness race");
                    if detail.contains("username") {
                        BackendError::conflict("username already exists")
                    } else {
                        BackendError::conflict(EMAIL_TAKEN)
                    }
                }
                other => BackendError::internal("userRepository.insert", other),
            })?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verify credentials and issue an access token
    ///
    /// Unknown email and wrong password produce the same `BadRequest`.
    pub async fn login(&self, params: LoginParams) -> Result<UserWithAccessToken, BackendError> {
        let user = self
            .users
            .find_by_email(&params.email)
            .await
            .map_err(|e| BackendError::internal("userRepository.find_by_email", e))?
            .ok_or_else(|| {
                tracing::debug!("Login for unknown email");
                BackendError::bad_request(INVALID_CREDENTIALS)
            })?;

        let hasher = self.hasher;
        let password = params.password;
        let digest = user.password_hash.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| BackendError::internal("passwordHasher.verify", e))?
            .map_err(|e| {
                tracing::debug!(user_id = user.id, error = %e, "Password verification failed");
                BackendError::bad_request(INVALID_CREDENTIALS)
            })?;

        let access_token = self
            .tokens
            .create_token(&user.username, self.access_token_duration)
            .map_err(|e| BackendError::internal("tokenMaker.create_token", e))?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(UserWithAccessToken {
            id: user.id,
            username: user.username,
            email: user.email,
            access_token,
        })
    }

    /// Resolve a token subject to its user
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.users.find_by_username(username).await
    }
}
