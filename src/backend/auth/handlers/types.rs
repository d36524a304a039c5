/**
 * Authentication Handler Types
 *
 * Request and response bodies for the user endpoints. Requests validate
 * themselves before reaching the service; responses never carry the
 * password hash.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::service::{LoginParams, RegisterParams, UserWithAccessToken};
use crate::backend::auth::users::User;
use crate::shared::SharedError;

const MIN_USERNAME_CHARS: usize = 3;
const MAX_USERNAME_CHARS: usize = 254;
const MAX_EMAIL_CHARS: usize = 254;
const MIN_PASSWORD_CHARS: usize = 6;

/// Register request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    /// 3 to 254 characters
    pub username: String,
    pub email: String,
    /// At least 6 characters, hashed before storage
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        let username_len = self.username.chars().count();
        if !(MIN_USERNAME_CHARS..=MAX_USERNAME_CHARS).contains(&username_len) {
            return Err(SharedError::validation(
                "username",
                format!("must be between {MIN_USERNAME_CHARS} and {MAX_USERNAME_CHARS} characters"),
            ));
        }
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

impl From<RegisterRequest> for RegisterParams {
    fn from(request: RegisterRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

impl From<LoginRequest> for LoginParams {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

/// Body of a successful registration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterResponse {
    pub username: String,
    pub email: String,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
        }
    }
}

/// Body of a successful login
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub username: String,
    pub email: String,
    pub access_token: String,
}

impl From<UserWithAccessToken> for LoginResponse {
    fn from(user: UserWithAccessToken) -> Self {
        Self {
            username: user.username,
            email: user.email,
            access_token: user.access_token,
        }
    }
}

fn validate_email(email: &str) -> Result<(), SharedError> {
    if email.chars().count() > MAX_EMAIL_CHARS {
        return Err(SharedError::validation(
            "email",
            format!("must be at most {MAX_EMAIL_CHARS} characters"),
        ));
    }
    if !is_valid_email(email) {
        return Err(SharedError::validation("email", "must be a valid email address"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(SharedError::validation(
            "password",
            format!("must be at least {MIN_PASSWORD_CHARS} characters"),
        ));
    }
    Ok(())
}

/// Structural email check: `local@domain.tld`, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}
