/**
 * Access Tokens
 *
 * Issues and verifies HS256-signed JWTs. Tokens are stateless: nothing is
 * stored server-side and there is no way to revoke one before it expires.
 * Each token carries a random `jti` so a revocation list could be added later.
 */

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::config::MIN_JWT_SECRET_LEN;

/// The only algorithm tokens are signed with or accepted in
const ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Token ID
    pub jti: String,
    /// Username of the token's owner
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Metadata of a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub id: Uuid,
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expired_at: DateTime<Utc>,
}

impl TryFrom<Claims> for TokenPayload {
    type Error = TokenError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&claims.jti).map_err(|_| TokenError::Invalid)?;
        let issued_at = timestamp(claims.iat)?;
        let expired_at = timestamp(claims.exp)?;
        Ok(Self {
            id,
            subject: claims.sub,
            issued_at,
            expired_at,
        })
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>, TokenError> {
    Utc.timestamp_opt(secs, 0).single().ok_or(TokenError::Invalid)
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("secret key must be at least {MIN_JWT_SECRET_LEN} bytes")]
    InvalidKey,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token lifetime {0} puts expiry out of range")]
    ExpiryOutOfRange(Duration),

    #[error("token is invalid")]
    Invalid,

    #[error("token has expired")]
    Expired,
}

/// Issues and verifies access tokens with a server-held secret
#[derive(Clone)]
pub struct TokenMaker {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenMaker")
            .field("algorithm", &ALGORITHM)
            .finish_non_exhaustive()
    }
}

impl TokenMaker {
    /// Create a maker from the HMAC secret
    ///
    /// # Errors
    /// `TokenError::InvalidKey` if the secret is shorter than 32 bytes.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(TokenError::InvalidKey);
        }

        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Create a token for `subject`, valid for `duration` from now
    pub fn create_token(&self, subject: &str, duration: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(duration)
            .ok_or(TokenError::ExpiryOutOfRange(duration))?;
        let claims = Claims {
            jti: Uuid::new_v4().to_string(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key).map_err(TokenError::Signing)
    }

    /// Verify a token's signature, algorithm and expiry, and return its payload
    pub fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        TokenPayload::try_from(data.claims)
    }
}
