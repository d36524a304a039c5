/**
 * Password Hashing
 *
 * One-way salted hashing with bcrypt. bcrypt only looks at the first 72 bytes
 * of its input, so longer passwords are refused instead of being silently
 * truncated. Verification is delegated to the bcrypt crate, which compares
 * digests in constant time.
 *
 * Both operations are CPU-bound; async callers should run them through
 * `tokio::task::spawn_blocking`.
 */

use thiserror::Error;

/// Longest password bcrypt can hash without truncation, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Errors from hashing or verifying a password
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password is {len} bytes, the maximum is {MAX_PASSWORD_BYTES}")]
    TooLong { len: usize },

    #[error("password does not match")]
    Mismatch,

    #[error("bcrypt failure: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong {
                len: plaintext.len(),
            });
        }
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored digest
    ///
    /// Returns `Mismatch` for a wrong password and `Hashing` when the digest
    /// itself is malformed.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<(), PasswordError> {
        // Nothing longer than the limit was ever hashed, so it cannot match
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::Mismatch);
        }
        if bcrypt::verify(plaintext, digest)? {
            Ok(())
        } else {
            Err(PasswordError::Mismatch)
        }
    }
}
