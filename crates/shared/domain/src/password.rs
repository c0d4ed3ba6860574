//! Password value object.
//!
//! Plain-text passwords never reach the store: they are hashed with Argon2
//! here and only the PHC string is persisted.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::constants::MSG_BLANK_PASSWORD;
use crate::error::{DomainError, DomainResult};
use crate::validation::is_blank;

/// Password value object that handles hashing and verification.
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns a validation error if the password is blank.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if is_blank(plain_text) {
            return Err(DomainError::validation(MSG_BLANK_PASSWORD));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Consume and return the hash string for storage.
    pub fn into_string(self) -> String {
        self.hash
    }

    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

/// Checking stored hashes, used by tests of the crates that persist them.
#[cfg(any(test, feature = "test-utils"))]
impl Password {
    /// Wrap a hash read back from storage.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn verify_hash(plain_text: &str, hash: &str) -> DomainResult<bool> {
        use argon2::password_hash::{PasswordHash, PasswordVerifier};

        let parsed = PasswordHash::new(hash)
            .map_err(|e| DomainError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("p1").unwrap();

        assert!(password.verify("p1"));
        assert!(!password.verify("p2"));
    }

    #[test]
    fn test_password_from_hash() {
        let hash = Password::new("TestPassword123").unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify("TestPassword123"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hash1 = Password::new("same").unwrap().into_string();
        let hash2 = Password::new("same").unwrap().into_string();

        assert_ne!(hash1, hash2);
        assert!(Password::from_hash(hash1).verify("same"));
        assert!(Password::from_hash(hash2).verify("same"));
    }

    #[test]
    fn test_hash_is_not_plain_text() {
        let hash = Password::new("secret").unwrap().into_string();
        assert!(!hash.contains("secret"));
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_blank_password_rejected() {
        assert_eq!(
            Password::new("   ").unwrap_err(),
            DomainError::validation(MSG_BLANK_PASSWORD)
        );
        assert!(Password::new("").is_err());
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("secret").unwrap();
        let debug = format!("{:?}", password);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("$argon2"));
    }
}
