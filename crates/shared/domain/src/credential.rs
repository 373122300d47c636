//! Credential value object - one-way derivation of stored passwords.
//!
//! The plaintext only ever passes through [`Credential::derive`] and
//! [`Credential::verify`]; neither keeps a copy of it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::constants::{CREDENTIAL_MEMORY_COST_KIB, CREDENTIAL_PARALLELISM, CREDENTIAL_TIME_COST};
use crate::error::{DomainError, DomainResult};

/// Salted Argon2id hash of a user's password, in PHC string form.
#[derive(Clone)]
pub struct Credential {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    /// Derive a storable credential from a plaintext password.
    ///
    /// Length rules are not enforced here; run
    /// [`CreateUserParams::validate`](crate::CreateUserParams::validate) first.
    ///
    /// # Errors
    /// Returns [`DomainError::Hashing`] if the hash primitive rejects the
    /// input or its parameters.
    pub fn derive(plain_text: &str) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::hasher()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::hashing(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash loaded from storage.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Check a candidate plaintext against this credential.
    ///
    /// Parameters are read back from the stored PHC string, so hashes made
    /// under older cost settings still verify.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }

    fn hasher() -> DomainResult<Argon2<'static>> {
        let params = Params::new(
            CREDENTIAL_MEMORY_COST_KIB,
            CREDENTIAL_TIME_COST,
            CREDENTIAL_PARALLELISM,
            None,
        )
        .map_err(|e| DomainError::hashing(format!("Invalid hash parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl From<Credential> for String {
    fn from(credential: Credential) -> Self {
        credential.hash
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Credential {}
