//! Argon2id implementation of [`CredentialHasher`].
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
//! so verification does not depend on the currently configured parameters.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use quotes_kit::SecretString;

use crate::domain::error::DomainError;
use crate::domain::ports::CredentialHasher;

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    /// Custom cost parameters (memory in KiB, iterations, lanes).
    ///
    /// # Errors
    /// Returns `DomainError::Internal` if argon2 rejects the parameters.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, DomainError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| DomainError::internal(format!("invalid argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, secret: &SecretString) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(secret.expose().as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("failed to hash password: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, secret: &SecretString, encoded_hash: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(encoded_hash)
            .map_err(|e| DomainError::internal(format!("invalid stored password hash: {e}")))?;
        Ok(self
            .argon2()
            .verify_password(secret.expose().as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> Argon2Hasher {
        Argon2Hasher::with_params(8, 1, 1).unwrap()
    }

    #[test]
    fn hash_is_phc_and_salted() {
        let hasher = fast();
        let pw = SecretString::new("pw1");
        let a = hasher.hash(&pw).unwrap();
        let b = hasher.hash(&pw).unwrap();
        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b, "each hash must use a fresh salt");
    }

    #[test]
    fn verify_accepts_right_and_rejects_wrong_password() {
        let hasher = fast();
        let hash = hasher.hash(&SecretString::new("pw1")).unwrap();
        assert!(hasher.verify(&SecretString::new("pw1"), &hash).unwrap());
        assert!(!hasher.verify(&SecretString::new("pw2"), &hash).unwrap());
    }

    #[test]
    fn verify_uses_parameters_embedded_in_hash() {
        let hash = fast().hash(&SecretString::new("pw1")).unwrap();
        let other = Argon2Hasher::with_params(16, 2, 1).unwrap();
        assert!(other.verify(&SecretString::new("pw1"), &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let err = fast()
            .verify(&SecretString::new("pw1"), "not-a-phc-string")
            .unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }

    #[test]
    fn rejects_invalid_params() {
        assert!(Argon2Hasher::with_params(0, 0, 0).is_err());
    }
}
