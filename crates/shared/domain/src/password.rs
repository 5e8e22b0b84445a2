//! Password value object and the hashing seam.
//!
//! Hashes are PHC strings produced by Argon2id: the salt and the cost
//! parameters travel inside the hash, so verification needs nothing but the
//! stored string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{DomainError, DomainResult};

/// Stored password hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext secret with the given cost.
    pub fn new(plain_text: &str, cost: HashCost) -> DomainResult<Self> {
        Argon2Hasher::new(cost)?.hash(plain_text)
    }

    /// Wrap an existing hash (from the user directory).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plaintext candidate against this hash.
    ///
    /// A mismatch is `Ok(false)`; only a stored hash that cannot be parsed is
    /// an error.
    pub fn verify(&self, plain_text: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(&self.hash)
            .map_err(|e| DomainError::hashing(format!("invalid hash format: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory size in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// One-way, salted secret hashing.
///
/// Implementations are CPU-bound; async callers run them on a blocking thread.
pub trait SecretHasher: Send + Sync {
    /// Hash a plaintext secret with a fresh random salt.
    fn hash(&self, plain_text: &str) -> DomainResult<Password>;

    /// Check a candidate against a stored hash.
    fn verify(&self, stored: &Password, candidate: &str) -> DomainResult<bool> {
        stored.verify(candidate)
    }
}

/// Argon2id hasher with fixed cost parameters.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Build a hasher; fails if the cost parameters are out of Argon2's range.
    pub fn new(cost: HashCost) -> DomainResult<Self> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| DomainError::hashing(format!("invalid cost parameters: {}", e)))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl SecretHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<Password> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::hashing(e.to_string()))?;
        Ok(Password::from_hash(hash.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> HashCost {
        HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain, cheap()).unwrap();

        assert!(password.verify(plain).unwrap());
        assert!(!password.verify("WrongPassword123").unwrap());
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let password = Password::new(plain, cheap()).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain).unwrap());
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain, cheap()).unwrap();
        let pass2 = Password::new(plain, cheap()).unwrap();

        // Different salts produce different hashes
        assert_ne!(pass1.as_str(), pass2.as_str());
        // But both verify correctly
        assert!(pass1.verify(plain).unwrap());
        assert!(pass2.verify(plain).unwrap());
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let password = Password::new("plaintext-secret", cheap()).unwrap();
        assert!(!password.as_str().contains("plaintext-secret"));
        assert!(password.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_uses_cost_embedded_in_hash() {
        let strong = HashCost {
            memory_kib: 2048,
            iterations: 2,
            parallelism: 1,
        };
        let stored = Argon2Hasher::new(strong).unwrap().hash("abcde").unwrap();
        let other = Argon2Hasher::new(cheap()).unwrap();

        assert!(other.verify(&stored, "abcde").unwrap());
        assert!(!other.verify(&stored, "abcdf").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let stored = Password::from_hash("not-a-phc-string");
        assert!(matches!(stored.verify("x"), Err(DomainError::Hashing(_))));
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let cost = HashCost {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };
        assert!(Argon2Hasher::new(cost).is_err());
    }

    #[test]
    fn test_debug_hides_hash() {
        let password = Password::new("secret-value", cheap()).unwrap();
        assert!(format!("{:?}", password).contains("REDACTED"));
    }
}
