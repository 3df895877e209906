//! Password hashing and verification
//!
//! Passwords are hashed with Argon2id using a fresh random salt per record.
//! The store keeps the PHC-encoded hash and, in its own column, the salt.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand_core::OsRng;
use std::sync::OnceLock;
use tutordesk_core_types::Sensitive;

use crate::errors::{DirectoryError, Result};

/// Hash and salt as persisted for one student or tutor
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    /// PHC string, e.g. `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`
    pub hash: String,
    /// B64 salt, identical to the salt segment of `hash`
    pub salt: String,
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("hash", &"***REDACTED***")
            .field("salt", &self.salt)
            .finish()
    }
}

/// Hash `password` with a newly generated salt
pub fn hash_password(password: &Sensitive<String>) -> Result<PasswordDigest> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map_err(|e| DirectoryError::CredentialHash {
            message: e.to_string(),
        })?
        .to_string();

    Ok(PasswordDigest {
        hash,
        salt: salt.as_str().to_string(),
    })
}

/// Check `password` against a stored digest
///
/// Returns `false` for a wrong password and also for a digest that cannot be
/// parsed or whose salt column disagrees with the hash. The hash comparison
/// inside `argon2` is constant-time.
pub fn verify_password(password: &Sensitive<String>, stored: &PasswordDigest) -> bool {
    let Ok(parsed) = PasswordHash::new(&stored.hash) else {
        tracing::debug!("stored password hash is not a valid PHC string");
        return false;
    };

    if parsed.salt.as_ref().map(|s| s.as_str()) != Some(stored.salt.as_str()) {
        tracing::debug!("stored salt does not match the salt encoded in the hash");
        return false;
    }

    Argon2::default()
        .verify_password(password.expose().as_bytes(), &parsed)
        .is_ok()
}

static DECOY: OnceLock<Option<PasswordDigest>> = OnceLock::new();

/// Run one verification against a throwaway digest and report no match
///
/// Callers use this when a username has no account, so that path costs the
/// same Argon2 work as a wrong password.
pub fn verify_decoy(password: &Sensitive<String>) -> bool {
    let decoy = DECOY.get_or_init(|| hash_password(&Sensitive::new(String::from("decoy"))).ok());
    if let Some(digest) = decoy {
        verify_password(password, digest);
    }
    false
}
