use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::{error, warn};

/// Salted Argon2 digest in PHC string form, as stored in `users.password`.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!("hash password: {e}")
        })
}

/// Whether `plain` matches the stored credential.
///
/// A stored value that is not a PHC string (rows written before hashing was
/// introduced hold plaintext) never matches.
pub fn password_matches(plain: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        warn!("stored credential is not an argon2 hash; refusing login");
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_is_an_argon2_phc_string() {
        let hash = hash_password("11111").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));
        assert!(password_matches("11111", &hash));
    }

    #[test]
    fn same_password_gets_fresh_salt() {
        let a = hash_password("hunter2").unwrap();
        let b = hash_password("hunter2").unwrap();
        assert_ne!(a, b);
        assert!(password_matches("hunter2", &a));
        assert!(password_matches("hunter2", &b));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hash = hash_password("course-42").unwrap();
        assert!(!password_matches("course-43", &hash));
    }

    #[test]
    fn plaintext_legacy_row_never_matches() {
        assert!(!password_matches("11111", "11111"));
        assert!(!password_matches("wrong", "11111"));
    }
}
