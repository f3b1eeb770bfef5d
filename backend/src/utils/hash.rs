// src/utils/hash.rs

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::error::AppError;

/// Hashes a learner password with Argon2 and a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_phc_string() {
        let first = hash_password("password").unwrap();
        let second = hash_password("password").unwrap();
        assert!(first.starts_with("$argon2"));
        assert!(!first.contains("password"));
        assert_ne!(first, second);
    }
}
