//! User rows, sign-up input and Argon2 password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Store-assigned timestamp. Read back as text so both backends decode it the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub NaiveDateTime);

impl TryFrom<String> for Timestamp {
    type Error = chrono::ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let s = s.trim();
        // Postgres renders "2024-05-01 10:00:00.123456", SQLite "2024-05-01 10:00:00".
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
            .map(Timestamp)
    }
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub username: String,
    #[sqlx(try_from = "String")]
    pub user_creation_date: Timestamp,
}

impl User {
    /// True when `password` matches the stored Argon2 hash. A malformed hash never matches.
    pub fn check_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Argon2id with a random salt, as a PHC string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default().hash_password(password.as_bytes(), &salt)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_hash(hash: String) -> User {
        User {
            user_id: 1,
            email: "leia@alderaan.gov".into(),
            password_hash: hash,
            username: "leia".into(),
            user_creation_date: Timestamp::try_from("2024-05-01 10:00:00".to_string()).unwrap(),
        }
    }

    #[test]
    fn password_round_trip() {
        let user = user_with_hash(hash_password("help me obi-wan").unwrap());
        assert!(user.check_password("help me obi-wan"));
        assert!(!user.check_password("you're my only hope"));
    }

    #[test]
    fn plaintext_hash_never_matches() {
        assert!(!user_with_hash("secret".into()).check_password("secret"));
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let v = serde_json::to_value(user_with_hash("x".into())).unwrap();
        assert!(v.get("password_hash").is_none());
        assert_eq!(v["user_creation_date"], "2024-05-01T10:00:00");
    }

    #[test]
    fn parses_postgres_fractional_seconds() {
        let ts = Timestamp::try_from("2024-05-01 10:00:00.123456".to_string()).unwrap();
        assert_eq!(ts.0.and_utc().timestamp_subsec_micros(), 123456);
    }
}
