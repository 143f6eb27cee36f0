/*
    user.rs - Registered user record

    Passwords are stored and compared in plaintext; this store is not a
    security boundary. Records are created at signup and never updated
    or deleted.
*/

use serde::{Deserialize, Serialize};

/// A registered username/password pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        UserRecord {
            username: username.into(),
            password: password.into(),
        }
    }
}
