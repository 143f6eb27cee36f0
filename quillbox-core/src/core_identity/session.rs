/*
    session.rs - The current session

    At most one session is active per process. It holds only the
    username; the content store copies that name into items and
    comments at creation time rather than referencing it.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// The currently authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Session {
            username: username.into(),
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_serde_shape() {
        let session = Session::new("alice");
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"username":"alice"}"#);
    }
}
