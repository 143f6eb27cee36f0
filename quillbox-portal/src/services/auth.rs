use std::sync::Arc;

use quillbox_core::core_identity::{CredentialStore, Session};

use crate::error::PortalResult;

/// Signup/login/logout operations over the credential store
pub struct AuthService {
    credentials: Arc<CredentialStore>,
}

impl AuthService {
    pub fn new(credentials: Arc<CredentialStore>) -> Self {
        Self { credentials }
    }

    pub fn sign_up(&self, username: &str, password: &str) -> PortalResult<Session> {
        Ok(self.credentials.sign_up(username, password)?)
    }

    pub fn log_in(&self, username: &str, password: &str) -> PortalResult<Session> {
        Ok(self.credentials.log_in(username, password)?)
    }

    pub fn log_out(&self) -> PortalResult<()> {
        Ok(self.credentials.log_out()?)
    }

    pub fn current_user(&self) -> PortalResult<Option<Session>> {
        Ok(self.credentials.current_session()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use quillbox_core::core_identity::IdentityError;
    use quillbox_core::storage::MemoryBackend;

    fn service() -> AuthService {
        let backend = Arc::new(MemoryBackend::new());
        AuthService::new(Arc::new(CredentialStore::open(backend).unwrap()))
    }

    #[test]
    fn test_signup_then_duplicate() {
        let auth = service();

        auth.sign_up("alice", "pw1").unwrap();
        let err = auth.sign_up("alice", "pw2").unwrap_err();
        assert!(matches!(
            err,
            PortalError::Identity(IdentityError::DuplicateUsername(_))
        ));
        assert_eq!(auth.current_user().unwrap().unwrap().username, "alice");
    }

    #[test]
    fn test_login_logout_cycle() {
        let auth = service();

        auth.sign_up("alice", "pw1").unwrap();
        auth.log_out().unwrap();
        assert!(auth.current_user().unwrap().is_none());

        auth.log_in("alice", "pw1").unwrap();
        assert_eq!(auth.current_user().unwrap().unwrap().username, "alice");
    }
}
