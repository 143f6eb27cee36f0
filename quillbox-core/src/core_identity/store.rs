/*
    store.rs - The credential store

    Owns the registered user list and the current session. Mutations
    replace the user list wholesale (copy-on-write, same rule as the
    content store) and persist the affected keys afterwards; a failed
    save is logged and the in-memory state stays authoritative.

    When no users key exists at open, the store seeds a default
    admin/admin pair.
*/

use crate::core_identity::errors::{IdentityError, IdentityResult};
use crate::core_identity::session::Session;
use crate::core_identity::user::UserRecord;
use crate::core_store::store::validate;
use crate::storage::{PersistencePort, StorageError, StorageKey};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Helper to convert poison errors into IdentityError
fn handle_poison<T>(_err: PoisonError<T>) -> IdentityError {
    IdentityError::Storage(StorageError::Backend(
        "lock poisoned: a thread panicked while holding the lock".to_string(),
    ))
}

/// Seeded when no persisted users exist
const DEFAULT_USER: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin";

/// The credential store
pub struct CredentialStore {
    users: RwLock<Arc<Vec<UserRecord>>>,
    session: RwLock<Option<Session>>,
    persistence: Arc<dyn PersistencePort>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("users", &self.users)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl CredentialStore {
    /// Open the store, reading persisted users and any surviving session.
    pub fn open(persistence: Arc<dyn PersistencePort>) -> IdentityResult<Self> {
        let users: Vec<UserRecord> = match persistence.load(StorageKey::Users)? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|err| IdentityError::CorruptedData {
                    key: StorageKey::Users.as_str(),
                    reason: err.to_string(),
                })?
            }
            None => {
                let seeded = vec![UserRecord::new(DEFAULT_USER, DEFAULT_PASSWORD)];
                match serde_json::to_string_pretty(&seeded) {
                    Ok(json) => {
                        if let Err(err) = persistence.save(StorageKey::Users, &json) {
                            warn!(error = %err, "failed to persist seeded user list");
                        }
                    }
                    Err(err) => warn!(error = %err, "failed to encode seeded user list"),
                }
                info!("no persisted users; seeded default account");
                seeded
            }
        };

        let session: Option<Session> = match persistence.load(StorageKey::Session)? {
            Some(json) => {
                Some(serde_json::from_str(&json).map_err(|err| IdentityError::CorruptedData {
                    key: StorageKey::Session.as_str(),
                    reason: err.to_string(),
                })?)
            }
            None => None,
        };

        debug!(users = users.len(), session = session.is_some(), "credential store opened");

        Ok(CredentialStore {
            users: RwLock::new(Arc::new(users)),
            session: RwLock::new(session),
            persistence,
        })
    }

    /// Register a new user and start a session for them.
    ///
    /// Fails with `DuplicateUsername` on a case-sensitive exact match
    /// against an existing username; the session is left unchanged.
    pub fn sign_up(&self, username: &str, password: &str) -> IdentityResult<Session> {
        validate::require_text("username", username)?;
        validate::require_text("password", password)?;

        let mut guard = self.users.write().map_err(handle_poison)?;
        if guard.iter().any(|user| user.username == username) {
            return Err(IdentityError::DuplicateUsername(username.to_string()));
        }

        let mut next = guard.as_ref().clone();
        next.push(UserRecord::new(username, password));
        *guard = Arc::new(next);
        let snapshot = guard.clone();
        drop(guard);

        self.persist_users(&snapshot);
        let session = Session::new(username);
        self.set_session(Some(session.clone()))?;

        info!(username, "user signed up");
        Ok(session)
    }

    /// Start a session for an exact (username, password) match.
    ///
    /// Any mismatch fails with the generic `AuthFailure` and leaves the
    /// current session unchanged.
    pub fn log_in(&self, username: &str, password: &str) -> IdentityResult<Session> {
        let users = self.users.read().map_err(handle_poison)?.clone();
        let matched = users
            .iter()
            .any(|user| user.username == username && user.password == password);

        if !matched {
            debug!(username, "login rejected");
            return Err(IdentityError::AuthFailure);
        }

        let session = Session::new(username);
        self.set_session(Some(session.clone()))?;
        info!(username, "user logged in");
        Ok(session)
    }

    /// Clear the session unconditionally.
    pub fn log_out(&self) -> IdentityResult<()> {
        self.set_session(None)?;
        info!("user logged out");
        Ok(())
    }

    /// The currently authenticated user, if any.
    pub fn current_session(&self) -> IdentityResult<Option<Session>> {
        Ok(self.session.read().map_err(handle_poison)?.clone())
    }

    /// Replace the session and persist (or remove) the session key.
    fn set_session(&self, session: Option<Session>) -> IdentityResult<()> {
        let mut guard = self.session.write().map_err(handle_poison)?;
        *guard = session.clone();
        drop(guard);

        match &session {
            Some(current) => match serde_json::to_string_pretty(current) {
                Ok(json) => {
                    if let Err(err) = self.persistence.save(StorageKey::Session, &json) {
                        warn!(error = %err, "failed to persist session");
                    }
                }
                Err(err) => warn!(error = %err, "failed to encode session"),
            },
            None => {
                if let Err(err) = self.persistence.remove(StorageKey::Session) {
                    warn!(error = %err, "failed to remove persisted session");
                }
            }
        }

        Ok(())
    }

    /// Best-effort save of the user list after a mutation.
    fn persist_users(&self, users: &Arc<Vec<UserRecord>>) {
        let json = match serde_json::to_string_pretty(users.as_ref()) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to encode user list for persistence");
                return;
            }
        };
        if let Err(err) = self.persistence.save(StorageKey::Users, &json) {
            warn!(error = %err, "failed to persist user list; in-memory state remains authoritative");
        }
    }
}
