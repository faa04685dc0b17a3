//! Authentication flow and the current-user session.
//!
//! A [`Session`] is created explicitly with [`Session::init`] and passed to
//! whatever needs the identity. The authenticated user is mirrored into an
//! encrypted [`SessionSlot`] file so it survives process restarts; `logout`
//! clears both.
//!
//! ```text
//! Anonymous ──login──▶ Authenticating ──ok──▶ Authenticated
//!     ▲                      │                      │
//!     └────────failure───────┘                      │
//!     └──────────────────────logout─────────────────┘
//! ```

use super::data_storage::DataStorage;
use super::error::{Error, Result};
use super::secret::Secret;
use super::user::{Role, User};
use crate::db::users::Users;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const SESSION_FILE_NAME: &str = "session";

/// Durable slot holding the serialized current user.
#[derive(Debug, Clone)]
pub struct SessionSlot {
    secret: Secret,
}

impl SessionSlot {
    /// Slot file in the application data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME).map_err(|e| Error::SessionStorage(e.to_string()))?;
        Ok(Self::at(path))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        SessionSlot { secret: Secret::new(path) }
    }

    pub fn load(&self) -> Result<Option<User>> {
        if !self.secret.exists() {
            return Ok(None);
        }
        let payload = self.secret.read().map_err(|e| Error::SessionStorage(e.to_string()))?;
        let user = serde_json::from_str(&payload).map_err(|e| Error::SessionStorage(e.to_string()))?;
        Ok(Some(user))
    }

    pub fn save(&self, user: &User) -> Result<()> {
        let payload = serde_json::to_string(user).map_err(|e| Error::SessionStorage(e.to_string()))?;
        self.secret.write(&payload).map_err(|e| Error::SessionStorage(e.to_string()))
    }

    pub fn clear(&self) -> Result<()> {
        self.secret.remove().map_err(|e| Error::SessionStorage(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated(User),
}

pub struct Session {
    state: SessionState,
    slot: SessionSlot,
}

impl Session {
    /// Restores the session from `slot`.
    ///
    /// The stored record is checked against the store; if the user no longer
    /// exists or the record no longer matches, the slot is cleared and the
    /// session starts anonymous. An unreadable slot is treated the same way.
    pub fn init(slot: SessionSlot, users: &Users) -> Result<Self> {
        let stored = match slot.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "discarding unreadable session slot");
                None
            }
        };

        let state = match stored {
            None => SessionState::Anonymous,
            Some(stored) => match users.get_by_id(stored.id) {
                Ok(Some(current)) if current == stored => {
                    debug!(user_id = current.id, "session restored");
                    SessionState::Authenticated(current)
                }
                Ok(_) | Err(Error::InvalidRole(_)) => {
                    warn!(user_id = stored.id, "stored session no longer matches the store");
                    SessionState::Anonymous
                }
                Err(e) => return Err(e),
            },
        };

        let session = Session { state, slot };
        if !session.is_authenticated() {
            session.clear_slot();
        }
        Ok(session)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// The current user, if authenticated with the given role.
    pub fn require_role(&self, role: Role) -> Option<&User> {
        self.current_user().filter(|user| user.role == role)
    }

    /// Checks `password` against the stored one by exact comparison.
    ///
    /// On success the session becomes authenticated and the slot is written.
    /// On any failure the session is anonymous afterwards.
    pub fn login(&mut self, users: &Users, email: &str, password: &str) -> Result<User> {
        self.state = SessionState::Authenticating;

        match Self::authenticate(users, email, password).and_then(|user| self.slot.save(&user).map(|_| user)) {
            Ok(user) => {
                info!(user_id = user.id, role = %user.role, "login succeeded");
                self.state = SessionState::Authenticated(user.clone());
                Ok(user)
            }
            Err(e) => {
                debug!(email, error = %e, "login failed");
                self.state = SessionState::Anonymous;
                Err(e)
            }
        }
    }

    fn authenticate(users: &Users, email: &str, password: &str) -> Result<User> {
        let user = users.find_by_email(email)?.ok_or_else(|| Error::UserNotFound(email.to_string()))?;

        if user.password.as_bytes() != password.as_bytes() {
            return Err(Error::BadCredentials);
        }

        Ok(user)
    }

    /// Creates an account. Does not log the new user in.
    pub fn register(&self, users: &Users, name: &str, email: &str, password: &str, role: Role) -> Result<i64> {
        let id = users.create(name, email, password, role)?;
        info!(user_id = id, role = %role, "registered");
        Ok(id)
    }

    /// Ends the session. The session is anonymous afterwards even when the
    /// slot cannot be removed; that failure is returned for reporting.
    pub fn logout(&mut self) -> Result<()> {
        if let SessionState::Authenticated(user) = &self.state {
            info!(user_id = user.id, "logout");
        }
        self.state = SessionState::Anonymous;
        self.slot.clear()
    }

    fn clear_slot(&self) {
        if let Err(e) = self.slot.clear() {
            warn!(error = %e, "failed to clear session slot");
        }
    }
}
