// Session module
// Local display-name login persisted under its own storage key; no
// credential backend exists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::user::User;
use crate::infrastructure::storage::{KeyValueStorage, StorageError};
use crate::infrastructure::USER_STORAGE_KEY;

/// Errors raised by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Gate decision for protected views
///
/// `Hydrating` must be treated as "don't know yet": redirecting before the
/// persisted session has been loaded would bounce a logged-in user to the
/// login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// The persisted session has not been loaded yet
    Hydrating,
    /// A user is logged in
    Authenticated(User),
    /// Hydration finished and no user is logged in
    RedirectToLogin,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserSnapshot {
    user: Option<User>,
}

/// Holds the logged-in user and the hydration-complete flag
///
/// The flag flips to true once [`hydrate`](Self::hydrate) has run,
/// regardless of whether a user was found; only then does the absence of a
/// user mean "not logged in".
#[derive(Debug, Default)]
pub struct SessionStore {
    user: Option<User>,
    has_hydrated: bool,
}

impl SessionStore {
    /// Creates a session store in the pre-hydration state
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the persisted session, marking hydration complete
    ///
    /// A missing key is a normal first run, not an error.
    pub fn hydrate(&mut self, storage: &dyn KeyValueStorage) -> Result<(), StorageError> {
        if let Some(blob) = storage.load(USER_STORAGE_KEY)? {
            let snapshot: UserSnapshot = serde_json::from_str(&blob)?;
            self.user = snapshot.user;
        }
        self.has_hydrated = true;
        tracing::info!(logged_in = self.user.is_some(), "session hydrated");
        Ok(())
    }

    /// Logs a user in from validated form input and persists the session
    pub fn login(
        &mut self,
        storage: &dyn KeyValueStorage,
        name: &str,
        email: &str,
    ) -> Result<User, SessionError> {
        let user = User::new(name, email)?;
        self.persist(storage, Some(&user))?;
        tracing::info!(user = %user.name, "user logged in");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Logs out and persists the cleared session
    pub fn logout(&mut self, storage: &dyn KeyValueStorage) -> Result<(), SessionError> {
        self.persist(storage, None)?;
        self.user = None;
        tracing::info!("user logged out");
        Ok(())
    }

    /// The gate decision protected views must consult
    pub fn status(&self) -> SessionStatus {
        if !self.has_hydrated {
            return SessionStatus::Hydrating;
        }
        match &self.user {
            Some(user) => SessionStatus::Authenticated(user.clone()),
            None => SessionStatus::RedirectToLogin,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn has_hydrated(&self) -> bool {
        self.has_hydrated
    }

    fn persist(
        &self,
        storage: &dyn KeyValueStorage,
        user: Option<&User>,
    ) -> Result<(), StorageError> {
        let snapshot = UserSnapshot {
            user: user.cloned(),
        };
        let blob = serde_json::to_string(&snapshot)?;
        storage.save(USER_STORAGE_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;

    #[test]
    fn fresh_session_is_hydrating() {
        let session = SessionStore::new();
        assert_eq!(session.status(), SessionStatus::Hydrating);
    }

    #[test]
    fn hydrating_empty_storage_redirects_to_login() {
        let storage = InMemoryStorage::new();
        let mut session = SessionStore::new();

        session.hydrate(&storage).unwrap();

        assert_eq!(session.status(), SessionStatus::RedirectToLogin);
    }

    #[test]
    fn login_authenticates_and_persists() {
        let storage = InMemoryStorage::new();
        let mut session = SessionStore::new();
        session.hydrate(&storage).unwrap();

        session.login(&storage, "Ada", "ada@example.com").unwrap();

        match session.status() {
            SessionStatus::Authenticated(user) => assert_eq!(user.name, "Ada"),
            other => panic!("expected authenticated, got {other:?}"),
        }

        // A second store hydrating from the same storage sees the user.
        let mut restored = SessionStore::new();
        restored.hydrate(&storage).unwrap();
        assert!(matches!(restored.status(), SessionStatus::Authenticated(_)));
    }

    #[test]
    fn login_rejects_blank_name() {
        let storage = InMemoryStorage::new();
        let mut session = SessionStore::new();
        session.hydrate(&storage).unwrap();

        assert!(session.login(&storage, "   ", "ada@example.com").is_err());
        assert_eq!(session.status(), SessionStatus::RedirectToLogin);
    }

    #[test]
    fn logout_clears_persisted_session() {
        let storage = InMemoryStorage::new();
        let mut session = SessionStore::new();
        session.hydrate(&storage).unwrap();
        session.login(&storage, "Ada", "ada@example.com").unwrap();

        session.logout(&storage).unwrap();
        assert_eq!(session.status(), SessionStatus::RedirectToLogin);

        let mut restored = SessionStore::new();
        restored.hydrate(&storage).unwrap();
        assert_eq!(restored.status(), SessionStatus::RedirectToLogin);
    }
}
