//! Session state controller.
//!
//! Holds the signed-in user for the whole process. The controller is created
//! once at start-up and handed to every view; clones share one state slot.

use std::sync::{Arc, PoisonError, RwLock};

use super::store::{KeyValueStore, SESSION_KEY};
use crate::error::Result;
use crate::models::User;

/// In-memory session state. "Logged in" is derived from the variant, so it can
/// never disagree with the presence of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl SessionState {
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut => None,
        }
    }
}

/// What `rehydrate` found in the persisted slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rehydration {
    /// A valid user record; the session is now logged in
    Restored(User),
    /// Nothing stored (or a stored `null`)
    Absent,
    /// Stored text that is not a user record
    Corrupt(String),
    /// The store itself could not be read
    Unavailable(String),
}

impl Rehydration {
    #[must_use]
    pub const fn is_restored(&self) -> bool {
        matches!(self, Self::Restored(_))
    }
}

#[derive(Debug, Clone)]
pub struct SessionController<S: KeyValueStore> {
    store: S,
    state: Arc<RwLock<SessionState>>,
}

impl<S: KeyValueStore> SessionController<S> {
    /// Fresh controller; starts logged out until the first `rehydrate`
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(SessionState::LoggedOut)),
        }
    }

    /// Reconcile in-memory state with the persisted slot.
    ///
    /// Corrupt or unreadable storage is logged and degrades to logged out.
    pub fn rehydrate(&self) -> Rehydration {
        let outcome = match self.store.get(SESSION_KEY) {
            Ok(None) => Rehydration::Absent,
            Ok(Some(raw)) => match serde_json::from_str::<Option<User>>(&raw) {
                Ok(Some(user)) => Rehydration::Restored(user),
                Ok(None) => Rehydration::Absent,
                Err(error) => {
                    tracing::warn!("Persisted session is corrupt: {}", error);
                    Rehydration::Corrupt(error.to_string())
                }
            },
            Err(error) => {
                tracing::warn!("Persisted session could not be read: {}", error);
                Rehydration::Unavailable(error.to_string())
            }
        };

        let next = match &outcome {
            Rehydration::Restored(user) => SessionState::LoggedIn(user.clone()),
            _ => SessionState::LoggedOut,
        };
        tracing::debug!("Session rehydrated: logged_in={}", next.is_logged_in());
        self.replace(next);
        outcome
    }

    /// Persist `user` (overwriting any prior record) and mark the session
    /// logged in. The record is not validated.
    ///
    /// If the write fails the in-memory state is left untouched.
    pub fn login(&self, user: User) -> Result<()> {
        let serialized = serde_json::to_string(&user)?;
        self.store.set(SESSION_KEY, &serialized)?;
        tracing::debug!("Session logged in as user {}", user.id);
        self.replace(SessionState::LoggedIn(user));
        Ok(())
    }

    /// Drop the session in memory and remove the persisted record.
    ///
    /// The in-memory state is logged out even when the removal fails.
    pub fn logout(&self) -> Result<()> {
        self.replace(SessionState::LoggedOut);
        tracing::debug!("Session logged out");
        self.store.remove(SESSION_KEY)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state().user().cloned()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_logged_in()
    }

    fn replace(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
