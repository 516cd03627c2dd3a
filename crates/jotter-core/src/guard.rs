//! Navigation guard run on every page mount.

use crate::models::User;
use crate::routes::Route;
use crate::session::{KeyValueStore, SessionController};

/// Whether a page may render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Protected page, signed-in user attached
    Granted(User),
    /// Sign Up or Log In; no session check is made
    Account,
    /// Not Found, with the freshly rehydrated flag
    Public { logged_in: bool },
    /// Do not render; go here instead
    Redirect(Route),
}

impl Access {
    #[must_use]
    pub const fn may_render(&self) -> bool {
        !matches!(self, Self::Redirect(_))
    }
}

/// Decide access to `route`.
///
/// Protected pages always rehydrate first, so the check sees whatever the
/// persisted store holds right now. Sign Up and Log In are never blocked and
/// never touch the store.
pub fn guard<S: KeyValueStore>(session: &SessionController<S>, route: &Route) -> Access {
    match route {
        Route::SignUp | Route::LogIn => Access::Account,
        Route::NotFound => {
            session.rehydrate();
            Access::Public {
                logged_in: session.is_logged_in(),
            }
        }
        _ => {
            session.rehydrate();
            match session.current_user() {
                Some(user) => Access::Granted(user),
                None => {
                    tracing::debug!("Redirecting {} to log in", route);
                    Access::Redirect(Route::LogIn)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;
    use crate::session::{MemoryStore, SESSION_KEY};

    fn sample_user() -> User {
        User {
            id: RecordId::Number(1),
            email: "a@b.com".to_string(),
            password: "Abcdef12".to_string(),
            created_at: 0,
        }
    }

    fn protected_routes() -> Vec<Route> {
        vec![
            Route::Home,
            Route::Notes,
            Route::CreateNote,
            Route::ViewNote(RecordId::Number(1)),
            Route::EditNote(RecordId::Number(1)),
        ]
    }

    #[test]
    fn logged_out_protected_pages_redirect_to_log_in() {
        let session = SessionController::new(MemoryStore::new());
        for route in protected_routes() {
            assert_eq!(guard(&session, &route), Access::Redirect(Route::LogIn));
        }
    }

    #[test]
    fn persisted_user_is_granted_on_fresh_controller() {
        let store = MemoryStore::new();
        SessionController::new(store.clone())
            .login(sample_user())
            .unwrap();

        let session = SessionController::new(store);
        for route in protected_routes() {
            assert_eq!(guard(&session, &route), Access::Granted(sample_user()));
        }
    }

    #[test]
    fn account_pages_are_never_blocked() {
        let session = SessionController::new(MemoryStore::new());
        assert!(guard(&session, &Route::SignUp).may_render());
        assert!(guard(&session, &Route::LogIn).may_render());
    }

    #[test]
    fn account_pages_skip_the_store() {
        let store = MemoryStore::new();
        let session = SessionController::new(store.clone());
        store
            .set(SESSION_KEY, &serde_json::to_string(&sample_user()).unwrap())
            .unwrap();

        assert_eq!(guard(&session, &Route::LogIn), Access::Account);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn externally_cleared_session_redirects() {
        let store = MemoryStore::new();
        let session = SessionController::new(store.clone());
        session.login(sample_user()).unwrap();
        assert!(guard(&session, &Route::Notes).may_render());

        store.remove(SESSION_KEY).unwrap();
        assert_eq!(guard(&session, &Route::Notes), Access::Redirect(Route::LogIn));
    }

    #[test]
    fn not_found_reports_flag_without_redirecting() {
        let store = MemoryStore::new();
        let session = SessionController::new(store.clone());
        assert_eq!(
            guard(&session, &Route::NotFound),
            Access::Public { logged_in: false }
        );

        store
            .set(SESSION_KEY, &serde_json::to_string(&sample_user()).unwrap())
            .unwrap();
        assert_eq!(
            guard(&session, &Route::NotFound),
            Access::Public { logged_in: true }
        );
    }
}
