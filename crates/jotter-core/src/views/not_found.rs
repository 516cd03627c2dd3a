//! Not Found page

use crate::routes::Route;

/// The call-to-action depends only on whether someone is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFoundView {
    pub logged_in: bool,
}

impl NotFoundView {
    #[must_use]
    pub const fn new(logged_in: bool) -> Self {
        Self { logged_in }
    }

    #[must_use]
    pub const fn action(self) -> Route {
        if self.logged_in {
            Route::Home
        } else {
            Route::LogIn
        }
    }

    #[must_use]
    pub const fn action_label(self) -> &'static str {
        if self.logged_in {
            "Go Home"
        } else {
            "Log in"
        }
    }
}
