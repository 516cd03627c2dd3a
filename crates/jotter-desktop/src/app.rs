//! Main application component

use dioxus::prelude::*;
use jotter_core::views::EditorMode;
use jotter_core::{guard, Access, Route};

use crate::pages::{
    HomePage, LogInPage, NoteDetailPage, NoteEditorPage, NotFoundPage, NotesPage, SignUpPage,
};
use crate::theme::palette;
use crate::Services;

/// Root application component
#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();
    let route = use_signal(|| Route::SignUp);
    use_context_provider(|| route);

    let colors = palette();
    let current = route();
    // Runs on every render, so a cleared session is noticed on the next page.
    let access = guard(&services.session, &current);

    let page = match (access, current) {
        (Access::Redirect(to), _) => rsx! { Redirect { to } },
        (Access::Account, Route::LogIn) => rsx! { LogInPage {} },
        (Access::Account, _) => rsx! { SignUpPage {} },
        (Access::Public { logged_in }, _) => rsx! { NotFoundPage { logged_in } },
        (Access::Granted(user), Route::Home) => rsx! { HomePage { user } },
        (Access::Granted(user), Route::Notes) => rsx! { NotesPage { user } },
        (Access::Granted(user), Route::CreateNote) => rsx! {
            NoteEditorPage { key: "create", user, mode: EditorMode::Create }
        },
        (Access::Granted(user), Route::ViewNote(id)) => rsx! {
            NoteDetailPage { key: "view-{id}", user, id }
        },
        (Access::Granted(user), Route::EditNote(id)) => rsx! {
            NoteEditorPage { key: "edit-{id}", user, mode: EditorMode::Edit(id) }
        },
        (Access::Granted(_), _) => rsx! { NotFoundPage { logged_in: true } },
    };

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",
            {page}
        }
    }
}

/// Switch to `to` once mounted instead of rendering a blocked page
#[component]
fn Redirect(to: Route) -> Element {
    let mut route = use_context::<Signal<Route>>();
    use_effect(move || {
        tracing::debug!("Navigating to {}", to);
        route.set(to.clone());
    });
    rsx! {}
}
