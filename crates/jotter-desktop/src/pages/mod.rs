//! One component per route

mod home;
mod log_in;
mod not_found;
mod note_detail;
mod note_editor;
mod notes;
mod sign_up;

pub use home::HomePage;
pub use log_in::LogInPage;
pub use not_found::NotFoundPage;
pub use note_detail::NoteDetailPage;
pub use note_editor::NoteEditorPage;
pub use notes::NotesPage;
pub use sign_up::SignUpPage;

use crate::theme::palette;

/// Inline style of the centered white panel every page renders into
pub(crate) fn panel_style() -> String {
    let colors = palette();
    format!(
        "max-width: 720px; margin: 24px auto; padding: 24px; border-radius: 8px; \
         background: {}; border: 1px solid {};",
        colors.bg_primary, colors.border
    )
}
