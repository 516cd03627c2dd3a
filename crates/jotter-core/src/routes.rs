//! Named navigation targets.

use std::fmt;

use crate::models::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    SignUp,
    LogIn,
    Home,
    Notes,
    CreateNote,
    ViewNote(RecordId),
    EditNote(RecordId),
    NotFound,
}

impl Route {
    /// Resolve a path; anything unrecognised is `NotFound`.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["signup"] => Self::SignUp,
            ["login"] => Self::LogIn,
            ["home"] => Self::Home,
            ["notes"] => Self::Notes,
            ["create-note"] => Self::CreateNote,
            ["view-note", id] => Self::ViewNote(note_id(id)),
            ["edit-note", id] => Self::EditNote(note_id(id)),
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::SignUp => "/signup".to_string(),
            Self::LogIn => "/login".to_string(),
            Self::Home => "/home".to_string(),
            Self::Notes => "/notes".to_string(),
            Self::CreateNote => "/create-note".to_string(),
            Self::ViewNote(id) => format!("/view-note/{id}"),
            Self::EditNote(id) => format!("/edit-note/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Views that require a signed-in user
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Notes | Self::CreateNote | Self::ViewNote(_) | Self::EditNote(_)
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn note_id(raw: &str) -> RecordId {
    raw.parse()
        .unwrap_or_else(|never: std::convert::Infallible| match never {})
}
