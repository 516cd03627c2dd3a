//! Note model

use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::util::now_ms;

/// A note owned by exactly one user for its whole lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub body: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Owner (`User::id`)
    pub author_id: RecordId,
}

impl Note {
    /// Check whether `author_id` owns this note
    #[must_use]
    pub fn is_owned_by(&self, author_id: &RecordId) -> bool {
        &self.author_id == author_id
    }

    /// Copy of this note with title and body replaced; id, creation time and
    /// owner are carried over.
    #[must_use]
    pub fn replaced(&self, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..self.clone()
        }
    }
}

/// Create payload; the data store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub body: String,
    pub created_at: i64,
    pub author_id: RecordId,
}

impl NewNote {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: RecordId) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            created_at: now_ms(),
            author_id,
        }
    }
}
