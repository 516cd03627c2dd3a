//! Notes List page

use super::{AppContext, Followup, ViewMachine};
use crate::api::DataStore;
use crate::models::{Note, RecordId};
use crate::session::KeyValueStore;

pub const FETCH_FAILED: &str = "Failed to fetch notes";
pub const DELETE_FAILED: &str = "Failed to delete note";
pub const EMPTY_LIST: &str = "No notes";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NotesListView {
    #[default]
    Loading,
    Loaded {
        notes: Vec<Note>,
        error: Option<String>,
    },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesListEvent {
    /// Page mounted for this author
    Load(RecordId),
    Fetched(Vec<Note>),
    FetchFailed,
    Delete(RecordId),
    Deleted(RecordId),
    DeleteFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesListEffect {
    Fetch(RecordId),
    Remove(RecordId),
}

impl NotesListView {
    /// Notes to render, empty unless loaded
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        match self {
            Self::Loaded { notes, .. } => notes,
            _ => &[],
        }
    }
}

impl ViewMachine for NotesListView {
    type Event = NotesListEvent;
    type Effect = NotesListEffect;

    fn transition(self, event: NotesListEvent) -> (Self, Option<NotesListEffect>) {
        match (self, event) {
            (_, NotesListEvent::Load(author_id)) => {
                (Self::Loading, Some(NotesListEffect::Fetch(author_id)))
            }
            (_, NotesListEvent::Fetched(notes)) => (Self::Loaded { notes, error: None }, None),
            (_, NotesListEvent::FetchFailed) => (Self::Failed(FETCH_FAILED.to_string()), None),
            (Self::Loaded { notes, .. }, NotesListEvent::Delete(id)) => (
                Self::Loaded { notes, error: None },
                Some(NotesListEffect::Remove(id)),
            ),
            (Self::Loaded { mut notes, error }, NotesListEvent::Deleted(id)) => {
                notes.retain(|note| note.id != id);
                (Self::Loaded { notes, error }, None)
            }
            (Self::Loaded { notes, .. }, NotesListEvent::DeleteFailed) => (
                Self::Loaded {
                    notes,
                    error: Some(DELETE_FAILED.to_string()),
                },
                None,
            ),
            (state, _) => (state, None),
        }
    }

    async fn perform<D: DataStore, S: KeyValueStore>(
        effect: NotesListEffect,
        ctx: &AppContext<D, S>,
    ) -> Followup<NotesListEvent> {
        match effect {
            NotesListEffect::Fetch(author_id) => match ctx.notes.list(&author_id).await {
                Ok(notes) => Followup::Event(NotesListEvent::Fetched(notes)),
                Err(error) => {
                    tracing::error!("Failed to fetch notes for {author_id}: {error}");
                    Followup::Event(NotesListEvent::FetchFailed)
                }
            },
            NotesListEffect::Remove(id) => match ctx.notes.delete(&id).await {
                Ok(()) => Followup::Event(NotesListEvent::Deleted(id)),
                Err(error) => {
                    tracing::error!("Failed to delete note {id}: {error}");
                    Followup::Event(NotesListEvent::DeleteFailed)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::api::Resource;
    use crate::views::dispatch;
    use crate::views::fixtures::logged_in;

    fn note(id: u64, title: &str) -> Note {
        Note {
            id: RecordId::Number(id),
            title: title.to_string(),
            body: String::new(),
            created_at: 1,
            author_id: RecordId::Number(1),
        }
    }

    fn seed_note(data: &crate::api::MemoryDataStore, id: u64, author: u64) {
        data.seed(
            Resource::Notes,
            json!({
                "id": id,
                "title": format!("n{id}"),
                "body": "",
                "createdAt": 1,
                "authorId": author,
            }),
        );
    }

    #[test]
    fn load_starts_fetch() {
        let (view, effect) =
            NotesListView::default().transition(NotesListEvent::Load(RecordId::Number(1)));
        assert_eq!(view, NotesListView::Loading);
        assert_eq!(effect, Some(NotesListEffect::Fetch(RecordId::Number(1))));
    }

    #[test]
    fn deleted_note_leaves_the_list() {
        let view = NotesListView::Loaded {
            notes: vec![note(1, "a"), note(2, "b")],
            error: None,
        };
        let (view, _) = view.transition(NotesListEvent::Deleted(RecordId::Number(1)));
        let titles: Vec<_> = view.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["b"]);
    }

    #[test]
    fn delete_failure_keeps_notes() {
        let view = NotesListView::Loaded {
            notes: vec![note(1, "a")],
            error: None,
        };
        let (view, _) = view.transition(NotesListEvent::DeleteFailed);
        assert_eq!(view.notes().len(), 1);
        assert_eq!(
            view,
            NotesListView::Loaded {
                notes: vec![note(1, "a")],
                error: Some(DELETE_FAILED.to_string()),
            }
        );
    }

    #[test]
    fn delete_before_load_is_ignored() {
        let (view, effect) =
            NotesListView::Loading.transition(NotesListEvent::Delete(RecordId::Number(1)));
        assert_eq!(view, NotesListView::Loading);
        assert!(effect.is_none());
    }

    #[tokio::test]
    async fn load_shows_only_own_notes() {
        let (data, ctx) = logged_in(1);
        seed_note(&data, 10, 1);
        seed_note(&data, 11, 2);

        let outcome = dispatch(
            NotesListView::default(),
            NotesListEvent::Load(RecordId::Number(1)),
            &ctx,
        )
        .await;

        let ids: Vec<_> = outcome.view.notes().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, vec![RecordId::Number(10)]);
    }

    #[tokio::test]
    async fn fetch_failure_shows_message() {
        let (data, ctx) = logged_in(1);
        data.set_offline(true);

        let outcome = dispatch(
            NotesListView::default(),
            NotesListEvent::Load(RecordId::Number(1)),
            &ctx,
        )
        .await;

        assert_eq!(outcome.view, NotesListView::Failed(FETCH_FAILED.to_string()));
    }

    #[tokio::test]
    async fn delete_round_trip_removes_note() {
        let (data, ctx) = logged_in(1);
        seed_note(&data, 10, 1);
        let loaded = dispatch(
            NotesListView::default(),
            NotesListEvent::Load(RecordId::Number(1)),
            &ctx,
        )
        .await
        .view;

        let outcome = dispatch(loaded, NotesListEvent::Delete(RecordId::Number(10)), &ctx).await;

        assert!(outcome.view.notes().is_empty());
        assert!(data.records(Resource::Notes).is_empty());
    }
}
