//! Note Detail page

use super::notes_list::DELETE_FAILED;
use super::{AppContext, Followup, ViewMachine};
use crate::api::DataStore;
use crate::models::{Note, RecordId};
use crate::routes::Route;
use crate::session::KeyValueStore;

pub const LOAD_FAILED: &str = "Failed to load note";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NoteDetailView {
    #[default]
    Loading,
    Loaded {
        note: Note,
        deleting: bool,
        error: Option<String>,
    },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteDetailEvent {
    Load(RecordId),
    Fetched(Note),
    FetchFailed,
    Delete,
    DeleteFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteDetailEffect {
    Fetch(RecordId),
    Remove(RecordId),
}

impl NoteDetailView {
    #[must_use]
    pub const fn note(&self) -> Option<&Note> {
        match self {
            Self::Loaded { note, .. } => Some(note),
            _ => None,
        }
    }
}

impl ViewMachine for NoteDetailView {
    type Event = NoteDetailEvent;
    type Effect = NoteDetailEffect;

    fn transition(self, event: NoteDetailEvent) -> (Self, Option<NoteDetailEffect>) {
        match (self, event) {
            (_, NoteDetailEvent::Load(id)) => (Self::Loading, Some(NoteDetailEffect::Fetch(id))),
            (_, NoteDetailEvent::Fetched(note)) => (
                Self::Loaded {
                    note,
                    deleting: false,
                    error: None,
                },
                None,
            ),
            (_, NoteDetailEvent::FetchFailed) => (Self::Failed(LOAD_FAILED.to_string()), None),
            (
                Self::Loaded {
                    note,
                    deleting: false,
                    ..
                },
                NoteDetailEvent::Delete,
            ) => {
                let effect = NoteDetailEffect::Remove(note.id.clone());
                (
                    Self::Loaded {
                        note,
                        deleting: true,
                        error: None,
                    },
                    Some(effect),
                )
            }
            (Self::Loaded { note, .. }, NoteDetailEvent::DeleteFailed) => (
                Self::Loaded {
                    note,
                    deleting: false,
                    error: Some(DELETE_FAILED.to_string()),
                },
                None,
            ),
            (state, _) => (state, None),
        }
    }

    async fn perform<D: DataStore, S: KeyValueStore>(
        effect: NoteDetailEffect,
        ctx: &AppContext<D, S>,
    ) -> Followup<NoteDetailEvent> {
        match effect {
            NoteDetailEffect::Fetch(id) => match ctx.notes.get(&id).await {
                Ok(Some(note)) => Followup::Event(NoteDetailEvent::Fetched(note)),
                Ok(None) => {
                    tracing::debug!("Note {id} not found, back to list");
                    Followup::Navigate(Route::Notes)
                }
                Err(error) => {
                    tracing::error!("Failed to load note {id}: {error}");
                    Followup::Event(NoteDetailEvent::FetchFailed)
                }
            },
            NoteDetailEffect::Remove(id) => match ctx.notes.delete(&id).await {
                Ok(()) => Followup::Navigate(Route::Notes),
                Err(error) if error.is_not_found() => {
                    tracing::debug!("Note {id} already deleted, back to list");
                    Followup::Navigate(Route::Notes)
                }
                Err(error) => {
                    tracing::error!("Failed to delete note {id}: {error}");
                    Followup::Event(NoteDetailEvent::DeleteFailed)
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

    fn sample_note() -> Note {
        Note {
            id: RecordId::Number(4),
            title: "T".to_string(),
            body: "B".to_string(),
            created_at: 1,
            author_id: RecordId::Number(1),
        }
    }

    fn loaded() -> NoteDetailView {
        NoteDetailView::Loaded {
            note: sample_note(),
            deleting: false,
            error: None,
        }
    }

    #[test]
    fn delete_is_sent_once() {
        let (view, effect) = loaded().transition(NoteDetailEvent::Delete);
        assert_eq!(effect, Some(NoteDetailEffect::Remove(RecordId::Number(4))));

        let (_, effect) = view.transition(NoteDetailEvent::Delete);
        assert!(effect.is_none());
    }

    #[test]
    fn delete_failure_allows_retry() {
        let (view, _) = loaded().transition(NoteDetailEvent::Delete);
        let (view, _) = view.transition(NoteDetailEvent::DeleteFailed);
        assert_eq!(
            view,
            NoteDetailView::Loaded {
                note: sample_note(),
                deleting: false,
                error: Some(DELETE_FAILED.to_string()),
            }
        );
        assert!(view.transition(NoteDetailEvent::Delete).1.is_some());
    }

    #[tokio::test]
    async fn load_shows_note() {
        let (data, ctx) = logged_in(1);
        data.seed(Resource::Notes, serde_json::to_value(sample_note()).unwrap());

        let outcome = dispatch(
            NoteDetailView::default(),
            NoteDetailEvent::Load(RecordId::Number(4)),
            &ctx,
        )
        .await;

        assert_eq!(outcome.view.note(), Some(&sample_note()));
        assert_eq!(outcome.navigate, None);
    }

    #[tokio::test]
    async fn missing_note_goes_back_to_list() {
        let (_, ctx) = logged_in(1);

        let outcome = dispatch(
            NoteDetailView::default(),
            NoteDetailEvent::Load(RecordId::Number(4)),
            &ctx,
        )
        .await;

        assert_eq!(outcome.navigate, Some(Route::Notes));
    }

    #[tokio::test]
    async fn load_failure_shows_message() {
        let (data, ctx) = logged_in(1);
        data.set_offline(true);

        let outcome = dispatch(
            NoteDetailView::default(),
            NoteDetailEvent::Load(RecordId::Number(4)),
            &ctx,
        )
        .await;

        assert_eq!(outcome.view, NoteDetailView::Failed(LOAD_FAILED.to_string()));
    }

    #[tokio::test]
    async fn delete_navigates_to_list() {
        let (data, ctx) = logged_in(1);
        data.seed(
            Resource::Notes,
            json!({"id": 4, "title": "T", "body": "B", "createdAt": 1, "authorId": 1}),
        );

        let outcome = dispatch(loaded(), NoteDetailEvent::Delete, &ctx).await;

        assert_eq!(outcome.navigate, Some(Route::Notes));
        assert!(data.records(Resource::Notes).is_empty());
    }
    #[tokio::test]
    async fn deleting_an_already_deleted_note_goes_back_to_list() {
        let (_, ctx) = logged_in(1);

        let outcome = dispatch(loaded(), NoteDetailEvent::Delete, &ctx).await;

        assert_eq!(outcome.navigate, Some(Route::Notes));
    }

    #[tokio::test]
    async fn delete_failure_stays_on_page() {
        let (data, ctx) = logged_in(1);
        data.seed(Resource::Notes, serde_json::to_value(sample_note()).unwrap());
        data.set_offline(true);

        let outcome = dispatch(loaded(), NoteDetailEvent::Delete, &ctx).await;

        assert_eq!(outcome.navigate, None);
        assert_eq!(
            outcome.view,
            NoteDetailView::Loaded {
                note: sample_note(),
                deleting: false,
                error: Some(DELETE_FAILED.to_string()),
            }
        );
    }

    #[tokio::test]
    async fn zero_padded_id_is_viewable() {
        let (data, ctx) = logged_in(1);
        data.seed(
            Resource::Notes,
            json!({"id": "0123", "title": "T", "body": "B", "createdAt": 1, "authorId": 1}),
        );

        let Route::ViewNote(id) = Route::parse("/view-note/0123") else {
            panic!("expected a note route");
        };
        let outcome = dispatch(NoteDetailView::default(), NoteDetailEvent::Load(id), &ctx).await;

        assert_eq!(outcome.navigate, None);
        assert_eq!(outcome.view.note().map(|note| note.title.as_str()), Some("T"));
    }
}
