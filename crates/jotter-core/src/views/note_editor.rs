//! Note editor, shared by Create Note and Edit Note

use super::{AppContext, Followup, ViewMachine};
use crate::api::DataStore;
use crate::models::{Note, RecordId};
use crate::routes::Route;
use crate::session::KeyValueStore;

use super::note_detail::LOAD_FAILED;

pub const SAVE_FAILED: &str = "Failed to save note";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// Waiting for the note being edited
    Loading,
    Editing,
    Saving,
    /// The note could not be loaded; saving is disabled
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditorView {
    pub mode: EditorMode,
    pub title: String,
    pub body: String,
    pub phase: EditorPhase,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEditorEvent {
    /// Page mounted; fetches the note in edit mode
    Load,
    Fetched(Note),
    FetchFailed,
    TitleChanged(String),
    BodyChanged(String),
    Save,
    Saved,
    SaveFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEditorEffect {
    Fetch(RecordId),
    Create { title: String, body: String },
    Update { id: RecordId, title: String, body: String },
    /// Back to the list after a successful save
    Leave,
}

impl NoteEditorView {
    /// Empty form for a new note
    #[must_use]
    pub const fn create() -> Self {
        Self::with_mode(EditorMode::Create, EditorPhase::Editing)
    }

    /// Form for an existing note, waiting for [`NoteEditorEvent::Load`]
    #[must_use]
    pub const fn edit(id: RecordId) -> Self {
        Self::with_mode(EditorMode::Edit(id), EditorPhase::Loading)
    }

    const fn with_mode(mode: EditorMode, phase: EditorPhase) -> Self {
        Self {
            mode,
            title: String::new(),
            body: String::new(),
            phase,
            error: None,
        }
    }

    fn reset(self) -> Self {
        match self.mode {
            EditorMode::Create => Self::create(),
            EditorMode::Edit(id) => Self::edit(id),
        }
    }
}

impl ViewMachine for NoteEditorView {
    type Event = NoteEditorEvent;
    type Effect = NoteEditorEffect;

    fn transition(mut self, event: NoteEditorEvent) -> (Self, Option<NoteEditorEffect>) {
        match event {
            NoteEditorEvent::Load => {
                if let EditorMode::Edit(id) = &self.mode {
                    let effect = NoteEditorEffect::Fetch(id.clone());
                    self.phase = EditorPhase::Loading;
                    return (self, Some(effect));
                }
            }
            NoteEditorEvent::Fetched(note) => {
                if self.phase == EditorPhase::Loading {
                    self.title = note.title;
                    self.body = note.body;
                    self.phase = EditorPhase::Editing;
                }
            }
            NoteEditorEvent::FetchFailed => {
                self.phase = EditorPhase::Unavailable;
                self.error = Some(LOAD_FAILED.to_string());
            }
            NoteEditorEvent::TitleChanged(title) => self.title = title,
            NoteEditorEvent::BodyChanged(body) => self.body = body,
            NoteEditorEvent::Save => {
                if self.phase != EditorPhase::Editing {
                    return (self, None);
                }
                self.phase = EditorPhase::Saving;
                self.error = None;
                let effect = match &self.mode {
                    EditorMode::Create => NoteEditorEffect::Create {
                        title: self.title.clone(),
                        body: self.body.clone(),
                    },
                    EditorMode::Edit(id) => NoteEditorEffect::Update {
                        id: id.clone(),
                        title: self.title.clone(),
                        body: self.body.clone(),
                    },
                };
                return (self, Some(effect));
            }
            NoteEditorEvent::Saved => return (self.reset(), Some(NoteEditorEffect::Leave)),
            NoteEditorEvent::SaveFailed => {
                self.phase = EditorPhase::Editing;
                self.error = Some(SAVE_FAILED.to_string());
            }
        }
        (self, None)
    }

    async fn perform<D: DataStore, S: KeyValueStore>(
        effect: NoteEditorEffect,
        ctx: &AppContext<D, S>,
    ) -> Followup<NoteEditorEvent> {
        match effect {
            NoteEditorEffect::Fetch(id) => match ctx.notes.get(&id).await {
                Ok(Some(note)) => Followup::Event(NoteEditorEvent::Fetched(note)),
                Ok(None) => Followup::Navigate(Route::Notes),
                Err(error) => {
                    tracing::error!("Failed to load note {id} for editing: {error}");
                    Followup::Event(NoteEditorEvent::FetchFailed)
                }
            },
            NoteEditorEffect::Create { title, body } => {
                let Some(author) = ctx.session.current_user() else {
                    return Followup::Navigate(Route::LogIn);
                };
                saved(ctx.notes.create(&title, &body, author.id).await)
            }
            NoteEditorEffect::Update { id, title, body } => {
                saved(ctx.notes.update(&id, &title, &body).await)
            }
            NoteEditorEffect::Leave => Followup::Navigate(Route::Notes),
        }
    }
}

fn saved(result: crate::Result<Note>) -> Followup<NoteEditorEvent> {
    match result {
        Ok(_) => Followup::Event(NoteEditorEvent::Saved),
        Err(error) if error.is_not_found() => {
            tracing::debug!("Note gone before save, back to list: {error}");
            Followup::Navigate(Route::Notes)
        }
        Err(error) => {
            tracing::error!("Failed to save note: {error}");
            Followup::Event(NoteEditorEvent::SaveFailed)
        }
    }
}
