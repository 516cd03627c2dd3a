//! Note access scoped by author.
//!
//! Only [`NoteAccess::list`] filters by owner. `get`, `update` and `delete`
//! address notes by id alone and do not check who is asking.

use crate::api::{decode, encode, DataStore, Resource};
use crate::models::{NewNote, Note, RecordId};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct NoteAccess<D: DataStore> {
    store: D,
}

impl<D: DataStore> NoteAccess<D> {
    pub const fn new(store: D) -> Self {
        Self { store }
    }

    /// All notes written by `author_id`. Never returns another user's note.
    pub async fn list(&self, author_id: &RecordId) -> Result<Vec<Note>> {
        let records = self
            .store
            .fetch_all(Resource::Notes, &[("authorId", author_id.to_string())])
            .await?;

        let mut notes = Vec::with_capacity(records.len());
        for record in records {
            let note: Note = decode(record)?;
            if note.is_owned_by(author_id) {
                notes.push(note);
            }
        }
        Ok(notes)
    }

    /// Note with the given id, whoever owns it
    pub async fn get(&self, id: &RecordId) -> Result<Option<Note>> {
        let records = self
            .store
            .fetch_all(Resource::Notes, &[("id", id.to_string())])
            .await?;
        Ok(records.into_iter().next().map(decode::<Note>).transpose()?)
    }

    pub async fn create(&self, title: &str, body: &str, author_id: RecordId) -> Result<Note> {
        let payload = encode(&NewNote::new(title, body, author_id))?;
        let record = self.store.create(Resource::Notes, payload).await?;
        let note: Note = decode(record)?;
        tracing::debug!("Created note {} for {}", note.id, note.author_id);
        Ok(note)
    }

    /// Replace title and body, keeping creation time and owner.
    pub async fn update(&self, id: &RecordId, title: &str, body: &str) -> Result<Note> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("note {id}")))?;

        let payload = encode(&current.replaced(title, body))?;
        let record = self.store.replace(Resource::Notes, id, payload).await?;
        Ok(decode(record)?)
    }

    pub async fn delete(&self, id: &RecordId) -> Result<()> {
        self.store.delete(Resource::Notes, id).await?;
        tracing::debug!("Deleted note {id}");
        Ok(())
    }
}
