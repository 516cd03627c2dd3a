//! Client-side session: the persisted slot and the process-wide controller
//! rehydrated from it.

mod controller;
mod store;

pub use controller::{Rehydration, SessionController, SessionState};
pub use store::{FileStore, KeyValueStore, MemoryStore, SESSION_KEY};
