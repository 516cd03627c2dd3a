//! jotter-core - Core library for Jotter
//!
//! Session handling, navigation guard, note and account access over a REST
//! data store, and the page state machines driven by the desktop shell.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod notes;
pub mod routes;
pub mod session;
pub mod users;
pub mod util;
pub mod validation;
pub mod views;


pub use api::{DataStore, MemoryDataStore, RestClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use guard::{guard, Access};
pub use models::{Note, RecordId, User};
pub use notes::NoteAccess;
pub use routes::Route;
pub use session::{FileStore, KeyValueStore, MemoryStore, SessionController, SessionState};
pub use users::UserDirectory;
pub use views::AppContext;
