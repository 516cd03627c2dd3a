//! Data models for Jotter

mod id;
mod note;
mod user;

pub use id::RecordId;
pub use note::{NewNote, Note};
pub use user::{NewUser, User};
