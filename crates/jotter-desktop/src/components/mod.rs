//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod header;
mod text_field;

pub use button::{Button, ButtonVariant};
pub use header::Header;
pub use text_field::TextField;
