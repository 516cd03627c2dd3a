//! Note Detail page

use dioxus::prelude::*;
use jotter_core::views::home::format_timestamp;
use jotter_core::views::{NoteDetailEvent, NoteDetailView};
use jotter_core::{RecordId, Route, User};

use super::panel_style;
use crate::components::{Button, ButtonVariant, Header};
use crate::machine::use_machine;
use crate::theme::palette;

#[component]
pub fn NoteDetailPage(user: User, id: RecordId) -> Element {
    let (view, send) = use_machine(NoteDetailView::default);
    let mut route = use_context::<Signal<Route>>();
    let colors = palette();

    let note_id = id.clone();
    use_effect(move || send.call(NoteDetailEvent::Load(note_id.clone())));

    let body = match view() {
        NoteDetailView::Loading => rsx! { div { style: "text-align: center;", "Loading..." } },
        NoteDetailView::Failed(message) => rsx! {
            div { style: "color: {colors.error}; text-align: center;", "{message}" }
        },
        NoteDetailView::Loaded {
            note,
            deleting,
            error,
        } => rsx! {
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { "{note.title}" }
                div {
                    style: "display: flex; gap: 8px;",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| route.set(Route::EditNote(id.clone())),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: deleting,
                        onclick: move |_| send.call(NoteDetailEvent::Delete),
                        "Delete"
                    }
                }
            }
            div {
                style: "font-size: 12px; color: {colors.text_secondary}; margin-bottom: 16px;",
                "{format_timestamp(note.created_at)}"
            }
            if let Some(error) = error {
                div { style: "color: {colors.error}; margin-bottom: 8px;", "{error}" }
            }
            div { style: "white-space: pre-wrap;", "{note.body}" }
        },
    };

    rsx! {
        Header { email: user.email.clone() }
        div {
            style: "{panel_style()}",
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| route.set(Route::Notes),
                "Back"
            }
            {body}
        }
    }
}
