//! Notes List page

use dioxus::prelude::*;
use jotter_core::views::home::format_date;
use jotter_core::views::notes_list::EMPTY_LIST;
use jotter_core::views::{NotesListEvent, NotesListView};
use jotter_core::{Route, User};

use super::panel_style;
use crate::components::{Button, ButtonVariant, Header};
use crate::machine::use_machine;
use crate::theme::palette;

#[component]
pub fn NotesPage(user: User) -> Element {
    let (view, send) = use_machine(NotesListView::default);
    let mut route = use_context::<Signal<Route>>();
    let colors = palette();

    let author_id = user.id.clone();
    use_effect(move || send.call(NotesListEvent::Load(author_id.clone())));

    let list = match view() {
        NotesListView::Loading => rsx! { div { style: "text-align: center;", "Loading..." } },
        NotesListView::Failed(message) => rsx! {
            div { style: "color: {colors.error}; text-align: center;", "{message}" }
        },
        NotesListView::Loaded { notes, error } => rsx! {
            if let Some(error) = error {
                div { style: "color: {colors.error}; margin-bottom: 8px;", "{error}" }
            }
            if notes.is_empty() {
                div { style: "text-align: center;", "{EMPTY_LIST}" }
            }
            for note in notes {
                NoteRow {
                    key: "{note.id}",
                    title: note.title.clone(),
                    created: format_date(note.created_at),
                    onopen: {
                        let id = note.id.clone();
                        move |_| route.set(Route::ViewNote(id.clone()))
                    },
                    onedit: {
                        let id = note.id.clone();
                        move |_| route.set(Route::EditNote(id.clone()))
                    },
                    ondelete: {
                        let id = note.id.clone();
                        move |_| send.call(NotesListEvent::Delete(id.clone()))
                    },
                }
            }
        },
    };

    rsx! {
        Header { email: user.email.clone() }
        div {
            style: "{panel_style()}",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { "Notes" }
                Button {
                    onclick: move |_| route.set(Route::CreateNote),
                    "Create note"
                }
            }
            {list}
        }
    }
}

#[component]
fn NoteRow(
    title: String,
    created: String,
    onopen: EventHandler<MouseEvent>,
    onedit: EventHandler<MouseEvent>,
    ondelete: EventHandler<MouseEvent>,
) -> Element {
    let colors = palette();

    rsx! {
        div {
            class: "note-item",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 12px 16px;
                margin-bottom: 8px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                cursor: pointer;
            ",
            onclick: move |evt| onopen.call(evt),
            div {
                div { style: "font-weight: 600;", "{title}" }
                div { style: "font-size: 12px; color: {colors.text_secondary};", "{created}" }
            }
            div {
                style: "display: flex; gap: 8px;",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |evt| ondelete.call(evt),
                    "Delete"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |evt| onedit.call(evt),
                    "Edit"
                }
            }
        }
    }
}
