//! Create Note and Edit Note pages

use dioxus::prelude::*;
use jotter_core::views::{EditorMode, EditorPhase, NoteEditorEvent, NoteEditorView};
use jotter_core::{Route, User};

use super::panel_style;
use crate::components::{Button, ButtonVariant, Header, TextField};
use crate::machine::use_machine;
use crate::theme::palette;

#[component]
pub fn NoteEditorPage(user: User, mode: EditorMode) -> Element {
    let heading = match &mode {
        EditorMode::Create => "Create note",
        EditorMode::Edit(_) => "Edit note",
    };
    let (view, send) = use_machine(move || match mode {
        EditorMode::Create => NoteEditorView::create(),
        EditorMode::Edit(id) => NoteEditorView::edit(id),
    });
    let mut route = use_context::<Signal<Route>>();
    let colors = palette();
    use_effect(move || send.call(NoteEditorEvent::Load));

    let state = view();
    let can_save = state.phase == EditorPhase::Editing;

    rsx! {
        Header { email: user.email.clone() }
        div {
            style: "{panel_style()}",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { "{heading}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| route.set(Route::Notes),
                    "Back"
                }
            }
            if state.phase == EditorPhase::Loading {
                div { style: "text-align: center;", "Loading..." }
            }
            TextField {
                placeholder: "Title",
                value: state.title,
                oninput: move |value| send.call(NoteEditorEvent::TitleChanged(value)),
            }
            textarea {
                placeholder: "Text",
                value: "{state.body}",
                oninput: move |evt| send.call(NoteEditorEvent::BodyChanged(evt.value())),
                style: "
                    width: 100%;
                    min-height: 240px;
                    box-sizing: border-box;
                    padding: 8px 12px;
                    margin-bottom: 8px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    font-family: inherit;
                    resize: vertical;
                ",
            }
            if let Some(error) = state.error {
                div { style: "color: {colors.error}; margin-bottom: 8px;", "{error}" }
            }
            Button {
                disabled: !can_save,
                onclick: move |_| send.call(NoteEditorEvent::Save),
                "Save"
            }
        }
    }
}
