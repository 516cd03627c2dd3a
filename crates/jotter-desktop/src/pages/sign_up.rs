//! Sign Up page

use dioxus::prelude::*;
use jotter_core::views::{FormPhase, SignUpEvent, SignUpView};
use jotter_core::Route;

use super::panel_style;
use crate::components::{Button, ButtonVariant, TextField};
use crate::machine::use_machine;
use crate::theme::palette;

#[component]
pub fn SignUpPage() -> Element {
    let (view, send) = use_machine(SignUpView::default);
    let mut route = use_context::<Signal<Route>>();
    let colors = palette();
    let state = view();
    let submitting = state.phase == FormPhase::Submitting;

    rsx! {
        div {
            style: "{panel_style()} max-width: 420px;",
            h1 { style: "text-align: center;", "Sign up" }
            TextField {
                placeholder: "Email",
                value: state.email,
                oninput: move |value| send.call(SignUpEvent::EmailChanged(value)),
            }
            TextField {
                placeholder: "Password",
                value: state.password,
                password: true,
                oninput: move |value| send.call(SignUpEvent::PasswordChanged(value)),
            }
            TextField {
                placeholder: "Repeat Password",
                value: state.repeat_password,
                password: true,
                oninput: move |value| send.call(SignUpEvent::RepeatPasswordChanged(value)),
            }
            if let Some(error) = state.error {
                div { style: "color: {colors.error}; margin-bottom: 8px;", "{error}" }
            }
            Button {
                disabled: submitting,
                onclick: move |_| send.call(SignUpEvent::Submit),
                "Sign up"
            }
            div {
                style: "margin-top: 16px; color: {colors.text_secondary};",
                "Already have an account? "
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| route.set(Route::LogIn),
                    "Log in"
                }
            }
        }
    }
}
