//! Log In page

use dioxus::prelude::*;
use jotter_core::views::{FormPhase, LogInEvent, LogInView};
use jotter_core::Route;

use super::panel_style;
use crate::components::{Button, ButtonVariant, TextField};
use crate::machine::use_machine;
use crate::theme::palette;

#[component]
pub fn LogInPage() -> Element {
    let (view, send) = use_machine(LogInView::default);
    let mut route = use_context::<Signal<Route>>();
    let colors = palette();
    let state = view();
    let submitting = state.phase == FormPhase::Submitting;

    rsx! {
        div {
            style: "{panel_style()} max-width: 420px;",
            h1 { style: "text-align: center;", "Log in" }
            TextField {
                placeholder: "Email",
                value: state.email,
                oninput: move |value| send.call(LogInEvent::EmailChanged(value)),
            }
            TextField {
                placeholder: "Password",
                value: state.password,
                password: true,
                oninput: move |value| send.call(LogInEvent::PasswordChanged(value)),
            }
            if let Some(error) = state.error {
                div { style: "color: {colors.error}; margin-bottom: 8px;", "{error}" }
            }
            Button {
                disabled: submitting,
                onclick: move |_| send.call(LogInEvent::Submit),
                "Log in"
            }
            div {
                style: "margin-top: 16px; color: {colors.text_secondary};",
                "No account yet? "
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| route.set(Route::SignUp),
                    "Sign up"
                }
            }
        }
    }
}
