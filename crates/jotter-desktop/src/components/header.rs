//! Top bar shown on every protected page

use dioxus::prelude::*;
use jotter_core::views::log_out;
use jotter_core::Route;

use super::button::{Button, ButtonVariant};
use crate::theme::palette;
use crate::Services;

#[component]
pub fn Header(email: String) -> Element {
    let services = use_context::<Services>();
    let mut route = use_context::<Signal<Route>>();
    let colors = palette();

    rsx! {
        div {
            class: "header",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 12px 24px;
                background: {colors.bg_primary};
                border-bottom: 1px solid {colors.border};
            ",
            div { style: "font-weight: 600;", "Hello, {email}" }
            div {
                style: "display: flex; gap: 8px;",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| route.set(Route::Home),
                    "Home"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| route.set(Route::Notes),
                    "Notes"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| route.set(log_out(&services)),
                    "Log out"
                }
            }
        }
    }
}
