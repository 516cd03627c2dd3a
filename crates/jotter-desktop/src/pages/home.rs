//! Home page

use dioxus::prelude::*;
use jotter_core::views::HomeSummary;
use jotter_core::{Route, User};

use super::panel_style;
use crate::components::{Button, Header};

#[component]
pub fn HomePage(user: User) -> Element {
    let mut route = use_context::<Signal<Route>>();
    let summary = HomeSummary::for_user(&user);

    rsx! {
        Header { email: summary.email.clone() }
        div {
            style: "{panel_style()}",
            h1 { "About me" }
            p { "Email: {summary.email}" }
            p { "Registration Date: {summary.registered}" }
            Button {
                onclick: move |_| route.set(Route::Notes),
                "Go to Notes"
            }
        }
    }
}
