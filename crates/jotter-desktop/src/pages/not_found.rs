//! Not Found page

use dioxus::prelude::*;
use jotter_core::views::NotFoundView;
use jotter_core::Route;

use super::panel_style;
use crate::components::Button;

#[component]
pub fn NotFoundPage(logged_in: bool) -> Element {
    let mut route = use_context::<Signal<Route>>();
    let view = NotFoundView::new(logged_in);

    rsx! {
        div {
            style: "{panel_style()} text-align: center;",
            h1 { "404" }
            p { "Page not found" }
            Button {
                onclick: move |_| route.set(view.action()),
                "{view.action_label()}"
            }
        }
    }
}
