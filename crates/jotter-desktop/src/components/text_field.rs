//! Labelled single-line input

use dioxus::prelude::*;

use crate::theme::palette;

#[component]
pub fn TextField(
    placeholder: String,
    value: String,
    #[props(default)] password: bool,
    oninput: EventHandler<String>,
) -> Element {
    let colors = palette();
    let input_type = if password { "password" } else { "text" };

    rsx! {
        input {
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt.value()),
            style: "
                width: 100%;
                box-sizing: border-box;
                padding: 8px 12px;
                margin-bottom: 8px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                outline: none;
            ",
        }
    }
}
