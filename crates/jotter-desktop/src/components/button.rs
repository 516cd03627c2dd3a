//! Button component

use dioxus::prelude::*;

use crate::theme::palette;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let colors = palette();
    let (bg, fg, border) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text, colors.accent),
        ButtonVariant::Secondary => (colors.bg_primary, colors.text_primary, colors.border),
        ButtonVariant::Destructive => (colors.error, colors.accent_text, colors.error),
    };
    let opacity = if disabled { "0.6" } else { "1" };

    rsx! {
        button {
            disabled,
            style: "
                padding: 8px 14px;
                border-radius: 6px;
                border: 1px solid {border};
                background: {bg};
                color: {fg};
                opacity: {opacity};
                cursor: pointer;
                font-size: 14px;
            ",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
