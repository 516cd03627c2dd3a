//! Colors for the desktop app

/// Named colors used in inline styles
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
}

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f3f4f6",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    border: "#dadce0",
    accent: "#2563eb",
    accent_text: "#ffffff",
    error: "#dc2626",
};

#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &LIGHT_PALETTE
}
