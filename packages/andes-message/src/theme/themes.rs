//! Built-in stylesheet definitions

use super::{StyleSheet, TypePalette};
use crate::color::hex;

// ============================================================================
// Andes Light (Default)
// ============================================================================

pub fn andes_light() -> StyleSheet {
    StyleSheet {
        id: "andes-light",
        name: "Andes",
        is_dark: false,

        neutral: TypePalette {
            primary: hex("#3483fa"),
            secondary: hex("#e3edfb"),
        },
        success: TypePalette {
            primary: hex("#00a650"),
            secondary: hex("#e6f7ee"),
        },
        error: TypePalette {
            primary: hex("#f23d4f"),
            secondary: hex("#fdecee"),
        },
        warning: TypePalette {
            primary: hex("#ff7733"),
            secondary: hex("#fff1eb"),
        },

        text: hex("#333333"),
        text_muted: hex("#8c8c8c"),
        text_on_accent: hex("#ffffff"),

        background: hex("#ededed"),
        background_panel: hex("#f5f5f5"),
        background_element: hex("#ffffff"),

        border: hex("#d9d9d9"),
        border_active: hex("#3483fa"),

        accent: hex("#3483fa"),
    }
}

// ============================================================================
// Andes Dark
// ============================================================================

pub fn andes_dark() -> StyleSheet {
    StyleSheet {
        id: "andes-dark",
        name: "Andes Dark",
        is_dark: true,

        neutral: TypePalette {
            primary: hex("#4a90ff"),
            secondary: hex("#1b2a44"),
        },
        success: TypePalette {
            primary: hex("#1fbf6b"),
            secondary: hex("#12301f"),
        },
        error: TypePalette {
            primary: hex("#ff5a6a"),
            secondary: hex("#3d1a1f"),
        },
        warning: TypePalette {
            primary: hex("#ff8a4d"),
            secondary: hex("#3f2616"),
        },

        text: hex("#eeeeee"),
        text_muted: hex("#8a8a8a"),
        text_on_accent: hex("#ffffff"),

        background: hex("#0f0f0f"),
        background_panel: hex("#171717"),
        background_element: hex("#222222"),

        border: hex("#3c3c3c"),
        border_active: hex("#4a90ff"),

        accent: hex("#4a90ff"),
    }
}
