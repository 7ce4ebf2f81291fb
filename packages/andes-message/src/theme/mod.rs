//! Stylesheets for Andes components
//!
//! A `StyleSheet` is the theme object components are constructed with.
//! Built-in sheets live in `themes` and are looked up through the
//! `ThemeRegistry`.

mod themes;

pub use themes::*;

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// StyleSheet
// ============================================================================

/// Primary/secondary color pair for one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePalette {
    pub primary: Color,
    pub secondary: Color,
}

/// Complete stylesheet with all color definitions
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub id: &'static str,
    pub name: &'static str,
    pub is_dark: bool,

    // Message type palettes
    pub neutral: TypePalette,
    pub success: TypePalette,
    pub error: TypePalette,
    pub warning: TypePalette,

    // Text colors
    pub text: Color,
    pub text_muted: Color,
    pub text_on_accent: Color,

    // Surfaces
    pub background: Color,
    pub background_panel: Color,
    pub background_element: Color,

    // Borders
    pub border: Color,
    pub border_active: Color,

    // Controls
    pub accent: Color,
}

impl Default for StyleSheet {
    fn default() -> Self {
        themes::andes_light()
    }
}

// ============================================================================
// Theme Registry
// ============================================================================

/// Registry of all available stylesheets
pub struct ThemeRegistry {
    themes: HashMap<&'static str, fn() -> StyleSheet>,
    theme_list: Vec<ThemeInfo>,
}

/// Basic theme information for UI display
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub is_dark: bool,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            theme_list: Vec::new(),
        };

        registry.register("andes-light", "Andes", false, themes::andes_light);
        registry.register("andes-dark", "Andes Dark", true, themes::andes_dark);

        registry
    }

    fn register(
        &mut self,
        id: &'static str,
        name: &'static str,
        is_dark: bool,
        theme_fn: fn() -> StyleSheet,
    ) {
        self.themes.insert(id, theme_fn);
        self.theme_list.push(ThemeInfo { id, name, is_dark });
    }

    /// Get a stylesheet by ID
    pub fn get(&self, id: &str) -> Option<StyleSheet> {
        self.themes.get(id).map(|f| f())
    }

    /// Get list of all available themes
    pub fn list(&self) -> &[ThemeInfo] {
        &self.theme_list
    }

    pub fn dark_themes(&self) -> Vec<&ThemeInfo> {
        self.theme_list.iter().filter(|t| t.is_dark).collect()
    }

    pub fn light_themes(&self) -> Vec<&ThemeInfo> {
        self.theme_list.iter().filter(|t| !t.is_dark).collect()
    }

    /// ID of the opposite light/dark variant, if one is registered.
    ///
    /// Variants follow the `<family>-light` / `<family>-dark` naming.
    pub fn counterpart(&self, id: &str) -> Option<&'static str> {
        let candidate = if let Some(family) = id.strip_suffix("-light") {
            format!("{family}-dark")
        } else if let Some(family) = id.strip_suffix("-dark") {
            format!("{family}-light")
        } else {
            return None;
        };

        self.theme_list
            .iter()
            .find(|info| info.id == candidate)
            .map(|info| info.id)
    }
}
