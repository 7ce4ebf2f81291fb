//! Theme system for the gallery
//!
//! The active `StyleSheet` is kept in a GPUI global and handed to message
//! components explicitly; `Palette` is its Hsla form for chrome rendering.

mod colors;

pub use colors::*;
pub use colors::hsla;

use andes_message::{Settings, StyleSheet, ThemeRegistry};
use gpui::*;
use std::rc::Rc;

// ============================================================================
// Globals
// ============================================================================

/// Stylesheet currently applied to the gallery
#[derive(Clone)]
pub struct ActiveTheme {
    pub sheet: Rc<StyleSheet>,
    /// Settings the sheet was built from, kept for overrides and persistence
    pub settings: Settings,
}

impl Global for ActiveTheme {}

/// Built-in themes
pub struct Themes(pub ThemeRegistry);

impl Global for Themes {}

// ============================================================================
// Palette
// ============================================================================

/// Hsla colors of the gallery chrome
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Hsla,
    pub text_muted: Hsla,
    pub text_on_accent: Hsla,
    pub background: Hsla,
    pub background_panel: Hsla,
    pub background_element: Hsla,
    pub border: Hsla,
    pub border_active: Hsla,
    pub accent: Hsla,
    pub error: Hsla,
}

impl Palette {
    pub fn of(sheet: &StyleSheet) -> Self {
        Self {
            text: hsla(sheet.text),
            text_muted: hsla(sheet.text_muted),
            text_on_accent: hsla(sheet.text_on_accent),
            background: hsla(sheet.background),
            background_panel: hsla(sheet.background_panel),
            background_element: hsla(sheet.background_element),
            border: hsla(sheet.border),
            border_active: hsla(sheet.border_active),
            accent: hsla(sheet.accent),
            error: hsla(sheet.error.primary),
        }
    }
}

// ============================================================================
// Theme Initialization
// ============================================================================

/// Initialize the theme system from user settings
pub fn init(cx: &mut App, settings: Settings) {
    let registry = ThemeRegistry::new();
    let sheet = match settings.stylesheet(&registry) {
        Ok(sheet) => sheet,
        Err(err) => {
            tracing::warn!("Falling back to default theme: {}", err);
            StyleSheet::default()
        }
    };

    tracing::debug!(
        "Theme system initialized with {} themes, active: {}",
        registry.list().len(),
        sheet.id
    );

    cx.set_global(Themes(registry));
    cx.set_global(ActiveTheme {
        sheet: Rc::new(sheet),
        settings,
    });
}

/// Set the current theme by ID, keeping palette overrides
pub fn set_theme_by_id(id: &str, cx: &mut App) -> bool {
    let mut settings = cx.global::<ActiveTheme>().settings.clone();
    settings.theme = id.to_string();

    let resolved = settings.stylesheet(&cx.global::<Themes>().0);
    match resolved {
        Ok(sheet) => {
            cx.set_global(ActiveTheme {
                sheet: Rc::new(sheet),
                settings,
            });
            tracing::info!("Theme changed to: {}", id);
            true
        }
        Err(err) => {
            tracing::warn!("Theme not changed: {}", err);
            false
        }
    }
}

/// Toggle between light and dark variants of the current theme
pub fn toggle_theme_mode(cx: &mut App) -> bool {
    let current_id = cx.global::<ActiveTheme>().sheet.id;
    let target = cx.global::<Themes>().0.counterpart(current_id);
    match target {
        Some(id) => set_theme_by_id(id, cx),
        None => false,
    }
}

/// Write the active settings back to the settings file
pub fn persist(cx: &App) {
    let path = Settings::default_path();
    if let Err(err) = cx.global::<ActiveTheme>().settings.save(&path) {
        tracing::warn!("Could not save settings to {}: {}", path.display(), err);
    }
}

/// Get the current stylesheet
pub fn current_sheet(cx: &App) -> Rc<StyleSheet> {
    cx.global::<ActiveTheme>().sheet.clone()
}

/// Get the current chrome palette
pub fn palette(cx: &App) -> Palette {
    Palette::of(&cx.global::<ActiveTheme>().sheet)
}
