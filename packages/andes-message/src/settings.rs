//! Gallery settings and their TOML persistence.

use crate::theme::{StyleSheet, ThemeRegistry, TypePalette};
use crate::types::MessageType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_THEME_ID: &str = "andes-light";

/// Optional color overrides per message type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<TypePalette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<TypePalette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TypePalette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<TypePalette>,
}

impl PaletteOverrides {
    pub fn get(&self, message_type: MessageType) -> Option<TypePalette> {
        match message_type {
            MessageType::Neutral => self.neutral,
            MessageType::Success => self.success,
            MessageType::Error => self.error,
            MessageType::Warning => self.warning,
        }
    }

    pub fn is_empty(&self) -> bool {
        MessageType::ALL.iter().all(|t| self.get(*t).is_none())
    }
}

/// User settings for the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Built-in theme ID
    pub theme: String,
    /// Locale override; detected from the environment when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "PaletteOverrides::is_empty")]
    pub palette: PaletteOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            locale: None,
            palette: PaletteOverrides::default(),
        }
    }
}

impl Settings {
    /// Get the default settings file path.
    ///
    /// Can be overridden with the `ANDES_GALLERY_CONFIG` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("ANDES_GALLERY_CONFIG") {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        directories::ProjectDirs::from("com", "andes", "andes-gallery")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("andes-gallery.toml"))
    }

    /// Load settings from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Resolve the configured theme and apply the palette overrides.
    pub fn stylesheet(&self, registry: &ThemeRegistry) -> Result<StyleSheet> {
        let mut sheet = registry
            .get(&self.theme)
            .ok_or_else(|| Error::UnknownTheme(self.theme.clone()))?;

        for message_type in MessageType::ALL {
            if let Some(palette) = self.palette.get(message_type) {
                let slot = match message_type {
                    MessageType::Neutral => &mut sheet.neutral,
                    MessageType::Success => &mut sheet.success,
                    MessageType::Error => &mut sheet.error,
                    MessageType::Warning => &mut sheet.warning,
                };
                *slot = palette;
            }
        }

        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_with_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"
theme = "andes-dark"
locale = "es"

[palette.warning]
primary = "#aa5500"
secondary = "#331100"
"##,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.theme, "andes-dark");
        assert_eq!(settings.locale.as_deref(), Some("es"));

        let sheet = settings.stylesheet(&ThemeRegistry::new()).unwrap();
        assert!(sheet.is_dark);
        assert_eq!(sheet.warning.primary, hex("#aa5500"));
        assert_eq!(sheet.warning.secondary, hex("#331100"));
        assert_eq!(sheet.error, crate::theme::andes_dark().error);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[palette.error]\nprimary = \"red\"\nsecondary = \"#fff\"\n").unwrap();

        assert!(matches!(Settings::load(&path), Err(Error::TomlDecode(_))));
    }

    #[test]
    fn test_unknown_theme() {
        let settings = Settings {
            theme: "solarized".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.stylesheet(&ThemeRegistry::new()),
            Err(Error::UnknownTheme(id)) if id == "solarized"
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut settings = Settings::default();
        settings.theme = "andes-dark".to_string();
        settings.palette.success = Some(TypePalette {
            primary: hex("#00ff00"),
            secondary: hex("#002200"),
        });

        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
