//! Resolving a message type to its colors and icon.

use crate::color::Color;
use crate::theme::StyleSheet;
use crate::types::MessageType;

/// Feedback icon shown at the leading edge of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Info,
    Success,
    Error,
    Warning,
}

impl Icon {
    /// Asset name in the Andes icon set.
    pub fn asset_name(self) -> &'static str {
        match self {
            Icon::Info => "andes_ui_feedback_info_16",
            Icon::Success => "andes_ui_feedback_success_16",
            Icon::Error => "andes_ui_feedback_error_16",
            Icon::Warning => "andes_ui_feedback_warning_16",
        }
    }

    /// Text glyph for renderers without the icon font.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Info => "i",
            Icon::Success => "✓",
            Icon::Error => "✕",
            Icon::Warning => "!",
        }
    }
}

/// Resolved visual attributes for one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub primary_color: Color,
    pub secondary_color: Color,
    pub icon: Icon,
}

/// Anything that can resolve a message type to a descriptor.
pub trait StyleResolver {
    fn resolve(&self, message_type: MessageType) -> StyleDescriptor;
}

impl StyleResolver for StyleSheet {
    fn resolve(&self, message_type: MessageType) -> StyleDescriptor {
        let (palette, icon) = match message_type {
            MessageType::Neutral => (self.neutral, Icon::Info),
            MessageType::Success => (self.success, Icon::Success),
            MessageType::Error => (self.error, Icon::Error),
            MessageType::Warning => (self.warning, Icon::Warning),
        };

        StyleDescriptor {
            primary_color: palette.primary,
            secondary_color: palette.secondary,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex;
    use crate::theme::ThemeRegistry;

    #[test]
    fn test_warning_matches_stylesheet() {
        let sheet = StyleSheet::default();
        let style = sheet.resolve(MessageType::Warning);
        assert_eq!(style.primary_color, sheet.warning.primary);
        assert_eq!(style.secondary_color, sheet.warning.secondary);
        assert_eq!(style.icon.asset_name(), "andes_ui_feedback_warning_16");
    }

    #[test]
    fn test_descriptors_are_distinct() {
        let registry = ThemeRegistry::new();
        for info in registry.list() {
            let sheet = registry.get(info.id).unwrap();
            let styles: Vec<_> = MessageType::ALL.iter().map(|t| sheet.resolve(*t)).collect();
            for (i, a) in styles.iter().enumerate() {
                for b in &styles[i + 1..] {
                    assert_ne!(a.primary_color, b.primary_color);
                    assert_ne!(a.secondary_color, b.secondary_color);
                    assert_ne!(a.icon, b.icon);
                }
            }
        }
    }

    #[test]
    fn test_resolve_is_pure() {
        let sheet = StyleSheet::default();
        for message_type in MessageType::ALL {
            assert_eq!(sheet.resolve(message_type), sheet.resolve(message_type));
        }
    }

    #[test]
    fn test_resolve_follows_overridden_palette() {
        let mut sheet = StyleSheet::default();
        sheet.error.primary = hex("#aa0000");
        assert_eq!(sheet.resolve(MessageType::Error).primary_color, hex("#aa0000"));
    }
}
