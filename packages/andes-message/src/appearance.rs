//! Render contract of a message
//!
//! `MessageAppearance` is everything a renderer needs to draw a message at
//! one point in time. The descriptor picks the colors; the hierarchy decides
//! which of them fills the banner.

use crate::color::Color;
use crate::message::MessageConfig;
use crate::style::{Icon, StyleDescriptor};
use crate::theme::StyleSheet;
use crate::types::MessageHierarchy;

/// Button emphasis inside the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonHierarchy {
    #[default]
    Loud,
    Quiet,
    Transparent,
}

/// How one action control is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionAppearance {
    pub label: String,
    pub hierarchy: ButtonHierarchy,
    pub tint: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAppearance {
    pub visible: bool,

    pub title: String,
    pub show_title: bool,
    pub body: String,

    pub icon: Icon,
    pub icon_color: Color,
    pub icon_background: Color,

    pub background: Color,
    pub text_color: Color,
    /// Leading border, only drawn for quiet messages
    pub accent: Option<Color>,

    pub primary_action: Option<ActionAppearance>,
    pub secondary_action: Option<ActionAppearance>,
    pub dismiss_visible: bool,
}

impl MessageAppearance {
    pub(crate) fn compose(
        config: &MessageConfig,
        style: &StyleDescriptor,
        sheet: &StyleSheet,
        visible: bool,
    ) -> Self {
        let (background, text_color, icon_color, icon_background, accent) = match config.hierarchy
        {
            MessageHierarchy::Loud => (
                style.primary_color,
                sheet.text_on_accent,
                style.primary_color,
                sheet.text_on_accent,
                None,
            ),
            MessageHierarchy::Quiet => (
                style.secondary_color,
                sheet.text,
                sheet.text_on_accent,
                style.primary_color,
                Some(style.primary_color),
            ),
        };

        let (primary_hierarchy, tint) = match config.hierarchy {
            MessageHierarchy::Loud => (ButtonHierarchy::Quiet, sheet.text_on_accent),
            MessageHierarchy::Quiet => (ButtonHierarchy::Loud, style.primary_color),
        };

        let primary_action = config.primary_action.as_ref().map(|action| ActionAppearance {
            label: action.text().to_string(),
            hierarchy: primary_hierarchy,
            tint,
        });
        let secondary_action = config.secondary_action.as_ref().map(|action| ActionAppearance {
            label: action.text().to_string(),
            hierarchy: ButtonHierarchy::Transparent,
            tint,
        });

        Self {
            visible,
            title: config.title.clone(),
            show_title: !config.title.is_empty(),
            body: config.body.clone(),
            icon: style.icon,
            icon_color,
            icon_background,
            background,
            text_color,
            accent,
            primary_action,
            secondary_action,
            dismiss_visible: config.dismissible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::style::StyleResolver;
    use crate::types::MessageType;
    use std::rc::Rc;

    fn message(sheet: &StyleSheet) -> Message {
        let mut message = Message::new(Rc::new(sheet.clone()));
        message
            .set_body("Body")
            .set_type(MessageType::Warning)
            .set_primary_action("Primary", |_| {})
            .set_secondary_action("Secondary", |_| {});
        message
    }

    #[test]
    fn test_loud_fills_with_primary_color() {
        let sheet = StyleSheet::default();
        let style = sheet.resolve(MessageType::Warning);
        let appearance = message(&sheet).appearance();

        assert_eq!(appearance.background, style.primary_color);
        assert_eq!(appearance.text_color, sheet.text_on_accent);
        assert_eq!(appearance.icon_color, style.primary_color);
        assert_eq!(appearance.accent, None);

        let primary = appearance.primary_action.unwrap();
        assert_eq!(primary.hierarchy, ButtonHierarchy::Quiet);
        assert_eq!(primary.tint, sheet.text_on_accent);
        let secondary = appearance.secondary_action.unwrap();
        assert_eq!(secondary.hierarchy, ButtonHierarchy::Transparent);
    }

    #[test]
    fn test_quiet_tints_with_secondary_color() {
        let sheet = StyleSheet::default();
        let style = sheet.resolve(MessageType::Warning);
        let mut message = message(&sheet);
        message.set_hierarchy(MessageHierarchy::Quiet);
        let appearance = message.appearance();

        assert_eq!(appearance.background, style.secondary_color);
        assert_eq!(appearance.text_color, sheet.text);
        assert_eq!(appearance.icon_color, sheet.text_on_accent);
        assert_eq!(appearance.icon_background, style.primary_color);
        assert_eq!(appearance.accent, Some(style.primary_color));

        let primary = appearance.primary_action.unwrap();
        assert_eq!(primary.hierarchy, ButtonHierarchy::Loud);
        assert_eq!(primary.tint, style.primary_color);
    }

    #[test]
    fn test_hierarchy_does_not_change_descriptor() {
        let sheet = StyleSheet::default();
        let mut message = message(&sheet);
        let loud = message.style();
        message.set_hierarchy(MessageHierarchy::Quiet);
        assert_eq!(message.style(), loud);
    }

    #[test]
    fn test_title_row_hidden_when_empty() {
        let sheet = StyleSheet::default();
        let mut message = message(&sheet);
        assert!(!message.appearance().show_title);

        message.set_title("Title");
        assert!(message.appearance().show_title);
    }

    #[test]
    fn test_icon_follows_type() {
        let sheet = StyleSheet::default();
        let mut message = message(&sheet);
        assert_eq!(message.appearance().icon, Icon::Warning);

        message.set_type(MessageType::Neutral);
        assert_eq!(message.appearance().icon, Icon::Info);
    }
}
