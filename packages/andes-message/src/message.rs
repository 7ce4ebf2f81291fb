//! Message component
//!
//! `Message` owns a `MessageConfig` and the stylesheet it was built with.
//! Setters never validate: whatever the host passes in is what gets drawn.

use std::fmt;
use std::rc::Rc;

use crate::appearance::MessageAppearance;
use crate::style::{StyleDescriptor, StyleResolver};
use crate::theme::StyleSheet;
use crate::types::{MessageHierarchy, MessageType};

/// Callback run when an action control is pressed.
///
/// Receives the message that owns the action, so handlers can reconfigure it.
pub type ActionHandler = Rc<dyn Fn(&mut Message)>;

/// Which of the two action controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSlot {
    Primary,
    Secondary,
}

/// Label and handler of one action control.
#[derive(Clone)]
pub struct MessageAction {
    text: String,
    handler: ActionHandler,
}

impl MessageAction {
    pub fn new(text: impl Into<String>, handler: ActionHandler) -> Self {
        Self {
            text: text.into(),
            handler,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handler(&self) -> &ActionHandler {
        &self.handler
    }
}

impl PartialEq for MessageAction {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && Rc::ptr_eq(&self.handler, &other.handler)
    }
}

impl fmt::Debug for MessageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageAction")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// Configuration state of a message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageConfig {
    pub title: String,
    pub body: String,
    pub primary_action: Option<MessageAction>,
    pub secondary_action: Option<MessageAction>,
    pub dismissible: bool,
    pub message_type: MessageType,
    pub hierarchy: MessageHierarchy,
}

/// A message banner.
pub struct Message {
    config: MessageConfig,
    theme: Rc<StyleSheet>,
    visible: bool,
}

impl Message {
    /// Create a visible message with default configuration.
    pub fn new(theme: Rc<StyleSheet>) -> Self {
        Self {
            config: MessageConfig::default(),
            theme,
            visible: true,
        }
    }

    pub fn config(&self) -> &MessageConfig {
        &self.config
    }

    pub fn theme(&self) -> &Rc<StyleSheet> {
        &self.theme
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn body(&self) -> &str {
        &self.config.body
    }

    pub fn message_type(&self) -> MessageType {
        self.config.message_type
    }

    pub fn hierarchy(&self) -> MessageHierarchy {
        self.config.hierarchy
    }

    pub fn is_dismissible(&self) -> bool {
        self.config.dismissible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn primary_action_text(&self) -> Option<&str> {
        self.config.primary_action.as_ref().map(MessageAction::text)
    }

    pub fn secondary_action_text(&self) -> Option<&str> {
        self.config.secondary_action.as_ref().map(MessageAction::text)
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.config.title = title.into();
        self
    }

    pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.config.body = body.into();
        self
    }

    pub fn set_type(&mut self, message_type: MessageType) -> &mut Self {
        self.config.message_type = message_type;
        self
    }

    pub fn set_hierarchy(&mut self, hierarchy: MessageHierarchy) -> &mut Self {
        self.config.hierarchy = hierarchy;
        self
    }

    pub fn set_dismissible(&mut self, dismissible: bool) -> &mut Self {
        self.config.dismissible = dismissible;
        self
    }

    pub fn set_primary_action(
        &mut self,
        text: impl Into<String>,
        handler: impl Fn(&mut Message) + 'static,
    ) -> &mut Self {
        self.config.primary_action = Some(MessageAction::new(text, Rc::new(handler)));
        self
    }

    pub fn set_secondary_action(
        &mut self,
        text: impl Into<String>,
        handler: impl Fn(&mut Message) + 'static,
    ) -> &mut Self {
        self.config.secondary_action = Some(MessageAction::new(text, Rc::new(handler)));
        self
    }

    /// Set an action from an already shared handler.
    pub fn set_action(&mut self, slot: ActionSlot, action: MessageAction) -> &mut Self {
        match slot {
            ActionSlot::Primary => self.config.primary_action = Some(action),
            ActionSlot::Secondary => self.config.secondary_action = Some(action),
        }
        self
    }

    pub fn clear_primary_action(&mut self) -> &mut Self {
        self.config.primary_action = None;
        self
    }

    pub fn clear_secondary_action(&mut self) -> &mut Self {
        self.config.secondary_action = None;
        self
    }

    pub fn set_theme(&mut self, theme: Rc<StyleSheet>) -> &mut Self {
        tracing::debug!("Message theme changed to: {}", theme.id);
        self.theme = theme;
        self
    }

    // ------------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------------

    pub fn show(&mut self) -> &mut Self {
        self.visible = true;
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.visible = false;
        self
    }

    /// Hide the message through its dismiss control.
    ///
    /// Returns false when the message is not dismissible or already hidden.
    pub fn dismiss(&mut self) -> bool {
        if !self.config.dismissible || !self.visible {
            return false;
        }
        self.visible = false;
        tracing::debug!("Message dismissed");
        true
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Run the handler behind an action control.
    ///
    /// Returns false when the slot is empty or the message is hidden.
    pub fn trigger(&mut self, slot: ActionSlot) -> bool {
        if !self.visible {
            return false;
        }

        let action = match slot {
            ActionSlot::Primary => self.config.primary_action.as_ref(),
            ActionSlot::Secondary => self.config.secondary_action.as_ref(),
        };
        let Some(handler) = action.map(|a| a.handler.clone()) else {
            return false;
        };

        tracing::debug!("Message action triggered: {:?}", slot);
        handler(self);
        true
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    pub fn style(&self) -> StyleDescriptor {
        self.theme.resolve(self.config.message_type)
    }

    pub fn appearance(&self) -> MessageAppearance {
        MessageAppearance::compose(&self.config, &self.style(), &self.theme, self.visible)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("config", &self.config)
            .field("theme", &self.theme.id)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn message() -> Message {
        Message::new(Rc::new(StyleSheet::default()))
    }

    #[test]
    fn test_defaults() {
        let message = message();
        assert_eq!(message.title(), "");
        assert_eq!(message.body(), "");
        assert_eq!(message.message_type(), MessageType::Neutral);
        assert_eq!(message.hierarchy(), MessageHierarchy::Loud);
        assert!(!message.is_dismissible());
        assert!(message.is_visible());
        assert!(message.primary_action_text().is_none());
        assert!(message.secondary_action_text().is_none());
    }

    #[test]
    fn test_setter_round_trips() {
        let mut message = message();
        message
            .set_title("T")
            .set_body("B")
            .set_type(MessageType::Warning)
            .set_hierarchy(MessageHierarchy::Quiet)
            .set_dismissible(true)
            .set_primary_action("OK", |_| {})
            .set_secondary_action("Cancel", |_| {});

        assert_eq!(message.title(), "T");
        assert_eq!(message.body(), "B");
        assert_eq!(message.message_type(), MessageType::Warning);
        assert_eq!(message.hierarchy(), MessageHierarchy::Quiet);
        assert!(message.is_dismissible());
        assert_eq!(message.primary_action_text(), Some("OK"));
        assert_eq!(message.secondary_action_text(), Some("Cancel"));

        let appearance = message.appearance();
        assert_eq!(appearance.title, "T");
        assert_eq!(appearance.body, "B");
        assert!(appearance.dismiss_visible);
        assert_eq!(appearance.primary_action.map(|a| a.label), Some("OK".to_string()));
        assert_eq!(appearance.secondary_action.map(|a| a.label), Some("Cancel".to_string()));
    }

    #[test]
    fn test_dismissible_toggle_leaves_other_fields() {
        let mut message = message();
        message
            .set_title("Title")
            .set_body("Body")
            .set_type(MessageType::Error)
            .set_hierarchy(MessageHierarchy::Quiet)
            .set_primary_action("Retry", |_| {});
        let before = message.config().clone();

        message.set_dismissible(true).set_dismissible(false);

        assert_eq!(message.config(), &before);
    }

    #[test]
    fn test_hide_then_show_restores_appearance() {
        let mut message = message();
        message
            .set_title("Heads up")
            .set_body("Something changed")
            .set_type(MessageType::Success)
            .set_dismissible(true)
            .set_primary_action("See", |_| {});
        let before = message.appearance();

        message.hide();
        assert!(!message.appearance().visible);
        assert_eq!(message.title(), "Heads up");

        message.show();
        assert_eq!(message.appearance(), before);
    }

    #[test]
    fn test_empty_body_is_accepted() {
        let mut message = message();
        message.set_body("");
        assert_eq!(message.appearance().body, "");
    }

    #[test]
    fn test_secondary_without_primary_is_rendered() {
        let mut message = message();
        message.set_secondary_action("Cancel", |_| {});
        let appearance = message.appearance();
        assert!(appearance.primary_action.is_none());
        assert!(appearance.secondary_action.is_some());
    }

    #[test]
    fn test_trigger_invokes_handler_with_message() {
        let pressed = Rc::new(Cell::new(0));
        let counter = pressed.clone();
        let mut message = message();
        message.set_title("Order").set_primary_action("OK", move |m| {
            assert_eq!(m.title(), "Order");
            counter.set(counter.get() + 1);
        });

        assert!(message.trigger(ActionSlot::Primary));
        assert!(!message.trigger(ActionSlot::Secondary));
        assert_eq!(pressed.get(), 1);
    }

    #[test]
    fn test_handler_can_mutate_message() {
        let mut message = message();
        message.set_primary_action("Archive", |m| {
            m.set_body("Archived").hide();
        });

        assert!(message.trigger(ActionSlot::Primary));
        assert_eq!(message.body(), "Archived");
        assert!(!message.is_visible());
        // Hidden messages ignore their controls
        assert!(!message.trigger(ActionSlot::Primary));
    }

    #[test]
    fn test_handler_can_replace_its_own_action() {
        let replaced = Rc::new(Cell::new(0));
        let counter = replaced.clone();
        let mut message = message();
        message.set_primary_action("Undo", move |m| {
            let counter = counter.clone();
            m.set_primary_action("Redo", move |_| counter.set(counter.get() + 1));
        });

        assert!(message.trigger(ActionSlot::Primary));
        assert_eq!(message.primary_action_text(), Some("Redo"));
        assert_eq!(replaced.get(), 0);

        assert!(message.trigger(ActionSlot::Primary));
        assert_eq!(replaced.get(), 1);
    }

    #[test]
    fn test_clear_actions() {
        let mut message = message();
        message
            .set_primary_action("OK", |_| {})
            .set_secondary_action("Cancel", |_| {})
            .clear_secondary_action();
        assert_eq!(message.primary_action_text(), Some("OK"));
        assert!(message.secondary_action_text().is_none());

        message.clear_primary_action();
        assert!(message.appearance().primary_action.is_none());
    }

    #[test]
    fn test_dismiss_requires_dismissible() {
        let mut message = message();
        assert!(!message.dismiss());
        assert!(message.is_visible());

        message.set_dismissible(true);
        assert!(message.dismiss());
        assert!(!message.is_visible());
        assert!(!message.dismiss());
    }

    #[test]
    fn test_set_theme_changes_style() {
        let mut message = message();
        message.set_type(MessageType::Success);
        let light = message.style();

        let dark = crate::theme::andes_dark();
        message.set_theme(Rc::new(dark.clone()));

        assert_ne!(message.style(), light);
        assert_eq!(message.style().primary_color, dark.success.primary);
    }

    #[test]
    fn test_shared_action_equality() {
        let handler: ActionHandler = Rc::new(|_: &mut Message| {});
        let a = MessageAction::new("OK", handler.clone());
        let b = MessageAction::new("OK", handler);
        let c = MessageAction::new("OK", Rc::new(|_: &mut Message| {}));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
