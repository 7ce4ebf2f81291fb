//! Configuration form of the gallery screen
//!
//! The form owns the rule that a message body is required and that a
//! secondary action needs a primary one. `Message` itself accepts anything.

use crate::message::{ActionHandler, ActionSlot, Message, MessageAction};
use crate::picker::Picker;
use crate::types::{MessageHierarchy, MessageType};
use crate::Result;

/// Why the form refused to update the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("message body is empty")]
    EmptyBody,

    #[error("secondary action set without a primary action")]
    PrimaryNotSet,
}

impl ValidationError {
    /// Key of the localized error string.
    pub fn key(self) -> &'static str {
        match self {
            ValidationError::EmptyBody => "message.error.emptyBody",
            ValidationError::PrimaryNotSet => "message.error.primaryNotSet",
        }
    }
}

/// Check the form fields. An empty body is reported first.
pub fn validate(
    body: &str,
    primary: &str,
    secondary: &str,
) -> std::result::Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    if !secondary.is_empty() && primary.is_empty() {
        return Err(ValidationError::PrimaryNotSet);
    }
    Ok(())
}

/// Field values of the gallery's configuration panel.
#[derive(Debug, Clone, Default)]
pub struct MessageForm {
    pub title: String,
    pub body: String,
    pub primary_text: String,
    pub secondary_text: String,
    pub dismissible: bool,
    pub type_picker: Picker<MessageType>,
    pub hierarchy_picker: Picker<MessageHierarchy>,
    pub error: Option<ValidationError>,
    pub config_visible: bool,
}

impl MessageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate(&self.body, &self.primary_text, &self.secondary_text)
    }

    /// Open or close the configuration panel.
    ///
    /// Opening copies the live message into the fields. Returns the new
    /// visibility.
    pub fn toggle_config(&mut self, message: &Message) -> bool {
        if !self.config_visible {
            self.load_from(message);
        }
        self.config_visible = !self.config_visible;
        self.config_visible
    }

    pub fn load_from(&mut self, message: &Message) {
        self.title = message.title().to_string();
        self.body = message.body().to_string();
        self.primary_text = message.primary_action_text().unwrap_or_default().to_string();
        self.secondary_text = message
            .secondary_action_text()
            .unwrap_or_default()
            .to_string();
        self.dismissible = message.is_dismissible();
        self.type_picker.set_selected(message.message_type());
        self.hierarchy_picker.set_selected(message.hierarchy());
    }

    pub fn select_type_row(&mut self, row: usize) -> Result<MessageType> {
        self.type_picker.select_row(row)
    }

    pub fn select_hierarchy_row(&mut self, row: usize) -> Result<MessageHierarchy> {
        self.hierarchy_picker.select_row(row)
    }

    pub fn type_text(&self) -> &'static str {
        self.type_picker.display_text()
    }

    pub fn hierarchy_text(&self) -> &'static str {
        self.hierarchy_picker.display_text()
    }

    /// Validate and apply the fields to `message`.
    ///
    /// On failure the error is kept on the form and the message is left
    /// as it was. Both actions share `handler`.
    pub fn submit(
        &mut self,
        message: &mut Message,
        handler: ActionHandler,
    ) -> std::result::Result<(), ValidationError> {
        if let Err(err) = self.validate() {
            tracing::debug!("Message form rejected: {}", err);
            self.error = Some(err);
            return Err(err);
        }

        self.error = None;
        message
            .show()
            .set_title(self.title.clone())
            .set_body(self.body.clone())
            .set_dismissible(self.dismissible)
            .set_type(self.type_picker.selected())
            .set_hierarchy(self.hierarchy_picker.selected());

        if self.primary_text.is_empty() {
            message.clear_primary_action();
        } else {
            message.set_action(
                ActionSlot::Primary,
                MessageAction::new(self.primary_text.clone(), handler.clone()),
            );
        }
        if self.secondary_text.is_empty() {
            message.clear_secondary_action();
        } else {
            message.set_action(
                ActionSlot::Secondary,
                MessageAction::new(self.secondary_text.clone(), handler),
            );
        }

        self.config_visible = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleSheet;
    use std::cell::Cell;
    use std::rc::Rc;

    fn message() -> Message {
        Message::new(Rc::new(StyleSheet::default()))
    }

    fn noop() -> ActionHandler {
        Rc::new(|_: &mut Message| {})
    }

    #[test]
    fn test_validate_secondary_requires_primary() {
        assert_eq!(validate("x", "", "Cancel"), Err(ValidationError::PrimaryNotSet));
        assert_eq!(validate("x", "OK", "Cancel"), Ok(()));
        assert_eq!(validate("x", "OK", ""), Ok(()));
        assert_eq!(validate("x", "", ""), Ok(()));
    }

    #[test]
    fn test_validate_empty_body_checked_first() {
        assert_eq!(validate("", "", ""), Err(ValidationError::EmptyBody));
        assert_eq!(validate("", "", "Cancel"), Err(ValidationError::EmptyBody));
    }

    #[test]
    fn test_error_keys() {
        assert_eq!(ValidationError::EmptyBody.key(), "message.error.emptyBody");
        assert_eq!(ValidationError::PrimaryNotSet.key(), "message.error.primaryNotSet");
    }

    #[test]
    fn test_rejected_submit_leaves_message_unchanged() {
        let mut message = message();
        message.set_title("Original").set_body("Body").hide();
        let before = message.appearance();

        let mut form = MessageForm::new();
        form.config_visible = true;
        form.title = "New".to_string();
        form.body = "New body".to_string();
        form.secondary_text = "Cancel".to_string();

        assert_eq!(form.submit(&mut message, noop()), Err(ValidationError::PrimaryNotSet));
        assert_eq!(form.error, Some(ValidationError::PrimaryNotSet));
        assert!(form.config_visible);
        assert_eq!(message.appearance(), before);
    }

    #[test]
    fn test_submit_applies_every_field() {
        let mut message = message();
        message.hide();

        let mut form = MessageForm::new();
        form.error = Some(ValidationError::EmptyBody);
        form.config_visible = true;
        form.title = "Title".to_string();
        form.body = "Body".to_string();
        form.primary_text = "OK".to_string();
        form.secondary_text = "Cancel".to_string();
        form.dismissible = true;
        form.select_type_row(2).unwrap();
        form.select_hierarchy_row(1).unwrap();

        form.submit(&mut message, noop()).unwrap();

        assert!(message.is_visible());
        assert_eq!(message.title(), "Title");
        assert_eq!(message.body(), "Body");
        assert_eq!(message.primary_action_text(), Some("OK"));
        assert_eq!(message.secondary_action_text(), Some("Cancel"));
        assert!(message.is_dismissible());
        assert_eq!(message.message_type(), MessageType::Error);
        assert_eq!(message.hierarchy(), MessageHierarchy::Quiet);
        assert_eq!(form.error, None);
        assert!(!form.config_visible);
    }

    #[test]
    fn test_empty_action_texts_clear_actions() {
        let mut message = message();
        message
            .set_primary_action("Primary", |_| {})
            .set_secondary_action("Secondary", |_| {});

        let mut form = MessageForm::new();
        form.body = "Body".to_string();
        form.submit(&mut message, noop()).unwrap();

        assert!(message.primary_action_text().is_none());
        assert!(message.secondary_action_text().is_none());
    }

    #[test]
    fn test_submitted_actions_share_handler() {
        let pressed = Rc::new(Cell::new(0));
        let counter = pressed.clone();
        let handler: ActionHandler = Rc::new(move |_: &mut Message| counter.set(counter.get() + 1));

        let mut message = message();
        let mut form = MessageForm::new();
        form.body = "Body".to_string();
        form.primary_text = "OK".to_string();
        form.secondary_text = "Later".to_string();
        form.submit(&mut message, handler).unwrap();

        assert!(message.trigger(ActionSlot::Primary));
        assert!(message.trigger(ActionSlot::Secondary));
        assert_eq!(pressed.get(), 2);
    }

    #[test]
    fn test_toggle_config_loads_live_message() {
        let mut message = message();
        message
            .set_title("Title")
            .set_body("Body")
            .set_type(MessageType::Success)
            .set_hierarchy(MessageHierarchy::Quiet)
            .set_dismissible(true)
            .set_primary_action("OK", |_| {});

        let mut form = MessageForm::new();
        assert!(form.toggle_config(&message));
        assert_eq!(form.title, "Title");
        assert_eq!(form.body, "Body");
        assert_eq!(form.primary_text, "OK");
        assert_eq!(form.secondary_text, "");
        assert!(form.dismissible);
        assert_eq!(form.type_text(), "Success");
        assert_eq!(form.hierarchy_text(), "Quiet");

        form.title = "Edited".to_string();
        assert!(!form.toggle_config(&message));
        assert_eq!(form.title, "Edited");
    }

    #[test]
    fn test_picker_rows_update_display_text() {
        let mut form = MessageForm::new();
        assert_eq!(form.select_type_row(2).unwrap(), MessageType::Error);
        assert_eq!(form.type_text(), "Error");
        assert_eq!(form.select_hierarchy_row(1).unwrap(), MessageHierarchy::Quiet);
        assert_eq!(form.hierarchy_text(), "Quiet");
        assert!(form.select_type_row(4).is_err());
        assert_eq!(form.type_text(), "Error");
    }
}
