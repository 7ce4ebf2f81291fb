//! Andes Message - banner component model for the Andes design system.
//!
//! This crate holds everything about the Message component that does not
//! need a window to exist:
//!
//! - **Types**: `MessageType` (neutral, success, error, warning) and
//!   `MessageHierarchy` (loud, quiet)
//! - **Themes**: `StyleSheet` palettes and the built-in `ThemeRegistry`
//! - **Styles**: resolving a type to its colors and icon
//! - **Component**: `Message`, its fluent setters and its `MessageAppearance`
//! - **Gallery form**: pickers and validation used by the example screen
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use andes_message::{Message, MessageHierarchy, MessageType, ThemeRegistry};
//!
//! let theme = Rc::new(ThemeRegistry::new().get("andes-light").unwrap_or_default());
//! let mut message = Message::new(theme);
//! message
//!     .set_title("Saved")
//!     .set_body("Your changes are live.")
//!     .set_type(MessageType::Success)
//!     .set_hierarchy(MessageHierarchy::Quiet);
//!
//! assert_eq!(message.appearance().title, "Saved");
//! ```

pub mod appearance;
pub mod color;
pub mod form;
pub mod message;
pub mod picker;
pub mod settings;
pub mod style;
pub mod theme;
pub mod types;

pub use appearance::{ActionAppearance, ButtonHierarchy, MessageAppearance};
pub use color::Color;
pub use form::{validate, MessageForm, ValidationError};
pub use message::{ActionHandler, ActionSlot, Message, MessageAction, MessageConfig};
pub use picker::{Picker, PickerOption};
pub use settings::Settings;
pub use style::{Icon, StyleDescriptor, StyleResolver};
pub use theme::{StyleSheet, ThemeInfo, ThemeRegistry, TypePalette};
pub use types::{MessageHierarchy, MessageType};

/// Error types for andes-message operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Row {row} is out of range for the {picker} picker ({rows} rows)")]
    RowOutOfRange {
        picker: &'static str,
        row: usize,
        rows: usize,
    },
}

/// Result type alias for andes-message operations.
pub type Result<T> = std::result::Result<T, Error>;
