//! Message type and hierarchy enums.

use serde::{Deserialize, Serialize};

/// Semantic category of a message. Drives color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Neutral,
    Success,
    Error,
    Warning,
}

impl MessageType {
    /// All types in ordinal order.
    pub const ALL: [MessageType; 4] = [
        MessageType::Neutral,
        MessageType::Success,
        MessageType::Error,
        MessageType::Warning,
    ];

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn ordinal(self) -> usize {
        match self {
            MessageType::Neutral => 0,
            MessageType::Success => 1,
            MessageType::Error => 2,
            MessageType::Warning => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MessageType::Neutral => "Neutral",
            MessageType::Success => "Success",
            MessageType::Error => "Error",
            MessageType::Warning => "Warning",
        }
    }
}

/// Visual emphasis of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageHierarchy {
    /// Filled background in the type's primary color
    #[default]
    Loud,
    /// Tinted background with a primary-colored accent
    Quiet,
}

impl MessageHierarchy {
    /// All hierarchies in ordinal order.
    pub const ALL: [MessageHierarchy; 2] = [MessageHierarchy::Loud, MessageHierarchy::Quiet];

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn ordinal(self) -> usize {
        match self {
            MessageHierarchy::Loud => 0,
            MessageHierarchy::Quiet => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MessageHierarchy::Loud => "Loud",
            MessageHierarchy::Quiet => "Quiet",
        }
    }
}
