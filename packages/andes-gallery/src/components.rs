//! Reusable UI components for the gallery

pub mod button;
pub mod input;
pub mod message;
pub mod picker;
pub mod switch;
