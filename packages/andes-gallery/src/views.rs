//! View modules for the gallery

pub mod message_screen;
