//! Keyboard bindings for the gallery

use gpui::*;

actions!(
    andes_gallery,
    [
        ToggleConfig,
        ApplyConfig,
        ShowMessage,
        DismissMessage,
        ToggleTheme,
        Cancel,
    ]
);

/// Key context of the message screen
pub const MESSAGE_SCREEN_CONTEXT: &str = "MessageScreen";

/// Initialize keyboard bindings
pub fn init(cx: &mut App) {
    let context = Some(MESSAGE_SCREEN_CONTEXT);
    cx.bind_keys([
        // Configuration panel
        KeyBinding::new("ctrl-,", ToggleConfig, context),
        KeyBinding::new("ctrl-enter", ApplyConfig, context),
        KeyBinding::new("escape", Cancel, context),

        // Message visibility
        KeyBinding::new("ctrl-r", ShowMessage, context),
        KeyBinding::new("ctrl-w", DismissMessage, context),

        // Theme
        KeyBinding::new("ctrl-shift-t", ToggleTheme, context),
    ]);

    tracing::debug!("Keyboard bindings initialized");
}
