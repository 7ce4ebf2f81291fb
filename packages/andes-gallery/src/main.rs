//! Andes Gallery - GPUI showcase for the Andes Message component
//!
//! Opens a single screen with a live message banner and a configuration
//! panel that drives its setters.

mod components;
mod i18n;
mod keyboard;
mod theme;
mod views;

use andes_message::Settings;
use anyhow::Result;
use gpui::prelude::*;
use gpui::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use views::message_screen::MessageScreen;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Andes Gallery");

    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path).unwrap_or_else(|err| {
        tracing::warn!(
            "Ignoring settings at {}: {}",
            settings_path.display(),
            err
        );
        Settings::default()
    });

    Application::new().run(move |cx: &mut App| {
        // Initialize i18n before views
        i18n::init(cx, settings.locale.as_deref());

        // Initialize theme system
        theme::init(cx, settings);

        // Register keyboard bindings
        keyboard::init(cx);

        let opened = cx.open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Andes Gallery".into()),
                    appears_transparent: true,
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds {
                    origin: point(px(100.0), px(100.0)),
                    size: size(px(720.0), px(860.0)),
                })),
                ..Default::default()
            },
            |window, cx| {
                let screen = cx.new(|cx| MessageScreen::new(cx));
                screen.update(cx, |screen, cx| screen.focus(window, cx));
                screen
            },
        );

        match opened {
            Ok(_) => tracing::info!("Andes Gallery window opened"),
            Err(err) => {
                tracing::error!("Failed to open window: {}", err);
                cx.quit();
            }
        }
    });

    Ok(())
}
