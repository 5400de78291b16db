// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::location::Coordinates;
use crate::ui::{consent, contact, hero, location, navbar, notifications, overlay, sections};
use iced::widget::scrollable;
use iced::{keyboard, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Sections(sections::Message),
    Contact(contact::Message),
    Consent(consent::Message),
    Location(location::Message),
    Overlay(overlay::Message),
    Notification(notifications::NotificationMessage),
    /// A footer link asked for one of the static dialogs.
    ModalRequested(&'static str),
    /// The page scrollable moved.
    PageScrolled(scrollable::Viewport),
    /// A key relevant to the overlay trap was pressed.
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    /// Periodic animation/expiry tick.
    Tick(Instant),
    /// The slideshow timer fired.
    SlideshowAdvance(Instant),
    /// The window was resized.
    WindowResized(Size),
    /// A slideshow image finished decoding.
    SlideDecoded {
        path: String,
        result: Result<ImageData, Error>,
    },
    /// The lightbox image finished decoding.
    LightboxImageDecoded {
        source: String,
        result: Result<ImageData, Error>,
    },
    /// The contact POST completed.
    ContactSubmitFinished(Result<(), Error>),
    /// The startup geocoding call completed.
    GeocodeCompleted(Result<Option<Coordinates>, Error>),
    /// The consent-gated analytics load completed.
    AnalyticsActivated(Result<(), Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (`de` or `en`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `PROSPEKT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
