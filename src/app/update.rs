// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to their owners; the events they
//! answer with are translated into tasks (HTTP calls, programmatic
//! scrolling, clipboard writes) here, so no component ever reaches across
//! to another.

use super::{App, Message};
use crate::error::{Error, HttpError};
use crate::ui::notifications::Notification;
use crate::ui::overlay::{Active, LightboxContent};
use crate::ui::sections::{ScrollState, Section};
use crate::ui::{consent, contact, location, navbar, overlay};
use crate::{media, net};
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Id of the page scrollable, shared with the view.
pub const PAGE_SCROLLABLE: &str = "page";

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    app.now = Instant::now();

    match message {
        Message::Navbar(message) => match navbar::update(message, &mut app.menu_open) {
            navbar::Event::None => Task::none(),
            navbar::Event::ScrollTo(section) => scroll_to_section(section),
        },

        Message::Hero(crate::ui::hero::Message::CtaPressed) => {
            scroll_to_section(Section::Contact)
        }

        Message::Sections(crate::ui::sections::Message::OpenFloorplan { resource, caption }) => {
            app.overlay.open_lightbox(resource, caption);
            lightbox_decode_task(&app.overlay)
        }

        Message::ModalRequested(id) => {
            app.overlay.open_by_id(id);
            Task::none()
        }

        Message::Overlay(message) => {
            app.overlay.update(message);
            Task::none()
        }

        Message::Contact(message) => match app.contact.update(message) {
            contact::Event::None => Task::none(),
            contact::Event::Invalid => {
                app.notifications
                    .emit(Notification::error("notification-form-invalid"));
                Task::none()
            }
            contact::Event::Submit(fields) => Task::perform(
                net::contact::submit(app.config.contact.endpoint.clone(), fields),
                Message::ContactSubmitFinished,
            ),
        },

        Message::ContactSubmitFinished(result) => {
            match result {
                Ok(()) => {
                    app.contact.finish_submission(true);
                    app.notifications
                        .emit(Notification::success("notification-form-success"));
                }
                Err(error) => {
                    app.contact.finish_submission(false);
                    let key = match &error {
                        Error::Http(HttpError::Transport(_)) => "notification-form-network",
                        _ => "notification-form-error",
                    };
                    app.notifications.emit(Notification::error(key));
                }
            }
            Task::none()
        }

        Message::Consent(message) => match app.consent.update(message) {
            consent::Event::None => Task::none(),
            consent::Event::ActivateAnalytics => Task::perform(
                net::analytics::activate(app.config.analytics.container_id.clone()),
                Message::AnalyticsActivated,
            ),
        },

        Message::AnalyticsActivated(result) => {
            // Analytics never surfaces to the user; failures are only logged.
            if let Err(error) = result {
                eprintln!("Analytics activation failed: {}", error);
                app.diagnostics.log_warning("analytics-activation-failed");
            }
            Task::none()
        }

        Message::Location(message) => match app.location.update(message) {
            location::Event::CopyLink => {
                app.notifications
                    .emit(Notification::success("notification-link-copied"));
                iced::clipboard::write(app.config.location.map_fallback_url.clone())
            }
        },

        Message::GeocodeCompleted(result) => {
            match result {
                Ok(Some(coordinates)) => app.location.set_located(coordinates),
                Ok(None) => app.location.set_fallback(),
                Err(error) => {
                    // Transport and payload problems both degrade to the
                    // static link; the user never sees a geocoder error.
                    eprintln!("Geocoding failed: {}", error);
                    app.diagnostics.log_warning("geocode-failed");
                    app.location.set_fallback();
                }
            }
            Task::none()
        }

        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }

        Message::PageScrolled(viewport) => {
            if app.overlay.scroll_locked() {
                // The overlay suppresses page scrolling: snap back to the
                // offset recorded before the overlay opened.
                operation::scroll_to(
                    Id::new(PAGE_SCROLLABLE),
                    AbsoluteOffset {
                        x: 0.0,
                        y: app.scroll.offset(),
                    },
                )
            } else {
                app.scroll.handle_scroll(viewport);
                Task::none()
            }
        }

        Message::KeyPressed(key, modifiers) => {
            if app.overlay.is_open() {
                match key {
                    Key::Named(Named::Escape) => app.overlay.handle_escape(),
                    Key::Named(Named::Tab) => {
                        app.overlay.handle_tab(modifiers.shift());
                    }
                    Key::Named(Named::Enter) => app.overlay.handle_enter(),
                    _ => {}
                }
            }
            Task::none()
        }

        Message::Tick(now) => {
            app.now = now;
            app.notifications.tick(now);
            app.contact.tick(now);
            app.hero.tick(now);
            Task::none()
        }

        Message::SlideshowAdvance(now) => {
            app.hero.advance(now);
            Task::none()
        }

        Message::WindowResized(size) => {
            app.window_size = size;
            app.scroll.set_viewport_height(size.height);
            Task::none()
        }

        Message::SlideDecoded { path, result } => {
            match result {
                Ok(data) => app.hero.attach_image(&path, data),
                // A missing asset only costs the slideshow one frame.
                Err(error) => eprintln!("Slideshow image {} failed to load: {}", path, error),
            }
            Task::none()
        }

        Message::LightboxImageDecoded { source, result } => {
            match result {
                Ok(data) => app.overlay.attach_lightbox_image(&source, data.handle),
                Err(error) => eprintln!("Lightbox image {} failed to load: {}", source, error),
            }
            Task::none()
        }
    }
}

/// Programmatic scroll to a section's target offset.
fn scroll_to_section(section: Section) -> Task<Message> {
    operation::scroll_to(
        Id::new(PAGE_SCROLLABLE),
        AbsoluteOffset {
            x: 0.0,
            y: ScrollState::scroll_target(section),
        },
    )
}

/// Kicks off the image decode when the lightbox shows image content.
fn lightbox_decode_task(manager: &overlay::Manager) -> Task<Message> {
    let Some(Active::Lightbox) = manager.active() else {
        return Task::none();
    };
    let Some(LightboxContent::Image { source }) =
        manager.lightbox().and_then(|slot| slot.content())
    else {
        return Task::none();
    };

    let source = source.clone();
    let path = PathBuf::from(source.clone());
    Task::perform(
        async move { (source, media::load(path).await) },
        |(source, result)| Message::LightboxImageDecoded { source, result },
    )
}
