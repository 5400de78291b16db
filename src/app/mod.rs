// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the page (navbar, hero, sections,
//! contact form, consent banner, location panel) and the surfaces above
//! it (overlay, toasts), and translates component events into side
//! effects like HTTP tasks or programmatic scrolling. Every component is
//! wired once at startup and reacts independently afterwards; a component
//! whose startup work fails (a missing slideshow asset, a dead geocoder)
//! degrades on its own without taking the others down.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::fluent::I18n;
use crate::ui::{consent, contact, hero, location, notifications, overlay, sections};
use crate::{media, net};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

/// Default window dimensions.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
const MIN_WINDOW_WIDTH: f32 = 760.0;
const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state bridging the page components, localization
/// and configuration.
pub struct App {
    pub i18n: I18n,
    config: Config,
    scroll: sections::ScrollState,
    menu_open: bool,
    hero: hero::State,
    contact: contact::State,
    consent: consent::State,
    location: location::State,
    overlay: overlay::Manager,
    notifications: notifications::Emitter,
    diagnostics: DiagnosticsHandle,
    window_size: Size,
    /// Timestamp of the latest update, driving animation projections.
    now: Instant,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let hero = hero::State::new(
            &config.slideshow.images,
            config.slideshow.clamped_interval_secs(),
        );
        Self {
            i18n: I18n::default(),
            config,
            scroll: sections::ScrollState::new(),
            menu_open: false,
            hero,
            contact: contact::State::new(),
            consent: consent::State::new(),
            location: location::State::new(),
            overlay: overlay::Manager::new(),
            notifications: notifications::Emitter::new(),
            diagnostics: DiagnosticsHandle::default(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            now: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the startup tasks:
    /// slideshow decodes and the one-shot geocoding call.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            hero: hero::State::new(
                &config.slideshow.images,
                config.slideshow.clamped_interval_secs(),
            ),
            config,
            ..Self::default()
        };
        app.notifications.set_diagnostics(app.diagnostics.clone());
        app.scroll.set_viewport_height(WINDOW_DEFAULT_HEIGHT);

        if let Some(key) = config_warning {
            app.notifications
                .emit(notifications::Notification::warning(key));
        }

        // Each startup job is independent: one failing decode or a dead
        // geocoder must not keep the rest of the page from wiring up.
        let mut tasks: Vec<Task<Message>> = app
            .hero
            .pending_paths()
            .into_iter()
            .map(|path| {
                let load_path = PathBuf::from(path.clone());
                Task::perform(
                    async move { (path, media::load(load_path).await) },
                    |(path, result)| Message::SlideDecoded { path, result },
                )
            })
            .collect();

        tasks.push(Task::perform(
            net::geocode::lookup(app.config.location.address.clone()),
            Message::GeocodeCompleted,
        ));

        (app, Task::batch(tasks))
    }

    /// Window title, localized.
    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::contact::{ContactFields, Field};
    use crate::ui::notifications::Severity;
    use crate::ui::overlay::Active;
    use crate::ui::sections::Section;

    fn app() -> App {
        App::default()
    }

    fn send(app: &mut App, message: Message) {
        let _task = update::update(app, message);
    }

    #[test]
    fn default_app_has_no_open_surfaces() {
        let app = app();
        assert!(!app.overlay.is_open());
        assert!(!app.notifications.has_toast());
        assert!(app.consent.is_visible());
        assert!(!app.menu_open);
    }

    #[test]
    fn invalid_form_submission_notifies_without_network() {
        let mut app = app();
        send(
            &mut app,
            Message::Contact(crate::ui::contact::Message::SubmitPressed),
        );

        let toast = app.notifications.current().expect("toast expected");
        assert_eq!(toast.notification().severity(), Severity::Error);
        assert_eq!(toast.notification().message_key(), "notification-form-invalid");
        assert!(!app.contact.is_submitting());
    }

    #[test]
    fn successful_submission_reports_and_clears() {
        let mut app = app();
        for (field, value) in [
            (Field::Vorname, "Erika"),
            (Field::Nachname, "Mustermann"),
            (Field::Email, "erika@example.de"),
        ] {
            send(
                &mut app,
                Message::Contact(crate::ui::contact::Message::FieldEdited(
                    field,
                    value.to_string(),
                )),
            );
        }
        send(
            &mut app,
            Message::Contact(crate::ui::contact::Message::PrivacyToggled(true)),
        );
        send(
            &mut app,
            Message::Contact(crate::ui::contact::Message::SubmitPressed),
        );
        assert!(app.contact.is_submitting());

        send(&mut app, Message::ContactSubmitFinished(Ok(())));
        assert!(!app.contact.is_submitting());
        assert_eq!(app.contact.fields().vorname, "");
        assert_eq!(
            app.notifications
                .current()
                .unwrap()
                .notification()
                .message_key(),
            "notification-form-success"
        );
    }

    #[test]
    fn failed_submission_keeps_the_form_populated() {
        let mut app = app();
        for (field, value) in [
            (Field::Vorname, "Erika"),
            (Field::Nachname, "Mustermann"),
            (Field::Email, "erika@example.de"),
        ] {
            send(
                &mut app,
                Message::Contact(crate::ui::contact::Message::FieldEdited(
                    field,
                    value.to_string(),
                )),
            );
        }
        send(
            &mut app,
            Message::Contact(crate::ui::contact::Message::PrivacyToggled(true)),
        );
        send(
            &mut app,
            Message::Contact(crate::ui::contact::Message::SubmitPressed),
        );

        send(
            &mut app,
            Message::ContactSubmitFinished(Err(crate::error::Error::Http(
                crate::error::HttpError::Transport("refused".into()),
            ))),
        );
        assert_eq!(app.contact.fields(), ContactFields {
            vorname: "Erika".into(),
            nachname: "Mustermann".into(),
            email: "erika@example.de".into(),
            telefon: String::new(),
            nachricht: String::new(),
            privacy: true,
        });
        assert_eq!(
            app.notifications
                .current()
                .unwrap()
                .notification()
                .message_key(),
            "notification-form-network"
        );
    }

    #[test]
    fn floorplan_activation_opens_the_lightbox() {
        let mut app = app();
        send(
            &mut app,
            Message::Sections(crate::ui::sections::Message::OpenFloorplan {
                resource: "plans/Erdgeschoss.pdf",
                caption: "Erdgeschoss",
            }),
        );
        assert_eq!(app.overlay.active(), Some(Active::Lightbox));
        assert!(app.overlay.scroll_locked());
    }

    #[test]
    fn footer_link_opens_modal_and_escape_closes_it() {
        let mut app = app();
        send(&mut app, Message::ModalRequested("imprint"));
        assert!(app.overlay.is_open());

        send(
            &mut app,
            Message::KeyPressed(
                iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
                iced::keyboard::Modifiers::default(),
            ),
        );
        assert!(!app.overlay.is_open());
        assert!(!app.overlay.scroll_locked());
    }

    #[test]
    fn geocode_outcomes_settle_the_location_panel() {
        {
            let mut app = app();
            send(&mut app, Message::GeocodeCompleted(Ok(None)));
            assert!(matches!(
                app.location.outcome(),
                crate::ui::location::Outcome::Fallback
            ));
        }

        let mut app = app();
        send(
            &mut app,
            Message::GeocodeCompleted(Ok(Some(crate::ui::location::Coordinates {
                lat: 49.0,
                lon: 12.8,
            }))),
        );
        assert!(matches!(
            app.location.outcome(),
            crate::ui::location::Outcome::Located(_)
        ));
    }

    #[test]
    fn nav_link_closes_menu_and_keeps_overlay_state_untouched() {
        let mut app = app();
        app.menu_open = true;
        send(
            &mut app,
            Message::Navbar(crate::ui::navbar::Message::LinkActivated(Section::Contact)),
        );
        assert!(!app.menu_open);
        assert!(!app.overlay.is_open());
    }

    #[test]
    fn consent_reject_only_dismisses() {
        let mut app = app();
        send(&mut app, Message::Consent(crate::ui::consent::Message::Reject));
        assert!(!app.consent.is_visible());
        // No analytics toast, no overlay, nothing else moved.
        assert!(!app.notifications.has_toast());
    }
}
