// SPDX-License-Identifier: MPL-2.0
//! Cross-module behavior tests: the notification and overlay contracts,
//! the language table, and the form's validation gate.

use prospekt::config::{self, Config};
use prospekt::i18n::fluent::I18n;
use prospekt::ui::contact::{self, Field};
use prospekt::ui::notifications::{
    Emitter, Notification, Severity, DISPLAY_DURATION, SLIDE_DURATION,
};
use prospekt::ui::overlay::{Manager, LIGHTBOX_ID};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn every_severity_maps_to_a_distinct_accent() {
    let severities = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];
    for severity in severities {
        let mut emitter = Emitter::new();
        emitter.emit(Notification::new(severity, "m"));

        let toast = emitter.current().expect("one toast visible");
        assert_eq!(toast.notification().severity(), severity);
        assert_eq!(toast.notification().severity().color(), severity.color());
    }
}

#[test]
fn rapid_emissions_never_accumulate() {
    let mut emitter = Emitter::new();
    for i in 0..10 {
        emitter.emit(Notification::info(format!("m-{i}")));
    }
    assert_eq!(
        emitter.current().map(|t| t.notification().message_key()),
        Some("m-9")
    );
}

#[test]
fn undismissed_toast_is_gone_within_display_plus_slide() {
    let mut emitter = Emitter::new();
    emitter.emit(Notification::info("m"));
    let start = Instant::now();

    emitter.tick(start + DISPLAY_DURATION + Duration::from_millis(1));
    assert!(emitter.has_toast(), "exit animation still running");

    emitter.tick(start + DISPLAY_DURATION + SLIDE_DURATION + Duration::from_millis(200));
    assert!(!emitter.has_toast());
}

#[test]
fn manual_dismissal_beats_the_scheduled_expiry() {
    let mut emitter = Emitter::new();
    emitter.emit(Notification::warning("m"));
    let id = emitter.current().unwrap().notification().id();

    assert!(emitter.dismiss(id));
    // The expiry that was pending for this toast must now be inert.
    emitter.tick(Instant::now() + DISPLAY_DURATION + SLIDE_DURATION);
    assert!(!emitter.has_toast());
    assert!(!emitter.dismiss(id));
}

#[test]
fn unknown_overlay_ids_are_silently_absorbed() {
    let mut manager = Manager::new();
    manager.open_by_id("missing-id");
    manager.close("missing-id");

    assert!(!manager.is_open());
    assert!(!manager.scroll_locked());
    assert_eq!(manager.focused(), None);
}

#[test]
fn tab_trap_cycles_only_inside_the_open_overlay() {
    let mut manager = Manager::new();
    manager.open_by_id("imprint");

    let first = manager.focused().expect("focus moved into the overlay");
    let mut seen = vec![first];
    for _ in 0..4 {
        seen.push(manager.handle_tab(false).unwrap());
    }
    // Forward cycling returns to the first control (wrap from last).
    assert_eq!(seen.first(), seen.last());

    // Backward from the first control wraps to the last.
    assert_eq!(manager.focused(), Some(first));
    let last = manager.handle_tab(true).unwrap();
    assert_ne!(last, first);
}

#[test]
fn lightbox_renders_documents_and_images_with_derived_captions() {
    let mut manager = Manager::new();

    manager.open_lightbox("a.pdf", "Plan");
    let slot = manager.lightbox().unwrap();
    assert!(matches!(
        slot.content(),
        Some(prospekt::ui::overlay::LightboxContent::Document { .. })
    ));
    assert_eq!(slot.caption(), "Plan");

    manager.open_lightbox("a.jpg", "");
    let slot = manager.lightbox().unwrap();
    assert!(matches!(
        slot.content(),
        Some(prospekt::ui::overlay::LightboxContent::Image { .. })
    ));
    assert_eq!(slot.caption(), "a.jpg");
}

#[test]
fn scroll_suppression_lifts_exactly_once_across_reopen_cycles() {
    let mut manager = Manager::new();

    manager.open_by_id("imprint");
    assert!(manager.scroll_locked());
    manager.open_lightbox("a.jpg", ""); // replace in place, still locked
    assert!(manager.scroll_locked());

    manager.close(LIGHTBOX_ID);
    assert!(!manager.scroll_locked());

    // Repeated closes must not re-lock or error.
    manager.close(LIGHTBOX_ID);
    manager.close("imprint");
    manager.handle_escape();
    assert!(!manager.scroll_locked());
}

#[test]
fn invalid_form_never_produces_a_submit_event() {
    let mut state = contact::State::new();
    state.update(contact::Message::FieldEdited(Field::Vorname, "Max".into()));
    // nachname, email and privacy are missing

    let event = state.update(contact::Message::SubmitPressed);
    assert!(matches!(event, contact::Event::Invalid));
    assert!(!state.is_submitting());
}

#[test]
fn valid_form_produces_exactly_one_submit_event() {
    let mut state = contact::State::new();
    state.update(contact::Message::FieldEdited(Field::Vorname, "Max".into()));
    state.update(contact::Message::FieldEdited(
        Field::Nachname,
        "Muster".into(),
    ));
    state.update(contact::Message::FieldEdited(
        Field::Email,
        "max@muster.de".into(),
    ));
    state.update(contact::Message::PrivacyToggled(true));

    assert!(matches!(
        state.update(contact::Message::SubmitPressed),
        contact::Event::Submit(_)
    ));
    // In-flight: a second press is swallowed.
    assert!(matches!(
        state.update(contact::Message::SubmitPressed),
        contact::Event::None
    ));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut german = Config::default();
    german.general.language = Some("de".to_string());
    config::save_to_path(&german, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_de = I18n::new(None, &loaded);
    assert_eq!(i18n_de.current_locale().to_string(), "de");
    assert_eq!(
        i18n_de.tr("notification-form-invalid"),
        "Bitte füllen Sie alle Pflichtfelder korrekt aus."
    );

    let mut english = Config::default();
    english.general.language = Some("en".to_string());
    config::save_to_path(&english, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en");
    assert_eq!(
        i18n_en.tr("notification-form-invalid"),
        "Please fill in all required fields correctly."
    );
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("de".to_string());

    let i18n = I18n::new(Some("en".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en");
}
