// SPDX-License-Identifier: MPL-2.0
//! Contact form: field state, validation and the submission gate.
//!
//! The form validates before anything touches the network: required fields
//! plus an email-shape check. A failed validation highlights the offending
//! fields and emits exactly one aggregate error notification; a passing
//! one hands the field set to the application, which performs a single
//! POST and reports the outcome. Success clears the form, failure leaves
//! it populated. There is no retry.
//!
//! Field highlights decay on their own (errors after 3 s, the green
//! confirmation after 2 s) and clear immediately when the user edits the
//! field again.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long an error highlight stays on a field.
pub const ERROR_HIGHLIGHT_DURATION: Duration = Duration::from_secs(3);

/// How long the green confirmation highlight stays on a field.
pub const SUCCESS_HIGHLIGHT_DURATION: Duration = Duration::from_secs(2);

/// The form's fields. `Telefon` and `Nachricht` are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Vorname,
    Nachname,
    Email,
    Telefon,
    Nachricht,
    Privacy,
}

impl Field {
    /// Fields that must be filled (or checked) before submission.
    pub const REQUIRED: [Field; 4] = [
        Field::Vorname,
        Field::Nachname,
        Field::Email,
        Field::Privacy,
    ];

    /// The wire name of the field in the multipart POST.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Vorname => "vorname",
            Field::Nachname => "nachname",
            Field::Email => "email",
            Field::Telefon => "telefon",
            Field::Nachricht => "nachricht",
            Field::Privacy => "privacy",
        }
    }

    fn label_key(&self) -> &'static str {
        match self {
            Field::Vorname => "contact-vorname",
            Field::Nachname => "contact-nachname",
            Field::Email => "contact-email",
            Field::Telefon => "contact-telefon",
            Field::Nachricht => "contact-nachricht",
            Field::Privacy => "contact-privacy",
        }
    }
}

/// The validated field set handed to the network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub vorname: String,
    pub nachname: String,
    pub email: String,
    pub telefon: String,
    pub nachricht: String,
    pub privacy: bool,
}

/// Visual validation state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Error,
    Success,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    FieldEdited(Field, String),
    PrivacyToggled(bool),
    /// Enter inside a text field: validate just that field.
    FieldConfirmed(Field),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Validation failed; the parent emits the aggregate error toast.
    Invalid,
    /// Validation passed; the parent performs the POST.
    Submit(ContactFields),
}

/// Form state.
#[derive(Debug, Default)]
pub struct State {
    vorname: String,
    nachname: String,
    email: String,
    telefon: String,
    nachricht: String,
    privacy: bool,
    submitting: bool,
    highlights: HashMap<Field, (Highlight, Instant)>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a form message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldEdited(field, value) => {
                // Editing clears whatever highlight the field carried.
                self.highlights.remove(&field);
                match field {
                    Field::Vorname => self.vorname = value,
                    Field::Nachname => self.nachname = value,
                    Field::Email => self.email = value,
                    Field::Telefon => self.telefon = value,
                    Field::Nachricht => self.nachricht = value,
                    Field::Privacy => {}
                }
                Event::None
            }
            Message::PrivacyToggled(checked) => {
                self.highlights.remove(&Field::Privacy);
                self.privacy = checked;
                Event::None
            }
            Message::FieldConfirmed(field) => {
                let valid = self.field_is_valid(field);
                let kind = if valid {
                    Highlight::Success
                } else {
                    Highlight::Error
                };
                self.highlights.insert(field, (kind, Instant::now()));
                Event::None
            }
            Message::SubmitPressed => self.submit(),
        }
    }

    fn submit(&mut self) -> Event {
        if self.submitting {
            return Event::None;
        }

        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            let now = Instant::now();
            for field in invalid {
                self.highlights.insert(field, (Highlight::Error, now));
            }
            return Event::Invalid;
        }

        self.submitting = true;
        Event::Submit(self.fields())
    }

    /// Re-enables the form after the POST completed; success clears it.
    pub fn finish_submission(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.reset();
        }
    }

    /// Clears every field and highlight.
    pub fn reset(&mut self) {
        *self = Self {
            submitting: self.submitting,
            ..Self::default()
        };
    }

    /// Drops highlights that have outlived their duration.
    pub fn tick(&mut self, now: Instant) {
        self.highlights.retain(|_, (kind, since)| {
            let duration = match kind {
                Highlight::Error => ERROR_HIGHLIGHT_DURATION,
                Highlight::Success => SUCCESS_HIGHLIGHT_DURATION,
            };
            now.saturating_duration_since(*since) < duration
        });
    }

    /// Whether any highlight is active (the animation tick gate).
    #[must_use]
    pub fn has_highlights(&self) -> bool {
        !self.highlights.is_empty()
    }

    #[must_use]
    pub fn highlight(&self, field: Field) -> Option<Highlight> {
        self.highlights.get(&field).map(|(kind, _)| *kind)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The current field values, trimmed where the wire format expects it.
    #[must_use]
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            vorname: self.vorname.trim().to_string(),
            nachname: self.nachname.trim().to_string(),
            email: self.email.trim().to_string(),
            telefon: self.telefon.trim().to_string(),
            nachricht: self.nachricht.clone(),
            privacy: self.privacy,
        }
    }

    fn value_of(&self, field: Field) -> &str {
        match field {
            Field::Vorname => &self.vorname,
            Field::Nachname => &self.nachname,
            Field::Email => &self.email,
            Field::Telefon => &self.telefon,
            Field::Nachricht => &self.nachricht,
            Field::Privacy => "",
        }
    }

    fn field_is_valid(&self, field: Field) -> bool {
        let value = self.value_of(field).trim();
        match field {
            Field::Privacy => self.privacy,
            Field::Email => !value.is_empty() && is_valid_email(value),
            Field::Telefon => value.is_empty() || is_valid_phone(value),
            Field::Vorname | Field::Nachname => !value.is_empty(),
            Field::Nachricht => true,
        }
    }

    fn invalid_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| !self.field_is_valid(*field))
            .collect()
    }
}

/// Email shape check: local-part@domain with at least one dot in the
/// domain, no whitespace or second `@` anywhere.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace) && !s.contains('@');
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    clean(local) && clean(host) && clean(tld)
}

/// Phone shape check: digits, whitespace, `-`, `+`, parentheses.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "-+()".contains(c))
}

// =============================================================================
// View
// =============================================================================

/// Context required to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the contact form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let name_row = Row::new()
        .spacing(spacing::MD)
        .push(input(ctx.i18n, state, Field::Vorname, &state.vorname))
        .push(input(ctx.i18n, state, Field::Nachname, &state.nachname));

    let privacy = checkbox(state.privacy)
        .label(ctx.i18n.tr(Field::Privacy.label_key()))
        .on_toggle(Message::PrivacyToggled)
        .size(typography::BODY_LG)
        .text_size(typography::BODY);

    let submit_label = if state.is_submitting() {
        ctx.i18n.tr("contact-sending")
    } else {
        ctx.i18n.tr("contact-submit")
    };
    let mut submit = button(Text::new(submit_label).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);
    if !state.is_submitting() {
        submit = submit.on_press(Message::SubmitPressed);
    }

    let form = Column::new()
        .spacing(spacing::MD)
        .max_width(640.0)
        .push(name_row)
        .push(input(ctx.i18n, state, Field::Email, &state.email))
        .push(input(ctx.i18n, state, Field::Telefon, &state.telefon))
        .push(input(ctx.i18n, state, Field::Nachricht, &state.nachricht))
        .push(privacy)
        .push(
            Container::new(submit)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("contact-subtitle")).size(typography::BODY_LG))
        .push(form)
        .into()
}

fn input<'a>(
    i18n: &'a I18n,
    state: &'a State,
    field: Field,
    value: &'a str,
) -> Element<'a, Message> {
    let highlight = state.highlight(field);
    text_input(&i18n.tr(field.label_key()), value)
        .on_input(move |v| Message::FieldEdited(field, v))
        .on_submit(Message::FieldConfirmed(field))
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(move |theme: &Theme, status| input_style(theme, status, highlight))
        .into()
}

/// Base input style with the validation highlight painted over the border.
fn input_style(
    theme: &Theme,
    status: text_input::Status,
    highlight: Option<Highlight>,
) -> text_input::Style {
    let mut style = text_input::default(theme, status);
    style.border = iced::Border {
        radius: radius::MD.into(),
        ..style.border
    };
    match highlight {
        Some(Highlight::Error) => {
            style.border.color = palette::ERROR_500;
            style.border.width = border::WIDTH_MD;
        }
        Some(Highlight::Success) => {
            style.border.color = palette::SUCCESS_500;
            style.border.width = border::WIDTH_MD;
        }
        None => {}
    }
    style
}
