// SPDX-License-Identifier: MPL-2.0
//! Location panel with the geocoded site position.
//!
//! A single geocoding request runs at startup. Its outcome settles this
//! panel permanently: either the site coordinates, or a static fallback
//! link to the external map site — an empty result and a transport
//! failure degrade the same way. The copy action puts the external map
//! URL on the clipboard and reports through the notification emitter.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element};

/// Geocoded site coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Outcome of the startup geocoding call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Loading,
    Located(Coordinates),
    Fallback,
}

/// Messages emitted by the panel.
#[derive(Debug, Clone)]
pub enum Message {
    CopyLink,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Put the external map URL on the clipboard.
    CopyLink,
}

/// Panel state.
#[derive(Debug, Default)]
pub struct State {
    outcome: Outcome,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settles the panel with the geocoder's answer.
    pub fn set_located(&mut self, coordinates: Coordinates) {
        self.outcome = Outcome::Located(coordinates);
    }

    /// Settles the panel on the fallback link.
    pub fn set_fallback(&mut self) {
        self.outcome = Outcome::Fallback;
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Process a panel message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CopyLink => Event::CopyLink,
        }
    }
}

/// Context required to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// The configured address line, shown verbatim.
    pub address: &'a str,
}

/// Render the location panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let status: Element<'a, Message> = match ctx.state.outcome() {
        Outcome::Loading => Text::new(i18n.tr("location-loading"))
            .size(typography::BODY)
            .into(),
        Outcome::Located(coordinates) => {
            let lat = format!("{:.5}", coordinates.lat);
            let lon = format!("{:.5}", coordinates.lon);
            Text::new(i18n.tr_with_args(
                "location-coordinates",
                &[("lat", lat.as_str()), ("lon", lon.as_str())],
            ))
            .size(typography::BODY)
            .into()
        }
        Outcome::Fallback => Text::new(i18n.tr("location-fallback-link"))
            .size(typography::BODY)
            .into(),
    };

    let copy_link = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::pin(), sizing::ICON_SM))
            .push(Text::new(i18n.tr("location-copy-link")).size(typography::BODY)),
    )
    .on_press(Message::CopyLink)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::link);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("location-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("location-subtitle")).size(typography::BODY_LG))
        .push(Text::new(ctx.address.to_string()).size(typography::BODY))
        .push(status)
        .push(copy_link)
        .into()
}
