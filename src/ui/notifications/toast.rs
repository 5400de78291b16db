// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the active notification.
//!
//! The toast is a pure projection of the emitter's state: the slide offset
//! computed from the toast's timestamps positions the card, and nothing is
//! read back from the widget tree.

use super::emitter::{ActiveToast, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, container, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Renders the toast layer: the active toast in the top-right corner, or an
/// empty element when the slot is free.
pub fn view_overlay<'a>(
    toast: Option<&'a ActiveToast>,
    i18n: &'a I18n,
    now: Instant,
) -> Element<'a, Message> {
    let Some(toast) = toast else {
        return Container::new(Row::new())
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let card = card(toast, i18n);

    // Slide projection: the card is shifted right inside a clipped slot, so
    // an offset of 1.0 puts it entirely off-screen.
    let offset = toast.slide_offset(now);
    let slot = Container::new(
        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(Padding {
                left: offset * sizing::TOAST_WIDTH,
                ..Padding::default()
            }),
    )
    .width(Length::Fixed(sizing::TOAST_WIDTH))
    .clip(true);

    Container::new(slot)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}

fn card<'a>(toast: &'a ActiveToast, i18n: &'a I18n) -> Element<'a, Message> {
    let notification = toast.notification();
    let severity = notification.severity();
    let accent_color = severity.color();

    let message_text = if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    };

    let icon_widget = icons::colored(severity.icon(), palette::WHITE);

    let message_widget = Text::new(message_text)
        .size(typography::BODY)
        .color(palette::WHITE);

    let dismiss_button = button(icons::sized(
        icons::colored(icons::cross(), palette::WHITE),
        sizing::ICON_SM,
    ))
    .on_press(Message::Dismiss(notification.id()))
    .padding(spacing::XXS)
    .style(styles::button::dismiss);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon_widget).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::MD)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Style function for the toast container: severity color as background,
/// as on the original page.
fn toast_container_style(_theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}
