// SPDX-License-Identifier: MPL-2.0
//! Rendering of the active overlay.
//!
//! The backdrop swallows presses (dismissal), the inner card absorbs them,
//! and the focus highlight mirrors the manager's focus ring. Everything
//! here is a projection; no state lives in the widget tree.

use super::content::{LightboxContent, DOCUMENT_VIEWPORT_FRACTION};
use super::{Active, Manager, Message, CONTROL_CLOSE, CONTROL_OK};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, image, mouse_area, stack, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Size, Theme};

/// Renders the overlay surface. Returns an empty element while closed.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n, viewport: Size) -> Element<'a, Message> {
    let Some(active) = manager.active() else {
        return Container::new(Row::new()).into();
    };

    let card: Element<'a, Message> = match active {
        Active::Modal(modal) => modal_card(manager, i18n, modal),
        Active::Lightbox => lightbox_card(manager, i18n, viewport),
    };

    let backdrop = mouse_area(
        Container::new(Row::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let centered = Container::new(mouse_area(card).on_press(Message::ContentPressed))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    stack([backdrop.into(), centered.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn modal_card<'a>(
    manager: &'a Manager,
    i18n: &'a I18n,
    modal: super::ModalId,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr(modal.title_key())).size(typography::TITLE_SM);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(close_control(manager));

    let body = Text::new(i18n.tr(modal.body_key())).size(typography::BODY);

    let ok_style = focusable_style(manager, CONTROL_OK, styles::button::primary);
    let ok_button = button(Text::new(i18n.tr("overlay-close")).size(typography::BODY))
        .on_press(Message::CloseActivated)
        .padding([spacing::XS, spacing::LG])
        .style(ok_style);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(body)
        .push(
            Container::new(ok_button)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn lightbox_card<'a>(
    manager: &'a Manager,
    i18n: &'a I18n,
    viewport: Size,
) -> Element<'a, Message> {
    let slot = manager.lightbox();

    let media: Element<'a, Message> = match slot.and_then(|s| s.content()) {
        Some(LightboxContent::Document { source }) => document_frame(i18n, source, viewport),
        Some(LightboxContent::Image { source }) => image_frame(slot.and_then(|s| s.image()), source),
        None => Container::new(Row::new()).into(),
    };

    let caption = slot.map(super::LightboxSlot::caption).unwrap_or_default();
    let caption_slot = Text::new(caption)
        .size(typography::BODY)
        .color(palette::WHITE);

    let header = Row::new()
        .push(Container::new(Row::new()).width(Length::Fill))
        .push(close_control(manager));

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(header)
        .push(media)
        .push(caption_slot)
        .width(Length::Shrink)
        .into()
}

/// The embedded document frame, sized to a fixed fraction of the viewport.
fn document_frame<'a>(i18n: &'a I18n, source: &str, viewport: Size) -> Element<'a, Message> {
    let name = source.rsplit(['/', '\\']).next().unwrap_or(source);
    let hint = i18n.tr_with_args("lightbox-document-hint", &[("name", name)]);

    let placeholder = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::document(), sizing::ICON_MD * 2.0))
        .push(Text::new(hint).size(typography::BODY));

    Container::new(placeholder)
        .width(Length::Fixed(viewport.width * DOCUMENT_VIEWPORT_FRACTION))
        .height(Length::Fixed(viewport.height * DOCUMENT_VIEWPORT_FRACTION))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::card)
        .into()
}

/// The bounded, aspect-preserving image frame.
fn image_frame<'a>(
    handle: Option<&image::Handle>,
    source: &str,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match handle {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Decode still in flight; hold the slot open with the source name.
        None => Text::new(source.to_string())
            .size(typography::CAPTION)
            .color(palette::GRAY_200)
            .into(),
    };

    Container::new(content)
        .width(Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH))
        .height(Length::Fixed(sizing::LIGHTBOX_MAX_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn close_control(manager: &Manager) -> Element<'_, Message> {
    let style = focusable_style(manager, CONTROL_CLOSE, styles::button::dismiss);
    button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::CloseActivated)
        .padding(spacing::XXS)
        .style(style)
        .into()
}

/// Wraps a base button style so the control carrying the focus ring gets a
/// visible outline.
fn focusable_style(
    manager: &Manager,
    control: &'static str,
    base: fn(&Theme, button::Status) -> button::Style,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let focused = manager.focused() == Some(control);
    move |theme, status| {
        let style = base(theme, status);
        if focused {
            styles::button::focus_ring(style)
        } else {
            style
        }
    }
}
