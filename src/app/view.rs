// SPDX-License-Identifier: MPL-2.0
//! View composition for the application.
//!
//! The page is one scrollable column (hero, sections, footer). Above it,
//! in stacking order: the navigation bar, the consent banner, the active
//! overlay and finally the toast layer. Everything rendered here projects
//! component state; nothing is stored in the widget tree.

use super::update::PAGE_SCROLLABLE;
use super::{App, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::sections::{self, Section};
use crate::ui::{consent, contact, hero, location, navbar, notifications, overlay, styles};
use iced::widget::{button, scrollable, stack, Column, Container, Id, Row, Text};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let mut layers: Vec<Element<'_, Message>> = vec![page(app), top_bar(app)];

    if app.consent.is_visible() {
        layers.push(consent::view(consent::ViewContext { i18n: &app.i18n }).map(Message::Consent));
    }

    if app.overlay.is_open() {
        layers.push(
            overlay::view_overlay(&app.overlay, &app.i18n, app.window_size).map(Message::Overlay),
        );
    }

    layers.push(
        notifications::view_overlay(app.notifications.current(), &app.i18n, app.now)
            .map(Message::Notification),
    );

    stack(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The scrollable page body.
fn page(app: &App) -> Element<'_, Message> {
    let scroll_ctx = sections::ViewContext {
        i18n: &app.i18n,
        scroll: &app.scroll,
    };

    let hero_view = hero::view(hero::ViewContext {
        i18n: &app.i18n,
        state: &app.hero,
        parallax_shift: app.scroll.parallax_shift(),
        now: app.now,
    })
    .map(Message::Hero);

    let contact_body: Element<'_, Message> = if app.scroll.is_revealed(Section::Contact) {
        contact::view(contact::ViewContext {
            i18n: &app.i18n,
            state: &app.contact,
        })
        .map(Message::Contact)
    } else {
        sections::hidden_placeholder()
    };

    let location_body: Element<'_, Message> = if app.scroll.is_revealed(Section::Location) {
        location::view(location::ViewContext {
            i18n: &app.i18n,
            state: &app.location,
            address: &app.config.location.address,
        })
        .map(Message::Location)
    } else {
        sections::hidden_placeholder()
    };

    let column = Column::new()
        .width(Length::Fill)
        .push(hero_view)
        .push(sections::view_features(&scroll_ctx).map(Message::Sections))
        .push(sections::view_floorplans(&scroll_ctx).map(Message::Sections))
        .push(sections::section_shell(Section::Location, location_body))
        .push(sections::section_shell(Section::Contact, contact_body))
        .push(footer(app));

    scrollable(column)
        .id(Id::new(PAGE_SCROLLABLE))
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The navigation bar pinned over the page.
fn top_bar(app: &App) -> Element<'_, Message> {
    navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        menu_open: app.menu_open,
        scrolled: app.scroll.navbar_scrolled(),
    })
    .map(Message::Navbar)
}

/// Footer with the links opening the static dialogs.
fn footer(app: &App) -> Element<'_, Message> {
    let imprint = button(Text::new(app.i18n.tr("footer-imprint")).size(typography::CAPTION))
        .on_press(Message::ModalRequested("imprint"))
        .padding(spacing::XXS)
        .style(styles::button::link);

    let privacy = button(Text::new(app.i18n.tr("footer-privacy")).size(typography::CAPTION))
        .on_press(Message::ModalRequested("privacy"))
        .padding(spacing::XXS)
        .style(styles::button::link);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(app.i18n.tr("app-title"))
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        )
        .push(Container::new(Row::new()).width(Length::Fill))
        .push(imprint)
        .push(privacy);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(|_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(palette::GRAY_900)),
            text_color: Some(palette::GRAY_100),
            ..iced::widget::container::Style::default()
        })
        .into()
}
