// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for the landing page.
//!
//! This module provides the brand label, the section links and the burger
//! menu used at narrow widths. Activating a link closes the menu and asks
//! the application to scroll to the target section. Past a scroll
//! threshold the bar switches from transparent-over-hero to solid.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::Section;
use crate::ui::{icons, styles};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Whether the page is scrolled past the hero top (solid style).
    pub scrolled: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    LinkActivated(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::LinkActivated(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    // Dropdown menu (if open)
    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// Build the top bar with brand label, inline links and the burger button.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("hero-title")).size(typography::TITLE_SM);

    let mut links = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center);
    for section in Section::ALL {
        links = links.push(nav_link(ctx.i18n, section));
    }

    let burger_button = button(icons::sized(icons::burger(), sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::dismiss);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(links)
        .push(burger_button);

    let style = if ctx.scrolled {
        styles::container::navbar_scrolled
    } else {
        styles::container::navbar_transparent
    };

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(style)
        .into()
}

/// Build the burger dropdown: the same links, stacked.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).padding(spacing::SM);
    for section in Section::ALL {
        column = column.push(nav_link(ctx.i18n, section));
    }

    Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .style(styles::container::navbar_scrolled)
        .into()
}

fn nav_link<'a>(i18n: &'a I18n, section: Section) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.nav_key())).size(typography::BODY))
        .on_press(Message::LinkActivated(section))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link)
        .into()
}
