// SPDX-License-Identifier: MPL-2.0
//! Container style functions.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Elevated card used for feature tiles, modal bodies and the consent banner.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}

/// Dimmed full-window backdrop behind the active overlay.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// The navigation bar once the page has been scrolled past the hero top.
pub fn navbar_scrolled(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        })),
        text_color: Some(palette::GRAY_900),
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// The navigation bar while the hero is still at the top: transparent.
pub fn navbar_transparent(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TRANSPARENT,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}
