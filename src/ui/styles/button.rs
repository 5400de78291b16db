// SPDX-License-Identifier: MPL-2.0
//! Button style functions.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled call-to-action button in the offering's primary blue.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_700,
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Accent button in the offering's green, used for the consent accept action.
pub fn accent(theme: &Theme, status: button::Status) -> button::Style {
    let base = primary(theme, status);
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..palette::ACCENT_500
        },
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::ACCENT_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        ..base
    }
}

/// Borderless button rendered like a hyperlink.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::PRIMARY_700,
        button::Status::Disabled => theme.extended_palette().background.weak.text,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bare glyph button used for dismiss controls.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: 0.2,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined variant marking the control that currently holds the focus ring.
pub fn focus_ring(style: button::Style) -> button::Style {
    button::Style {
        border: Border {
            color: palette::PRIMARY_100,
            width: 2.0,
            radius: style.border.radius,
        },
        ..style
    }
}
