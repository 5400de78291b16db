// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are rendered as text glyphs rather than bitmaps: the exposé ships
//! no binary assets, and the handful of symbols it needs (severity marks,
//! close crosses, the burger) are covered by widely available glyphs.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_modal`).

use crate::ui::design_tokens::sizing;
use iced::widget::{text, Text};
use iced::Color;

pub fn checkmark<'a>() -> Text<'a> {
    glyph("\u{2713}") // ✓
}

pub fn exclamation<'a>() -> Text<'a> {
    glyph("!")
}

pub fn triangle<'a>() -> Text<'a> {
    glyph("\u{26a0}") // ⚠
}

pub fn info<'a>() -> Text<'a> {
    glyph("i")
}

pub fn cross<'a>() -> Text<'a> {
    glyph("\u{2715}") // ✕
}

pub fn burger<'a>() -> Text<'a> {
    glyph("\u{2630}") // ☰
}

pub fn pin<'a>() -> Text<'a> {
    glyph("\u{2316}") // ⌖
}

pub fn document<'a>() -> Text<'a> {
    glyph("\u{1f5ce}") // 🗎
}

fn glyph<'a>(symbol: &'a str) -> Text<'a> {
    text(symbol).size(sizing::ICON_MD)
}

/// Resizes an icon glyph.
pub fn sized(icon: Text<'_>, size: f32) -> Text<'_> {
    icon.size(size)
}

/// Tints an icon glyph.
pub fn colored(icon: Text<'_>, color: Color) -> Text<'_> {
    icon.color(color)
}
