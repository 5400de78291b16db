// SPDX-License-Identifier: MPL-2.0
//! `prospekt` is a desktop exposé for a care-property investment offering,
//! built with the Iced GUI framework.
//!
//! It renders the offering as a scrollable landing page (hero slideshow,
//! reveal-on-scroll sections, floor-plan lightbox, contact form, consent
//! banner, geocoded location panel) and demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod media;
pub mod net;
pub mod ui;
