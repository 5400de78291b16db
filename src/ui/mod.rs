// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`navbar`] - Navigation bar with burger menu and section links
//! - [`hero`] - Hero section with the background slideshow
//! - [`sections`] - Static sections, reveal-on-scroll and parallax
//! - [`contact`] - Contact form with validation and submission gate
//! - [`consent`] - Cookie consent banner
//! - [`location`] - Geocoded location panel
//!
//! # Surfaces above the page
//!
//! - [`overlay`] - Modal dialogs and the media lightbox (single surface)
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Glyph icons (visual primitives)

pub mod consent;
pub mod contact;
pub mod design_tokens;
pub mod hero;
pub mod icons;
pub mod location;
pub mod navbar;
pub mod notifications;
pub mod overlay;
pub mod sections;
pub mod styles;
