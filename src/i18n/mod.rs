// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. The exposé ships with German (`de`, the default)
//! and English (`en`); the active language is resolved once at startup and
//! every user-facing string is selected through it.

pub mod fluent;
