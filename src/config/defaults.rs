// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Default remote endpoint receiving contact form submissions.
pub const DEFAULT_CONTACT_ENDPOINT: &str =
    "https://invest-pflege.azurewebsites.net/api/contact-form-civitano";

// ==========================================================================
// Location Defaults
// ==========================================================================

/// Default free-text address handed to the geocoder.
pub const DEFAULT_ADDRESS: &str = "Hagelberger Weg, 93444 Bad Kötzting, Deutschland";

/// Default external map link used when geocoding degrades to the fallback.
pub const DEFAULT_MAP_FALLBACK_URL: &str =
    "https://www.openstreetmap.org/search?query=Hagelberger%20Weg%2C%20Bad%20K%C3%B6tzting";

/// Geocoding service queried once at startup.
pub const GEOCODE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

// ==========================================================================
// Analytics Defaults
// ==========================================================================

/// Tag-manager container loaded after explicit consent.
pub const DEFAULT_ANALYTICS_CONTAINER_ID: &str = "GTM-NFTRGWRR";

/// Tag-manager loader URL; the container id is appended as `id=`.
pub const ANALYTICS_LOADER_URL: &str = "https://www.googletagmanager.com/gtm.js";

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Seconds between hero slideshow transitions.
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u64 = 4;

/// Minimum accepted slideshow interval (in seconds).
pub const MIN_SLIDESHOW_INTERVAL_SECS: u64 = 1;

/// Maximum accepted slideshow interval (in seconds).
pub const MAX_SLIDESHOW_INTERVAL_SECS: u64 = 60;

/// Hero images shown in order when the config does not name its own list.
pub const DEFAULT_SLIDESHOW_IMAGES: &[&str] = &[
    "images/Fassadenansicht_low_res.jpg",
    "images/Hagelberger_DG_Wohnbereich_quer_low_res.jpg",
    "images/Hagelberger_EG_quer.jpg",
    "images/Dachgeschoss.jpg",
    "images/Hofseite_low_res.jpg",
];
