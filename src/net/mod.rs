// SPDX-License-Identifier: MPL-2.0
//! Remote calls: the contact POST, the geocoder and the analytics loader.
//!
//! Every call here is a single attempt with one completion message — no
//! retry, no queue, no app-level timeout beyond what the HTTP stack
//! enforces on its own.

pub mod analytics;
pub mod contact;
pub mod geocode;
