// SPDX-License-Identifier: MPL-2.0
//! Consent-gated analytics activation.
//!
//! On explicit accept — and only then — the tag-manager container loader
//! is fetched once, fire-and-forget. The outcome is logged and otherwise
//! ignored: analytics never surfaces to the user and never blocks the
//! page.

use crate::config::ANALYTICS_LOADER_URL;
use crate::error::{HttpError, Result};

/// Loads the tag-manager container keyed by `container_id`.
pub async fn activate(container_id: String) -> Result<()> {
    let response = reqwest::Client::new()
        .get(ANALYTICS_LOADER_URL)
        .query(&[("id", container_id.as_str())])
        .send()
        .await
        .map_err(|e| HttpError::Transport(e.to_string()))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(HttpError::Status(response.status().as_u16()).into())
    }
}
