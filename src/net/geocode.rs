// SPDX-License-Identifier: MPL-2.0
//! Free-text geocoding for the location panel.
//!
//! The service answers a GET with a JSON array of candidates; only the
//! first candidate's `lat`/`lon` (numeric strings) are consumed. An empty
//! array is a legitimate "not found" and maps to `Ok(None)` — the caller
//! degrades to the fallback link either way.

use crate::config::GEOCODE_ENDPOINT;
use crate::error::{HttpError, Result};
use crate::ui::location::Coordinates;

/// Looks up the configured address, once.
pub async fn lookup(address: String) -> Result<Option<Coordinates>> {
    let response = reqwest::Client::new()
        .get(GEOCODE_ENDPOINT)
        .query(&[("format", "json"), ("limit", "1"), ("q", address.as_str())])
        .header(reqwest::header::USER_AGENT, concat!("prospekt/", env!("CARGO_PKG_VERSION")))
        .send()
        .await
        .map_err(|e| HttpError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(HttpError::Status(response.status().as_u16()).into());
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| HttpError::InvalidPayload(e.to_string()))?;

    Ok(first_candidate(&payload))
}

/// Extracts the first candidate's coordinates from the response payload.
fn first_candidate(payload: &serde_json::Value) -> Option<Coordinates> {
    let first = payload.as_array()?.first()?;
    let lat = first.get("lat")?.as_str()?.parse().ok()?;
    let lon = first.get("lon")?.as_str()?.parse().ok()?;
    Some(Coordinates { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_candidate_parses_numeric_strings() {
        let payload = json!([
            { "lat": "49.17609", "lon": "12.85822", "display_name": "Bad Kötzting" },
            { "lat": "0", "lon": "0" }
        ]);
        let coordinates = first_candidate(&payload).unwrap();
        assert!((coordinates.lat - 49.17609).abs() < 1e-9);
        assert!((coordinates.lon - 12.85822).abs() < 1e-9);
    }

    #[test]
    fn empty_array_yields_none() {
        assert!(first_candidate(&json!([])).is_none());
    }

    #[test]
    fn malformed_candidates_yield_none() {
        assert!(first_candidate(&json!([{ "lat": "not-a-number", "lon": "12.0" }])).is_none());
        assert!(first_candidate(&json!([{ "lat": 49.0, "lon": 12.0 }])).is_none());
        assert!(first_candidate(&json!({ "lat": "49.0" })).is_none());
    }
}
