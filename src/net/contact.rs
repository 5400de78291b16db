// SPDX-License-Identifier: MPL-2.0
//! Contact form submission.

use crate::error::{HttpError, Result};
use crate::ui::contact::ContactFields;

/// Posts the validated field set to the configured endpoint as a
/// multipart form body with the fixed wire field names.
///
/// Success is any HTTP success status; nothing is read from the response
/// body. A non-success status and a transport error both come back as
/// [`HttpError`] so the caller can show the matching localized message.
pub async fn submit(endpoint: String, fields: ContactFields) -> Result<()> {
    let form = multipart_form(&fields);

    let response = reqwest::Client::new()
        .post(&endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| HttpError::Transport(e.to_string()))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(HttpError::Status(response.status().as_u16()).into())
    }
}

fn multipart_form(fields: &ContactFields) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new()
        .text("vorname", fields.vorname.clone())
        .text("nachname", fields.nachname.clone())
        .text("email", fields.email.clone())
        .text("privacy", if fields.privacy { "on" } else { "" }.to_string());

    // Optional fields travel only when present, like inputs left out of
    // the original markup.
    if !fields.telefon.is_empty() {
        form = form.text("telefon", fields.telefon.clone());
    }
    if !fields.nachricht.is_empty() {
        form = form.text("nachricht", fields.nachricht.clone());
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            vorname: "Erika".into(),
            nachname: "Mustermann".into(),
            email: "erika@example.de".into(),
            telefon: String::new(),
            nachricht: "Bitte um das Exposé.".into(),
            privacy: true,
        }
    }

    #[test]
    fn form_builds_without_panicking() {
        // The multipart boundary is generated internally; building the
        // form is the part worth pinning down without a live endpoint.
        let _ = multipart_form(&fields());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let result = submit("http://127.0.0.1:1/contact".to_string(), fields()).await;
        match result {
            Err(crate::error::Error::Http(HttpError::Transport(_))) => {}
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
