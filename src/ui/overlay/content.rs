// SPDX-License-Identifier: MPL-2.0
//! Lightbox content classification.
//!
//! A lightbox target is either an embedded document (a `.pdf` plan or the
//! exposé itself) or an image. The decision is made from the file extension
//! alone; the caption falls back to the resource's trailing path segment
//! when the caller supplies none.

/// Fraction of the viewport a document frame occupies, both axes.
pub const DOCUMENT_VIEWPORT_FRACTION: f32 = 0.8;

/// What the lightbox renders inside its chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxContent {
    /// An embedded document frame sized to a fixed viewport fraction.
    Document { source: String },
    /// An image, bounded and aspect-preserving.
    Image { source: String },
}

impl LightboxContent {
    /// Classifies a resource reference by its file extension.
    ///
    /// A case-insensitive `.pdf` suffix selects the document frame;
    /// everything else renders as an image.
    #[must_use]
    pub fn classify(resource: &str) -> Self {
        if resource.to_lowercase().ends_with(".pdf") {
            Self::Document {
                source: resource.to_string(),
            }
        } else {
            Self::Image {
                source: resource.to_string(),
            }
        }
    }

    /// Returns the resource reference this content was built from.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Document { source } | Self::Image { source } => source,
        }
    }
}

/// Returns the caption to display: the supplied text, or the resource's
/// trailing path segment when the text is blank.
#[must_use]
pub fn caption_for(resource: &str, caption: &str) -> String {
    if !caption.trim().is_empty() {
        return caption.to_string();
    }
    trailing_segment(resource).to_string()
}

fn trailing_segment(resource: &str) -> &str {
    resource
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(resource)
}
