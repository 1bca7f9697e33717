//! Content block: one structural unit of a rich-text body.

use serde::{Deserialize, Serialize};

/// A single block of post or portfolio content.
///
/// Serialized externally tagged, so the wire shape is an object with exactly
/// one key: `{"paragraph": "..."}`, `{"image_url": "..."}` or `{"title": "..."}`.
/// Representing the block as a sum type (instead of an object with optional
/// keys) makes the one-payload-per-block invariant a compile-time fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentBlock {
    /// A paragraph of body text.
    #[serde(rename = "paragraph")]
    Paragraph(String),
    /// A reference to an uploaded image.
    #[serde(rename = "image_url")]
    ImageRef(String),
    /// A subtitle within the body.
    #[serde(rename = "title")]
    Title(String),
}

impl ContentBlock {
    /// The discriminant as it appears on the wire.
    pub fn field_name(&self) -> &'static str {
        match self {
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::ImageRef(_) => "image_url",
            ContentBlock::Title(_) => "title",
        }
    }
}
