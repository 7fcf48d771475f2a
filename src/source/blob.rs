//! Encoded image bytes and their materialization into an image element.

use super::ImageElement;
use crate::error::SourceError;

/// An opaque binary blob, expected to hold an encoded image (PNG, JPEG, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    mime_type: String,
}

impl Blob {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// A blob whose MIME type is guessed from its leading bytes.
    ///
    /// Falls back to an empty type when the bytes match no known format.
    pub fn sniffed(bytes: Vec<u8>) -> Self {
        let mime_type = image::guess_format(&bytes)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_default();
        Self { bytes, mime_type }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The declared MIME type; may be empty.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Decodes a blob into a static image element.
///
/// The declared MIME type is not trusted; the format is detected from the
/// bytes themselves.
///
/// # Errors
/// Returns [`SourceError::BlobLoad`] if the bytes are not a decodable image.
pub async fn materialize(blob: &Blob) -> Result<ImageElement, SourceError> {
    log::trace!(
        "materializing {} byte blob (type '{}')",
        blob.size(),
        blob.mime_type()
    );
    let decoded = image::load_from_memory(blob.bytes()).map_err(SourceError::BlobLoad)?;
    Ok(ImageElement::new(decoded.into_rgba8()))
}
