//! Normalization of image sources into engine inputs.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use super::{materialize, Canvas, ImageElement, ImageSource, VideoElement};
use crate::engine::MediaElement;
use crate::error::SourceError;

/// Which engine operation a prepared source is handed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodePath {
    /// Asynchronous single-result scan over an image or video element.
    ScanOneResult,
    /// Synchronous decode of a canvas.
    DecodeFromCanvas,
}

impl DecodePath {
    pub fn name(&self) -> &'static str {
        match self {
            DecodePath::ScanOneResult => "scan-one-result",
            DecodePath::DecodeFromCanvas => "decode-from-canvas",
        }
    }
}

impl fmt::Display for DecodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An image source in a shape the engine accepts.
///
/// Sources that are already engine-ready are borrowed; blobs and the
/// bitmap-like sources produce owned values that are dropped once decoded.
#[derive(Debug)]
pub enum Prepared<'a> {
    Image(Cow<'a, ImageElement>),
    Video(&'a VideoElement),
    Canvas(Cow<'a, Canvas>),
}

impl Prepared<'_> {
    pub fn decode_path(&self) -> DecodePath {
        match self {
            Prepared::Image(_) | Prepared::Video(_) => DecodePath::ScanOneResult,
            Prepared::Canvas(_) => DecodePath::DecodeFromCanvas,
        }
    }

    /// Size of the pixels the engine will read.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Prepared::Image(image) => image.dimensions(),
            Prepared::Video(video) => video.dimensions(),
            Prepared::Canvas(canvas) => canvas.dimensions(),
        }
    }

    /// The element to scan, if this goes down the scan path.
    pub fn as_media(&self) -> Option<MediaElement<'_>> {
        match self {
            Prepared::Image(image) => Some(MediaElement::Image(image)),
            Prepared::Video(video) => Some(MediaElement::Video(video)),
            Prepared::Canvas(_) => None,
        }
    }

    /// True if normalization created a new surface rather than borrowing.
    pub fn is_converted(&self) -> bool {
        matches!(
            self,
            Prepared::Image(Cow::Owned(_)) | Prepared::Canvas(Cow::Owned(_))
        )
    }
}

/// Normalizes an image source for the engine.
///
/// - Image and video elements pass through.
/// - Canvases pass through.
/// - Blobs are decoded into an image element.
/// - Bitmaps, pixel buffers and video frames are drawn onto a fresh canvas.
///
/// # Errors
/// [`SourceError::Unsupported`] for unrecognized shapes, and
/// [`SourceError::BlobLoad`] when a blob does not decode.
pub async fn prepare(source: &ImageSource) -> Result<Prepared<'_>, SourceError> {
    let prepared = match source {
        ImageSource::Image(image) => Prepared::Image(Cow::Borrowed(image)),
        ImageSource::Video(video) => Prepared::Video(video),
        ImageSource::Canvas(canvas) => Prepared::Canvas(Cow::Borrowed(canvas)),
        ImageSource::Blob(blob) => Prepared::Image(Cow::Owned(materialize(blob).await?)),
        ImageSource::Bitmap(bitmap) => Prepared::Canvas(Cow::Owned(Canvas::from_bitmap(bitmap))),
        ImageSource::ImageData(data) => {
            Prepared::Canvas(Cow::Owned(Canvas::from_image_data(data)))
        }
        ImageSource::VideoFrame(frame) => {
            Prepared::Canvas(Cow::Owned(Canvas::from_video_frame(frame)))
        }
        ImageSource::Unsupported { kind } => {
            return Err(SourceError::Unsupported { kind: kind.clone() });
        }
    };
    log::debug!(
        "prepared {} source for {} ({}x{})",
        source.kind(),
        prepared.decode_path(),
        prepared.dimensions().0,
        prepared.dimensions().1
    );
    Ok(prepared)
}
