//! Reports describing how a source is normalized before decoding.
//!
//! A probe runs the same normalization `detect` does but stops short of the
//! engine, which makes it usable without one (the CLI's `probe` command).

use std::fmt;

use serde::Serialize;

use crate::error::SourceError;
use crate::source::{prepare, DecodePath, ImageSource};

/// What normalization did to one image source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Variant name of the source.
    pub source: String,

    /// Declared MIME type, for blobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Size of the input as stored (coded size for video frames), if known
    /// before decoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_size: Option<(u32, u32)>,

    /// The engine operation the source is routed to.
    pub decode_path: DecodePath,

    /// Size of the surface handed to the engine.
    pub surface_size: (u32, u32),

    /// True if a new surface was created (blob decode or canvas draw).
    pub converted: bool,
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source:       {}", self.source)?;
        if let Some(mime_type) = &self.mime_type {
            let shown = if mime_type.is_empty() {
                "(none)"
            } else {
                mime_type
            };
            writeln!(f, "MIME type:    {}", shown)?;
        }
        if let Some((width, height)) = self.input_size {
            writeln!(f, "Input size:   {}x{}", width, height)?;
        }
        writeln!(f, "Decode path:  {}", self.decode_path)?;
        writeln!(
            f,
            "Surface size: {}x{}",
            self.surface_size.0, self.surface_size.1
        )?;
        writeln!(
            f,
            "Converted:    {}",
            if self.converted { "yes" } else { "no" }
        )
    }
}

/// Size of a source before normalization, where the source knows it.
pub fn input_size(source: &ImageSource) -> Option<(u32, u32)> {
    match source {
        ImageSource::Image(image) => Some(image.dimensions()),
        ImageSource::Video(video) => Some(video.dimensions()),
        ImageSource::Canvas(canvas) => Some(canvas.dimensions()),
        ImageSource::Bitmap(bitmap) => Some((bitmap.width(), bitmap.height())),
        ImageSource::ImageData(data) => Some((data.width(), data.height())),
        ImageSource::VideoFrame(frame) => Some((frame.coded_width(), frame.coded_height())),
        ImageSource::Blob(_) | ImageSource::Unsupported { .. } => None,
    }
}

/// Normalizes `source` and reports the outcome.
///
/// # Errors
/// The same source errors `detect` would raise before calling an engine.
pub async fn probe(source: &ImageSource) -> Result<ProbeReport, SourceError> {
    let prepared = prepare(source).await?;
    let mime_type = match source {
        ImageSource::Blob(blob) => Some(blob.mime_type().to_string()),
        _ => None,
    };

    Ok(ProbeReport {
        source: source.kind().to_string(),
        mime_type,
        input_size: input_size(source),
        decode_path: prepared.decode_path(),
        surface_size: prepared.dimensions(),
        converted: prepared.is_converted(),
    })
}
