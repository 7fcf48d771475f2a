//! The barcode detector adapter.
//!
//! [`BarcodeDetector`] presents the standard detection interface over any
//! [`DecodingEngine`]. It owns one engine for its whole lifetime, configured
//! at construction from the requested formats. Each `detect` call normalizes
//! its source, makes exactly one engine call, and rewrites the engine's
//! result into a [`DetectedBarcode`].
//!
//! # Example
//!
//! ```no_run
//! # use barcode_detector::detector::BarcodeDetector;
//! # use barcode_detector::engine::DecodingEngine;
//! # use barcode_detector::source::ImageSource;
//! # async fn run<E: DecodingEngine>(source: ImageSource) {
//! let detector = BarcodeDetector::<E>::new();
//! match detector.detect(&source).await {
//!     Ok(barcodes) if barcodes.is_empty() => println!("nothing found"),
//!     Ok(barcodes) => println!("{}: {}", barcodes[0].format, barcodes[0].raw_value),
//!     Err(err) => eprintln!("detection failed: {err}"),
//! }
//! # }
//! ```

mod options;

pub use options::{from_json_str, hints_for, read_options, DetectorOptions};

use crate::engine::{DecodeHints, DecodingEngine, MediaElement, ScanError};
use crate::error::{DetectError, DetectorError};
use crate::format::{supported_formats, BarcodeFormat};
use crate::model::DetectedBarcode;
use crate::source::{prepare, ImageSource, Prepared};

/// A barcode detector backed by a decoding engine.
#[derive(Debug)]
pub struct BarcodeDetector<E> {
    engine: E,
}

impl<E: DecodingEngine> BarcodeDetector<E> {
    /// A detector looking for every format that has a canonical name.
    pub fn new() -> Self {
        Self::from_hints(DecodeHints::all_formats())
    }

    /// A detector looking for the requested formats only.
    ///
    /// # Errors
    /// Fails if the list is empty or names a format with no engine
    /// symbology (including `"unknown"`); see [`DetectorOptions::resolve`].
    pub fn with_options(options: &DetectorOptions) -> Result<Self, DetectorError> {
        options.to_hints().map(Self::from_hints)
    }

    /// Constructor taking the options as the standard interface does:
    /// absent or present.
    pub fn from_options(options: Option<&DetectorOptions>) -> Result<Self, DetectorError> {
        hints_for(options).map(Self::from_hints)
    }

    fn from_hints(hints: DecodeHints) -> Self {
        log::debug!(
            "creating engine (try_harder={}, {} format(s))",
            hints.try_harder,
            hints.possible_formats.len()
        );
        Self {
            engine: E::with_hints(hints),
        }
    }

    /// The engine this detector decodes with.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Lists the canonical formats the adapter can report.
    ///
    /// Needs no instance and does no I/O. `unknown` appears once per engine
    /// symbology that has no canonical name.
    pub async fn get_supported_formats() -> Vec<BarcodeFormat> {
        supported_formats()
    }

    /// Detects a barcode in `source`.
    ///
    /// Resolves to at most one barcode: the engine reports only its best
    /// match per image. "Nothing found" resolves to an empty vector.
    ///
    /// # Errors
    /// - [`SourceError::Unsupported`](crate::error::SourceError::Unsupported)
    ///   before any engine call, for an unrecognized source shape.
    /// - [`SourceError::BlobLoad`](crate::error::SourceError::BlobLoad) when a
    ///   blob does not decode as an image.
    /// - [`DetectError::Engine`] with the engine's own error, unchanged, for
    ///   any engine failure other than "not found".
    pub async fn detect(
        &self,
        source: &ImageSource,
    ) -> Result<Vec<DetectedBarcode>, DetectError<E::Error>> {
        let prepared = prepare(source).await?;

        let outcome = match &prepared {
            Prepared::Image(image) => {
                self.engine
                    .scan_one_result(MediaElement::Image(image), false)
                    .await
            }
            Prepared::Video(video) => {
                self.engine
                    .scan_one_result(MediaElement::Video(video), false)
                    .await
            }
            Prepared::Canvas(canvas) => self.engine.decode_from_canvas(canvas),
        };

        match outcome {
            Ok(result) => {
                log::debug!("{} source decoded as {}", source.kind(), result.symbology);
                Ok(vec![DetectedBarcode::from(result)])
            }
            Err(ScanError::NotFound) => {
                log::debug!("no barcode found in {} source", source.kind());
                Ok(Vec::new())
            }
            Err(ScanError::Engine(err)) => Err(DetectError::Engine(err)),
        }
    }
}

impl<E: DecodingEngine> Default for BarcodeDetector<E> {
    fn default() -> Self {
        Self::new()
    }
}
