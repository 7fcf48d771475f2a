//! The contract the detector consumes from a decoding engine.
//!
//! The engine does all of the actual barcode work. The detector only needs
//! three things from it: construction from a set of [`DecodeHints`], an
//! asynchronous single-result scan over image and video elements, and a
//! synchronous decode over a [`Canvas`]. Both decode operations report
//! "no barcode present" as [`ScanError::NotFound`], distinct from any other
//! failure.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::format::{reversible_symbologies, Symbology};
use crate::source::{Canvas, ImageElement, VideoElement};

/// The option set an engine is constructed with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeHints {
    /// Spend more effort per image. The detector always sets this.
    pub try_harder: bool,

    /// Symbologies the engine should look for, in request order.
    pub possible_formats: Vec<Symbology>,
}

impl DecodeHints {
    /// Hints requesting the given symbologies.
    pub fn for_formats(possible_formats: Vec<Symbology>) -> Self {
        Self {
            try_harder: true,
            possible_formats,
        }
    }

    /// Hints requesting every symbology that has a canonical name.
    pub fn all_formats() -> Self {
        Self::for_formats(reversible_symbologies())
    }
}

/// A point reported by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResultPoint {
    pub x: f32,
    pub y: f32,
}

impl ResultPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The engine's best single match for one image.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeResult {
    pub text: String,
    pub symbology: Symbology,
    pub points: Vec<ResultPoint>,
}

impl DecodeResult {
    pub fn new(text: impl Into<String>, symbology: Symbology, points: Vec<ResultPoint>) -> Self {
        Self {
            text: text.into(),
            symbology,
            points,
        }
    }
}

/// Why an engine decode produced no result.
#[derive(Debug, thiserror::Error)]
pub enum ScanError<E> {
    /// The image contains no barcode the engine could read.
    #[error("no barcode found")]
    NotFound,

    /// Any other engine failure.
    #[error(transparent)]
    Engine(E),
}

/// An element the engine can scan directly.
#[derive(Clone, Copy, Debug)]
pub enum MediaElement<'a> {
    Image(&'a ImageElement),
    Video(&'a VideoElement),
}

impl MediaElement<'_> {
    /// Dimensions of the pixels the engine will see.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            MediaElement::Image(image) => image.dimensions(),
            MediaElement::Video(video) => video.dimensions(),
        }
    }
}

/// A multi-format barcode decoding engine.
///
/// Decode operations take `&self`; engines with internal mutable state keep
/// it behind interior mutability. Engines are not assumed to be reentrant.
pub trait DecodingEngine: Sized {
    /// The engine's own failure type, surfaced to callers unchanged.
    type Error: std::error::Error + 'static;

    /// Creates an engine configured with the given hints.
    fn with_hints(hints: DecodeHints) -> Self;

    /// Scans an image or video element for its best single result.
    ///
    /// `multi_scan` asks the engine to keep scanning a playing video until a
    /// code appears; the detector always passes `false`.
    fn scan_one_result(
        &self,
        element: MediaElement<'_>,
        multi_scan: bool,
    ) -> impl Future<Output = Result<DecodeResult, ScanError<Self::Error>>>;

    /// Decodes the current contents of a canvas.
    fn decode_from_canvas(&self, canvas: &Canvas) -> Result<DecodeResult, ScanError<Self::Error>>;
}
