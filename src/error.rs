use std::path::PathBuf;
use thiserror::Error;

/// The main error type for construction, configuration and CLI operations.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse detector options from {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported barcode format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Requested format list is empty")]
    EmptyFormatList,

    #[error("Failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write JSON output: {0}")]
    JsonWrite(#[source] serde_json::Error),
}

/// Errors raised while turning an image source into something an engine
/// accepts. None of these reach the engine.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Image source is not supported: {kind}")]
    Unsupported { kind: String },

    #[error("Failed to load image from blob: {0}")]
    BlobLoad(#[source] image::ImageError),

    #[error(
        "Pixel buffer for {width}x{height} image must hold {expected} bytes, got {actual}"
    )]
    InvalidImageData {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// The error returned by `detect`.
///
/// Engine failures other than "not found" are carried unchanged in
/// [`DetectError::Engine`].
#[derive(Debug, Error)]
pub enum DetectError<E> {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Engine(E),
}

impl<E> DetectError<E> {
    /// Converts the engine error type, leaving source errors untouched.
    pub fn map_engine<F>(self, f: impl FnOnce(E) -> F) -> DetectError<F> {
        match self {
            DetectError::Source(err) => DetectError::Source(err),
            DetectError::Engine(err) => DetectError::Engine(f(err)),
        }
    }

    /// Returns the engine's error value, if that is what this is.
    pub fn into_engine_error(self) -> Option<E> {
        match self {
            DetectError::Engine(err) => Some(err),
            DetectError::Source(_) => None,
        }
    }

    /// True if the image source had an unrecognized shape.
    pub fn is_unsupported_source(&self) -> bool {
        matches!(self, DetectError::Source(SourceError::Unsupported { .. }))
    }

    /// True if a blob could not be decoded into an image.
    pub fn is_blob_load(&self) -> bool {
        matches!(self, DetectError::Source(SourceError::BlobLoad(_)))
    }
}
