//! Image sources accepted by `detect`.
//!
//! [`ImageSource`] is a tagged union over every input shape the detector
//! recognizes. Each variant carries only what the detector needs from it:
//! decoded pixels for elements and bitmaps, encoded bytes for blobs, a raw
//! RGBA buffer for pixel data, and coded plus display sizes for video frames.
//!
//! Pixel storage is [`image::RgbaImage`] throughout.

mod blob;
mod canvas;
mod prepare;

pub use blob::{materialize, Blob};
pub use canvas::Canvas;
pub use prepare::{prepare, DecodePath, Prepared};

use image::RgbaImage;

use crate::error::SourceError;

/// A loaded, static image element.
#[derive(Clone, Debug)]
pub struct ImageElement {
    pixels: RgbaImage,
}

impl ImageElement {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// The decoded pixels at natural size.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// A playable video element, represented by its current frame.
#[derive(Clone, Debug)]
pub struct VideoElement {
    current_frame: RgbaImage,
}

impl VideoElement {
    pub fn new(current_frame: RgbaImage) -> Self {
        Self { current_frame }
    }

    pub fn current_frame(&self) -> &RgbaImage {
        &self.current_frame
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.current_frame.dimensions()
    }
}

/// A pre-decoded bitmap.
#[derive(Clone, Debug)]
pub struct ImageBitmap {
    pixels: RgbaImage,
}

impl ImageBitmap {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// A raw RGBA pixel buffer, four bytes per pixel, row-major.
#[derive(Clone, Debug)]
pub struct ImageData {
    pixels: RgbaImage,
}

impl ImageData {
    /// Wraps a pixel buffer.
    ///
    /// # Errors
    /// Returns [`SourceError::InvalidImageData`] if `data` is not exactly
    /// `width * height * 4` bytes long, or if that length does not fit in
    /// `usize` (reported as an `expected` of `usize::MAX`).
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SourceError> {
        // No Vec<u8> can hold usize::MAX bytes, so the fallback never matches.
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .unwrap_or(usize::MAX);
        let actual = data.len();
        if actual != expected {
            return Err(SourceError::InvalidImageData {
                width,
                height,
                expected,
                actual,
            });
        }
        RgbaImage::from_raw(width, height, data)
            .map(|pixels| Self { pixels })
            .ok_or(SourceError::InvalidImageData {
                width,
                height,
                expected,
                actual,
            })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub(crate) fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<RgbaImage> for ImageData {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}

/// A single decoded video frame.
///
/// A frame's coded size (the stored pixel grid) may differ from its display
/// size (the size it is meant to be shown at, e.g. after non-square pixel
/// correction). Consumers draw it at display size.
#[derive(Clone, Debug)]
pub struct VideoFrame {
    pixels: RgbaImage,
    display_width: u32,
    display_height: u32,
}

impl VideoFrame {
    /// A frame whose display size equals its coded size.
    pub fn new(pixels: RgbaImage) -> Self {
        let (display_width, display_height) = pixels.dimensions();
        Self {
            pixels,
            display_width,
            display_height,
        }
    }

    /// A frame shown at a different size than it was coded at.
    pub fn with_display_size(pixels: RgbaImage, display_width: u32, display_height: u32) -> Self {
        Self {
            pixels,
            display_width,
            display_height,
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn coded_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn coded_height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn display_width(&self) -> u32 {
        self.display_width
    }

    pub fn display_height(&self) -> u32 {
        self.display_height
    }
}

/// Every input shape `detect` knows about.
#[derive(Clone, Debug)]
pub enum ImageSource {
    Image(ImageElement),
    Video(VideoElement),
    Canvas(Canvas),
    Blob(Blob),
    Bitmap(ImageBitmap),
    ImageData(ImageData),
    VideoFrame(VideoFrame),
    /// A value of a shape the detector cannot handle (including "nothing").
    Unsupported { kind: String },
}

impl ImageSource {
    /// A source of an unrecognized shape, named for error messages.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        ImageSource::Unsupported { kind: kind.into() }
    }

    /// Short name of the variant, used in logs and reports.
    pub fn kind(&self) -> &str {
        match self {
            ImageSource::Image(_) => "image",
            ImageSource::Video(_) => "video",
            ImageSource::Canvas(_) => "canvas",
            ImageSource::Blob(_) => "blob",
            ImageSource::Bitmap(_) => "bitmap",
            ImageSource::ImageData(_) => "image-data",
            ImageSource::VideoFrame(_) => "video-frame",
            ImageSource::Unsupported { kind } => kind,
        }
    }
}

impl From<ImageElement> for ImageSource {
    fn from(value: ImageElement) -> Self {
        ImageSource::Image(value)
    }
}

impl From<VideoElement> for ImageSource {
    fn from(value: VideoElement) -> Self {
        ImageSource::Video(value)
    }
}

impl From<Canvas> for ImageSource {
    fn from(value: Canvas) -> Self {
        ImageSource::Canvas(value)
    }
}

impl From<Blob> for ImageSource {
    fn from(value: Blob) -> Self {
        ImageSource::Blob(value)
    }
}

impl From<ImageBitmap> for ImageSource {
    fn from(value: ImageBitmap) -> Self {
        ImageSource::Bitmap(value)
    }
}

impl From<ImageData> for ImageSource {
    fn from(value: ImageData) -> Self {
        ImageSource::ImageData(value)
    }
}

impl From<VideoFrame> for ImageSource {
    fn from(value: VideoFrame) -> Self {
        ImageSource::VideoFrame(value)
    }
}
