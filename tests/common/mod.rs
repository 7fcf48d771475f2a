#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Cursor;

use barcode_detector::engine::{
    DecodeHints, DecodeResult, DecodingEngine, MediaElement, ScanError,
};
use barcode_detector::format::Symbology;
use barcode_detector::source::Canvas;
use image::{ImageFormat, Rgba, RgbaImage};

/// A failure raised by [`MockEngine`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct MockEngineError(pub String);

/// One engine call as seen by [`MockEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ScanOneResult {
        element: &'static str,
        multi_scan: bool,
        size: (u32, u32),
    },
    DecodeFromCanvas {
        size: (u32, u32),
    },
}

/// What the next engine call should produce.
#[derive(Debug, Clone)]
pub enum Response {
    Found(DecodeResult),
    NotFound,
    Fail(String),
}

/// A decoding engine that records its hints and calls and answers with a
/// canned response.
#[derive(Debug)]
pub struct MockEngine {
    pub hints: DecodeHints,
    calls: RefCell<Vec<Call>>,
    response: RefCell<Response>,
}

impl MockEngine {
    pub fn respond_with(&self, response: Response) {
        *self.response.borrow_mut() = response;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn scan_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::ScanOneResult { .. }))
            .count()
    }

    pub fn canvas_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::DecodeFromCanvas { .. }))
            .count()
    }

    fn answer(&self) -> Result<DecodeResult, ScanError<MockEngineError>> {
        match &*self.response.borrow() {
            Response::Found(result) => Ok(result.clone()),
            Response::NotFound => Err(ScanError::NotFound),
            Response::Fail(message) => Err(ScanError::Engine(MockEngineError(message.clone()))),
        }
    }
}

impl DecodingEngine for MockEngine {
    type Error = MockEngineError;

    fn with_hints(hints: DecodeHints) -> Self {
        Self {
            hints,
            calls: RefCell::new(Vec::new()),
            response: RefCell::new(Response::Found(DecodeResult::new(
                "12345",
                Symbology::Code39,
                Vec::new(),
            ))),
        }
    }

    async fn scan_one_result(
        &self,
        element: MediaElement<'_>,
        multi_scan: bool,
    ) -> Result<DecodeResult, ScanError<Self::Error>> {
        let kind = match element {
            MediaElement::Image(_) => "image",
            MediaElement::Video(_) => "video",
        };
        self.calls.borrow_mut().push(Call::ScanOneResult {
            element: kind,
            multi_scan,
            size: element.dimensions(),
        });
        self.answer()
    }

    fn decode_from_canvas(&self, canvas: &Canvas) -> Result<DecodeResult, ScanError<Self::Error>> {
        self.calls.borrow_mut().push(Call::DecodeFromCanvas {
            size: canvas.dimensions(),
        });
        self.answer()
    }
}

/// An opaque white image.
pub fn solid(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
}

/// PNG-encoded bytes of [`solid`].
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    solid(width, height)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}
