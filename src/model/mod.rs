//! Output records produced by detection.
//!
//! These types mirror the standard detection interface's result shape:
//! a decoded value, its canonical format, the engine-reported corner points
//! and a bounding rectangle.
//!
//! # Example
//!
//! ```
//! use barcode_detector::format::BarcodeFormat;
//! use barcode_detector::model::{BoundingBox, CornerPoint, DetectedBarcode};
//!
//! let barcode = DetectedBarcode {
//!     raw_value: "1234567890".into(),
//!     format: BarcodeFormat::Code128,
//!     corner_points: vec![CornerPoint::new(100.0, 200.0), CornerPoint::new(200.0, 210.0)],
//!     bounding_box: BoundingBox::default(),
//! };
//! assert!(barcode.bounding_box.is_empty());
//! ```

mod barcode;
mod point;
mod rect;

pub use barcode::DetectedBarcode;
pub use point::CornerPoint;
pub use rect::BoundingBox;
