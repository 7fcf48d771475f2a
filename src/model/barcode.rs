//! The detected barcode record.

use serde::{Deserialize, Serialize};

use super::point::CornerPoint;
use super::rect::BoundingBox;
use crate::engine::DecodeResult;
use crate::format::{canonical_format, BarcodeFormat};

/// One barcode found by a detection call.
///
/// Built fresh from each engine result and never retained by the detector.
/// Field names serialize in the camelCase form callers of the standard
/// interface expect (`rawValue`, `cornerPoints`, `boundingBox`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedBarcode {
    /// The decoded text content.
    pub raw_value: String,

    /// Canonical format of the engine-reported symbology.
    pub format: BarcodeFormat,

    /// Engine-reported geometry, in the engine's order.
    pub corner_points: Vec<CornerPoint>,

    /// Always the empty placeholder; see [`BoundingBox`].
    pub bounding_box: BoundingBox,
}

impl From<DecodeResult> for DetectedBarcode {
    fn from(result: DecodeResult) -> Self {
        Self {
            raw_value: result.text,
            format: canonical_format(result.symbology),
            corner_points: result
                .points
                .iter()
                .map(|p| CornerPoint::new(f64::from(p.x), f64::from(p.y)))
                .collect(),
            bounding_box: BoundingBox::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ResultPoint;
    use crate::format::Symbology;

    #[test]
    fn test_from_decode_result() {
        let result = DecodeResult::new(
            "1234567890",
            Symbology::Code128,
            vec![ResultPoint::new(100.0, 200.0), ResultPoint::new(200.0, 210.0)],
        );

        let barcode = DetectedBarcode::from(result);

        assert_eq!(barcode.raw_value, "1234567890");
        assert_eq!(barcode.format, BarcodeFormat::Code128);
        assert_eq!(
            barcode.corner_points,
            vec![CornerPoint::new(100.0, 200.0), CornerPoint::new(200.0, 210.0)]
        );
        assert_eq!(barcode.bounding_box, BoundingBox::default());
    }

    #[test]
    fn test_unnamed_symbology_becomes_unknown() {
        let barcode = DetectedBarcode::from(DecodeResult::new("x", Symbology::Rss14, vec![]));
        assert_eq!(barcode.format, BarcodeFormat::Unknown);
        assert!(barcode.corner_points.is_empty());
    }

    #[test]
    fn test_serializes_with_standard_field_names() {
        let barcode = DetectedBarcode::from(DecodeResult::new(
            "hello",
            Symbology::QrCode,
            vec![ResultPoint::new(1.0, 2.0)],
        ));

        let value = serde_json::to_value(&barcode).unwrap();

        assert_eq!(value["rawValue"], "hello");
        assert_eq!(value["format"], "qr_code");
        assert_eq!(value["cornerPoints"][0]["x"], 1.0);
        assert_eq!(value["boundingBox"]["width"], 0.0);
    }
}
