//! Corner point coordinates.

use serde::{Deserialize, Serialize};

/// A 2D point in image pixel space, as reported by the decoding engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerPoint {
    pub x: f64,
    pub y: f64,
}

impl CornerPoint {
    /// Creates a new point with the given x and y values.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for CornerPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let point = CornerPoint::new(10.0, 20.0);
        assert_eq!(point.x, 10.0);
        assert_eq!(point.y, 20.0);
        assert_eq!(CornerPoint::from((10.0, 20.0)), point);
    }

    #[test]
    fn test_point_serializes_as_plain_xy() {
        let json = serde_json::to_string(&CornerPoint::new(1.5, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":2.0}"#);
    }
}
