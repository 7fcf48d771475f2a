//! Barcode format vocabularies and the mapping between them.
//!
//! Two vocabularies meet here:
//!
//! - [`Symbology`]: the decoding engine's own enumerated barcode types.
//! - [`BarcodeFormat`]: the canonical lowercase names exposed to callers
//!   (e.g. `"qr_code"`, `"code_128"`).
//!
//! Both directions of the mapping are generated once from a single ordered
//! table, [`FORMAT_TABLE`]. Several symbologies have no canonical name and
//! map to [`BarcodeFormat::Unknown`]. The reverse direction skips those
//! rows, so `"unknown"` never resolves back to a symbology.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// The decoding engine's barcode type identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbology {
    Aztec,
    Codabar,
    #[serde(rename = "CODE_39")]
    Code39,
    #[serde(rename = "CODE_93")]
    Code93,
    #[serde(rename = "CODE_128")]
    Code128,
    DataMatrix,
    #[serde(rename = "EAN_8")]
    Ean8,
    #[serde(rename = "EAN_13")]
    Ean13,
    Itf,
    Maxicode,
    #[serde(rename = "PDF_417")]
    Pdf417,
    QrCode,
    #[serde(rename = "RSS_14")]
    Rss14,
    RssExpanded,
    UpcA,
    UpcE,
    UpcEanExtension,
}

impl Symbology {
    /// The engine-side name of this symbology.
    pub fn name(&self) -> &'static str {
        match self {
            Symbology::Aztec => "AZTEC",
            Symbology::Codabar => "CODABAR",
            Symbology::Code39 => "CODE_39",
            Symbology::Code93 => "CODE_93",
            Symbology::Code128 => "CODE_128",
            Symbology::DataMatrix => "DATA_MATRIX",
            Symbology::Ean8 => "EAN_8",
            Symbology::Ean13 => "EAN_13",
            Symbology::Itf => "ITF",
            Symbology::Maxicode => "MAXICODE",
            Symbology::Pdf417 => "PDF_417",
            Symbology::QrCode => "QR_CODE",
            Symbology::Rss14 => "RSS_14",
            Symbology::RssExpanded => "RSS_EXPANDED",
            Symbology::UpcA => "UPC_A",
            Symbology::UpcE => "UPC_E",
            Symbology::UpcEanExtension => "UPC_EAN_EXTENSION",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A canonical barcode format name, as exposed by the detection interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BarcodeFormat {
    Aztec,
    Codabar,
    Code39,
    Code93,
    Code128,
    DataMatrix,
    Ean8,
    Ean13,
    Itf,
    Pdf417,
    QrCode,
    UpcA,
    UpcE,
    /// Catch-all for symbologies without a standard name.
    Unknown,
}

impl BarcodeFormat {
    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::Aztec => "aztec",
            BarcodeFormat::Codabar => "codabar",
            BarcodeFormat::Code39 => "code_39",
            BarcodeFormat::Code93 => "code_93",
            BarcodeFormat::Code128 => "code_128",
            BarcodeFormat::DataMatrix => "data_matrix",
            BarcodeFormat::Ean8 => "ean_8",
            BarcodeFormat::Ean13 => "ean_13",
            BarcodeFormat::Itf => "itf",
            BarcodeFormat::Pdf417 => "pdf417",
            BarcodeFormat::QrCode => "qr_code",
            BarcodeFormat::UpcA => "upc_a",
            BarcodeFormat::UpcE => "upc_e",
            BarcodeFormat::Unknown => "unknown",
        }
    }

    /// Every canonical format, `Unknown` last.
    pub const ALL: [BarcodeFormat; 14] = [
        BarcodeFormat::Aztec,
        BarcodeFormat::Codabar,
        BarcodeFormat::Code39,
        BarcodeFormat::Code93,
        BarcodeFormat::Code128,
        BarcodeFormat::DataMatrix,
        BarcodeFormat::Ean8,
        BarcodeFormat::Ean13,
        BarcodeFormat::Itf,
        BarcodeFormat::Pdf417,
        BarcodeFormat::QrCode,
        BarcodeFormat::UpcA,
        BarcodeFormat::UpcE,
        BarcodeFormat::Unknown,
    ];
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a canonical format name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a canonical barcode format name")]
pub struct ParseFormatError(pub String);

impl FromStr for BarcodeFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BarcodeFormat::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

// Serialized as the bare canonical name rather than the variant name.
impl Serialize for BarcodeFormat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BarcodeFormat {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// The single source of truth for the symbology/format association, in
/// declared order.
pub const FORMAT_TABLE: [(Symbology, BarcodeFormat); 17] = [
    (Symbology::Aztec, BarcodeFormat::Aztec),
    (Symbology::Codabar, BarcodeFormat::Codabar),
    (Symbology::Code39, BarcodeFormat::Code39),
    (Symbology::Code93, BarcodeFormat::Code93),
    (Symbology::Code128, BarcodeFormat::Code128),
    (Symbology::DataMatrix, BarcodeFormat::DataMatrix),
    (Symbology::Ean8, BarcodeFormat::Ean8),
    (Symbology::Ean13, BarcodeFormat::Ean13),
    (Symbology::Itf, BarcodeFormat::Itf),
    (Symbology::Pdf417, BarcodeFormat::Pdf417),
    (Symbology::QrCode, BarcodeFormat::QrCode),
    (Symbology::UpcA, BarcodeFormat::UpcA),
    (Symbology::UpcE, BarcodeFormat::UpcE),
    (Symbology::UpcEanExtension, BarcodeFormat::Unknown),
    (Symbology::Maxicode, BarcodeFormat::Unknown),
    (Symbology::Rss14, BarcodeFormat::Unknown),
    (Symbology::RssExpanded, BarcodeFormat::Unknown),
];

static FORWARD: LazyLock<HashMap<Symbology, BarcodeFormat>> =
    LazyLock::new(|| FORMAT_TABLE.iter().copied().collect());

static REVERSE: LazyLock<HashMap<&'static str, Symbology>> = LazyLock::new(|| {
    FORMAT_TABLE
        .iter()
        .filter(|(_, format)| *format != BarcodeFormat::Unknown)
        .map(|(symbology, format)| (format.as_str(), *symbology))
        .collect()
});

/// Maps an engine symbology to its canonical format.
///
/// Symbologies missing from the table fall through to `Unknown`.
pub fn canonical_format(symbology: Symbology) -> BarcodeFormat {
    FORWARD
        .get(&symbology)
        .copied()
        .unwrap_or(BarcodeFormat::Unknown)
}

/// Maps a canonical name back to the engine symbology.
///
/// Returns `None` for unrecognized names and for `"unknown"`, which has no
/// reverse entry.
pub fn symbology_for(name: &str) -> Option<Symbology> {
    REVERSE.get(name).copied()
}

/// Every symbology that has a canonical name, in declared order.
pub fn reversible_symbologies() -> Vec<Symbology> {
    FORMAT_TABLE
        .iter()
        .filter(|(_, format)| *format != BarcodeFormat::Unknown)
        .map(|(symbology, _)| *symbology)
        .collect()
}

/// The canonical names that resolve back to a symbology, in declared order.
pub fn reversible_formats() -> Vec<BarcodeFormat> {
    FORMAT_TABLE
        .iter()
        .map(|(_, format)| *format)
        .filter(|format| *format != BarcodeFormat::Unknown)
        .collect()
}

/// The forward table's values in declared order.
///
/// `Unknown` appears once per symbology that maps to it; duplicates are kept.
pub fn supported_formats() -> Vec<BarcodeFormat> {
    FORMAT_TABLE.iter().map(|(_, format)| *format).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_mapping() {
        assert_eq!(canonical_format(Symbology::Code128), BarcodeFormat::Code128);
        assert_eq!(canonical_format(Symbology::Pdf417), BarcodeFormat::Pdf417);
        assert_eq!(canonical_format(Symbology::Maxicode), BarcodeFormat::Unknown);
        assert_eq!(canonical_format(Symbology::RssExpanded), BarcodeFormat::Unknown);
    }

    #[test]
    fn test_reverse_mapping_skips_unknown() {
        assert_eq!(symbology_for("qr_code"), Some(Symbology::QrCode));
        assert_eq!(symbology_for("pdf417"), Some(Symbology::Pdf417));
        assert_eq!(symbology_for("unknown"), None);
        assert_eq!(symbology_for("QR_CODE"), None);
        assert_eq!(symbology_for("not_a_format"), None);
    }

    #[test]
    fn test_every_named_format_round_trips() {
        for (symbology, format) in FORMAT_TABLE {
            if format == BarcodeFormat::Unknown {
                continue;
            }
            assert_eq!(symbology_for(format.as_str()), Some(symbology));
        }
    }

    #[test]
    fn test_supported_formats_keeps_duplicate_unknowns() {
        let formats = supported_formats();
        assert_eq!(formats.len(), 17);
        assert_eq!(formats[0], BarcodeFormat::Aztec);
        assert_eq!(formats[12], BarcodeFormat::UpcE);
        let unknowns = formats
            .iter()
            .filter(|f| **f == BarcodeFormat::Unknown)
            .count();
        assert_eq!(unknowns, 4);
    }

    #[test]
    fn test_reversible_symbologies_in_declared_order() {
        let symbologies = reversible_symbologies();
        assert_eq!(symbologies.len(), 13);
        assert_eq!(symbologies.first(), Some(&Symbology::Aztec));
        assert_eq!(symbologies.last(), Some(&Symbology::UpcE));
        assert!(!symbologies.contains(&Symbology::Maxicode));
    }

    #[test]
    fn test_format_parse_and_display() {
        assert_eq!("code_39".parse::<BarcodeFormat>(), Ok(BarcodeFormat::Code39));
        assert_eq!("unknown".parse::<BarcodeFormat>(), Ok(BarcodeFormat::Unknown));
        assert!("code39".parse::<BarcodeFormat>().is_err());
        assert_eq!(BarcodeFormat::DataMatrix.to_string(), "data_matrix");
    }

    #[test]
    fn test_format_serde_uses_canonical_name() {
        let json = serde_json::to_string(&BarcodeFormat::Ean13).unwrap();
        assert_eq!(json, "\"ean_13\"");
        let parsed: BarcodeFormat = serde_json::from_str("\"upc_a\"").unwrap();
        assert_eq!(parsed, BarcodeFormat::UpcA);
        assert!(serde_json::from_str::<BarcodeFormat>("\"upca\"").is_err());
    }

    #[test]
    fn test_symbology_serde_uses_engine_name() {
        for (symbology, _) in FORMAT_TABLE {
            let json = serde_json::to_string(&symbology).unwrap();
            assert_eq!(json, format!("\"{}\"", symbology.name()));
        }
    }
}
