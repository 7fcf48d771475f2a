//! Detector configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::DecodeHints;
use crate::error::DetectorError;
use crate::format::{symbology_for, Symbology};

/// Options accepted by the detector constructor: `{"formats": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorOptions {
    /// Canonical format names to look for, in priority order.
    pub formats: Vec<String>,
}

impl DetectorOptions {
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolves the requested names to engine symbologies.
    ///
    /// Request order and duplicates are kept.
    ///
    /// # Errors
    /// [`DetectorError::EmptyFormatList`] for an empty list, and
    /// [`DetectorError::UnsupportedFormat`] for the first name with no
    /// symbology. `"unknown"` is a canonical name but never resolves.
    pub fn resolve(&self) -> Result<Vec<Symbology>, DetectorError> {
        if self.formats.is_empty() {
            return Err(DetectorError::EmptyFormatList);
        }
        self.formats
            .iter()
            .map(|name| {
                symbology_for(name).ok_or_else(|| DetectorError::UnsupportedFormat(name.clone()))
            })
            .collect()
    }

    /// The engine hints these options produce.
    pub fn to_hints(&self) -> Result<DecodeHints, DetectorError> {
        self.resolve().map(DecodeHints::for_formats)
    }
}

/// Engine hints for an optional configuration; `None` requests every format
/// that has a canonical name.
pub fn hints_for(options: Option<&DetectorOptions>) -> Result<DecodeHints, DetectorError> {
    match options {
        Some(options) => options.to_hints(),
        None => Ok(DecodeHints::all_formats()),
    }
}

/// Reads detector options from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_options(path: &Path) -> Result<DetectorOptions, DetectorError> {
    let file = File::open(path).map_err(DetectorError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| DetectorError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses detector options from a JSON string.
pub fn from_json_str(json: &str) -> Result<DetectorOptions, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_request_order() {
        let options = DetectorOptions::new(["qr_code", "code_39", "upc_a"]);
        assert_eq!(
            options.resolve().unwrap(),
            vec![Symbology::QrCode, Symbology::Code39, Symbology::UpcA]
        );
    }

    #[test]
    fn test_resolve_keeps_duplicates() {
        let options = DetectorOptions::new(["ean_13", "ean_13"]);
        assert_eq!(
            options.resolve().unwrap(),
            vec![Symbology::Ean13, Symbology::Ean13]
        );
    }

    #[test]
    fn test_resolve_rejects_unrecognized_name() {
        let options = DetectorOptions::new(["qr_code", "qr"]);
        match options.resolve() {
            Err(DetectorError::UnsupportedFormat(name)) => assert_eq!(name, "qr"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        let options = DetectorOptions::new(["unknown"]);
        assert!(matches!(
            options.resolve(),
            Err(DetectorError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_empty_list() {
        let options = DetectorOptions::default();
        assert!(matches!(
            options.resolve(),
            Err(DetectorError::EmptyFormatList)
        ));
    }

    #[test]
    fn test_hints_for_none_requests_everything() {
        let hints = hints_for(None).unwrap();
        assert_eq!(hints, DecodeHints::all_formats());
        assert!(hints.try_harder);
    }

    #[test]
    fn test_options_from_json() {
        let options = from_json_str(r#"{"formats": ["aztec", "itf"]}"#).unwrap();
        assert_eq!(options, DetectorOptions::new(["aztec", "itf"]));
        assert!(from_json_str(r#"{"formats": "aztec"}"#).is_err());
    }

    #[test]
    fn test_read_options_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_options(&path).unwrap_err();
        assert!(matches!(err, DetectorError::ConfigParse { .. }));
        assert!(err.to_string().contains("options.json"));
    }
}
