#![allow(dead_code)]

use barcode_detector::engine::ResultPoint;
use barcode_detector::format::{reversible_formats, FORMAT_TABLE};
use barcode_detector::{BarcodeFormat, Symbology};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Any engine symbology, named or not.
pub fn arb_symbology() -> BoxedStrategy<Symbology> {
    let all: Vec<Symbology> = FORMAT_TABLE.iter().map(|(s, _)| *s).collect();
    prop::sample::select(all).boxed()
}

/// A canonical format that resolves back to a symbology.
pub fn arb_reversible_format() -> BoxedStrategy<BarcodeFormat> {
    prop::sample::select(reversible_formats()).boxed()
}

/// A non-empty request list of canonical names, duplicates allowed.
pub fn arb_format_request(max_len: usize) -> BoxedStrategy<Vec<String>> {
    prop::collection::vec(
        arb_reversible_format().prop_map(|f| f.as_str().to_string()),
        1..=max_len,
    )
    .boxed()
}

/// A string that is not a canonical name with a reverse entry.
pub fn arb_unrecognized_name() -> BoxedStrategy<String> {
    "[a-zA-Z0-9_]{0,12}"
        .prop_filter("must not be a requestable name", |name| {
            !reversible_formats().iter().any(|f| f.as_str() == name)
        })
        .boxed()
}

/// A small non-degenerate surface size.
pub fn arb_size() -> BoxedStrategy<(u32, u32)> {
    (1u32..=48, 1u32..=48).boxed()
}

/// Engine result points within a plausible image area.
pub fn arb_points(max_len: usize) -> BoxedStrategy<Vec<ResultPoint>> {
    prop::collection::vec(
        (-10.0f32..4096.0, -10.0f32..4096.0).prop_map(|(x, y)| ResultPoint::new(x, y)),
        0..=max_len,
    )
    .boxed()
}
