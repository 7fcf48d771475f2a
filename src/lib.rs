//! barcode-detector: the standard barcode detection interface over an
//! external decoding engine.
//!
//! The crate does no decoding of its own. It translates between the
//! interface callers expect (canonical format names, image sources, detected
//! barcode records) and what a multi-format decoding engine offers (symbology
//! identifiers, element scans, canvas decodes).
//!
//! # Modules
//!
//! - [`format`]: Symbology and canonical format vocabularies and their mapping
//! - [`model`]: Detected barcode records
//! - [`source`]: Image source variants and their normalization
//! - [`engine`]: The decoding engine contract
//! - [`detector`]: The detector adapter and its options
//! - [`registry`]: Opt-in installation under the standard global name
//! - [`probe`]: Normalization reports
//! - [`error`]: Error types

pub mod detector;
pub mod engine;
pub mod error;
pub mod format;
pub mod model;
pub mod probe;
pub mod registry;
pub mod source;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use futures::executor::block_on;
use serde::Serialize;

pub use detector::{BarcodeDetector, DetectorOptions};
pub use engine::DecodingEngine;
pub use error::{DetectError, DetectorError, SourceError};
pub use format::{BarcodeFormat, Symbology};
pub use model::DetectedBarcode;
pub use source::ImageSource;

use engine::DecodeHints;
use source::{
    materialize, Blob, Canvas, ImageBitmap, ImageData, ImageElement, VideoElement, VideoFrame,
};

/// The barcode-detector CLI application.
#[derive(Parser)]
#[command(name = "barcode-detector")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Log normalization and dispatch decisions.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the barcode formats the detector can report.
    Formats(FormatsArgs),
    /// Show the engine hints a detector would be constructed with.
    Hints(HintsArgs),
    /// Load an image file as an image source and show how it is normalized.
    Probe(ProbeArgs),
}

/// Output format for reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the formats subcommand.
#[derive(clap::Args)]
struct FormatsArgs {
    /// Only list formats that can be requested (excludes 'unknown').
    #[arg(long)]
    reversible: bool,

    /// Output format ('text' or 'json').
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

/// Arguments for the hints subcommand.
#[derive(clap::Args)]
struct HintsArgs {
    /// Comma-separated canonical format names to request.
    #[arg(long, value_delimiter = ',', conflicts_with = "config")]
    formats: Option<Vec<String>>,

    /// JSON options file of the form {"formats": [...]}.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format ('text' or 'json').
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

/// The source variant to load a probed file as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    Blob,
    Image,
    Video,
    Canvas,
    Bitmap,
    ImageData,
    VideoFrame,
}

/// Arguments for the probe subcommand.
#[derive(clap::Args)]
struct ProbeArgs {
    /// Encoded image file (PNG, JPEG, GIF, BMP or WebP).
    input: PathBuf,

    /// Image source variant to wrap the file in.
    #[arg(long = "as", value_enum, default_value_t = SourceKind::Blob)]
    source: SourceKind,

    /// Display size for '--as video-frame', as WIDTHxHEIGHT.
    #[arg(long)]
    display: Option<String>,

    /// Output format ('text' or 'json').
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

/// Run the barcode-detector CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), DetectorError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Formats(args)) => run_formats(args),
        Some(Commands::Hints(args)) => run_hints(args),
        Some(Commands::Probe(args)) => run_probe(args),
        None => {
            println!("barcode-detector {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("The standard barcode detection interface over an external decoding engine.");
            println!();
            println!("Run 'barcode-detector --help' for usage information.");
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // A logger may already be installed when run() is embedded.
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), DetectorError> {
    let json = serde_json::to_string_pretty(value).map_err(DetectorError::JsonWrite)?;
    println!("{}", json);
    Ok(())
}

/// Execute the formats subcommand.
fn run_formats(args: FormatsArgs) -> Result<(), DetectorError> {
    let formats = if args.reversible {
        format::reversible_formats()
    } else {
        format::supported_formats()
    };

    match args.output {
        OutputFormat::Json => print_json(&formats),
        OutputFormat::Text => {
            for format in &formats {
                println!("{}", format);
            }
            Ok(())
        }
    }
}

/// Execute the hints subcommand.
fn run_hints(args: HintsArgs) -> Result<(), DetectorError> {
    let options = match (args.formats, args.config) {
        (Some(formats), _) => Some(DetectorOptions::new(formats)),
        (None, Some(path)) => Some(detector::read_options(&path)?),
        (None, None) => None,
    };
    let hints = detector::hints_for(options.as_ref())?;

    match args.output {
        OutputFormat::Json => print_json(&hints),
        OutputFormat::Text => {
            print!("{}", HintsDisplay(&hints));
            Ok(())
        }
    }
}

struct HintsDisplay<'a>(&'a DecodeHints);

impl std::fmt::Display for HintsDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "try_harder: {}", self.0.try_harder)?;
        writeln!(f, "possible_formats ({}):", self.0.possible_formats.len())?;
        for symbology in &self.0.possible_formats {
            writeln!(
                f,
                "  {:<18} {}",
                symbology.name(),
                format::canonical_format(*symbology)
            )?;
        }
        Ok(())
    }
}

/// Execute the probe subcommand.
fn run_probe(args: ProbeArgs) -> Result<(), DetectorError> {
    if args.display.is_some() && args.source != SourceKind::VideoFrame {
        return Err(DetectorError::InvalidArgument(
            "--display only applies to '--as video-frame'".to_string(),
        ));
    }
    let display = args.display.as_deref().map(parse_size).transpose()?;

    let bytes = std::fs::read(&args.input)?;
    let source = load_source(&args.input, bytes, args.source, display)?;

    let report = block_on(probe::probe(&source)).map_err(|source| DetectorError::ImageLoad {
        path: args.input.clone(),
        source,
    })?;

    match args.output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            print!("{}", report);
            Ok(())
        }
    }
}

/// Wraps file bytes in the requested source variant.
fn load_source(
    path: &Path,
    bytes: Vec<u8>,
    kind: SourceKind,
    display: Option<(u32, u32)>,
) -> Result<ImageSource, DetectorError> {
    let blob = Blob::sniffed(bytes);
    let decode = |blob: &Blob| {
        block_on(materialize(blob))
            .map(|element| element.pixels().clone())
            .map_err(|source| DetectorError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })
    };

    let source = match kind {
        SourceKind::Blob => ImageSource::Blob(blob),
        SourceKind::Image => ImageElement::new(decode(&blob)?).into(),
        SourceKind::Video => VideoElement::new(decode(&blob)?).into(),
        SourceKind::Canvas => Canvas::from_pixels(decode(&blob)?).into(),
        SourceKind::Bitmap => ImageBitmap::new(decode(&blob)?).into(),
        SourceKind::ImageData => ImageData::from(decode(&blob)?).into(),
        SourceKind::VideoFrame => {
            let pixels = decode(&blob)?;
            match display {
                Some((width, height)) => {
                    VideoFrame::with_display_size(pixels, width, height).into()
                }
                None => VideoFrame::new(pixels).into(),
            }
        }
    };
    Ok(source)
}

/// Parses a `WIDTHxHEIGHT` size.
fn parse_size(value: &str) -> Result<(u32, u32), DetectorError> {
    let invalid = || DetectorError::InvalidArgument(format!("'{}' is not WIDTHxHEIGHT", value));
    let (width, height) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}
