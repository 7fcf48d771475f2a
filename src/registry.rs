//! Opt-in installation of the detector under the standard global name.
//!
//! Hosts that already provide a native detector keep it; hosts that do not
//! can bind this adapter so code written against the standard interface
//! works unmodified. Nothing is installed implicitly: the embedding
//! application owns a [`GlobalScope`] and calls [`install`] or
//! [`install_if_absent`] on it.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::detector::{BarcodeDetector, DetectorOptions};
use crate::engine::DecodingEngine;
use crate::error::{DetectError, DetectorError};
use crate::format::{supported_formats, BarcodeFormat};
use crate::model::DetectedBarcode;
use crate::source::ImageSource;

/// The name the standard interface is expected under.
pub const GLOBAL_NAME: &str = "BarcodeDetector";

/// An engine error with its concrete type erased.
pub type BoxedEngineError = Box<dyn StdError>;

/// Result of a type-erased `detect` call.
pub type DynDetectResult = Result<Vec<DetectedBarcode>, DetectError<BoxedEngineError>>;

/// A detector whose engine type has been erased.
pub trait DynBarcodeDetector {
    fn detect<'a>(&'a self, source: &'a ImageSource) -> LocalBoxFuture<'a, DynDetectResult>;
}

impl<E> DynBarcodeDetector for BarcodeDetector<E>
where
    E: DecodingEngine + 'static,
{
    fn detect<'a>(&'a self, source: &'a ImageSource) -> LocalBoxFuture<'a, DynDetectResult> {
        async move {
            BarcodeDetector::<E>::detect(self, source)
                .await
                .map_err(|err| {
                    err.map_engine(|engine_err| Box::new(engine_err) as BoxedEngineError)
                })
        }
        .boxed_local()
    }
}

/// Result of constructing a type-erased detector.
pub type DynConstructResult = Result<Box<dyn DynBarcodeDetector>, DetectorError>;

/// Signature of a detector class constructor.
pub type Constructor = fn(Option<&DetectorOptions>) -> DynConstructResult;

fn construct<E>(options: Option<&DetectorOptions>) -> DynConstructResult
where
    E: DecodingEngine + 'static,
{
    let detector = BarcodeDetector::<E>::from_options(options)?;
    Ok(Box::new(detector))
}

/// The installable shape of a detector implementation: a constructor plus
/// the static format listing.
#[derive(Clone, Copy)]
pub struct DetectorClass {
    engine_name: &'static str,
    constructor: Constructor,
    supported_formats: fn() -> Vec<BarcodeFormat>,
}

impl DetectorClass {
    /// The adapter class backed by engine `E`.
    pub fn of<E>() -> Self
    where
        E: DecodingEngine + 'static,
    {
        Self {
            engine_name: std::any::type_name::<E>(),
            constructor: construct::<E>,
            supported_formats,
        }
    }

    /// A class built from explicit parts, e.g. a host's native detector.
    pub fn from_parts(
        engine_name: &'static str,
        constructor: Constructor,
        supported_formats: fn() -> Vec<BarcodeFormat>,
    ) -> Self {
        Self {
            engine_name,
            constructor,
            supported_formats,
        }
    }

    /// Name of the engine behind this class.
    pub fn engine_name(&self) -> &'static str {
        self.engine_name
    }

    /// Constructs a detector, with or without options.
    pub fn construct(&self, options: Option<&DetectorOptions>) -> DynConstructResult {
        (self.constructor)(options)
    }

    /// The class-level format listing.
    pub async fn get_supported_formats(&self) -> Vec<BarcodeFormat> {
        (self.supported_formats)()
    }
}

impl fmt::Debug for DetectorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectorClass")
            .field("engine_name", &self.engine_name)
            .finish()
    }
}

/// A named table of detector bindings owned by the embedding application.
#[derive(Debug, Default)]
pub struct GlobalScope {
    bindings: HashMap<String, DetectorClass>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&DetectorClass> {
        self.bindings.get(name)
    }

    /// Binds `class` under `name`, returning whatever was bound before.
    pub fn bind(&mut self, name: impl Into<String>, class: DetectorClass) -> Option<DetectorClass> {
        self.bindings.insert(name.into(), class)
    }

    pub fn remove(&mut self, name: &str) -> Option<DetectorClass> {
        self.bindings.remove(name)
    }
}

/// Binds the adapter under [`GLOBAL_NAME`], replacing any existing binding.
///
/// Returns the binding that was replaced.
pub fn install<E>(scope: &mut GlobalScope) -> Option<DetectorClass>
where
    E: DecodingEngine + 'static,
{
    let class = DetectorClass::of::<E>();
    log::info!("installing {} backed by {}", GLOBAL_NAME, class.engine_name());
    scope.bind(GLOBAL_NAME, class)
}

/// Binds the adapter under [`GLOBAL_NAME`] only if nothing is bound there.
///
/// Returns true if the adapter was installed.
pub fn install_if_absent<E>(scope: &mut GlobalScope) -> bool
where
    E: DecodingEngine + 'static,
{
    if let Some(existing) = scope.get(GLOBAL_NAME) {
        log::debug!(
            "{} already provided by {}, leaving it in place",
            GLOBAL_NAME,
            existing.engine_name()
        );
        return false;
    }
    install::<E>(scope);
    true
}
