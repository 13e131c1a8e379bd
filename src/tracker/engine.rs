//! Tracking engine capability and variant selection.

use log::{info, warn};
use thiserror::Error;

use crate::error::Error;
use crate::tracker::rect::Rect;

/// A fault raised by a tracking engine.
///
/// Distinct from an ordinary "no match" outcome, which engines report as
/// `Ok(false)` from [`TrackingEngine::init`] or `Ok(None)` from
/// [`TrackingEngine::update`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("failed to construct {variant} tracker: {message}")]
    Construction {
        variant: EngineVariant,
        message: String,
    },
    #[error("tracker initialization fault: {0}")]
    Init(String),
    #[error("tracker update fault: {0}")]
    Update(String),
}

/// Single-object visual tracker operating on frames of type `F`.
///
/// Implementations wrap an external algorithm; this crate never inspects
/// which one is behind the trait.
pub trait TrackingEngine<F: ?Sized> {
    /// Start following `bbox` in `frame`.
    ///
    /// Returns `Ok(false)` if the engine declined the region.
    fn init(&mut self, frame: &F, bbox: Rect) -> Result<bool, EngineError>;

    /// Predict the region's location in `frame`.
    ///
    /// Returns `Ok(None)` when the target was not found.
    fn update(&mut self, frame: &F) -> Result<Option<Rect>, EngineError>;
}

/// The two interchangeable tracker variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineVariant {
    /// Accurate but slower (CSRT)
    #[default]
    Precise,
    /// Faster, less robust (KCF)
    Fast,
}

impl EngineVariant {
    /// Short algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Precise => "CSRT",
            Self::Fast => "KCF",
        }
    }

    /// Pick the variant to use for a whole session.
    ///
    /// Tries `preferred` first. An unavailable `Precise` falls back to
    /// `Fast`; `Fast` is never upgraded. Fails with
    /// [`Error::NoTrackerAvailable`] when nothing usable remains.
    pub fn resolve(
        preferred: EngineVariant,
        mut is_available: impl FnMut(EngineVariant) -> bool,
    ) -> Result<EngineVariant, Error> {
        if is_available(preferred) {
            info!("Using {} tracker", preferred.name());
            return Ok(preferred);
        }
        match preferred {
            Self::Precise => {
                warn!("CSRT tracker not found, falling back to KCF");
                if is_available(Self::Fast) {
                    info!("Using {} tracker", Self::Fast.name());
                    Ok(Self::Fast)
                } else {
                    Err(Error::NoTrackerAvailable)
                }
            }
            Self::Fast => Err(Error::NoTrackerAvailable),
        }
    }
}

impl std::fmt::Display for EngineVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Factory for tracking engines.
///
/// A session asks the backend for a fresh engine every time a selection is
/// committed.
pub trait EngineBackend<F: ?Sized> {
    /// Whether `variant` can be constructed in this environment.
    fn is_available(&self, variant: EngineVariant) -> bool;

    /// Construct a new, uninitialized engine of `variant`.
    fn create(&self, variant: EngineVariant) -> Result<Box<dyn TrackingEngine<F>>, EngineError>;
}
