//! Crate-level error type.

use thiserror::Error;

/// Errors that end a session or the control loop.
///
/// Recoverable engine faults during a session are reported through
/// [`EngineError`](crate::tracker::EngineError) and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Neither the precise nor the fast tracker variant can be constructed.
    #[error("no suitable tracker found, neither CSRT nor KCF is available")]
    NoTrackerAvailable,
    /// The capture device could not be opened.
    #[error("could not open camera {index}")]
    CameraUnavailable { index: i32 },
    /// The frame source failed to deliver a frame.
    #[error("could not read frame: {0}")]
    FrameRead(String),
    /// Drawing the overlay onto a frame failed.
    #[error("could not draw overlay: {0}")]
    Render(String),
    /// Display window setup or event handling failed.
    #[error("window error: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, Error>;
