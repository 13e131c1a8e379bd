//! Trait for frame capture backends.

use crate::error::Result;

/// Trait for frame capture backends.
///
/// Implement this trait to feed a [`TrackerPipeline`](super::TrackerPipeline)
/// from a camera, a video file or a synthetic generator.
///
/// # Example
///
/// ```ignore
/// use roi_tracker::{Error, FrameSource};
///
/// struct Replay {
///     frames: std::vec::IntoIter<MyImage>,
/// }
///
/// impl FrameSource for Replay {
///     type Frame = MyImage;
///
///     fn read(&mut self) -> Result<MyImage, Error> {
///         self.frames
///             .next()
///             .ok_or_else(|| Error::FrameRead("end of recording".into()))
///     }
/// }
/// ```
pub trait FrameSource {
    /// Image type produced by this source.
    type Frame;

    /// Grab the next frame.
    ///
    /// Fails with [`Error::FrameRead`](crate::Error::FrameRead) when no frame
    /// can be delivered; the caller is expected to stop its loop.
    fn read(&mut self) -> Result<Self::Frame>;
}
