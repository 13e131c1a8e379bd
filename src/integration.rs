//! Integration module for connecting capture, tracking and display backends
//! with a [`TrackingSession`](crate::tracker::TrackingSession).
//!
//! This module provides the frame source trait, the per-frame control loop
//! step, and (with the `opencv-backend` feature) OpenCV implementations of
//! every collaborator.

mod frame;
mod pipeline;

pub use frame::FrameSource;
pub use pipeline::TrackerPipeline;

#[cfg(feature = "opencv-backend")]
mod opencv_backend;

#[cfg(feature = "opencv-backend")]
pub use opencv_backend::{
    CameraSource, CaptureConfig, MatRenderer, OpenCvBackend, OpenCvEngine, Window, to_bgr8,
};
