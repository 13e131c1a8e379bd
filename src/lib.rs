//! Interactive region tracking.
//!
//! The user drags a box over a live video, and the region is then followed
//! frame to frame by an external visual tracker (CSRT, or KCF when CSRT is not
//! available). This crate owns the interaction state machine; capture,
//! tracking and drawing are reached through the traits in [`tracker`] and
//! [`integration`].

pub mod error;
pub mod integration;
pub mod tracker;

#[cfg(test)]
mod test_stuff;

pub use error::{Error, Result};
pub use integration::{FrameSource, TrackerPipeline};
pub use tracker::{
    Color, EngineBackend, EngineError, EngineVariant, InteractionState, Overlay, PointerEvent,
    Rect, Renderer, SelectionOutcome, TrackingEngine, TrackingSession,
};
