//! TrackerPipeline for combining frame capture with an interactive session.

use log::debug;

use crate::error::Result;
use crate::tracker::{EngineBackend, PointerEvent, Renderer, SelectionOutcome, TrackingSession};

use super::FrameSource;

/// One capture source, one session and one renderer, driven a frame at a time.
///
/// Each call to [`step`](Self::step) reads a frame, delivers the pointer
/// events that arrived since the previous frame, advances the session and
/// returns the annotated frame for display.
pub struct TrackerPipeline<S, B, R>
where
    S: FrameSource,
    B: EngineBackend<S::Frame>,
    R: Renderer<S::Frame>,
{
    source: S,
    session: TrackingSession<S::Frame, B>,
    renderer: R,
    frame_id: u64,
}

impl<S, B, R> TrackerPipeline<S, B, R>
where
    S: FrameSource,
    B: EngineBackend<S::Frame>,
    R: Renderer<S::Frame>,
{
    /// Create a new pipeline around an already constructed session.
    pub fn new(source: S, session: TrackingSession<S::Frame, B>, renderer: R) -> Self {
        Self {
            source,
            session,
            renderer,
            frame_id: 0,
        }
    }

    /// Process a single frame.
    ///
    /// # Arguments
    /// * `events` - Pointer events received since the last frame, oldest first
    ///
    /// # Returns
    /// The annotated frame, or the error that should end the loop (a failed
    /// read or a failed draw).
    pub fn step<I>(&mut self, events: I) -> Result<S::Frame>
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        let frame = self.source.read()?;
        self.frame_id += 1;

        for event in events {
            let outcome = self.session.handle_pointer(event, &frame);
            if !matches!(outcome, SelectionOutcome::Ignored | SelectionOutcome::Dragging(_)) {
                debug!("Frame {}: {:?} -> {:?}", self.frame_id, event, outcome);
            }
        }

        self.session.advance(frame, &mut self.renderer)
    }

    /// Number of frames read so far.
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    /// Get a reference to the underlying session.
    pub fn session(&self) -> &TrackingSession<S::Frame, B> {
        &self.session
    }

    /// Get a reference to the underlying renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
