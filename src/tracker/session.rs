//! Selection and tracking state machine.

use log::{debug, error, info, warn};

use crate::error::Result;
use crate::tracker::engine::{EngineBackend, EngineError, EngineVariant, TrackingEngine};
use crate::tracker::overlay::{Label, Overlay, Renderer};
use crate::tracker::pointer::PointerEvent;
use crate::tracker::rect::Rect;
use crate::tracker::track_state::InteractionState;

/// Result of delivering a pointer event to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The event did not apply in the current state
    Ignored,
    /// A selection was started or its far corner moved
    Dragging(Rect),
    /// The released box had no positive area and was discarded
    Degenerate(Rect),
    /// The engine could not be started on the released box
    InitFailed(EngineError),
    /// Tracking started on the released box
    Committed(Rect),
}

/// Interactive single-object tracking session.
///
/// Owns the interaction state, the current box and the engine instance for
/// the active track. Frames are passed explicitly to every call that needs
/// one; the session never holds on to a frame.
pub struct TrackingSession<F: ?Sized, B: EngineBackend<F>> {
    backend: B,
    variant: EngineVariant,
    state: InteractionState,
    bbox: Option<Rect>,
    engine: Option<Box<dyn TrackingEngine<F>>>,
}

impl<F: ?Sized, B: EngineBackend<F>> TrackingSession<F, B> {
    /// Create an idle session.
    ///
    /// The engine variant is resolved here, once: `preferred` if the backend
    /// can build it, otherwise the fast variant. Fails with
    /// [`Error::NoTrackerAvailable`](crate::Error::NoTrackerAvailable) when
    /// no variant is usable.
    pub fn new(backend: B, preferred: EngineVariant) -> Result<Self> {
        let variant = EngineVariant::resolve(preferred, |v| backend.is_available(v))?;
        Ok(Self {
            backend,
            variant,
            state: InteractionState::Idle,
            bbox: None,
            engine: None,
        })
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Current box; `None` only while idle or after an engine fault.
    pub fn bbox(&self) -> Option<Rect> {
        self.bbox
    }

    /// Engine variant every track in this session uses.
    pub fn variant(&self) -> EngineVariant {
        self.variant
    }

    /// Start a new selection at `(x, y)`, abandoning whatever came before.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) {
        if self.engine.take().is_some() {
            debug!("Dropping {} tracker for a new selection", self.variant);
        }
        self.bbox = Some(Rect::new(x, y, 0, 0));
        self.transition(InteractionState::Selecting);
    }

    /// Drag the far corner of the selection to `(x, y)`.
    ///
    /// Returns `false` when no selection is in progress.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> bool {
        if self.state != InteractionState::Selecting {
            return false;
        }
        match self.bbox.as_mut() {
            Some(bbox) => {
                bbox.stretch_to(x, y);
                true
            }
            None => false,
        }
    }

    /// Release the selection at `(x, y)` and start tracking it in `frame`.
    pub fn on_pointer_up(&mut self, x: i32, y: i32, frame: &F) -> SelectionOutcome {
        if self.state != InteractionState::Selecting {
            return SelectionOutcome::Ignored;
        }
        let Some(mut bbox) = self.bbox.take() else {
            self.transition(InteractionState::Idle);
            return SelectionOutcome::Ignored;
        };
        bbox.stretch_to(x, y);

        if !bbox.has_positive_area() {
            warn!(
                "Invalid bounding box dimensions {}x{}, please select a valid region",
                bbox.width, bbox.height
            );
            self.transition(InteractionState::Idle);
            return SelectionOutcome::Degenerate(bbox);
        }

        match self.start_engine(frame, bbox) {
            Ok(engine) => {
                info!(
                    "Tracking {}x{} region at ({}, {}) with {}",
                    bbox.width, bbox.height, bbox.x, bbox.y, self.variant
                );
                self.engine = Some(engine);
                self.bbox = Some(bbox);
                self.transition(InteractionState::Tracking);
                SelectionOutcome::Committed(bbox)
            }
            Err(e) => {
                error!("Error initializing tracker: {}", e);
                self.transition(InteractionState::Idle);
                SelectionOutcome::InitFailed(e)
            }
        }
    }

    /// Deliver a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent, frame: &F) -> SelectionOutcome {
        match event {
            PointerEvent::Down { x, y } => {
                self.on_pointer_down(x, y);
                SelectionOutcome::Dragging(Rect::new(x, y, 0, 0))
            }
            PointerEvent::Move { x, y } if self.on_pointer_move(x, y) => self
                .bbox
                .map_or(SelectionOutcome::Ignored, SelectionOutcome::Dragging),
            PointerEvent::Move { .. } => SelectionOutcome::Ignored,
            PointerEvent::Up { x, y } => self.on_pointer_up(x, y, frame),
        }
    }

    /// Run the per-frame state logic and return what to draw.
    ///
    /// Only the tracking state touches the engine.
    pub fn step(&mut self, frame: &F) -> Overlay {
        match self.state {
            InteractionState::Idle => Overlay::none(),
            InteractionState::Selecting => match self.bbox {
                Some(bbox) => {
                    Overlay::outlined(bbox.top_left(), bbox.bottom_right(), Label::SELECTING)
                }
                None => Overlay::none(),
            },
            InteractionState::Tracking => self.track(frame),
            InteractionState::Lost => Overlay::label(Label::LOST),
        }
    }

    /// Process one frame and draw the resulting overlay onto it.
    pub fn advance<R: Renderer<F> + ?Sized>(&mut self, mut frame: F, renderer: &mut R) -> Result<F>
    where
        F: Sized,
    {
        let overlay = self.step(&frame);
        overlay.draw(&mut frame, renderer)?;
        Ok(frame)
    }

    fn start_engine(
        &self,
        frame: &F,
        bbox: Rect,
    ) -> std::result::Result<Box<dyn TrackingEngine<F>>, EngineError> {
        let mut engine = self.backend.create(self.variant)?;
        if engine.init(frame, bbox)? {
            Ok(engine)
        } else {
            Err(EngineError::Init(format!(
                "{} tracker rejected the selected region",
                self.variant
            )))
        }
    }

    fn track(&mut self, frame: &F) -> Overlay {
        let Some(engine) = self.engine.as_mut() else {
            self.lose();
            return Overlay::label(Label::LOST);
        };

        match engine.update(frame) {
            Ok(Some(bbox)) if bbox.has_positive_area() => {
                self.bbox = Some(bbox);
                Overlay::outlined(bbox.top_left(), bbox.bottom_right(), Label::TRACKING)
            }
            Ok(Some(bbox)) => {
                // Zero-area reports keep the track alive
                debug!("Ignoring tracker output {:?}", bbox);
                Overlay::label(Label::INVALID_OUTPUT)
            }
            Ok(None) => {
                info!("Tracking lost");
                self.lose();
                Overlay::label(Label::LOST)
            }
            Err(e) => {
                error!("Error during tracking: {}", e);
                self.bbox = None;
                self.lose();
                Overlay::label(Label::LOST)
            }
        }
    }

    fn lose(&mut self) {
        self.engine = None;
        self.transition(InteractionState::Lost);
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state != next {
            debug!("Session state {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        if next == InteractionState::Idle {
            self.bbox = None;
        }
    }
}
