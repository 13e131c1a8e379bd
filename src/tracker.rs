mod engine;
mod overlay;
mod pointer;
mod rect;
mod session;
mod track_state;

pub use engine::{EngineBackend, EngineError, EngineVariant, TrackingEngine};
pub use overlay::{Color, LABEL_ORIGIN, Label, Outline, Overlay, Renderer};
pub use pointer::PointerEvent;
pub use rect::Rect;
pub use session::{SelectionOutcome, TrackingSession};
pub use track_state::InteractionState;
