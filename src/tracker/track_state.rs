/// Interaction state of a tracking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No box exists
    #[default]
    Idle,
    /// The user is dragging out a box
    Selecting,
    /// A committed box is followed by the engine every frame
    Tracking,
    /// The engine failed on the latest frame; no further updates until a new selection
    Lost,
}

