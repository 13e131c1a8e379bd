//! Pointer events delivered by the window layer.

/// Raw mouse event codes as reported by OpenCV's highgui callbacks.
pub(crate) mod codes {
    pub const MOUSE_MOVE: i32 = 0;
    pub const LEFT_BUTTON_DOWN: i32 = 1;
    pub const LEFT_BUTTON_UP: i32 = 4;
}

/// A primary-button pointer event in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}

impl PointerEvent {
    /// Translate a highgui mouse callback `(event, x, y)` triple.
    ///
    /// Returns `None` for events the session does not react to (right and
    /// middle buttons, double clicks, wheel).
    pub fn from_mouse_code(event: i32, x: i32, y: i32) -> Option<Self> {
        match event {
            codes::LEFT_BUTTON_DOWN => Some(Self::Down { x, y }),
            codes::MOUSE_MOVE => Some(Self::Move { x, y }),
            codes::LEFT_BUTTON_UP => Some(Self::Up { x, y }),
            _ => None,
        }
    }

    /// Pointer position carried by the event.
    pub fn position(&self) -> (i32, i32) {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } | Self::Up { x, y } => (x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mouse_code() {
        assert_eq!(
            PointerEvent::from_mouse_code(1, 4, 5),
            Some(PointerEvent::Down { x: 4, y: 5 })
        );
        assert_eq!(
            PointerEvent::from_mouse_code(0, 6, 7),
            Some(PointerEvent::Move { x: 6, y: 7 })
        );
        assert_eq!(
            PointerEvent::from_mouse_code(4, 8, 9),
            Some(PointerEvent::Up { x: 8, y: 9 })
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        // Right button down/up, left double click
        for code in [2, 5, 7] {
            assert_eq!(PointerEvent::from_mouse_code(code, 1, 1), None);
        }
    }

    #[test]
    fn test_position() {
        assert_eq!(PointerEvent::Up { x: 3, y: -2 }.position(), (3, -2));
    }
}
