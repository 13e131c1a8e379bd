/// Axis-aligned bounding box in pixel coordinates.
///
/// Stored as origin plus extent (TLWH). While the user is still dragging, the
/// origin is the corner where the drag started and `width`/`height` may be
/// negative; a box committed for tracking always has a positive extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Origin x coordinate
    pub x: i32,
    /// Origin y coordinate
    pub y: i32,
    /// Horizontal extent, negative when dragged leftwards
    pub width: i32,
    /// Vertical extent, negative when dragged upwards
    pub height: i32,
}

impl Rect {
    /// Create a new Rect from origin and extent (TLWH format).
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from an anchor corner and the opposite corner.
    ///
    /// The anchor becomes the origin, so the extent is negative when the far
    /// corner lies above or left of it.
    #[inline]
    pub fn from_corners(anchor: (i32, i32), far: (i32, i32)) -> Self {
        Self {
            x: anchor.0,
            y: anchor.1,
            width: far.0 - anchor.0,
            height: far.1 - anchor.1,
        }
    }

    /// The origin corner.
    #[inline]
    pub fn top_left(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// The corner opposite the origin.
    #[inline]
    pub fn bottom_right(&self) -> (i32, i32) {
        (self.x + self.width, self.y + self.height)
    }

    /// Whether both extents are strictly positive.
    #[inline]
    pub fn has_positive_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Move the far corner to `(x, y)`, keeping the origin fixed.
    #[inline]
    pub fn stretch_to(&mut self, x: i32, y: i32) {
        *self = Rect::from_corners(self.top_left(), (x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners() {
        let rect = Rect::from_corners((10, 10), (50, 40));
        assert_eq!(rect, Rect::new(10, 10, 40, 30));
        assert_eq!(rect.bottom_right(), (50, 40));
    }

    #[test]
    fn test_inverted_drag_keeps_anchor() {
        let rect = Rect::from_corners((10, 10), (5, 5));
        assert_eq!(rect.top_left(), (10, 10));
        assert_eq!(rect.width, -5);
        assert_eq!(rect.height, -5);
        // Both extents negative is still unusable
        assert!(!rect.has_positive_area());
    }

    #[test]
    fn test_stretch_to() {
        let mut rect = Rect::new(10, 10, 0, 0);
        rect.stretch_to(30, 5);
        assert_eq!(rect, Rect::new(10, 10, 20, -5));
        assert!(!rect.has_positive_area());
        rect.stretch_to(30, 25);
        assert!(rect.has_positive_area());
    }

    #[test]
    fn test_zero_extent_is_not_positive() {
        assert!(!Rect::new(3, 3, 0, 10).has_positive_area());
        assert!(!Rect::new(3, 3, 10, 0).has_positive_area());
    }
}
