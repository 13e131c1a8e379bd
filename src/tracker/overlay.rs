//! Draw requests produced by a session for each frame.

use crate::error::Error;

/// Fixed screen position of the status label.
pub const LABEL_ORIGIN: (i32, i32) = (10, 30);

/// 8-bit colour in BGR channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Color {
    pub const GREEN: Color = Color::bgr(0, 255, 0);
    pub const RED: Color = Color::bgr(0, 0, 255);

    #[inline]
    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Channel values in frame order.
    #[inline]
    pub fn to_bgr(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

/// Rectangle outline between two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub p1: (i32, i32),
    pub p2: (i32, i32),
    pub color: Color,
}

/// Status text drawn at [`LABEL_ORIGIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub text: &'static str,
    pub color: Color,
}

impl Label {
    pub const SELECTING: Label = Label {
        text: "Selecting",
        color: Color::RED,
    };
    pub const TRACKING: Label = Label {
        text: "Tracking",
        color: Color::GREEN,
    };
    pub const INVALID_OUTPUT: Label = Label {
        text: "Invalid Tracker Output",
        color: Color::RED,
    };
    pub const LOST: Label = Label {
        text: "Tracking Lost",
        color: Color::RED,
    };
}

/// Everything to draw on top of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    pub outline: Option<Outline>,
    pub label: Option<Label>,
}

impl Overlay {
    /// An overlay that leaves the frame untouched.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn label(label: Label) -> Self {
        Self {
            outline: None,
            label: Some(label),
        }
    }

    pub fn outlined(p1: (i32, i32), p2: (i32, i32), label: Label) -> Self {
        Self {
            outline: Some(Outline {
                p1,
                p2,
                color: label.color,
            }),
            label: Some(label),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_none() && self.label.is_none()
    }

    /// Issue the draw calls for this overlay onto `frame`.
    pub fn draw<F: ?Sized, R: Renderer<F> + ?Sized>(
        &self,
        frame: &mut F,
        renderer: &mut R,
    ) -> Result<(), Error> {
        if let Some(outline) = self.outline {
            renderer
                .draw_rect(frame, outline.p1, outline.p2, outline.color)
                .map_err(|e| Error::Render(e.to_string()))?;
        }
        if let Some(label) = self.label {
            renderer
                .draw_label(frame, label.text, LABEL_ORIGIN, label.color)
                .map_err(|e| Error::Render(e.to_string()))?;
        }
        Ok(())
    }
}

/// Drawing primitives for frames of type `F`.
pub trait Renderer<F: ?Sized> {
    /// Error type for drawing failures.
    type Error: std::fmt::Display;

    /// Draw a rectangle outline between two opposite corners.
    fn draw_rect(
        &mut self,
        frame: &mut F,
        p1: (i32, i32),
        p2: (i32, i32),
        color: Color,
    ) -> Result<(), Self::Error>;

    /// Draw a text label with its baseline starting at `origin`.
    fn draw_label(
        &mut self,
        frame: &mut F,
        text: &str,
        origin: (i32, i32),
        color: Color,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Renderer<Vec<u8>> for Recorder {
        type Error = String;

        fn draw_rect(
            &mut self,
            _frame: &mut Vec<u8>,
            p1: (i32, i32),
            p2: (i32, i32),
            color: Color,
        ) -> Result<(), Self::Error> {
            self.calls.push(format!("rect {:?} {:?} {:?}", p1, p2, color.to_bgr()));
            Ok(())
        }

        fn draw_label(
            &mut self,
            _frame: &mut Vec<u8>,
            text: &str,
            origin: (i32, i32),
            _color: Color,
        ) -> Result<(), Self::Error> {
            if text.is_empty() {
                return Err("empty label".to_string());
            }
            self.calls.push(format!("label {} {:?}", text, origin));
            Ok(())
        }
    }

    #[test]
    fn test_draw_order() {
        let mut frame = Vec::new();
        let mut recorder = Recorder::default();
        Overlay::outlined((1, 2), (3, 4), Label::TRACKING)
            .draw(&mut frame, &mut recorder)
            .unwrap();
        assert_eq!(
            recorder.calls,
            vec![
                "rect (1, 2) (3, 4) [0, 255, 0]".to_string(),
                "label Tracking (10, 30)".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_overlay_draws_nothing() {
        let mut recorder = Recorder::default();
        let overlay = Overlay::none();
        assert!(overlay.is_empty());
        overlay.draw(&mut Vec::new(), &mut recorder).unwrap();
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_render_error_is_mapped() {
        let overlay = Overlay::label(Label {
            text: "",
            color: Color::RED,
        });
        let err = overlay
            .draw(&mut Vec::new(), &mut Recorder::default())
            .unwrap_err();
        assert_eq!(err, Error::Render("empty label".to_string()));
    }
}
