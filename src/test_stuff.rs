//! Stub engines, backends and renderers shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use ndarray::Array3;

use crate::tracker::{
    Color, EngineBackend, EngineError, EngineVariant, Rect, Renderer, TrackingEngine,
};

/// Height x width x BGR, 8-bit.
pub type TestFrame = Array3<u8>;

pub fn blank_frame() -> TestFrame {
    Array3::zeros((120, 160, 3))
}

/// Scripted engine behaviour plus a record of every call made.
#[derive(Debug)]
pub struct Script {
    pub init: Result<bool, EngineError>,
    /// Queued update results; once drained the engine keeps reporting the
    /// box it was initialized with.
    pub updates: VecDeque<Result<Option<Rect>, EngineError>>,
    pub fail_create: bool,
    pub created: usize,
    pub created_variants: Vec<EngineVariant>,
    pub inits: Vec<Rect>,
    pub updates_called: usize,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            init: Ok(true),
            updates: VecDeque::new(),
            fail_create: false,
            created: 0,
            created_variants: Vec::new(),
            inits: Vec::new(),
            updates_called: 0,
        }
    }
}

pub struct StubEngine {
    script: Rc<RefCell<Script>>,
    target: Option<Rect>,
}

impl TrackingEngine<TestFrame> for StubEngine {
    fn init(&mut self, _frame: &TestFrame, bbox: Rect) -> Result<bool, EngineError> {
        let mut script = self.script.borrow_mut();
        script.inits.push(bbox);
        let result = script.init.clone();
        if let Ok(true) = result {
            self.target = Some(bbox);
        }
        result
    }

    fn update(&mut self, _frame: &TestFrame) -> Result<Option<Rect>, EngineError> {
        let mut script = self.script.borrow_mut();
        script.updates_called += 1;
        script.updates.pop_front().unwrap_or(Ok(self.target))
    }
}

pub struct StubBackend {
    available: Vec<EngineVariant>,
    script: Rc<RefCell<Script>>,
}

impl StubBackend {
    /// Backend offering both variants.
    pub fn new() -> Self {
        Self::with_available(&[EngineVariant::Precise, EngineVariant::Fast])
    }

    pub fn with_available(available: &[EngineVariant]) -> Self {
        Self {
            available: available.to_vec(),
            script: Rc::new(RefCell::new(Script::default())),
        }
    }

    pub fn script(&self) -> Rc<RefCell<Script>> {
        self.script.clone()
    }
}

impl EngineBackend<TestFrame> for StubBackend {
    fn is_available(&self, variant: EngineVariant) -> bool {
        self.available.contains(&variant)
    }

    fn create(
        &self,
        variant: EngineVariant,
    ) -> Result<Box<dyn TrackingEngine<TestFrame>>, EngineError> {
        let mut script = self.script.borrow_mut();
        if script.fail_create {
            return Err(EngineError::Construction {
                variant,
                message: "module not built".to_string(),
            });
        }
        script.created += 1;
        script.created_variants.push(variant);
        Ok(Box::new(StubEngine {
            script: self.script.clone(),
            target: None,
        }))
    }
}

/// Paints one-pixel outlines into the frame and records label text.
#[derive(Debug, Default)]
pub struct RasterRenderer {
    pub labels: Vec<String>,
}

impl Renderer<TestFrame> for RasterRenderer {
    type Error = Infallible;

    fn draw_rect(
        &mut self,
        frame: &mut TestFrame,
        p1: (i32, i32),
        p2: (i32, i32),
        color: Color,
    ) -> Result<(), Self::Error> {
        let (x1, x2) = (p1.0.min(p2.0), p1.0.max(p2.0));
        let (y1, y2) = (p1.1.min(p2.1), p1.1.max(p2.1));
        let (rows, cols, _) = frame.dim();
        for y in y1..=y2 {
            for x in x1..=x2 {
                let on_edge = x == x1 || x == x2 || y == y1 || y == y2;
                if !on_edge || x < 0 || y < 0 || x as usize >= cols || y as usize >= rows {
                    continue;
                }
                for (c, v) in color.to_bgr().into_iter().enumerate() {
                    frame[[y as usize, x as usize, c]] = v;
                }
            }
        }
        Ok(())
    }

    fn draw_label(
        &mut self,
        _frame: &mut TestFrame,
        text: &str,
        _origin: (i32, i32),
        _color: Color,
    ) -> Result<(), Self::Error> {
        self.labels.push(text.to_string());
        Ok(())
    }
}

/// Number of pixels in `frame` painted exactly `color`.
pub fn outline_pixels(frame: &TestFrame, color: Color) -> usize {
    let bgr = color.to_bgr();
    let mut count = 0;
    for row in frame.outer_iter() {
        for px in row.outer_iter() {
            if px.iter().copied().eq(bgr) {
                count += 1;
            }
        }
    }
    count
}
