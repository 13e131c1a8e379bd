//! OpenCV backend: camera capture, CSRT/KCF trackers, drawing and display.
//!
//! Every collaborator of a [`TrackingSession`](crate::tracker::TrackingSession)
//! implemented on top of the `opencv` crate, operating on BGR [`Mat`] frames.
//!
//! # Example
//!
//! ```ignore
//! use roi_tracker::integration::{CameraSource, CaptureConfig, MatRenderer, OpenCvBackend, Window};
//! use roi_tracker::{EngineVariant, TrackerPipeline, TrackingSession};
//!
//! let session = TrackingSession::new(OpenCvBackend, EngineVariant::Precise)?;
//! let camera = CameraSource::open(&CaptureConfig::default())?;
//! let window = Window::open("Object Tracker")?;
//! let mut pipeline = TrackerPipeline::new(camera, session, MatRenderer::default());
//! loop {
//!     let frame = pipeline.step(window.pending_events())?;
//!     window.show(&frame)?;
//!     if window.poll_key(1)? == Some('q') {
//!         break;
//!     }
//! }
//! ```

use std::sync::mpsc::{self, Receiver};

use log::{debug, info, warn};
use opencv::core::{self, Mat, Point, Ptr, Scalar};
use opencv::prelude::*;
use opencv::tracking::{TrackerCSRT, TrackerKCF};
use opencv::{highgui, imgproc, videoio};

use super::FrameSource;
use crate::error::{Error, Result};
use crate::tracker::{
    Color, EngineBackend, EngineError, EngineVariant, PointerEvent, Rect, Renderer,
    TrackingEngine,
};

impl From<core::Rect> for Rect {
    fn from(r: core::Rect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for core::Rect {
    fn from(r: Rect) -> Self {
        core::Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Color> for Scalar {
    fn from(c: Color) -> Self {
        Scalar::new(c.b as f64, c.g as f64, c.r as f64, 0.0)
    }
}

/// Capture device settings.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub device_index: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device_index: 0,
            width: 640,
            height: 480,
        }
    }
}

/// Webcam frame source.
///
/// Frames are normalized to 8-bit, 3-channel BGR before they are handed out
/// (see [`to_bgr8`]).
pub struct CameraSource {
    capture: videoio::VideoCapture,
    device_index: i32,
}

impl CameraSource {
    /// Open the camera and request the configured resolution.
    ///
    /// The driver may ignore the resolution request; that is logged, not fatal.
    pub fn open(config: &CaptureConfig) -> Result<Self> {
        let unavailable = || Error::CameraUnavailable {
            index: config.device_index,
        };
        let mut capture = videoio::VideoCapture::new(config.device_index, videoio::CAP_ANY)
            .map_err(|e| {
                warn!("VideoCapture({}) failed: {}", config.device_index, e);
                unavailable()
            })?;
        if !capture.is_opened().unwrap_or(false) {
            return Err(unavailable());
        }

        for (prop, value, name) in [
            (videoio::CAP_PROP_FRAME_WIDTH, config.width, "width"),
            (videoio::CAP_PROP_FRAME_HEIGHT, config.height, "height"),
        ] {
            if !capture.set(prop, value as f64).unwrap_or(false) {
                warn!("Camera {} ignored frame {} {}", config.device_index, name, value);
            }
        }
        info!(
            "Opened camera {} requesting {}x{}",
            config.device_index, config.width, config.height
        );

        Ok(Self {
            capture,
            device_index: config.device_index,
        })
    }
}

impl FrameSource for CameraSource {
    type Frame = Mat;

    fn read(&mut self) -> Result<Mat> {
        let mut raw = Mat::default();
        let grabbed = self
            .capture
            .read(&mut raw)
            .map_err(|e| Error::FrameRead(e.to_string()))?;
        if !grabbed || raw.empty() {
            return Err(Error::FrameRead(format!(
                "camera {} returned no frame",
                self.device_index
            )));
        }

        to_bgr8(&raw).map_err(|e| Error::FrameRead(e.to_string()))
    }
}

/// Scale `raw` to 8-bit depth and expand or drop channels to plain BGR.
pub fn to_bgr8(raw: &Mat) -> opencv::Result<Mat> {
    let mut scaled = Mat::default();
    core::convert_scale_abs(raw, &mut scaled, 1.0, 0.0)?;
    let code = match scaled.channels() {
        3 => return Ok(scaled),
        1 => imgproc::COLOR_GRAY2BGR,
        4 => imgproc::COLOR_BGRA2BGR,
        n => {
            return Err(opencv::Error::new(
                core::StsBadArg,
                format!("unsupported frame with {n} channels"),
            ));
        }
    };
    let mut bgr = Mat::default();
    imgproc::cvt_color_def(&scaled, &mut bgr, code)?;
    Ok(bgr)
}

/// One OpenCV tracker instance of either variant.
pub enum OpenCvEngine {
    Csrt(Ptr<TrackerCSRT>),
    Kcf(Ptr<TrackerKCF>),
}

impl OpenCvEngine {
    /// Construct a tracker with default parameters.
    pub fn new(variant: EngineVariant) -> std::result::Result<Self, EngineError> {
        let built = match variant {
            EngineVariant::Precise => TrackerCSRT::create_def().map(Self::Csrt),
            EngineVariant::Fast => TrackerKCF::create_def().map(Self::Kcf),
        };
        built.map_err(|e| EngineError::Construction {
            variant,
            message: e.to_string(),
        })
    }
}

impl TrackingEngine<Mat> for OpenCvEngine {
    fn init(&mut self, frame: &Mat, bbox: Rect) -> std::result::Result<bool, EngineError> {
        let roi = core::Rect::from(bbox);
        let started = match self {
            Self::Csrt(tracker) => tracker.init(frame, roi),
            Self::Kcf(tracker) => tracker.init(frame, roi),
        };
        started.map_err(|e| EngineError::Init(e.to_string()))?;
        Ok(true)
    }

    fn update(&mut self, frame: &Mat) -> std::result::Result<Option<Rect>, EngineError> {
        let mut roi = core::Rect::default();
        let found = match self {
            Self::Csrt(tracker) => tracker.update(frame, &mut roi),
            Self::Kcf(tracker) => tracker.update(frame, &mut roi),
        }
        .map_err(|e| EngineError::Update(e.to_string()))?;
        Ok(found.then(|| Rect::from(roi)))
    }
}

/// Builds [`OpenCvEngine`]s; availability is probed by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCvBackend;

impl EngineBackend<Mat> for OpenCvBackend {
    fn is_available(&self, variant: EngineVariant) -> bool {
        match OpenCvEngine::new(variant) {
            Ok(_) => true,
            Err(e) => {
                debug!("{} unavailable: {}", variant, e);
                false
            }
        }
    }

    fn create(
        &self,
        variant: EngineVariant,
    ) -> std::result::Result<Box<dyn TrackingEngine<Mat>>, EngineError> {
        Ok(Box::new(OpenCvEngine::new(variant)?))
    }
}

/// Draws overlays with `imgproc`.
#[derive(Debug, Clone)]
pub struct MatRenderer {
    pub thickness: i32,
    pub font_scale: f64,
}

impl Default for MatRenderer {
    fn default() -> Self {
        Self {
            thickness: 2,
            font_scale: 1.0,
        }
    }
}

impl Renderer<Mat> for MatRenderer {
    type Error = opencv::Error;

    fn draw_rect(
        &mut self,
        frame: &mut Mat,
        p1: (i32, i32),
        p2: (i32, i32),
        color: Color,
    ) -> opencv::Result<()> {
        imgproc::rectangle_points(
            frame,
            Point::new(p1.0, p1.1),
            Point::new(p2.0, p2.1),
            color.into(),
            self.thickness,
            imgproc::LINE_8,
            0,
        )
    }

    fn draw_label(
        &mut self,
        frame: &mut Mat,
        text: &str,
        origin: (i32, i32),
        color: Color,
    ) -> opencv::Result<()> {
        imgproc::put_text(
            frame,
            text,
            Point::new(origin.0, origin.1),
            imgproc::FONT_HERSHEY_SIMPLEX,
            self.font_scale,
            color.into(),
            self.thickness,
            imgproc::LINE_8,
            false,
        )
    }
}

/// A highgui window that collects pointer events.
///
/// The mouse callback only queues events; they are handed to the session by
/// the loop, together with the frame they apply to.
pub struct Window {
    name: String,
    events: Receiver<PointerEvent>,
}

impl Window {
    pub fn open(name: &str) -> Result<Self> {
        highgui::named_window(name, highgui::WINDOW_AUTOSIZE)
            .map_err(|e| Error::Window(e.to_string()))?;

        let (tx, rx) = mpsc::channel();
        highgui::set_mouse_callback(
            name,
            Some(Box::new(move |event: i32, x: i32, y: i32, _flags: i32| {
                if let Some(event) = PointerEvent::from_mouse_code(event, x, y) {
                    // Receiver only goes away together with the window
                    let _ = tx.send(event);
                }
            })),
        )
        .map_err(|e| Error::Window(e.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            events: rx,
        })
    }

    /// Pointer events queued since the last call, oldest first.
    pub fn pending_events(&self) -> Vec<PointerEvent> {
        self.events.try_iter().collect()
    }

    pub fn show(&self, frame: &Mat) -> Result<()> {
        highgui::imshow(&self.name, frame).map_err(|e| Error::Window(e.to_string()))
    }

    /// Pump the GUI event loop for up to `delay_ms` and return the key pressed, if any.
    pub fn poll_key(&self, delay_ms: i32) -> Result<Option<char>> {
        let key = highgui::wait_key(delay_ms).map_err(|e| Error::Window(e.to_string()))?;
        if key < 0 {
            return Ok(None);
        }
        Ok(Some(char::from((key & 0xFF) as u8)))
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.name) {
            warn!("Failed to close window {}: {}", self.name, e);
        }
    }
}
