use anyhow::{Context, Result};
use log::{error, info};

use roi_tracker::integration::{CameraSource, CaptureConfig, MatRenderer, OpenCvBackend, Window};
use roi_tracker::{EngineVariant, Error, TrackerPipeline, TrackingSession};

/// Settings for the interactive demo.
#[derive(Debug, Clone)]
struct AppConfig {
    capture: CaptureConfig,
    window_title: String,
    preferred_variant: EngineVariant,
    quit_key: char,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capture: CaptureConfig::default(),
            window_title: "Object Tracker".to_string(),
            preferred_variant: EngineVariant::Precise,
            quit_key: 'q',
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();

    // No tracker, no window
    let session = TrackingSession::new(OpenCvBackend, config.preferred_variant).context(
        "no suitable tracker found, ensure OpenCV was built with the contrib tracking module",
    )?;
    let camera = CameraSource::open(&config.capture).context("could not open webcam")?;
    let window = Window::open(&config.window_title)?;

    info!(
        "Drag a box with the left mouse button to start tracking, press '{}' to quit",
        config.quit_key
    );

    let mut pipeline = TrackerPipeline::new(camera, session, MatRenderer::default());
    loop {
        let frame = match pipeline.step(window.pending_events()) {
            Ok(frame) => frame,
            Err(Error::FrameRead(reason)) => {
                error!("Could not read frame: {}", reason);
                break;
            }
            Err(e) => return Err(e.into()),
        };
        window.show(&frame)?;

        if window.poll_key(1)? == Some(config.quit_key) {
            break;
        }
    }

    info!("Processed {} frames", pipeline.frame_id());
    Ok(())
}
