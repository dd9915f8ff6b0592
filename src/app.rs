//! Main application module for the smile detection loop.

use crate::annotator::FrameAnnotator;
use crate::capture::{CameraSource, FrameSource};
use crate::config::Config;
use crate::constants::EXIT_KEY;
use crate::display::{DisplaySink, HighGuiSink};
use crate::Result;
use log::{info, warn};

/// Loop state: the exit key is the single Running → Stopped transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Stopped,
}

/// Counters collected over one run of the main loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames successfully annotated and displayed
    pub frames_displayed: u64,
    /// Iterations skipped because the frame read transiently failed
    pub frames_dropped: u64,
}

/// Main application struct
pub struct SmileApp {
    annotator: FrameAnnotator,
    source: Box<dyn FrameSource>,
    sink: Box<dyn DisplaySink>,
    poll_interval_ms: i32,
}

impl SmileApp {
    /// Create the application from configuration.
    ///
    /// Cascades are loaded and the camera is opened before any window is
    /// created, so fatal startup errors surface without a window appearing.
    pub fn new(config: &Config) -> Result<Self> {
        info!("Initializing smile detection application");

        let annotator = FrameAnnotator::from_cascades(&config.cascades)?;
        let source = CameraSource::open(config.camera.index)?;
        let sink = HighGuiSink::new(&config.display.window_name)?;

        Ok(Self::with_parts(
            annotator,
            Box::new(source),
            Box::new(sink),
            config.display.poll_interval_ms,
        ))
    }

    /// Assemble the application from already-built parts
    pub fn with_parts(
        annotator: FrameAnnotator,
        source: Box<dyn FrameSource>,
        sink: Box<dyn DisplaySink>,
        poll_interval_ms: i32,
    ) -> Self {
        Self {
            annotator,
            source,
            sink,
            poll_interval_ms,
        }
    }

    /// Run the main loop until the exit key is pressed.
    ///
    /// The capture device and display windows are released exactly once, on
    /// every exit path, including mid-loop errors.
    pub fn run(&mut self) -> Result<RunStats> {
        let outcome = self.main_loop();

        if let Err(e) = self.shutdown() {
            warn!("Cleanup failed: {}", e);
        }

        outcome
    }

    fn main_loop(&mut self) -> Result<RunStats> {
        info!("Entering main loop");
        let mut state = LoopState::Running;
        let mut stats = RunStats::default();

        while state == LoopState::Running {
            match self.source.read_frame()? {
                Some(mut frame) => {
                    self.annotator.annotate(&mut frame)?;
                    self.sink.show(&frame)?;
                    stats.frames_displayed += 1;
                }
                None => {
                    // Webcams drop occasional frames; skip annotation and
                    // display so we never render a stale frame
                    warn!("Failed to read frame, skipping iteration");
                    stats.frames_dropped += 1;
                }
            }

            // Polled on dropped iterations too: the delay paces the loop and
            // the exit key must stay responsive under sustained read failure
            if self.sink.poll_key(self.poll_interval_ms)? == EXIT_KEY {
                info!("Exit requested by user");
                state = LoopState::Stopped;
            }
        }

        info!(
            "Main loop finished: {} frame(s) displayed, {} dropped",
            stats.frames_displayed, stats.frames_dropped
        );

        Ok(stats)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.source.release()?;
        self.sink.close_all()?;
        Ok(())
    }
}
