//! Frame acquisition from the capture device.

use crate::{Error, Result};
use log::info;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE};

/// A source of color frames.
///
/// `read_frame` returns `Ok(None)` on a transient read failure; the caller is
/// expected to skip that iteration rather than terminate. Implementations
/// must tolerate `release` being called once after the last read.
pub trait FrameSource {
    /// Read the next frame, or `None` if this read transiently failed
    fn read_frame(&mut self) -> Result<Option<Mat>>;

    /// Release the underlying device handle
    fn release(&mut self) -> Result<()>;
}

/// Webcam frame source backed by `OpenCV`'s `VideoCapture`
pub struct CameraSource {
    capture: VideoCapture,
}

impl CameraSource {
    /// Open the camera at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceUnavailable`] if no camera can be opened at
    /// that index.
    pub fn open(index: i32) -> Result<Self> {
        info!("Opening camera {}", index);
        let mut capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(Error::DeviceUnavailable(index));
        }

        // Reduce buffer size for lower latency
        capture.set(CAP_PROP_BUFFERSIZE, 1.0)?;

        Ok(Self { capture })
    }
}

impl FrameSource for CameraSource {
    fn read_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    fn release(&mut self) -> Result<()> {
        info!("Releasing capture device");
        self.capture.release()?;
        Ok(())
    }
}
