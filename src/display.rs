//! Frame display and keyboard polling.

use crate::Result;
use opencv::core::Mat;
use opencv::highgui::{self, WINDOW_AUTOSIZE};

/// A sink that renders annotated frames and reports keystrokes.
///
/// `poll_key` doubles as the display refresh delay and the exit-key probe,
/// matching `OpenCV`'s `wait_key` semantics.
pub trait DisplaySink {
    /// Render one frame
    fn show(&mut self, frame: &Mat) -> Result<()>;

    /// Wait up to `delay_ms` for a keypress; returns -1 if none arrived
    fn poll_key(&mut self, delay_ms: i32) -> Result<i32>;

    /// Tear down all display windows
    fn close_all(&mut self) -> Result<()>;
}

/// Display sink backed by `OpenCV`'s `highgui` window
pub struct HighGuiSink {
    window_name: String,
}

impl HighGuiSink {
    /// Create the named display window
    pub fn new(window_name: &str) -> Result<Self> {
        highgui::named_window(window_name, WINDOW_AUTOSIZE)?;
        Ok(Self {
            window_name: window_name.to_string(),
        })
    }
}

impl DisplaySink for HighGuiSink {
    fn show(&mut self, frame: &Mat) -> Result<()> {
        highgui::imshow(&self.window_name, frame)?;
        Ok(())
    }

    fn poll_key(&mut self, delay_ms: i32) -> Result<i32> {
        highgui::wait_key(delay_ms).map_err(Into::into)
    }

    fn close_all(&mut self) -> Result<()> {
        highgui::destroy_all_windows()?;
        Ok(())
    }
}
