//! Helper functions and stub collaborators for tests
#![allow(dead_code)]

use opencv::core::{Mat, Rect};
use opencv::prelude::*;
use smile_detection::capture::FrameSource;
use smile_detection::detection::Detector;
use smile_detection::display::DisplaySink;
use smile_detection::{Error, Result};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Create a black test image with the specified dimensions and type
pub fn create_test_image(height: i32, width: i32, cv_type: i32) -> Result<Mat> {
    Mat::zeros(height, width, cv_type)?.to_mat().map_err(Into::into)
}

/// Detector stub that returns a fixed set of rectangles and records every
/// invocation along with the dimensions of the image it was given
pub struct StubDetector {
    hits: Vec<Rect>,
    calls: Rc<Cell<usize>>,
    seen_sizes: Rc<RefCell<Vec<(i32, i32)>>>,
}

impl StubDetector {
    pub fn new(hits: Vec<Rect>) -> (Self, Rc<Cell<usize>>, Rc<RefCell<Vec<(i32, i32)>>>) {
        let calls = Rc::new(Cell::new(0));
        let seen_sizes = Rc::new(RefCell::new(Vec::new()));
        let stub = Self {
            hits,
            calls: Rc::clone(&calls),
            seen_sizes: Rc::clone(&seen_sizes),
        };
        (stub, calls, seen_sizes)
    }
}

impl Detector for StubDetector {
    fn detect(&mut self, gray: &Mat) -> Result<Vec<Rect>> {
        self.calls.set(self.calls.get() + 1);
        self.seen_sizes.borrow_mut().push((gray.cols(), gray.rows()));
        Ok(self.hits.clone())
    }
}

/// Detector stub that always fails
pub struct FailingDetector;

impl Detector for FailingDetector {
    fn detect(&mut self, _gray: &Mat) -> Result<Vec<Rect>> {
        Err(Error::InvalidInput("detector failure injected by test".to_string()))
    }
}

/// Frame source stub driven by a script of reads.
///
/// `None` entries simulate transient read failures. Running past the end of
/// the script is an error so a runaway loop fails the test instead of
/// hanging it.
pub struct ScriptedSource {
    script: VecDeque<Option<Mat>>,
    releases: Rc<Cell<usize>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Option<Mat>>) -> (Self, Rc<Cell<usize>>) {
        let releases = Rc::new(Cell::new(0));
        let source = Self {
            script: script.into(),
            releases: Rc::clone(&releases),
        };
        (source, releases)
    }
}

impl FrameSource for ScriptedSource {
    fn read_frame(&mut self) -> Result<Option<Mat>> {
        self.script
            .pop_front()
            .ok_or_else(|| Error::InvalidInput("frame script exhausted".to_string()))
    }

    fn release(&mut self) -> Result<()> {
        self.releases.set(self.releases.get() + 1);
        Ok(())
    }
}

/// Display sink stub that counts shows and replays a script of key codes
pub struct ScriptedSink {
    keys: VecDeque<i32>,
    shows: Rc<Cell<usize>>,
    closes: Rc<Cell<usize>>,
}

impl ScriptedSink {
    pub fn new(keys: Vec<i32>) -> (Self, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let shows = Rc::new(Cell::new(0));
        let closes = Rc::new(Cell::new(0));
        let sink = Self {
            keys: keys.into(),
            shows: Rc::clone(&shows),
            closes: Rc::clone(&closes),
        };
        (sink, shows, closes)
    }
}

impl DisplaySink for ScriptedSink {
    fn show(&mut self, _frame: &Mat) -> Result<()> {
        self.shows.set(self.shows.get() + 1);
        Ok(())
    }

    fn poll_key(&mut self, _delay_ms: i32) -> Result<i32> {
        // Fall back to the exit key so an over-running loop terminates
        Ok(self.keys.pop_front().unwrap_or(smile_detection::constants::EXIT_KEY))
    }

    fn close_all(&mut self) -> Result<()> {
        self.closes.set(self.closes.get() + 1);
        Ok(())
    }
}
