//! Smile detection library for real-time webcam annotation.
//!
//! This library overlays bounding boxes around detected faces and, within
//! each face region, detected smiles, using:
//! - `OpenCV` Haar-cascade classifiers for detection
//! - `OpenCV` `videoio`/`highgui` for capture and display
//!
//! The per-frame pipeline is a thin sequential chain:
//! 1. Convert the captured frame to grayscale
//! 2. Run face detection on the grayscale frame
//! 3. For each face, run smile detection on the grayscale face crop
//! 4. Draw boxes and labels in place; smile coordinates are relative to the
//!    face crop and are drawn through an aliasing color crop of the frame
//!
//! # Examples
//!
//! ```no_run
//! use smile_detection::annotator::FrameAnnotator;
//! use smile_detection::config::Config;
//! use opencv::{imgcodecs, prelude::*};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut annotator = FrameAnnotator::from_cascades(&config.cascades)?;
//!
//! let mut image = imgcodecs::imread("test.jpg", imgcodecs::IMREAD_COLOR)?;
//! let summary = annotator.annotate(&mut image)?;
//!
//! for smile in &summary.smiles {
//!     println!("Smile at ({}, {})", smile.x, smile.y);
//! }
//! # Ok(())
//! # }
//! ```

/// Frame annotation pipeline combining face and smile detection with drawing
pub mod annotator;

/// Main application module
pub mod app;

/// Frame acquisition from the capture device
pub mod capture;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

/// Cascade-classifier detection
pub mod detection;

/// Frame display and keyboard polling
pub mod display;

/// Error types and result handling
pub mod error;

pub use error::{Error, Result};
