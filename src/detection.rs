//! Cascade-classifier detection over grayscale images.

use crate::constants::{
    FACE_MIN_NEIGHBORS, FACE_SCALE_FACTOR, SMILE_MIN_NEIGHBORS, SMILE_SCALE_FACTOR,
};
use crate::{Error, Result};
use opencv::core::{Mat, Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::{CascadeClassifierTrait, CascadeClassifierTraitConst, VectorToVec};
use std::path::Path;

/// Multiscale search parameters for one cascade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectParams {
    /// Multiplicative step by which the search window shrinks between scales
    pub scale_factor: f64,
    /// Minimum number of overlapping candidates required to confirm a detection
    pub min_neighbors: i32,
}

impl DetectParams {
    /// Parameters used for face detection
    #[must_use]
    pub fn face() -> Self {
        Self {
            scale_factor: FACE_SCALE_FACTOR,
            min_neighbors: FACE_MIN_NEIGHBORS,
        }
    }

    /// Parameters used for smile detection within a face region
    #[must_use]
    pub fn smile() -> Self {
        Self {
            scale_factor: SMILE_SCALE_FACTOR,
            min_neighbors: SMILE_MIN_NEIGHBORS,
        }
    }
}

/// An object detector operating on single-channel intensity images.
///
/// Implemented by [`CascadeDetector`] for production use; tests substitute
/// stub implementations to script detections and count invocations.
pub trait Detector {
    /// Detect objects in a grayscale image.
    ///
    /// Returns rectangles in the coordinate frame of `gray`. An empty result
    /// is a valid, non-error outcome. Order is implementation-defined.
    fn detect(&mut self, gray: &Mat) -> Result<Vec<Rect>>;
}

/// Haar-cascade detector backed by `OpenCV`'s `CascadeClassifier`
#[derive(Debug)]
pub struct CascadeDetector {
    classifier: CascadeClassifier,
    params: DetectParams,
}

impl CascadeDetector {
    /// Load a cascade model from an XML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelLoad`] if the file is missing, malformed, or
    /// yields an empty classifier.
    pub fn from_file<P: AsRef<Path>>(path: P, params: DetectParams) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_str().ok_or_else(|| {
            Error::InvalidInput(format!("Cascade path is not valid UTF-8: {}", path.display()))
        })?;

        let classifier = CascadeClassifier::new(path_str).map_err(|_| Error::ModelLoad {
            path: path.to_path_buf(),
        })?;

        // OpenCV reports a missing file as an empty classifier rather than a
        // construction failure
        if classifier.empty()? {
            return Err(Error::ModelLoad {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { classifier, params })
    }

    /// Search parameters this detector was constructed with
    #[must_use]
    pub fn params(&self) -> DetectParams {
        self.params
    }
}

impl Detector for CascadeDetector {
    fn detect(&mut self, gray: &Mat) -> Result<Vec<Rect>> {
        let mut objects = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            gray,
            &mut objects,
            self.params.scale_factor,
            self.params.min_neighbors,
            0,
            Size::default(),
            Size::default(),
        )?;
        Ok(objects.to_vec())
    }
}
