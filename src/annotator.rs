//! Frame annotation pipeline: nested face and smile detection plus drawing.
//!
//! The annotator mutates each frame in place. Smile detection runs on a
//! grayscale crop of the face region, so smile rectangles come back relative
//! to the face's top-left corner. Drawing goes through a color crop of the
//! same region, which aliases the parent frame's pixel storage, so the
//! relative coordinates land at the correct absolute position without a
//! copy-back step.

use crate::config::CascadeConfig;
use crate::constants::{
    face_box_color, label_color, smile_box_color, BOX_THICKNESS, LABEL_FONT_SCALE,
    LABEL_OFFSET_PX, SMILE_LABEL,
};
use crate::detection::{CascadeDetector, DetectParams, Detector};
use crate::Result;
use log::debug;
use opencv::core::{Mat, Point, Rect};
use opencv::imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8};

/// Detections produced while annotating one frame.
///
/// Smile rectangles are reported in full-frame coordinates.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSummary {
    /// Detected face regions, full-frame coordinates
    pub faces: Vec<Rect>,
    /// Detected smiles, mapped back to full-frame coordinates
    pub smiles: Vec<Rect>,
}

/// Stateless per-frame annotator holding the two loaded detectors
pub struct FrameAnnotator {
    face_detector: Box<dyn Detector>,
    smile_detector: Box<dyn Detector>,
}

impl FrameAnnotator {
    /// Create an annotator from two already-constructed detectors
    pub fn new(face_detector: Box<dyn Detector>, smile_detector: Box<dyn Detector>) -> Self {
        Self {
            face_detector,
            smile_detector,
        }
    }

    /// Load both Haar cascades and build the production annotator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ModelLoad`] if either cascade file is missing
    /// or malformed.
    pub fn from_cascades(cascades: &CascadeConfig) -> Result<Self> {
        let face = CascadeDetector::from_file(&cascades.face, DetectParams::face())?;
        let smile = CascadeDetector::from_file(&cascades.smile, DetectParams::smile())?;
        Ok(Self::new(Box::new(face), Box::new(smile)))
    }

    /// Annotate one color frame in place.
    ///
    /// Runs face detection on the grayscale conversion of `frame`, draws a
    /// box around each face, then runs smile detection inside each face
    /// region and draws a box plus label for each smile. A frame with no
    /// detections passes through unmodified.
    pub fn annotate(&mut self, frame: &mut Mat) -> Result<AnnotationSummary> {
        let gray = to_grayscale(frame)?;

        let faces = self.face_detector.detect(&gray)?;
        let mut smiles = Vec::new();

        for &face in &faces {
            imgproc::rectangle(frame, face, face_box_color(), BOX_THICKNESS, LINE_8, 0)?;

            let roi_gray = Mat::roi(&gray, face)?;
            let found = self.smile_detector.detect(&roi_gray.clone_pointee())?;
            if found.is_empty() {
                continue;
            }

            // Color crop shares storage with the frame; smile coordinates are
            // relative to the face region and must be drawn through it
            let mut roi_color = Mat::roi_mut(frame, face)?;
            for smile in found {
                imgproc::rectangle(
                    &mut roi_color,
                    smile,
                    smile_box_color(),
                    BOX_THICKNESS,
                    LINE_8,
                    0,
                )?;
                imgproc::put_text(
                    &mut roi_color,
                    SMILE_LABEL,
                    Point::new(smile.x, smile.y - LABEL_OFFSET_PX),
                    FONT_HERSHEY_SIMPLEX,
                    LABEL_FONT_SCALE,
                    label_color(),
                    BOX_THICKNESS,
                    LINE_8,
                    false,
                )?;
                smiles.push(to_absolute(face, smile));
            }
        }

        debug!("Annotated frame: {} face(s), {} smile(s)", faces.len(), smiles.len());

        Ok(AnnotationSummary { faces, smiles })
    }
}

/// Convert a BGR color frame to a single-channel grayscale image.
///
/// The conversion is deterministic: repeated calls on the same frame produce
/// bit-identical output.
pub fn to_grayscale(frame: &Mat) -> Result<Mat> {
    let mut gray = Mat::default();
    imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;
    Ok(gray)
}

/// Map a rectangle relative to a face region back to full-frame coordinates
#[must_use]
pub fn to_absolute(face: Rect, relative: Rect) -> Rect {
    Rect::new(face.x + relative.x, face.y + relative.y, relative.width, relative.height)
}
