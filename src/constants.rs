//! Constants used throughout the application

use opencv::core::Scalar;

/// Scale-step factor for the face cascade search
pub const FACE_SCALE_FACTOR: f64 = 1.1;

/// Minimum overlapping candidates required to confirm a face
pub const FACE_MIN_NEIGHBORS: i32 = 4;

/// Scale-step factor for the smile cascade search
pub const SMILE_SCALE_FACTOR: f64 = 1.7;

/// Minimum overlapping candidates required to confirm a smile.
/// Much stricter than the face threshold to suppress mouth/chin texture.
pub const SMILE_MIN_NEIGHBORS: i32 = 20;

/// Stroke width for boxes and the label, in pixels
pub const BOX_THICKNESS: i32 = 2;

/// Text drawn above each detected smile
pub const SMILE_LABEL: &str = "Smile";

/// Font scale for the smile label
pub const LABEL_FONT_SCALE: f64 = 0.45;

/// Vertical distance between a smile box and its label, in pixels
pub const LABEL_OFFSET_PX: i32 = 10;

/// Key code that stops the main loop (ESC)
pub const EXIT_KEY: i32 = 27;

/// Default delay passed to the display key poll, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: i32 = 30;

/// Default display window title
pub const DEFAULT_WINDOW_NAME: &str = "Video Feed";

/// Default face cascade model path
pub const DEFAULT_FACE_CASCADE: &str = "assets/haarcascade_frontalface_default.xml";

/// Default smile cascade model path
pub const DEFAULT_SMILE_CASCADE: &str = "assets/haarcascade_smile.xml";

/// Outline color for face boxes (BGR blue)
pub fn face_box_color() -> Scalar {
    Scalar::new(255.0, 0.0, 0.0, 0.0)
}

/// Outline color for smile boxes (BGR red)
pub fn smile_box_color() -> Scalar {
    Scalar::new(0.0, 0.0, 255.0, 0.0)
}

/// Color of the smile label text (BGR green)
pub fn label_color() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}
