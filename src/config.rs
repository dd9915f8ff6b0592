//! Configuration management for the smile detection application
//!
//! Detection thresholds are deliberately not configurable; they live in
//! [`crate::constants`]. Configuration covers the camera, the cascade model
//! paths, and the display window.

use crate::constants::{
    DEFAULT_FACE_CASCADE, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SMILE_CASCADE, DEFAULT_WINDOW_NAME,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Camera configuration
    pub camera: CameraConfig,

    /// Cascade model paths
    pub cascades: CascadeConfig,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Capture device index
    pub index: i32,
}

/// Cascade model file paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeConfig {
    /// Path to the frontal face Haar cascade XML
    pub face: PathBuf,

    /// Path to the smile Haar cascade XML
    pub smile: PathBuf,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Display window title
    pub window_name: String,

    /// Delay passed to the key poll each iteration, in milliseconds
    pub poll_interval_ms: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            cascades: CascadeConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { index: 0 }
    }
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            face: PathBuf::from(DEFAULT_FACE_CASCADE),
            smile: PathBuf::from(DEFAULT_SMILE_CASCADE),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_name: DEFAULT_WINDOW_NAME.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.camera.index < 0 {
            return Err(Error::Config("Camera index must not be negative".to_string()));
        }

        if self.display.poll_interval_ms <= 0 {
            return Err(Error::Config(
                "Key poll interval must be greater than 0 ms".to_string(),
            ));
        }
        if self.display.window_name.is_empty() {
            return Err(Error::Config("Window name must not be empty".to_string()));
        }

        // Model paths are the most likely real-world failure; check them
        // before any device or window is touched
        if !self.cascades.face.exists() {
            return Err(Error::Config(format!(
                "Face cascade not found: {}",
                self.cascades.face.display()
            )));
        }
        if !self.cascades.smile.exists() {
            return Err(Error::Config(format!(
                "Smile cascade not found: {}",
                self.cascades.smile.display()
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Smile Detection Configuration

# Capture device
camera:
  index: 0

# Haar cascade model paths
cascades:
  face: "assets/haarcascade_frontalface_default.xml"
  smile: "assets/haarcascade_smile.xml"

# Display settings
display:
  window_name: "Video Feed"
  poll_interval_ms: 30
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = Config::default();

        assert_eq!(config.camera.index, 0);
        assert_eq!(config.display.window_name, DEFAULT_WINDOW_NAME);
        assert_eq!(config.display.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(config.cascades.face, PathBuf::from(DEFAULT_FACE_CASCADE));
        assert_eq!(config.cascades.smile, PathBuf::from(DEFAULT_SMILE_CASCADE));
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let parsed: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        let defaults = Config::default();

        assert_eq!(parsed.camera.index, defaults.camera.index);
        assert_eq!(parsed.cascades.face, defaults.cascades.face);
        assert_eq!(parsed.cascades.smile, defaults.cascades.smile);
        assert_eq!(parsed.display.window_name, defaults.display.window_name);
        assert_eq!(parsed.display.poll_interval_ms, defaults.display.poll_interval_ms);
    }
}
