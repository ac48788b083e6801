use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::CAMERA_STEP;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file")]
    Parse(#[from] serde_json::Error),
}

/// Viewer settings, loaded from a JSON file.
///
/// The `#[serde(default)]` on the struct fills fields missing from an
/// existing file with their `Default` values, so adding a field does not
/// break old files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub camera_step: f32,
    pub log_fps: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            title: "World Viewer".to_string(),
            window_width: 800,
            window_height: 600,
            camera_step: CAMERA_STEP,
            log_fps: true,
        }
    }
}

impl ViewerSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load settings, falling back to defaults when the file is absent.
    /// A present-but-invalid file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = ViewerSettings::default();
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.camera_step, CAMERA_STEP);
        assert!(settings.log_fps);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: ViewerSettings = serde_json::from_str(r#"{"title": "Demo"}"#).unwrap();
        assert_eq!(settings.title, "Demo");
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.camera_step, CAMERA_STEP);
    }

    #[test]
    fn round_trips_through_json() {
        let settings = ViewerSettings {
            title: "Test".to_string(),
            window_width: 1280,
            window_height: 720,
            camera_step: 0.25,
            log_fps: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: ViewerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn load_or_default_handles_missing_file() {
        let settings =
            ViewerSettings::load_or_default(Path::new("/nonexistent/viewer.json")).unwrap();
        assert_eq!(settings, ViewerSettings::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result: Result<ViewerSettings, _> = serde_json::from_str("not json");
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_a_settings_file() {
        let path = std::env::temp_dir().join("world_viewer_settings_test.json");
        std::fs::write(&path, r#"{"window_width": 320, "window_height": 200}"#).unwrap();

        let settings = ViewerSettings::load(&path).unwrap();
        assert_eq!(settings.window_width, 320);
        assert_eq!(settings.window_height, 200);
        assert_eq!(settings.title, "World Viewer");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = ViewerSettings::load(Path::new("/nonexistent/viewer.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
