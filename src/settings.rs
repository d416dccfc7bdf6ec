//! Game settings
//!
//! Fixed at startup: read once from an optional JSON file, validated, and
//! never changed while a session runs. Missing keys fall back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Headless autopilot tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotSettings {
    /// RNG seed (same seed, same run)
    pub seed: u64,
    /// Frames to play before sending quit (`None` runs until killed)
    pub max_frames: Option<u64>,
    /// Chance of pressing fire on any frame the trigger is released (0.0 - 1.0)
    pub fire_chance: f64,
    /// Frames to sit on the game-over screen before pressing restart
    pub restart_delay_frames: u32,
}

impl Default for AutopilotSettings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            max_frames: Some(60 * 60),
            fire_chance: 0.25,
            restart_delay_frames: 120,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,

    // === Loop ===
    /// Frames per second the loop is held to
    pub target_fps: u32,

    // === Headless driver ===
    pub autopilot: AutopilotSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: REFERENCE_WIDTH,
            height: REFERENCE_HEIGHT,
            target_fps: TARGET_FPS,
            autopilot: AutopilotSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string (call `validate` before use)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width < PLAYER_WIDTH {
            return Err(SettingsError::Invalid {
                field: "width",
                reason: format!("{} is narrower than the player ({})", self.width, PLAYER_WIDTH),
            });
        }
        if self.height <= PLAYER_BOTTOM_OFFSET {
            return Err(SettingsError::Invalid {
                field: "height",
                reason: format!(
                    "{} leaves no room above the player line ({})",
                    self.height, PLAYER_BOTTOM_OFFSET
                ),
            });
        }
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_PLAYFIELD_SIZE {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} exceeds the {} pixel limit", value, MAX_PLAYFIELD_SIZE),
                });
            }
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid {
                field: "target_fps",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.autopilot.fire_chance) {
            return Err(SettingsError::Invalid {
                field: "autopilot.fire_chance",
                reason: format!("{} is not a probability", self.autopilot.fire_chance),
            });
        }
        Ok(())
    }

    /// Wall-clock budget for one frame
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.width, 1200);
        assert_eq!(settings.height, 800);
        assert_eq!(settings.target_fps, 60);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "width": 600, "autopilot": { "seed": 7 } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.width, 600);
        assert_eq!(settings.height, 800);
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.autopilot.seed, 7);
        assert_eq!(settings.autopilot.restart_delay_frames, 120);
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            (r#"{ "width": 0 }"#, "width"),
            (r#"{ "height": 100 }"#, "height"),
            (r#"{ "width": 25000000 }"#, "width"),
            (r#"{ "height": 16385 }"#, "height"),
            (r#"{ "target_fps": 0 }"#, "target_fps"),
            (r#"{ "autopilot": { "fire_chance": 1.5 } }"#, "autopilot.fire_chance"),
        ];
        for (json, expected) in cases {
            let settings = Settings::from_json(json).unwrap();
            match settings.validate() {
                Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_largest_accepted_playfield_builds_a_session() {
        let json = r#"{ "width": 16384, "height": 16384 }"#;
        let settings = Settings::from_json(json).unwrap();
        assert!(settings.validate().is_ok());
        let session = crate::Session::new(&settings);
        assert_eq!(session.enemies()[0].pos, glam::IVec2::new(1365, 2048));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/modern-invaders.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let name = format!("modern-invaders-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, r#"{ "target_fps": 30 }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings.target_fps, 30);
        assert_eq!(settings.width, 1200);
    }

    #[test]
    fn test_load_malformed_file() {
        let name = format!("modern-invaders-bad-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "{ width: ").unwrap();
        let err = Settings::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
