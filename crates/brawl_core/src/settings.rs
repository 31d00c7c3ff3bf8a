//! Persisted player settings, read-only inputs to the orchestrator.
//!
//! The match core never writes these back; it reads them at spawn time
//! (selected character) and when emitting cues (music/sound gating).

use serde::{Deserialize, Serialize};

pub const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub music_on: bool,
    pub sounds_on: bool,
    /// Index into the player prefab pool. Clamped at spawn time, so a stale
    /// save pointing past the pool still spawns the last character.
    pub selected_character: usize,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            music_on: true,
            sounds_on: true,
            selected_character: 0,
        }
    }
}

impl PlayerSettings {
    pub fn from_json(json: &str) -> Result<Self, crate::error::ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_everything_on() {
        let settings = PlayerSettings::default();
        assert!(settings.music_on);
        assert!(settings.sounds_on);
        assert_eq!(settings.selected_character, 0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = PlayerSettings::from_json(r#"{"sounds_on": false}"#).unwrap();
        assert!(!settings.sounds_on);
        assert!(settings.music_on);
    }
}
