//! Game settings and preferences
//!
//! Stored as JSON by whatever shell hosts the game; the core only reads them.

use serde::{Deserialize, Serialize};

use crate::consts::RANDOM_TARGET_TILE_RANGE;

/// Key bindings, matched against lower-cased key names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    /// Held to fire at the nearest monster
    pub fire: String,
    /// Toggles pause
    pub pause: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            up: "arrowup".to_string(),
            down: "arrowdown".to_string(),
            left: "arrowleft".to_string(),
            right: "arrowright".to_string(),
            fire: " ".to_string(),
            pause: "p".to_string(),
        }
    }
}

impl Controls {
    /// Lower-case every binding so they match normalised key events
    pub fn normalized(mut self) -> Self {
        for key in [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
            &mut self.fire,
            &mut self.pause,
        ] {
            *key = key.to_lowercase();
        }
        self
    }
}

/// How the bundled tick driver rolls monster intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverTuning {
    /// Chance per tick that a monster picks a new target
    pub retarget_chance: f64,
    /// Chance per tick that a monster fires
    pub shoot_chance: f64,
    /// Maximum distance of a new target from the monster (tiles)
    pub target_range_tiles: i32,
}

impl Default for DriverTuning {
    fn default() -> Self {
        Self {
            retarget_chance: 0.02,
            shoot_chance: 0.02,
            target_range_tiles: RANDOM_TARGET_TILE_RANGE,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub controls: Controls,
    pub driver: DriverTuning,
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(Self {
            controls: settings.controls.normalized(),
            ..settings
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse settings, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(err) => {
                log::warn!("Invalid settings ({err}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.controls.pause = "escape".to_string();
        settings.driver.shoot_chance = 0.5;
        let json = settings.to_json().expect("serializes");
        assert_eq!(Settings::from_json(&json).expect("parses"), settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"controls": {"fire": "F"}}"#).expect("parses");
        assert_eq!(settings.controls.fire, "f");
        assert_eq!(settings.controls.pause, "p");
        assert_eq!(settings.driver, DriverTuning::default());
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(Settings::from_json_or_default("not json"), Settings::default());
    }
}
