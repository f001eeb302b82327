//! Game settings and tuning
//!
//! Loaded from an optional JSON file. Every field has a default, so a partial
//! file only overrides what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game tuning/configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    /// Screen width (obstacles spawn here)
    pub screen_width: f32,
    /// Screen height (restart button layout only)
    pub screen_height: f32,

    // === Ninja physics ===
    pub gravity: f32,
    pub jump_strength: f32,
    pub ground_y: f32,
    pub ninja_start: Vec2,
    pub ninja_size: f32,

    // === Obstacles ===
    pub obstacle_size: f32,
    pub obstacle_start_speed: f32,
    /// Speed added each time score reaches a multiple of `speed_step_interval`
    pub speed_step: f32,
    /// 0 disables the difficulty ramp
    pub speed_step_interval: u64,
    pub gap_min: u32,
    pub gap_max: u32,
    pub offscreen_x: f32,

    // === Timers ===
    pub spawn_period: f32,
    pub update_period: f32,

    /// RNG seed for gap draws (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            ground_y: GROUND_Y,
            ninja_start: NINJA_START,
            ninja_size: NINJA_SIZE,

            obstacle_size: OBSTACLE_SIZE,
            obstacle_start_speed: OBSTACLE_START_SPEED,
            speed_step: SPEED_STEP,
            speed_step_interval: SPEED_STEP_INTERVAL,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            offscreen_x: OFFSCREEN_X,

            spawn_period: SPAWN_PERIOD,
            update_period: UPDATE_PERIOD,

            seed: None,
        }
    }
}

impl Settings {
    /// Settings with a fixed RNG seed (for reproducible runs and tests)
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Malformed settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the simulation cannot run with
    ///
    /// Timer periods and body sizes must be finite and positive, and the gap
    /// range must be ordered. Anything else is passed through as-is.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn positive(value: f32, fallback: f32, name: &str) -> f32 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Invalid {name} {value}, using {fallback}");
                fallback
            }
        }

        self.spawn_period = positive(self.spawn_period, defaults.spawn_period, "spawn_period");
        self.update_period = positive(self.update_period, defaults.update_period, "update_period");
        self.ninja_size = positive(self.ninja_size, defaults.ninja_size, "ninja_size");
        self.obstacle_size = positive(self.obstacle_size, defaults.obstacle_size, "obstacle_size");

        if self.gap_min > self.gap_max {
            log::warn!("Gap range {}..={} inverted, swapping", self.gap_min, self.gap_max);
            std::mem::swap(&mut self.gap_min, &mut self.gap_max);
        }

        self
    }

    /// Top-left anchor and size of the restart button
    pub fn restart_button_rect(&self) -> (Vec2, Vec2) {
        let center = Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0);
        (center + RESTART_BUTTON_OFFSET, RESTART_BUTTON_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.ground_y, 100.0);
        assert_eq!(settings.gravity, -1.0);
        assert_eq!(settings.jump_strength, 15.0);
        assert_eq!(settings.ninja_start, Vec2::new(50.0, 120.0));
        assert_eq!(settings.obstacle_start_speed, 5.0);
        assert_eq!((settings.gap_min, settings.gap_max), (150, 250));
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "screen_width": 1024.0, "seed": 7 }"#).unwrap();
        assert_eq!(settings.screen_width, 1024.0);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.screen_height, SCREEN_HEIGHT);
        assert_eq!(settings.spawn_period, SPAWN_PERIOD);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::seeded(42);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "gap_min": -3 }"#).is_err());
    }

    #[test]
    fn test_sanitized_fixes_bad_values() {
        let settings = Settings {
            spawn_period: 0.0,
            update_period: f32::NAN,
            ninja_size: -5.0,
            gap_min: 300,
            gap_max: 100,
            ..Settings::default()
        }
        .sanitized();

        assert_eq!(settings.spawn_period, SPAWN_PERIOD);
        assert_eq!(settings.update_period, UPDATE_PERIOD);
        assert_eq!(settings.ninja_size, NINJA_SIZE);
        assert_eq!((settings.gap_min, settings.gap_max), (100, 300));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/ninja-run/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_restart_button_rect() {
        let (pos, size) = Settings::default().restart_button_rect();
        assert_eq!(pos, Vec2::new(350.0, 230.0));
        assert_eq!(size, Vec2::new(200.0, 50.0));
    }
}
