//! Simulation configuration resource.
//!
//! Manages settings loaded from an INI configuration file: the fixed tick
//! rate and per-craft tuning overrides. Provides defaults for safe startup
//! and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [sim]
//! tick_rate = 120
//!
//! [craft]
//! # Optional JSON preset applied before the individual overrides below.
//! preset = ./crafts/standard.json
//! min_volume = 20.0
//! max_volume = 120.0
//! max_tilt_deg = 60.0
//! input_dead_zone = 0.1
//! air_drain_rate = 4.0
//! throttle_force_rate = 900.0
//! initial_impulse = 250.0
//! cooldown_secs = 2.0
//! buoyancy_y = 10.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::tuning::CraftTuning;

/// Default safe values for startup
const DEFAULT_TICK_RATE: u32 = 120;
const DEFAULT_CONFIG_PATH: &str = "./aerostat.ini";

/// Simulation configuration resource.
///
/// Stores the fixed timestep and the craft tuning that new crafts spawn
/// with. Loading sanitizes the tuning: the control systems themselves never
/// validate (per-call clamps aside), so invalid values must not get past
/// this point.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Fixed simulation rate in ticks per second.
    pub tick_rate: u32,
    /// Tuning applied to newly spawned crafts.
    pub tuning: CraftTuning,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            tuning: CraftTuning::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Seconds per tick.
    pub fn fixed_delta(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. A `[craft]`
    /// `preset` JSON file, if configured, is applied before the individual
    /// field overrides. Tuning that fails validation is discarded with a
    /// warning and defaults restored.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [sim] section
        if let Some(rate) = config.getuint("sim", "tick_rate").ok().flatten() {
            self.tick_rate = (rate as u32).max(1);
        }

        // [craft] section
        if let Some(preset) = config.get("craft", "preset") {
            self.tuning = CraftTuning::from_json_file(&preset)?;
        }
        let getf = |key: &str| config.getfloat("craft", key).ok().flatten();
        if let Some(v) = getf("min_volume") {
            self.tuning.min_volume = v as f32;
        }
        if let Some(v) = getf("max_volume") {
            self.tuning.max_volume = v as f32;
        }
        if let Some(v) = getf("max_tilt_deg") {
            self.tuning.max_tilt_deg = v as f32;
        }
        if let Some(v) = getf("input_dead_zone") {
            self.tuning.input_dead_zone = v as f32;
        }
        if let Some(v) = getf("heat_expansion_rate") {
            self.tuning.heat_expansion_rate = v as f32;
        }
        if let Some(v) = getf("cold_contraction_rate") {
            self.tuning.cold_contraction_rate = v as f32;
        }
        if let Some(v) = getf("air_drain_rate") {
            self.tuning.air_drain_rate = v as f32;
        }
        if let Some(v) = getf("rotation_speed_rate") {
            self.tuning.rotation_speed_rate = v as f32;
        }
        if let Some(v) = getf("throttle_force_rate") {
            self.tuning.throttle_force_rate = v as f32;
        }
        if let Some(v) = getf("initial_impulse") {
            self.tuning.initial_impulse = v as f32;
        }
        if let Some(v) = getf("cooldown_secs") {
            self.tuning.cooldown_secs = v as f32;
        }
        if let Some(v) = getf("buoyancy_x") {
            self.tuning.buoyancy.x = v as f32;
        }
        if let Some(v) = getf("buoyancy_y") {
            self.tuning.buoyancy.y = v as f32;
        }
        if let Some(v) = getf("buoyancy_z") {
            self.tuning.buoyancy.z = v as f32;
        }

        if let Err(reason) = self.tuning.validate() {
            warn!(
                "Invalid craft tuning in {}: {} - using defaults",
                self.config_path.display(),
                reason
            );
            self.tuning = CraftTuning::default();
        }

        info!(
            "Loaded sim config: {} ticks/s, volume [{}, {}], max tilt {} deg, cooldown {}s",
            self.tick_rate,
            self.tuning.min_volume,
            self.tuning.max_volume,
            self.tuning.max_tilt_deg,
            self.tuning.cooldown_secs
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("sim", "tick_rate", Some(self.tick_rate.to_string()));

        let t = &self.tuning;
        let mut setf = |key: &str, value: f32| {
            config.set("craft", key, Some(value.to_string()));
        };
        setf("min_volume", t.min_volume);
        setf("max_volume", t.max_volume);
        setf("max_tilt_deg", t.max_tilt_deg);
        setf("input_dead_zone", t.input_dead_zone);
        setf("heat_expansion_rate", t.heat_expansion_rate);
        setf("cold_contraction_rate", t.cold_contraction_rate);
        setf("air_drain_rate", t.air_drain_rate);
        setf("rotation_speed_rate", t.rotation_speed_rate);
        setf("throttle_force_rate", t.throttle_force_rate);
        setf("initial_impulse", t.initial_impulse);
        setf("cooldown_secs", t.cooldown_secs);
        setf("buoyancy_x", t.buoyancy.x);
        setf("buoyancy_y", t.buoyancy.y);
        setf("buoyancy_z", t.buoyancy.z);

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("aerostat-{}-{}.ini", std::process::id(), name))
    }

    #[test]
    fn test_defaults() {
        let config = SimConfig::new();
        assert_eq!(config.tick_rate, DEFAULT_TICK_RATE);
        assert_eq!(config.tuning, CraftTuning::default());
    }

    #[test]
    fn test_fixed_delta() {
        let mut config = SimConfig::new();
        config.tick_rate = 50;
        assert!((config.fixed_delta() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let mut config = SimConfig::with_path("/nonexistent/aerostat.ini");
        assert!(config.load_from_file().is_err());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = temp_path("roundtrip");
        let mut config = SimConfig::with_path(&path);
        config.tick_rate = 60;
        config.tuning.max_tilt_deg = 45.0;
        config.tuning.initial_impulse = 300.0;
        config.tuning.buoyancy.y = 9.81;
        config.save_to_file().unwrap();

        let mut loaded = SimConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.tick_rate, 60);
        assert!((loaded.tuning.max_tilt_deg - 45.0).abs() < 1e-6);
        assert!((loaded.tuning.initial_impulse - 300.0).abs() < 1e-6);
        assert!((loaded.tuning.buoyancy.y - 9.81).abs() < 1e-4);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_tuning_falls_back_to_defaults() {
        let path = temp_path("invalid");
        std::fs::write(&path, "[craft]\nmin_volume = 200.0\nmax_volume = 100.0\n").unwrap();

        let mut config = SimConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.tuning, CraftTuning::default());

        let _ = std::fs::remove_file(&path);
    }
}
