//! Per-craft tuning parameters.
//!
//! Every knob of the craft's flight model lives here so crafts can be tuned
//! as data: [`CraftTuning`] serializes to JSON presets and can be overridden
//! field-by-field from the INI configuration (see
//! [`SimConfig`](crate::resources::simconfig::SimConfig)).
//!
//! The control systems never validate these values at runtime; hosts are
//! expected to sanitize tuning at load time via [`CraftTuning::validate`].

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Flight-model parameters for one craft. Immutable during simulation.
///
/// # Fields
/// - `min_volume` / `max_volume` - bounds of the internal gas volume
/// - `max_tilt_deg` - symmetric roll limit the pilot can command, in degrees
/// - `input_dead_zone` - stick magnitude below which steering is ignored
/// - `heat_expansion_rate` - volume gained per unit of positive heat
/// - `cold_contraction_rate` - volume lost per unit of negative heat
/// - `air_drain_rate` - volume lost per second while throttling
/// - `rotation_speed_rate` - scales the steering controller's turn rate
/// - `throttle_force_rate` - magnitude of the continuous thrust force
/// - `initial_impulse` - magnitude of the one-shot launch impulse
/// - `cooldown_secs` - minimum time between launch impulses
/// - `buoyancy` - constant lift force applied every tick
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftTuning {
    pub min_volume: f32,
    pub max_volume: f32,
    pub max_tilt_deg: f32,
    pub input_dead_zone: f32,
    pub heat_expansion_rate: f32,
    pub cold_contraction_rate: f32,
    pub air_drain_rate: f32,
    pub rotation_speed_rate: f32,
    pub throttle_force_rate: f32,
    pub initial_impulse: f32,
    pub cooldown_secs: f32,
    pub buoyancy: Vec3,
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self {
            min_volume: 20.0,
            max_volume: 120.0,
            max_tilt_deg: 180.0,
            input_dead_zone: 0.1,
            heat_expansion_rate: 1.0,
            cold_contraction_rate: 1.0,
            air_drain_rate: 1.0,
            rotation_speed_rate: 1.0,
            throttle_force_rate: 1.0,
            initial_impulse: 0.0,
            cooldown_secs: 2.0,
            buoyancy: Vec3::Y,
        }
    }
}

impl CraftTuning {
    /// Volume the craft spawns and resets to: 80% of the configured range.
    ///
    /// Also the normalization baseline for the visual scale factor.
    pub fn nominal_volume(&self) -> f32 {
        0.8 * (self.max_volume - self.min_volume) + self.min_volume
    }

    /// Check the invariants the control systems rely on.
    ///
    /// The systems themselves never re-check these; call this wherever tuning
    /// enters the process (preset files, INI overrides, host-supplied values).
    pub fn validate(&self) -> Result<(), String> {
        if self.min_volume < 0.0 {
            return Err(format!("min_volume must be >= 0, got {}", self.min_volume));
        }
        if self.max_volume <= self.min_volume {
            return Err(format!(
                "max_volume ({}) must be greater than min_volume ({})",
                self.max_volume, self.min_volume
            ));
        }
        if self.input_dead_zone < 0.0 || self.input_dead_zone > 1.0 {
            return Err(format!(
                "input_dead_zone must be in [0, 1], got {}",
                self.input_dead_zone
            ));
        }
        for (name, value) in [
            ("heat_expansion_rate", self.heat_expansion_rate),
            ("cold_contraction_rate", self.cold_contraction_rate),
            ("air_drain_rate", self.air_drain_rate),
            ("rotation_speed_rate", self.rotation_speed_rate),
            ("throttle_force_rate", self.throttle_force_rate),
            ("initial_impulse", self.initial_impulse),
            ("cooldown_secs", self.cooldown_secs),
        ] {
            if value < 0.0 {
                return Err(format!("{} must be >= 0, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Load and validate a tuning preset from a JSON file.
    pub fn from_json_file(path: &str) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read tuning preset {}: {}", path, e))?;
        let tuning: CraftTuning = serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse tuning preset {}: {}", path, e))?;
        tuning.validate()?;
        Ok(tuning)
    }
}
