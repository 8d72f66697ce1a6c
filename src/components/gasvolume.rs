//! Gas volume state and the thermal/drain model.
//!
//! The craft's single scalar state: how much gas is inside the envelope.
//! Heat expands it, cold and throttling shrink it, and the craft's visual
//! scale tracks it on every mutation. When the volume lands on the configured
//! floor the craft has no air left to throttle with; the systems layer turns
//! that into a forced throttle stop and an
//! [`AirDrainedEvent`](crate::events::airdrained::AirDrainedEvent).
//!
//! The component itself is side-effect free: every mutation reports what
//! happened through [`VolumeChange`] and the calling system decides what to
//! broadcast.

use bevy_ecs::prelude::Component;
use glam::Vec3;

use super::tuning::CraftTuning;

/// Tolerance for "volume sits on the floor" checks. Exact float equality is
/// never used; clamped arithmetic can leave the value a few ulps off.
pub const VOLUME_EPSILON: f32 = 1e-4;

/// Outcome of a single volume mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VolumeChange {
    /// The volume sits at the floor after this call.
    pub at_floor: bool,
    /// This call moved the volume onto the floor; it was above it before.
    /// Edge-triggered: repeated losses while already on the floor stay false.
    pub reached_floor: bool,
}

/// Internal gas quantity of one craft, plus the spawn-time scale it is
/// normalized against.
///
/// Invariant: `volume` stays within the tuning's `[min_volume, max_volume]`
/// after every mutation.
#[derive(Component, Clone, Copy, Debug)]
pub struct GasVolume {
    volume: f32,
    initial_scale: Vec3,
}

impl GasVolume {
    /// Create the spawn-time state: nominal volume, captured base scale.
    pub fn spawn_at_nominal(tuning: &CraftTuning, initial_scale: Vec3) -> Self {
        Self {
            volume: tuning.nominal_volume(),
            initial_scale,
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Scale captured at spawn; all scale factors are relative to it.
    pub fn initial_scale(&self) -> Vec3 {
        self.initial_scale
    }

    /// Whether the volume is within [`VOLUME_EPSILON`] of the floor.
    pub fn is_at_floor(&self, tuning: &CraftTuning) -> bool {
        (self.volume - tuning.min_volume).abs() < VOLUME_EPSILON
    }

    /// Apply an external heat delta.
    ///
    /// Positive deltas expand the volume scaled by `heat_expansion_rate`,
    /// negative deltas contract it scaled by `cold_contraction_rate`, zero is
    /// a no-op. The result is clamped to the configured bounds.
    pub fn apply_heat(&mut self, tuning: &CraftTuning, delta: f32) -> VolumeChange {
        let was_at_floor = self.is_at_floor(tuning);
        if delta > 0.0 {
            self.volume += delta * tuning.heat_expansion_rate;
        } else if delta < 0.0 {
            // delta is already negative: this subtracts a cold-scaled magnitude
            self.volume += delta * tuning.cold_contraction_rate;
        }
        self.settle(tuning, was_at_floor)
    }

    /// Remove `amount` of gas directly. Used by the throttle drain path.
    pub fn drain(&mut self, tuning: &CraftTuning, amount: f32) -> VolumeChange {
        let was_at_floor = self.is_at_floor(tuning);
        self.volume -= amount;
        self.settle(tuning, was_at_floor)
    }

    /// Current visual/collision scale: `initial_scale * volume / nominal`.
    pub fn scale_for(&self, tuning: &CraftTuning) -> Vec3 {
        self.initial_scale * (self.volume / tuning.nominal_volume())
    }

    /// Restore the nominal volume (level-restart semantics).
    pub fn reset(&mut self, tuning: &CraftTuning) {
        self.volume = tuning.nominal_volume();
    }

    fn settle(&mut self, tuning: &CraftTuning, was_at_floor: bool) -> VolumeChange {
        self.volume = self.volume.clamp(tuning.min_volume, tuning.max_volume);
        let at_floor = self.is_at_floor(tuning);
        VolumeChange {
            at_floor,
            reached_floor: at_floor && !was_at_floor,
        }
    }
}
