//! Rigid-body request surface for the external physics engine.
//!
//! The core never integrates position or velocity. [`PhysicsBody`] is the
//! boundary component: control systems register forces, queue impulses, and
//! patch orientation on it; the host physics engine consumes
//! [`PhysicsBody::total_force`] and [`PhysicsBody::take_impulses`] each step
//! and writes the resulting transform back through the same component.
//!
//! Forces are named and persistent so callers can toggle them independently
//! (buoyancy stays registered for the craft's lifetime, throttle thrust is
//! re-aimed every tick and disabled between burns). Impulses are one-shot and
//! drain on read.

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::math::Rotator;

/// Slot name of the constant lift force.
pub const FORCE_BUOYANCY: &str = "buoyancy";
/// Slot name of the continuous throttle thrust.
pub const FORCE_THROTTLE: &str = "throttle";

/// A named persistent force that can be toggled on and off.
#[derive(Clone, Copy, Debug)]
pub struct BodyForce {
    /// World-space force vector.
    pub value: Vec3,
    /// Whether this force currently contributes to [`PhysicsBody::total_force`].
    pub enabled: bool,
}

impl BodyForce {
    pub fn new(value: Vec3) -> Self {
        Self {
            value,
            enabled: true,
        }
    }
}

/// Physics-body proxy: orientation observed from the host engine plus the
/// force/impulse requests the craft systems issue to it.
#[derive(Component, Clone, Debug)]
pub struct PhysicsBody {
    /// Current world orientation. Written by the host integrator and by the
    /// scripted rotation patches.
    pub orientation: Quat,
    /// Current angular velocity request. The steering controller zeroes this
    /// so engine torque cannot fight the scripted tilt.
    pub angular_velocity: Vec3,
    forces: FxHashMap<String, BodyForce>,
    impulses: SmallVec<[Vec3; 4]>,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsBody {
    pub fn new() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            angular_velocity: Vec3::ZERO,
            forces: FxHashMap::default(),
            impulses: SmallVec::new(),
        }
    }

    /// Register or re-aim a named force (enabled).
    pub fn apply_force(&mut self, name: &str, value: Vec3) {
        self.forces.insert(name.to_string(), BodyForce::new(value));
    }

    /// Enable or disable a named force. Returns false if no such force exists.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(force) = self.forces.get_mut(name) {
            force.enabled = enabled;
            true
        } else {
            false
        }
    }

    pub fn force(&self, name: &str) -> Option<&BodyForce> {
        self.forces.get(name)
    }

    /// Sum of all enabled forces. This is what a host integrator reads.
    pub fn total_force(&self) -> Vec3 {
        let mut total = Vec3::ZERO;
        for force in self.forces.values() {
            if force.enabled {
                total += force.value;
            }
        }
        total
    }

    /// Queue a one-shot impulse for the host integrator.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.impulses.push(impulse);
    }

    /// Impulses queued since the last [`PhysicsBody::take_impulses`].
    pub fn pending_impulses(&self) -> &[Vec3] {
        &self.impulses
    }

    /// Drain the queued impulses. Host-side, once per physics step.
    pub fn take_impulses(&mut self) -> SmallVec<[Vec3; 4]> {
        std::mem::take(&mut self.impulses)
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    /// Compose a world-space rotation onto the current orientation.
    ///
    /// This is the teleport-style patch: the orientation changes instantly,
    /// bypassing the engine's angular integration.
    pub fn rotate_world(&mut self, delta: Quat) {
        self.orientation = (delta * self.orientation).normalize();
    }

    /// World-space roll patch in degrees, about the craft's forward axis.
    pub fn add_world_roll(&mut self, roll_deg: f32) {
        self.rotate_world(Rotator::from_roll(roll_deg).to_quat());
    }

    /// Current orientation in Euler degrees.
    pub fn rotator(&self) -> Rotator {
        Rotator::from_quat(self.orientation)
    }

    /// Direction the craft's bottom points: canonical down rotated by the
    /// current orientation. Thrust and launch impulses oppose this.
    pub fn down_dir(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Y
    }
}
