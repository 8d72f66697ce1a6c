//! Post-tick orientation safety clamp.
//!
//! Hard backstop after all controllers have run: if anything pushed the roll
//! past the configured tilt limit (impulse math, a host-side write, an
//! oversized increment from a long tick), snap every axis back into range
//! and kill the angular velocity so the physics engine does not reintroduce
//! the error on its next step.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::body::PhysicsBody;
use crate::components::tuning::CraftTuning;
use crate::math::clamp_each_axis;

/// Clamp each craft's orientation into the symmetric tilt range.
///
/// Bodies already inside the range are left untouched.
pub fn clamp_orientation(mut query: Query<(&CraftTuning, &mut PhysicsBody)>) {
    for (tuning, mut body) in query.iter_mut() {
        let max_tilt = tuning.max_tilt_deg.clamp(0.0, 360.0);
        let current = body.rotator().normalized();
        if current.roll.abs() > max_tilt {
            let clamped = clamp_each_axis(current, -max_tilt, max_tilt);
            body.set_orientation(clamped.to_quat());
            body.set_angular_velocity(Vec3::ZERO);
        }
    }
}
