//! Tilt steering control law.
//!
//! Converts the 2D steering input into a bounded roll target and eases the
//! craft toward it with a quadratic profile: angular speed scales with the
//! square of the remaining error, so correction is fast far from the target
//! and settles smoothly near it.
//!
//! Orientation is scripted, not simulated. Each tick the controller zeroes
//! the body's angular velocity and applies an instantaneous world-space roll
//! patch, which keeps the tilt bounded and input-responsive regardless of the
//! host engine's mass and inertia tuning. Translation stays fully physical.
//!
//! The input vector is the direction the pilot wants the craft's bottom to
//! point: stick straight down means level, stick right rolls the bottom
//! toward +X.

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};

use crate::components::body::PhysicsBody;
use crate::components::steering::TiltSteering;
use crate::components::tuning::CraftTuning;
use crate::math::normalize_axis;
use crate::resources::pilotinput::PilotInput;
use crate::resources::worldtime::WorldTime;

/// Reference direction the tilt angle is measured from: the craft's bottom
/// at rest, in the screen plane.
const DOWN_2D: Vec2 = Vec2::new(0.0, -1.0);

/// Update each craft's tilt target from the steering input and apply this
/// tick's rotation increment.
pub fn orientation_controller(
    mut query: Query<(&CraftTuning, &mut TiltSteering, &mut PhysicsBody)>,
    input: Res<PilotInput>,
    time: Res<WorldTime>,
) {
    for (tuning, mut steering, mut body) in query.iter_mut() {
        if input.steer.length() < tuning.input_dead_zone {
            // Neutral stick: the previous target persists and the body is
            // left entirely alone this tick.
            continue;
        }

        let dir = input.steer.normalize();
        // Unsigned angle between straight-down and the stick, [0, 180].
        let mut target = DOWN_2D.dot(dir).clamp(-1.0, 1.0).acos().to_degrees();
        // Stick on the left half steers to a negative roll.
        if input.steer.x < 0.0 {
            target = -target;
        }

        let max_tilt = tuning.max_tilt_deg.clamp(0.0, 360.0);
        steering.target_deg = target.clamp(-max_tilt, max_tilt);

        let current = normalize_axis(body.rotator().roll);
        let needed = normalize_axis(steering.target_deg - current);

        // Quadratic ease, sign preserved from the remaining error.
        let increment = needed.signum() * needed * needed / (180.0 * 180.0)
            * time.delta
            * tuning.rotation_speed_rate;

        body.set_angular_velocity(Vec3::ZERO);
        body.add_world_roll(increment);
    }
}
