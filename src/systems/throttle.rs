//! Throttle thrust, launch impulse, and cooldown.
//!
//! Two independent state axes drive this module:
//! - the throttle flag, set on press and cleared on release or forced off
//!   when the gas runs out;
//! - the impulse cooldown, which gates how often the one-shot launch impulse
//!   may fire. Continuous thrust is NOT gated by the cooldown: a craft can
//!   burn gas the whole time it is still cooling down from its last launch.
//!
//! Thrust and impulse both oppose the craft-bottom direction, so a tilted
//! craft accelerates along its own axis rather than straight up.

use bevy_ecs::prelude::*;

use crate::components::body::{FORCE_THROTTLE, PhysicsBody};
use crate::components::gasvolume::GasVolume;
use crate::components::scale::Scale;
use crate::components::throttle::Throttle;
use crate::components::tuning::CraftTuning;
use crate::events::airdrained::AirDrainedEvent;
use crate::resources::pilotinput::PilotInput;
use crate::resources::worldtime::WorldTime;

/// Handle throttle press/release edges, apply continuous thrust, and drain
/// the gas volume while burning.
pub fn throttle_controller(
    mut query: Query<(
        Entity,
        &CraftTuning,
        &mut GasVolume,
        &mut Throttle,
        &mut PhysicsBody,
        &mut Scale,
    )>,
    input: Res<PilotInput>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, tuning, mut gas, mut throttle, mut body, mut scale) in query.iter_mut() {
        // A press with the volume on the floor is ignored entirely: no air,
        // no throttle, no impulse.
        if input.throttle.just_pressed && !gas.is_at_floor(tuning) {
            throttle.active = true;
            if throttle.cooldown_complete {
                let launch_dir = -body.down_dir().normalize_or_zero();
                body.apply_impulse(launch_dir * tuning.initial_impulse);
                throttle.cooldown_complete = false;
                throttle.cooldown_timer = 0.0;
            }
        }
        if input.throttle.just_released {
            throttle.active = false;
        }

        if !throttle.active {
            body.set_force_enabled(FORCE_THROTTLE, false);
            continue;
        }

        // Continuous thrust opposes the craft-bottom direction.
        let thrust = -body.down_dir().normalize_or_zero() * tuning.throttle_force_rate;
        body.apply_force(FORCE_THROTTLE, thrust);

        let change = gas.drain(tuning, time.delta * tuning.air_drain_rate);
        scale.scale = gas.scale_for(tuning);
        if change.at_floor {
            // The thrust registered above still acts this tick; with the flag
            // cleared it is disabled on the next one.
            throttle.active = false;
        }
        if change.reached_floor {
            commands.trigger(AirDrainedEvent { craft: entity });
        }
    }
}

/// Advance the impulse cooldown.
///
/// Runs every tick regardless of throttle state. When the timer passes the
/// configured duration it resets and re-arms the impulse.
pub fn advance_cooldown(mut query: Query<(&CraftTuning, &mut Throttle)>, time: Res<WorldTime>) {
    for (tuning, mut throttle) in query.iter_mut() {
        if throttle.cooldown_complete {
            continue;
        }
        throttle.cooldown_timer += time.delta;
        if throttle.cooldown_timer > tuning.cooldown_secs {
            throttle.cooldown_timer = 0.0;
            throttle.cooldown_complete = true;
        }
    }
}
