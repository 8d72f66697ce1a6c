//! Craft assembly and the fixed per-tick schedule.
//!
//! This is the orchestrator: it wires the per-craft components into one
//! entity, encodes the tick order the control law depends on, and provides
//! the level-restart reset. The host loop owns the cadence; each tick it
//! advances [`WorldTime`](crate::resources::worldtime::WorldTime) via
//! [`update_world_time`](crate::systems::time::update_world_time) and runs
//! the schedule built here.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use log::{info, warn};

use crate::components::body::{FORCE_BUOYANCY, PhysicsBody};
use crate::components::gasvolume::GasVolume;
use crate::components::scale::Scale;
use crate::components::steering::TiltSteering;
use crate::components::throttle::Throttle;
use crate::components::tuning::CraftTuning;
use crate::events::heat::HeatCmd;
use crate::resources::pilotinput::PilotInput;
use crate::resources::worldtime::WorldTime;
use crate::systems::buoyancy::apply_buoyancy;
use crate::systems::heat::{apply_heat_cmds, update_heat_cmds};
use crate::systems::input::{clear_pilot_edges, poll_pilot_cmds};
use crate::systems::limits::clamp_orientation;
use crate::systems::orientation::orientation_controller;
use crate::systems::throttle::{advance_cooldown, throttle_controller};

/// Insert the resources the craft systems expect.
///
/// The pilot command channel is optional and registered separately via
/// [`setup_pilot_input`](crate::resources::pilotinput::setup_pilot_input).
pub fn setup_world(world: &mut World) {
    world.init_resource::<WorldTime>();
    world.init_resource::<PilotInput>();
    world.init_resource::<Messages<HeatCmd>>();
}

/// Build the per-tick schedule.
///
/// The systems are chained; the control law depends on this exact order:
/// 1. drain pilot commands (all input mutation lands here)
/// 2. apply external heat
/// 3. refresh buoyancy
/// 4. steering controller
/// 5. throttle thrust and drain
/// 6. cooldown advance (unconditional)
/// 7. orientation safety clamp
/// 8. consume input edges
/// 9. age out the heat mailbox
pub fn build_tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            poll_pilot_cmds,
            apply_heat_cmds,
            apply_buoyancy,
            orientation_controller,
            throttle_controller,
            advance_cooldown,
            clamp_orientation,
            clear_pilot_edges,
            update_heat_cmds,
        )
            .chain(),
    );
    schedule
}

/// Spawn a craft entity.
///
/// The gas volume starts at the tuning's nominal value, `initial_scale` is
/// captured as the scale-normalization baseline, and the buoyancy force is
/// registered on the body for the craft's lifetime.
pub fn spawn_craft(world: &mut World, tuning: CraftTuning, initial_scale: Vec3) -> Entity {
    let gas = GasVolume::spawn_at_nominal(&tuning, initial_scale);
    let mut body = PhysicsBody::new();
    body.apply_force(FORCE_BUOYANCY, tuning.buoyancy);

    let entity = world
        .spawn((
            tuning,
            gas,
            TiltSteering::default(),
            Throttle::default(),
            body,
            Scale::new(initial_scale),
        ))
        .id();
    info!("spawned craft {:?}", entity);
    entity
}

/// Level-restart semantics: identity orientation, nominal volume, initial
/// scale. Throttle and cooldown state are left as they are.
pub fn reset_craft(world: &mut World, craft: Entity) {
    let Some(tuning) = world.get::<CraftTuning>(craft).cloned() else {
        warn!("reset requested for non-craft entity {:?}", craft);
        return;
    };

    if let Some(mut body) = world.get_mut::<PhysicsBody>(craft) {
        body.set_orientation(Quat::IDENTITY);
        body.set_angular_velocity(Vec3::ZERO);
    }

    let mut initial_scale = Vec3::ONE;
    if let Some(mut gas) = world.get_mut::<GasVolume>(craft) {
        gas.reset(&tuning);
        initial_scale = gas.initial_scale();
    }
    if let Some(mut scale) = world.get_mut::<Scale>(craft) {
        scale.scale = initial_scale;
    }
    info!("craft {:?} reset", craft);
}
