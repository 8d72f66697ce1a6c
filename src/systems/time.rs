//! Tick clock update.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, applying `time_scale` to the provided delta.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance elapsed time, tick delta, and frame count on `WorldTime`.
///
/// `dt` is the unscaled tick delta in seconds. Call this from the host loop
/// before running the tick schedule.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.advance(dt);
}
