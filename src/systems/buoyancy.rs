//! Constant buoyant lift.

use bevy_ecs::prelude::*;

use crate::components::body::{FORCE_BUOYANCY, PhysicsBody};
use crate::components::tuning::CraftTuning;

/// Keep each craft's buoyancy force registered on its body.
///
/// Re-applied every tick so host-side tuning edits take effect immediately.
pub fn apply_buoyancy(mut query: Query<(&CraftTuning, &mut PhysicsBody)>) {
    for (tuning, mut body) in query.iter_mut() {
        body.apply_force(FORCE_BUOYANCY, tuning.buoyancy);
    }
}
