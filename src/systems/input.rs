//! Pilot input systems.
//!
//! - [`poll_pilot_cmds`] drains the [`PilotBridge`] command channel into the
//!   [`PilotInput`] resource at the start of each tick, so all input mutation
//!   happens at one deterministic point.
//! - [`clear_pilot_edges`] consumes the press/release edge flags at the end
//!   of the tick; each discrete throttle event is observed exactly once.

use bevy_ecs::prelude::*;

use crate::resources::pilotinput::{PilotBridge, PilotInput};

/// Drain queued pilot commands into the input resource.
///
/// Commands are applied in arrival order, so the last write to an axis within
/// a tick wins. Hosts that mutate [`PilotInput`] directly can run without a
/// bridge; the system is then a no-op.
pub fn poll_pilot_cmds(bridge: Option<Res<PilotBridge>>, mut input: ResMut<PilotInput>) {
    let Some(bridge) = bridge else {
        return;
    };
    for cmd in bridge.rx.try_iter() {
        input.apply(cmd);
    }
}

/// Reset press/release edges after the controllers have seen them.
pub fn clear_pilot_edges(mut input: ResMut<PilotInput>) {
    input.clear_edges();
}
