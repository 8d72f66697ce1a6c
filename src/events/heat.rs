//! External heat commands.
//!
//! Environment features (burners, cold pockets, weather) affect a craft by
//! writing [`HeatCmd`] messages; the
//! [`apply_heat_cmds`](crate::systems::heat::apply_heat_cmds) system drains
//! the mailbox each tick and feeds the deltas into the target craft's
//! [`GasVolume`](crate::components::gasvolume::GasVolume).

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// Heat or cold applied to one craft by an external source.
#[derive(Message, Debug, Clone, Copy)]
pub struct HeatCmd {
    /// The craft to affect.
    pub target: Entity,
    /// Positive expands the gas volume, negative contracts it.
    pub delta: f32,
}
