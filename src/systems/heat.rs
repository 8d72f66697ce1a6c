//! External heat application.
//!
//! Drains the [`HeatCmd`](crate::events::heat::HeatCmd) mailbox once per tick
//! and feeds each delta into the target craft's
//! [`GasVolume`](crate::components::gasvolume::GasVolume). The craft's scale
//! tracks the volume on every mutation, and the tick a craft's volume first
//! lands on its floor an
//! [`AirDrainedEvent`](crate::events::airdrained::AirDrainedEvent) is
//! triggered and the throttle is forced off.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::gasvolume::GasVolume;
use crate::components::scale::Scale;
use crate::components::throttle::Throttle;
use crate::components::tuning::CraftTuning;
use crate::events::airdrained::AirDrainedEvent;
use crate::events::heat::HeatCmd;

/// Apply queued heat/cold deltas to their target crafts.
pub fn apply_heat_cmds(
    mut reader: MessageReader<HeatCmd>,
    mut query: Query<(&CraftTuning, &mut GasVolume, &mut Throttle, &mut Scale)>,
    mut commands: Commands,
) {
    for cmd in reader.read() {
        let Ok((tuning, mut gas, mut throttle, mut scale)) = query.get_mut(cmd.target) else {
            debug!("heat command for unknown craft {:?}", cmd.target);
            continue;
        };

        let change = gas.apply_heat(tuning, cmd.delta);
        // Scale tracks volume per mutation, never per batch.
        scale.scale = gas.scale_for(tuning);

        if change.at_floor {
            throttle.active = false;
        }
        if change.reached_floor {
            commands.trigger(AirDrainedEvent { craft: cmd.target });
        }
    }
}

/// Advance the `HeatCmd` mailbox.
///
/// Bevy ECS' [`Messages`] API requires calling `update()` once per tick so
/// writes age out after readers had their chance. Run this at the end of the
/// tick schedule.
pub fn update_heat_cmds(mut msgs: ResMut<Messages<HeatCmd>>) {
    msgs.update();
}
