//! Air-depletion notification.
//!
//! The heat and throttle systems trigger [`AirDrainedEvent`] on the tick a
//! craft's gas volume first lands on its configured floor. The event is
//! edge-triggered: while the volume stays on the floor no further events
//! fire, and refilling above the floor re-arms the edge.
//!
//! Any number of observers can subscribe (game-over logic, audio cues, UI).
//! [`observe_log_air_drained`] ships as a reference observer; replace it with
//! game-specific handling.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event fired when a craft runs out of air.
///
/// Carries only the craft entity; subscribers that need volume or throttle
/// state can query it from the world.
#[derive(Event, Debug, Clone, Copy)]
pub struct AirDrainedEvent {
    /// The craft whose volume reached the floor.
    pub craft: Entity,
}

/// Reference observer that logs the depletion.
pub fn observe_log_air_drained(trigger: On<AirDrainedEvent>) {
    info!("craft {:?} is out of air", trigger.event().craft);
}
