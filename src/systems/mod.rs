//! Craft systems.
//!
//! This module groups the ECS systems that advance the simulation. The tick
//! order is fixed and encoded in
//! [`build_tick_schedule`](crate::sim::build_tick_schedule):
//! input drain, external heat, buoyancy, steering, throttle, cooldown,
//! orientation clamp, edge cleanup, mailbox update.
//!
//! Submodules overview:
//! - [`buoyancy`] - keeps the constant lift force registered on each body
//! - [`heat`] - applies queued external heat/cold deltas to gas volumes
//! - [`input`] - drains the pilot command channel and consumes input edges
//! - [`limits`] - post-tick orientation safety clamp
//! - [`orientation`] - converts steering input into the per-tick roll patch
//! - [`throttle`] - thrust, launch impulse, air drain, and cooldown
//! - [`time`] - advances the simulation clock

pub mod buoyancy;
pub mod heat;
pub mod input;
pub mod limits;
pub mod orientation;
pub mod throttle;
pub mod time;
