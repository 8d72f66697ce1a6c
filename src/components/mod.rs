//! ECS components for craft entities.
//!
//! This module groups the per-craft state the control systems read and
//! mutate. Each craft is an entity carrying the full set; the systems in
//! [`crate::systems`] advance them once per tick in a fixed order.
//!
//! Submodules overview:
//! - [`body`] - force/impulse/orientation request surface for the host physics engine
//! - [`gasvolume`] - internal gas quantity and the thermal/drain model
//! - [`scale`] - visual/collision scale, kept in lock-step with volume
//! - [`steering`] - retained pilot tilt target
//! - [`throttle`] - throttle flag and impulse-cooldown state
//! - [`tuning`] - per-craft flight-model parameters, loadable as data

pub mod body;
pub mod gasvolume;
pub mod scale;
pub mod steering;
pub mod throttle;
pub mod tuning;
