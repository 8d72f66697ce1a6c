//! ECS resources shared by the craft systems.
//!
//! Overview
//! - [`pilotinput`] - buffered pilot input state and the cross-thread command bridge
//! - [`simconfig`] - INI-backed tick rate and craft tuning configuration
//! - [`worldtime`] - simulation clock and per-tick delta

pub mod pilotinput;
pub mod simconfig;
pub mod worldtime;
