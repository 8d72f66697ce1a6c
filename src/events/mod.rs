//! Event types and observers used by the craft core.
//!
//! Two notification styles, matching how each is consumed:
//! - [`airdrained`] - observer event triggered the moment a craft's volume
//!   reaches its floor (fire-and-forget, any number of subscribers)
//! - [`heat`] - buffered command message through which external heat/cold
//!   sources affect a craft, drained once per tick
//!
//! See each submodule for concrete semantics and example usage.

pub mod airdrained;
pub mod heat;
