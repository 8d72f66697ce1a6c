//! Pilot input resource and the cross-thread command bridge.
//!
//! The host input layer produces two continuous steering axes and discrete
//! throttle press/release events, possibly on another thread. To keep the
//! control law deterministic within a tick, those writes are buffered:
//! producers send [`PilotCmd`] through the [`PilotBridge`] channel, and the
//! [`poll_pilot_cmds`](crate::systems::input::poll_pilot_cmds) system drains
//! the queue into [`PilotInput`] exactly once at the start of each tick.
//!
//! Single-threaded hosts and tests can skip the channel and call the
//! [`PilotInput`] setters directly; the edge semantics are identical.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use glam::Vec2;

/// Boolean action state with per-tick edge flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether a press arrived since the last tick consumed its edges.
    pub just_pressed: bool,
    /// Whether a release arrived since the last tick consumed its edges.
    pub just_released: bool,
}

/// Commands sent from the host input layer to the tick loop.
#[derive(Debug, Clone, Copy)]
pub enum PilotCmd {
    /// Horizontal steering axis, `[-1, 1]`.
    SteerX(f32),
    /// Vertical steering axis, `[-1, 1]`.
    SteerY(f32),
    ThrottlePressed,
    ThrottleReleased,
}

/// Resource holding the steering vector and throttle state the control
/// systems consume each tick.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PilotInput {
    /// Latest raw steering input; each axis in `[-1, 1]`. The Y axis follows
    /// screen convention: stick-down is negative.
    pub steer: Vec2,
    pub throttle: ButtonState,
}

impl PilotInput {
    pub fn set_steer_x(&mut self, value: f32) {
        self.steer.x = value.clamp(-1.0, 1.0);
    }

    pub fn set_steer_y(&mut self, value: f32) {
        self.steer.y = value.clamp(-1.0, 1.0);
    }

    pub fn press_throttle(&mut self) {
        self.throttle.active = true;
        self.throttle.just_pressed = true;
    }

    pub fn release_throttle(&mut self) {
        self.throttle.active = false;
        self.throttle.just_released = true;
    }

    pub fn apply(&mut self, cmd: PilotCmd) {
        match cmd {
            PilotCmd::SteerX(value) => self.set_steer_x(value),
            PilotCmd::SteerY(value) => self.set_steer_y(value),
            PilotCmd::ThrottlePressed => self.press_throttle(),
            PilotCmd::ThrottleReleased => self.release_throttle(),
        }
    }

    /// Consume the press/release edges. Runs at the end of every tick so each
    /// discrete event is observed exactly once.
    pub fn clear_edges(&mut self) {
        self.throttle.just_pressed = false;
        self.throttle.just_released = false;
    }
}

/// Channel bridge carrying pilot commands into the tick loop.
///
/// `tx` can be cloned and handed to any producer thread; `rx` is drained by
/// the input system at the start of each tick.
#[derive(Resource)]
pub struct PilotBridge {
    pub tx: Sender<PilotCmd>,
    pub rx: Receiver<PilotCmd>,
}

/// Create the command channel and register the input resources.
pub fn setup_pilot_input(world: &mut World) {
    let (tx, rx) = unbounded::<PilotCmd>();
    world.insert_resource(PilotBridge { tx, rx });
    world.init_resource::<PilotInput>();
}
