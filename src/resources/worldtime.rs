use bevy_ecs::prelude::Resource;

/// Simulation clock, advanced once per tick by the host loop via
/// [`update_world_time`](crate::systems::time::update_world_time).
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since the simulation started.
    pub elapsed: f32,
    /// Scaled delta of the current tick, what every control system reads.
    pub delta: f32,
    /// Multiplier applied to incoming deltas (slow motion, pause).
    pub time_scale: f32,
    /// Ticks elapsed since the simulation started.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Apply `time_scale` to an unscaled tick delta and advance the clock.
    pub fn advance(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.elapsed += scaled;
        self.delta = scaled;
        self.frame_count += 1;
    }
}
