use bevy_ecs::prelude::Component;

/// Throttle and impulse-cooldown state.
///
/// Two independent axes: `active` tracks press/release (or a forced stop on
/// air depletion), while `cooldown_complete`/`cooldown_timer` gate the
/// one-shot launch impulse. A craft can be throttling continuously while
/// still cooling down from its last impulse.
#[derive(Component, Clone, Copy, Debug)]
pub struct Throttle {
    /// True between throttle press and release or forced depletion stop.
    pub active: bool,
    /// Whether a new launch impulse may fire.
    pub cooldown_complete: bool,
    /// Seconds accumulated since the last impulse. Only advances while the
    /// cooldown is incomplete.
    pub cooldown_timer: f32,
}

impl Default for Throttle {
    fn default() -> Self {
        Self {
            active: false,
            cooldown_complete: true,
            cooldown_timer: 0.0,
        }
    }
}
