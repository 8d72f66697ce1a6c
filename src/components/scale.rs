use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Visual/collision scale sink.
///
/// Written in lock-step with the gas volume on every mutating call; the host
/// renderer or collision layer reads it, the core never does.
#[derive(Component, Clone, Copy, Debug)]
pub struct Scale {
    pub scale: Vec3,
}

impl Scale {
    pub fn new(scale: Vec3) -> Self {
        Self { scale }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(Vec3::ONE)
    }
}
