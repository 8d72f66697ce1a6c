use bevy_ecs::prelude::Component;

/// Last tilt angle the pilot commanded, in degrees.
///
/// Retained across ticks whose input sits inside the dead zone, so the craft
/// keeps easing toward the previous target through stick noise.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct TiltSteering {
    pub target_deg: f32,
}
