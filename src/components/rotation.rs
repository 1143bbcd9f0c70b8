use bevy_ecs::prelude::Component;

/// Facing angle in degrees. 0 points along +X, angles grow toward +Y.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}
