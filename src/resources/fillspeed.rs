use bevy_ecs::prelude::Resource;

pub const MIN_SPEED_MULTIPLIER: f32 = 0.5;
pub const MAX_SPEED_MULTIPLIER: f32 = 2.0;

/// Multiplier applied to every hourglass's fill rate. Changed when the bird
/// is clicked.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FillSpeed {
    pub multiplier: f32,
}

impl Default for FillSpeed {
    fn default() -> Self {
        FillSpeed { multiplier: 1.0 }
    }
}
