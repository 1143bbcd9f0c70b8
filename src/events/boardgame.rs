use bevy_ecs::prelude::*;

/// The board token got back to its first corner.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundCompleteEvent {
    /// Laps completed so far, including this one.
    pub laps: u32,
}
