//! Bird events.
//!
//! - [`BirdTargetEvent`] – the bird picked a new destination (output)
//! - [`BirdClickedEvent`] – the user clicked the bird (input)
//! - [`SpeedChangedEvent`] – a click changed the hourglass fill speed (output)

use bevy_ecs::prelude::*;

/// Triggered synchronously when the bird takes off, with the logical
/// destination rather than the animated position.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BirdTargetEvent {
    pub bird: Entity,
    pub x: f32,
    pub y: f32,
    /// Facing angle in degrees.
    pub rotation: f32,
}

/// Trigger this when the user clicks the bird. Ignored while it is flying.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct BirdClickedEvent;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpeedChangedEvent {
    pub multiplier: f32,
}
