//! Effect lifecycle events.
//!
//! Request a burst with [`SpawnEffectEvent`]; the effect systems answer with
//! [`EffectSpawnedEvent`] right away and [`EffectCompleteEvent`] once the
//! burst's lifetime has run out. Every spawned id completes exactly once.

use bevy_ecs::prelude::*;

use crate::components::effect::EffectKind;

/// Ask for a burst of `kind` at (`x`, `y`).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnEffectEvent {
    pub kind: EffectKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EffectSpawnedEvent {
    pub id: u32,
    pub entity: Entity,
    pub kind: EffectKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EffectCompleteEvent {
    pub id: u32,
    pub entity: Entity,
    pub kind: EffectKind,
}
