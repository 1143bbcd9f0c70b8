//! Effect lifecycle.
//!
//! Effects are one-shot bursts. [`spawn_effect_observer`] creates them and
//! registers them in the [`EffectRegistry`], [`effect_lifetime_system`] ages
//! them, and [`effect_complete_observer`] drops them from the registry and
//! despawns them once their lifetime is over.
//!
//! The registry removal is the gate: an effect is only despawned by the call
//! that actually removed it, so completion is handled exactly once.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::effect::Effect;
use crate::components::mapposition::MapPosition;
use crate::events::effect::{EffectCompleteEvent, EffectSpawnedEvent, SpawnEffectEvent};
use crate::resources::effectregistry::EffectRegistry;
use crate::resources::idgenerator::IdGenerator;
use crate::resources::toyrng::ToyRng;
use crate::resources::worldtime::WorldTime;

pub fn spawn_effect_observer(
    trigger: On<SpawnEffectEvent>,
    time: Res<WorldTime>,
    mut ids: ResMut<IdGenerator>,
    mut rng: ResMut<ToyRng>,
    mut registry: ResMut<EffectRegistry>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let id = ids.next_id();
    let position = Vec2::new(event.x, event.y);
    let effect = Effect::new(id, event.kind, position, time.elapsed, &mut rng.0);
    let entity = commands
        .spawn((effect, MapPosition::from(position)))
        .id();
    registry.insert(id, entity);
    commands.trigger(EffectSpawnedEvent {
        id,
        entity,
        kind: event.kind,
        x: event.x,
        y: event.y,
    });
}

/// Age effects by world time since spawn and report the finished ones.
///
/// Age is measured from the spawn time, so an effect is never reported
/// before its declared lifetime has elapsed.
pub fn effect_lifetime_system(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Effect)>,
    mut commands: Commands,
) {
    for (entity, mut effect) in query.iter_mut() {
        let age = (time.elapsed - effect.spawned_at).max(0.0);
        effect.age = age as f32;
        // compared in f64 so the age never rounds up past the lifetime
        if age >= f64::from(effect.lifetime()) {
            commands.trigger(EffectCompleteEvent {
                id: effect.id,
                entity,
                kind: effect.kind,
            });
        }
    }
}

pub fn effect_complete_observer(
    trigger: On<EffectCompleteEvent>,
    mut registry: ResMut<EffectRegistry>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if registry.remove(event.id).is_none() {
        log::warn!("Effect {} completed but was not registered", event.id);
        return;
    }
    commands.entity(event.entity).try_despawn();
}
