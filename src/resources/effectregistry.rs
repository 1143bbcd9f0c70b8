//! Registry of live effects.
//!
//! Every spawned [`Effect`](crate::components::effect::Effect) is registered
//! here under its id, and removed exactly once when it completes. The
//! registry is what the presentation layer iterates to know which bursts
//! are still on screen.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Default, Clone)]
pub struct EffectRegistry {
    active: FxHashMap<u32, Entity>,
    /// Effects removed since creation.
    pub completed: u64,
}

impl EffectRegistry {
    pub fn insert(&mut self, id: u32, entity: Entity) {
        if self.active.insert(id, entity).is_some() {
            log::warn!("Effect id {} registered twice", id);
        }
    }

    /// Remove `id`. Returns the entity only the first time.
    pub fn remove(&mut self, id: u32) -> Option<Entity> {
        let removed = self.active.remove(&id);
        if removed.is_some() {
            self.completed += 1;
        }
        removed
    }

    pub fn contains(&self, id: u32) -> bool {
        self.active.contains_key(&id)
    }

    pub fn get(&self, id: u32) -> Option<Entity> {
        self.active.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.active.keys().copied()
    }

    /// Forget every effect without counting them as completed.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
