//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive
//! [`teardown`](crate::game::teardown). Observers are spawned with it so the
//! world can be torn down and set up again without re-registering them.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should survive a teardown.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
