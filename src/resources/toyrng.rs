//! Seedable random source shared by the systems.
//!
//! Kept as a resource instead of a per-system `Local<Rng>` so a whole run can
//! be replayed from one seed.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct ToyRng(pub Rng);

impl ToyRng {
    pub fn seeded(seed: u64) -> Self {
        ToyRng(Rng::with_seed(seed))
    }
}

impl Default for ToyRng {
    fn default() -> Self {
        ToyRng(Rng::new())
    }
}
