//! Monotonic id source.
//!
//! Hourglasses, effects and markers get their ids from the [`IdGenerator`]
//! resource of the world they live in, so two worlds never share a counter.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn starting_at(first: u32) -> Self {
        IdGenerator { next: first }
    }

    /// Hand out the next id. Ids are never reused.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut g = IdGenerator::default();
        assert_eq!(g.next_id(), 0);
        assert_eq!(g.next_id(), 1);
        assert_eq!(g.peek(), 2);
    }

    #[test]
    fn test_starting_at() {
        let mut g = IdGenerator::starting_at(100);
        assert_eq!(g.next_id(), 100);
    }
}
