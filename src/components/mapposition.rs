//! World-space position of an entity.
//!
//! Hourglasses get a position at spawn time and nothing moves them after
//! that. The bird's position is driven by a [`TweenPosition`] toward its
//! flight target, and the board token's by the board system.
//!
//! [`TweenPosition`]: super::tween::TweenPosition

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vec2::new(x, y),
        }
    }
    pub fn x(&self) -> f32 {
        self.pos.x
    }
    pub fn y(&self) -> f32 {
        self.pos.y
    }
}

impl From<Vec2> for MapPosition {
    fn from(pos: Vec2) -> Self {
        MapPosition { pos }
    }
}
