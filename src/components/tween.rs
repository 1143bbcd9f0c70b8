//! Tween components.
//!
//! - [`TweenPosition`] glides a [`MapPosition`](super::mapposition::MapPosition)
//!   once toward a point (the bird's flight)
//! - [`TweenRotation`] turns a [`Rotation`](super::rotation::Rotation) at a
//!   constant rate, usually forever (the weird clock's glyph)
//!
//! The update systems live in [`crate::systems::tween`].

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// What a tween does once its time reaches the duration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Stop at the end.
    Once,
    /// Start over, carrying the overshoot.
    Loop,
}

/// Curves mapping linear progress in [0, 1] to eased progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Fast start, slow arrival. Bird glides and particle bursts.
    CubicOut,
    /// Slow at both ends. Board token legs.
    CubicInOut,
}

/// One-shot glide of a position from `from` to `to`.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    pub from: Vec2,
    pub to: Vec2,
    /// Seconds.
    pub duration: f32,
    pub easing: Easing,
    pub playing: bool,
    /// Seconds played so far, at most `duration`.
    pub time: f32,
}

impl TweenPosition {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Linear turn from `from` to `to` degrees over `duration` seconds.
#[derive(Component, Clone, Debug)]
pub struct TweenRotation {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub loop_mode: LoopMode,
    pub playing: bool,
    pub time: f32,
}

impl TweenRotation {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenRotation {
            from,
            to,
            duration,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
        }
    }

    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }
}
