//! ECS components for entities.
//!
//! This module groups all component types attached to the toy's entities.
//! Components hold the state of each timed widget; the matching systems in
//! [`crate::systems`] advance them every frame.
//!
//! Submodules overview:
//! - [`bird`] – Idle/Flying state machine of the bird and its facing helper
//! - [`boardtoken`] – token looping around the four corners of the board
//! - [`effect`] – short-lived sparkle and firework bursts
//! - [`hourglass`] – hourglass wrapping a looping progress timer
//! - [`mapposition`] – world-space position of an entity
//! - [`persistent`] – marker for entities that survive a teardown
//! - [`progress`] – normalized 0..1 progress timer
//! - [`rotation`] – rotation angle in degrees
//! - [`timeline`] – serpentine timeline track and its markers
//! - [`tween`] – animated interpolation of position and rotation
//! - [`weirdclock`] – the clock that names a random item every minute

pub mod bird;
pub mod boardtoken;
pub mod effect;
pub mod hourglass;
pub mod mapposition;
pub mod persistent;
pub mod progress;
pub mod rotation;
pub mod timeline;
pub mod tween;
pub mod weirdclock;
