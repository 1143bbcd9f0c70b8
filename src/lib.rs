//! No Time New Year 2025 toy core.
//!
//! This module exposes the toy's ECS components, resources, systems, and
//! events for use in integration tests and by a presentation layer.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
