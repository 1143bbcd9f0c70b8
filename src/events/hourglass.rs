//! Hourglass fill notifications.
//!
//! [`HourglassFillEvent`] is triggered once per completed cycle of an
//! [`Hourglass`](crate::components::hourglass::Hourglass), whether the cycle
//! was completed by falling sand or by a bonus fill from the bird.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<HourglassFillEvent>| {
//!     println!("hourglass {} is full", trigger.event().id);
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::systems::hourglass::hourglass_fill_system`] – natural fills
//! - [`crate::systems::proximity::bird_target_observer`] – bonus fills
//! - [`crate::systems::hourglass::hourglass_fill_observer`] – launches a firework

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HourglassFillEvent {
    /// Id of the hourglass that filled.
    pub id: u32,
    /// The hourglass entity.
    pub entity: Entity,
    pub x: f32,
    pub y: f32,
}
