//! Toy systems and observers.
//!
//! This module groups the ECS systems that advance the simulation each frame
//! and the observers that react to triggered events.
//!
//! Submodules overview
//! - [`boardgame`] – move the board token and report laps
//! - [`effects`] – spawn, age and retire fireworks and sparkles
//! - [`eventlog`] – record external events into [`crate::resources::eventlog::EventLog`]
//! - [`flight`] – bird take-off scheduling, clicks and viewport resizes
//! - [`hourglass`] – natural hourglass filling and fill fireworks
//! - [`proximity`] – radius checks and bonus fills around the bird's target
//! - [`time`] – update simulation time and delta
//! - [`timeline`] – advance the timeline and add markers
//! - [`tween`] – animate position and rotation over time
//! - [`weirdclock`] – pick a new weird thing every minute

pub mod boardgame;
pub mod effects;
pub mod eventlog;
pub mod flight;
pub mod hourglass;
pub mod proximity;
pub mod time;
pub mod timeline;
pub mod tween;
pub mod weirdclock;
