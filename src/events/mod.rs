//! Event types exchanged across systems.
//!
//! Events provide a decoupled way for systems to communicate: the bird does
//! not know about hourglasses, hourglasses do not know about effects. Each
//! is triggered with `commands.trigger(..)` and handled by observers, which
//! run synchronously when the triggering system's commands are applied.
//!
//! Submodules:
//! - [`bird`] – bird take-off, click input, fill-speed changes
//! - [`boardgame`] – board token lap completion
//! - [`clock`] – weird clock item changes
//! - [`effect`] – effect spawn requests and lifecycle notifications
//! - [`hourglass`] – hourglass fill completion
//! - [`timeline`] – marker requests and notifications
//! - [`viewport`] – viewport resize input
//!
//! See each submodule for concrete event data and semantics.
pub mod bird;
pub mod boardgame;
pub mod clock;
pub mod effect;
pub mod hourglass;
pub mod timeline;
pub mod viewport;
