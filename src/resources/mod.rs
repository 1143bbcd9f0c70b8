//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, configuration, randomness,
//! ids, and the registries the coordinator owns.
//!
//! Overview
//! - `effectregistry` – live effects keyed by id
//! - `eventlog` – recorded external events, for the CLI and tests
//! - `fillspeed` – hourglass fill-rate multiplier set by bird clicks
//! - `idgenerator` – monotonic id source for hourglasses, effects, markers
//! - `playarea` – viewport size and padding; clamps and samples positions
//! - `toyconfig` – tuning values loaded from an INI file
//! - `toyrng` – seedable random source
//! - `worldtime` – simulation time and delta
pub mod effectregistry;
pub mod eventlog;
pub mod fillspeed;
pub mod idgenerator;
pub mod playarea;
pub mod toyconfig;
pub mod toyrng;
pub mod worldtime;
