//! Bird flight state.
//!
//! The [`Bird`] component is a two-state machine advanced by
//! [`flight_scheduler_system`](crate::systems::flight::flight_scheduler_system):
//!
//! - [`FlightState::Idle`] – sitting; the interval timer decides when to leave.
//! - [`FlightState::Flying`] – in transit to `target`; returns to idle after
//!   `flight_time` seconds whether or not the glide animation has finished.
//!
//! The rendered position is the entity's
//! [`MapPosition`](super::mapposition::MapPosition), animated by a
//! [`TweenPosition`](super::tween::TweenPosition). Proximity checks use
//! `target`, the logical destination, instead.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FlightState {
    #[default]
    Idle,
    Flying,
}

#[derive(Component, Clone, Debug)]
pub struct Bird {
    pub state: FlightState,
    /// Logical destination of the current (or last) flight.
    pub target: Vec2,
    /// Seconds between take-off attempts.
    pub interval: f32,
    /// Seconds a flight lasts before the bird is considered landed.
    pub flight_time: f32,
    /// Time accumulated toward the next interval tick.
    pub interval_elapsed: f32,
    /// Time since the current flight took off.
    pub flight_elapsed: f32,
    /// False until the first take-off, which happens on the first tick.
    pub launched: bool,
    /// Completed take-offs.
    pub flights: u32,
}

impl Bird {
    pub fn new(start: Vec2, interval: f32, flight_time: f32) -> Self {
        Bird {
            state: FlightState::Idle,
            target: start,
            interval,
            flight_time,
            interval_elapsed: 0.0,
            flight_elapsed: 0.0,
            launched: false,
            flights: 0,
        }
    }

    pub fn is_flying(&self) -> bool {
        self.state == FlightState::Flying
    }

    /// Switch to [`FlightState::Flying`] toward `target`.
    pub fn take_off(&mut self, target: Vec2) {
        self.state = FlightState::Flying;
        self.target = target;
        self.flight_elapsed = 0.0;
        self.interval_elapsed = 0.0;
        self.launched = true;
        self.flights += 1;
    }

    pub fn land(&mut self) {
        self.state = FlightState::Idle;
        self.flight_elapsed = 0.0;
    }
}

/// Facing angle in degrees for travelling from `from` to `to`.
///
/// Uses `atan2(dy, dx)`, so 0 points along +X and 90 along +Y. A zero-length
/// trip faces 0.
pub fn facing_degrees(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    if d.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    d.y.atan2(d.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_bird_is_idle_and_unlaunched() {
        let b = Bird::new(Vec2::new(10.0, 20.0), 3.0, 3.0);
        assert_eq!(b.state, FlightState::Idle);
        assert!(!b.launched);
        assert_eq!(b.target, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_take_off_and_land() {
        let mut b = Bird::new(Vec2::ZERO, 3.0, 3.0);
        b.flight_elapsed = 1.0;
        b.interval_elapsed = 2.5;
        b.take_off(Vec2::new(5.0, 5.0));
        assert!(b.is_flying());
        assert!(b.launched);
        assert_eq!(b.flights, 1);
        assert!(approx_eq(b.flight_elapsed, 0.0));
        assert!(approx_eq(b.interval_elapsed, 0.0));
        b.land();
        assert!(!b.is_flying());
    }

    #[test]
    fn test_facing_degrees_axes() {
        let o = Vec2::ZERO;
        assert!(approx_eq(facing_degrees(o, Vec2::new(1.0, 0.0)), 0.0));
        assert!(approx_eq(facing_degrees(o, Vec2::new(0.0, 1.0)), 90.0));
        assert!(approx_eq(facing_degrees(o, Vec2::new(-1.0, 0.0)), 180.0));
        assert!(approx_eq(facing_degrees(o, Vec2::new(0.0, -1.0)), -90.0));
        assert!(approx_eq(facing_degrees(o, Vec2::new(1.0, 1.0)), 45.0));
    }

    #[test]
    fn test_facing_degrees_zero_length() {
        let p = Vec2::new(3.0, 3.0);
        assert!(approx_eq(facing_degrees(p, p), 0.0));
    }
}
