//! Board-game token looping around a square path.
//!
//! The token visits four corners in order, spending `leg_duration` seconds
//! easing between each pair. When it is back at the first corner a lap is
//! complete and the board system triggers
//! [`RoundCompleteEvent`](crate::events::boardgame::RoundCompleteEvent).

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::tween::Easing;
use crate::error::{ToyError, check_duration};
use crate::systems::tween::ease;

pub const BOARD_CORNERS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(240.0, 0.0),
    Vec2::new(240.0, 240.0),
    Vec2::new(0.0, 240.0),
];
pub const DEFAULT_LEG_SECONDS: f32 = 2.0;

#[derive(Component, Clone, Debug)]
pub struct BoardToken {
    pub corners: [Vec2; 4],
    /// Index of the corner the current leg starts from.
    pub leg: usize,
    pub leg_elapsed: f32,
    pub leg_duration: f32,
    pub easing: Easing,
    pub laps: u32,
}

impl Default for BoardToken {
    fn default() -> Self {
        BoardToken {
            corners: BOARD_CORNERS,
            leg: 0,
            leg_elapsed: 0.0,
            leg_duration: DEFAULT_LEG_SECONDS,
            easing: Easing::CubicInOut,
            laps: 0,
        }
    }
}

impl BoardToken {
    pub fn new(leg_duration: f32) -> Result<Self, ToyError> {
        Ok(BoardToken {
            leg_duration: check_duration(leg_duration)?,
            ..Default::default()
        })
    }

    /// Advance along the path and return the number of laps completed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        let duration = f64::from(self.leg_duration);
        let total = f64::from(self.leg_elapsed) + f64::from(dt);
        let legs = (total / duration).floor();
        self.leg_elapsed = ((total - legs * duration) as f32).clamp(0.0, self.leg_duration);
        if self.leg_elapsed >= self.leg_duration {
            self.leg_elapsed = 0.0;
        }
        let corners = self.corners.len() as u64;
        // `as` saturates, so a huge step cannot wrap the leg counter.
        let walked = (self.leg as u64).saturating_add(legs as u64);
        self.leg = (walked % corners) as usize;
        let laps = u32::try_from(walked / corners).unwrap_or(u32::MAX);
        self.laps = self.laps.saturating_add(laps);
        laps
    }

    /// Current position on the board.
    pub fn position(&self) -> Vec2 {
        let from = self.corners[self.leg];
        let to = self.corners[(self.leg + 1) % self.corners.len()];
        let t = ease(self.easing, self.leg_elapsed / self.leg_duration);
        from.lerp(to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_starts_at_first_corner() {
        let t = BoardToken::default();
        assert_eq!(t.position(), BOARD_CORNERS[0]);
    }

    #[test]
    fn test_midway_through_first_leg() {
        let mut t = BoardToken::default();
        t.advance(1.0);
        let p = t.position();
        assert!(approx_eq(p.x, 120.0));
        assert!(approx_eq(p.y, 0.0));
    }

    #[test]
    fn test_full_lap_completes_round() {
        let mut t = BoardToken::default();
        assert_eq!(t.advance(6.0), 0);
        assert_eq!(t.leg, 3);
        assert_eq!(t.advance(2.0), 1);
        assert_eq!(t.leg, 0);
        assert_eq!(t.laps, 1);
    }

    #[test]
    fn test_large_step_counts_laps() {
        let mut t = BoardToken::default();
        assert_eq!(t.advance(17.0), 2);
        assert_eq!(t.leg, 0);
        assert!(approx_eq(t.leg_elapsed, 1.0));
    }

    #[test]
    fn test_long_stall_counts_laps_in_one_step() {
        let mut t = BoardToken::default();
        t.advance(1.0);
        // 1e6 s = 500_000 legs = 125_000 laps, landing half way through leg 0
        assert_eq!(t.advance(1_000_000.0), 125_000);
        assert_eq!(t.leg, 0);
        assert!(approx_eq(t.leg_elapsed, 1.0));
        assert_eq!(t.laps, 125_000);
    }

    #[test]
    fn test_invalid_leg_duration() {
        assert!(BoardToken::new(0.0).is_err());
    }
}
