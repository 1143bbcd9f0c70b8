//! Tween animation systems.
//!
//! These systems update entity properties over time based on tween components:
//! - [`tween_mapposition_system`] – glides [`MapPosition`](crate::components::mapposition::MapPosition)
//!   (the bird flying to its target)
//! - [`tween_rotation_system`] – turns [`Rotation`](crate::components::rotation::Rotation)
//!   (the clock glyph spinning once a minute)
//!
//! The easing and interpolation helpers are also used directly by the board
//! token and the particle samplers.

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::tween::{Easing, LoopMode, TweenPosition, TweenRotation};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Apply an easing curve to a normalized time value.
///
/// `t` is clamped to [0.0, 1.0] first. NaN maps to 0.0.
pub fn ease(e: Easing, t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    match e {
        Easing::Linear => t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance tween time by `dt` and handle the end of the tween.
///
/// In [`LoopMode::Loop`] the overshoot carries into the next cycle, so a
/// looping tween keeps its phase regardless of frame timing.
pub(crate) fn advance(time: &mut f32, duration: f32, playing: &mut bool, mode: LoopMode, dt: f32) {
    if duration <= 0.0 {
        *time = 0.0;
        if mode == LoopMode::Once {
            *playing = false;
        }
        return;
    }
    *time += dt;
    if *time >= duration {
        match mode {
            LoopMode::Once => {
                *playing = false;
                *time = duration;
            }
            LoopMode::Loop => *time = time.rem_euclid(duration),
        }
    }
}

/// Normalized, eased progress of a tween, safe for zero durations.
fn eased_progress(easing: Easing, time: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ease(easing, time / duration)
}

/// Glide positions along their [`TweenPosition`]; the tween stops at `to`.
pub fn tween_mapposition_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, &mut TweenPosition)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut mp, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let mut t = tw.time;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut playing, LoopMode::Once, dt);
        tw.time = t;
        tw.playing = playing;
        let t = eased_progress(tw.easing, tw.time, duration);
        mp.pos = tw.from.lerp(tw.to, t);
    }
}

/// Turn rotations along their [`TweenRotation`] at a constant rate.
pub fn tween_rotation_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Rotation, &mut TweenRotation)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut rot, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let loop_mode = tw.loop_mode;
        let mut t = tw.time;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut playing, loop_mode, dt);
        tw.time = t;
        tw.playing = playing;
        let t = eased_progress(Easing::Linear, tw.time, duration);
        rot.degrees = lerp_f32(tw.from, tw.to, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::CubicOut, Easing::CubicInOut];

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_ease_endpoints_and_clamping() {
        for easing in ALL {
            assert!(approx_eq(ease(easing, 0.0), 0.0), "{:?} at 0", easing);
            assert!(approx_eq(ease(easing, 1.0), 1.0), "{:?} at 1", easing);
            assert!(approx_eq(ease(easing, -0.5), 0.0), "{:?} below 0", easing);
            assert!(approx_eq(ease(easing, 1.5), 1.0), "{:?} above 1", easing);
            assert!(approx_eq(ease(easing, f32::NAN), 0.0), "{:?} NaN", easing);
        }
    }

    #[test]
    fn test_ease_known_values() {
        assert!(approx_eq(ease(Easing::Linear, 0.3), 0.3));
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.25), 0.0625));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.5), 0.5));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.75), 0.9375));
    }

    #[test]
    fn test_ease_monotonicity() {
        for easing in ALL {
            let mut prev = ease(easing, 0.0);
            for i in 1..=100 {
                let curr = ease(easing, i as f32 / 100.0);
                assert!(curr >= prev - EPSILON, "{:?} not monotonic at {}", easing, i);
                prev = curr;
            }
        }
    }

    #[test]
    fn test_lerp_f32() {
        assert!(approx_eq(lerp_f32(-10.0, 10.0, 0.25), -5.0));
        assert!(approx_eq(lerp_f32(0.0, 360.0, 0.5), 180.0));
    }

    #[test]
    fn test_advance_once_stops_at_end() {
        let mut time = 0.9;
        let mut playing = true;
        advance(&mut time, 1.0, &mut playing, LoopMode::Once, 0.2);
        assert!(approx_eq(time, 1.0));
        assert!(!playing);
    }

    #[test]
    fn test_advance_loop_carries_overshoot() {
        let mut time = 0.9;
        let mut playing = true;
        advance(&mut time, 1.0, &mut playing, LoopMode::Loop, 0.25);
        assert!((time - 0.15).abs() < 1e-5);
        assert!(playing);
    }

    #[test]
    fn test_advance_loop_large_step() {
        let mut time = 0.0;
        let mut playing = true;
        advance(&mut time, 60.0, &mut playing, LoopMode::Loop, 150.0);
        assert!((time - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_advance_zero_duration_once_finishes() {
        let mut time = 0.0;
        let mut playing = true;
        advance(&mut time, 0.0, &mut playing, LoopMode::Once, 0.1);
        assert!(!playing);
        assert!(approx_eq(eased_progress(Easing::Linear, time, 0.0), 1.0));
    }
}
