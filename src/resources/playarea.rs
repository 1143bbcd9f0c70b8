//! Play area resource.
//!
//! Stores the viewport dimensions supplied by the presentation layer and the
//! edge padding random positions must respect. Any position computed for an
//! entity goes through [`PlayArea::clamp`]; being out of bounds is corrected,
//! never reported.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use glam::Vec2;

pub const DEFAULT_WIDTH: f32 = 1280.0;
pub const DEFAULT_HEIGHT: f32 = 720.0;
pub const DEFAULT_PADDING: f32 = 40.0;

/// Current viewport size in pixels plus the padding kept free at the edges.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct PlayArea {
    pub w: f32,
    pub h: f32,
    pub padding: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        PlayArea {
            w: DEFAULT_WIDTH,
            h: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
        }
    }
}

impl PlayArea {
    /// Build a play area. Negative or non-finite sizes collapse to zero.
    pub fn new(w: f32, h: f32, padding: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        PlayArea {
            w: sane(w),
            h: sane(h),
            padding: sane(padding),
        }
    }

    /// Usable `(min, max)` corners. When the viewport is narrower than twice
    /// the padding on an axis, that axis collapses to its center.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let axis = |len: f32| {
            if len >= self.padding * 2.0 {
                (self.padding, len - self.padding)
            } else {
                (len / 2.0, len / 2.0)
            }
        };
        let (x0, x1) = axis(self.w);
        let (y0, y1) = axis(self.h);
        (Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let (min, max) = self.bounds();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Pull `p` into the usable area. NaN coordinates go to the minimum.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let (min, max) = self.bounds();
        let fix = |v: f32, lo: f32, hi: f32| if v.is_nan() { lo } else { v.clamp(lo, hi) };
        Vec2::new(fix(p.x, min.x, max.x), fix(p.y, min.y, max.y))
    }

    /// Uniform random point inside the usable area.
    pub fn random_point(&self, rng: &mut Rng) -> Vec2 {
        let (min, max) = self.bounds();
        let p = Vec2::new(
            min.x + rng.f32() * (max.x - min.x),
            min.y + rng.f32() * (max.y - min.y),
        );
        // rounding can land a hair outside
        self.clamp(p)
    }
}
