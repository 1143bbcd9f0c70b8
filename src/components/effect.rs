//! Particle-burst effect component.
//!
//! An [`Effect`] is a short-lived decorative burst. It is created by
//! [`spawn_effect_observer`](crate::systems::effects::spawn_effect_observer)
//! with its particles fully described up front (direction, delay, color), so
//! a presentation layer only needs [`Effect::sample`] to draw a frame.
//!
//! | kind | particles | lifetime | motion |
//! |------|-----------|----------|--------|
//! | [`EffectKind::Firework`] | 20, evenly spread angles, random palette color | 1.0 s | 100 units outward, shrinking and fading |
//! | [`EffectKind::Sparkle`] | 12, gold, random jitter up to ±20 units, delay up to 0.2 s | 0.5 s | pop in then out |
//!
//! Once `age >= lifetime` the effect is finished and
//! [`effect_lifetime_system`](crate::systems::effects::effect_lifetime_system)
//! reports it.

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use glam::Vec2;
use serde::Serialize;
use smallvec::SmallVec;

use crate::components::tween::Easing;
use crate::systems::tween::ease;

pub const FIREWORK_PARTICLES: usize = 20;
pub const FIREWORK_LIFETIME: f32 = 1.0;
pub const FIREWORK_DISTANCE: f32 = 100.0;
pub const FIREWORK_PALETTE: [Color; 6] = [
    Color(0xFFD700),
    Color(0xFF6B6B),
    Color(0x4ECDC4),
    Color(0x45B7D1),
    Color(0x96CEB4),
    Color(0xFFEEAD),
];

pub const SPARKLE_PARTICLES: usize = 12;
pub const SPARKLE_LIFETIME: f32 = 0.5;
pub const SPARKLE_JITTER: f32 = 40.0;
pub const SPARKLE_MAX_DELAY: f32 = 0.2;
pub const SPARKLE_COLOR: Color = Color(0xFFD700);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Sparkle,
    Firework,
}

impl EffectKind {
    /// Seconds the effect stays alive.
    pub fn lifetime(self) -> f32 {
        match self {
            EffectKind::Sparkle => SPARKLE_LIFETIME,
            EffectKind::Firework => FIREWORK_LIFETIME,
        }
    }

    pub fn particle_count(self) -> usize {
        match self {
            EffectKind::Sparkle => SPARKLE_PARTICLES,
            EffectKind::Firework => FIREWORK_PARTICLES,
        }
    }
}

/// 0xRRGGBB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Color(pub u32);

impl Color {
    pub fn hex(self) -> String {
        format!("#{:06X}", self.0 & 0xFF_FFFF)
    }
}

/// One particle of a burst, fixed at spawn time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    /// Offset from the burst origin at the end of the particle's motion.
    pub displacement: Vec2,
    /// Seconds before the particle starts moving.
    pub delay: f32,
    pub color: Color,
}

/// Where and how visible a particle is at the effect's current age.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleSample {
    pub offset: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Component, Clone, Debug)]
pub struct Effect {
    pub id: u32,
    pub kind: EffectKind,
    pub position: Vec2,
    /// World time at spawn, in seconds.
    pub spawned_at: f64,
    /// Seconds since spawn.
    pub age: f32,
    pub particles: SmallVec<[Particle; FIREWORK_PARTICLES]>,
}

impl Effect {
    /// Build a burst of `kind` at `position`, drawing colors, jitter and
    /// delays from `rng`.
    pub fn new(id: u32, kind: EffectKind, position: Vec2, spawned_at: f64, rng: &mut Rng) -> Self {
        let particles = match kind {
            EffectKind::Firework => firework_particles(rng),
            EffectKind::Sparkle => sparkle_particles(rng),
        };
        Effect {
            id,
            kind,
            position,
            spawned_at,
            age: 0.0,
            particles,
        }
    }

    pub fn lifetime(&self) -> f32 {
        self.kind.lifetime()
    }

    pub fn is_finished(&self) -> bool {
        self.age >= self.lifetime()
    }

    /// Age normalized to [0, 1].
    pub fn progress(&self) -> f32 {
        (self.age / self.lifetime()).clamp(0.0, 1.0)
    }

    /// State of particle `index` at the current age, or `None` if out of range.
    pub fn sample(&self, index: usize) -> Option<ParticleSample> {
        let p = self.particles.get(index)?;
        let sample = match self.kind {
            EffectKind::Firework => {
                let t = self.progress();
                ParticleSample {
                    offset: p.displacement * ease(Easing::CubicOut, t),
                    scale: 1.0 - t,
                    opacity: 1.0 - t,
                }
            }
            EffectKind::Sparkle => {
                let t = ((self.age - p.delay) / SPARKLE_LIFETIME).clamp(0.0, 1.0);
                // 0 -> 1 -> 0
                let pulse = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
                ParticleSample {
                    offset: p.displacement * ease(Easing::CubicOut, t),
                    scale: pulse,
                    opacity: pulse,
                }
            }
        };
        Some(sample)
    }
}

fn firework_particles(rng: &mut Rng) -> SmallVec<[Particle; FIREWORK_PARTICLES]> {
    (0..FIREWORK_PARTICLES)
        .map(|i| {
            let theta = (i as f32 * 360.0 / FIREWORK_PARTICLES as f32).to_radians();
            Particle {
                displacement: Vec2::new(theta.cos(), theta.sin()) * FIREWORK_DISTANCE,
                delay: 0.0,
                color: FIREWORK_PALETTE[rng.usize(0..FIREWORK_PALETTE.len())],
            }
        })
        .collect()
}

fn sparkle_particles(rng: &mut Rng) -> SmallVec<[Particle; FIREWORK_PARTICLES]> {
    (0..SPARKLE_PARTICLES)
        .map(|_| Particle {
            displacement: Vec2::new(
                (rng.f32() - 0.5) * SPARKLE_JITTER,
                (rng.f32() - 0.5) * SPARKLE_JITTER,
            ),
            delay: rng.f32() * SPARKLE_MAX_DELAY,
            color: SPARKLE_COLOR,
        })
        .collect()
}
