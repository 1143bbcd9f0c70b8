//! Hourglass component.
//!
//! An [`Hourglass`] owns a looping [`ProgressTimer`] whose duration is drawn
//! uniformly from `fill_range` when the hourglass is created and drawn again
//! every time it fills. Besides elapsed time, the bird can top it up with
//! [`Hourglass::add_fill`].
//!
//! The owner learns about fills through the return values of
//! [`Hourglass::advance`] and [`Hourglass::add_fill`]; the systems in
//! [`crate::systems::hourglass`] turn those into
//! [`HourglassFillEvent`](crate::events::hourglass::HourglassFillEvent)s.
//!
//! The hourglass position lives in a separate
//! [`MapPosition`](super::mapposition::MapPosition) that nothing mutates
//! after spawn.

use bevy_ecs::prelude::Component;
use fastrand::Rng;

use crate::components::progress::ProgressTimer;
use crate::error::{ToyError, check_duration};

pub const DEFAULT_MIN_FILL_SECONDS: f32 = 30.0;
pub const DEFAULT_MAX_FILL_SECONDS: f32 = 200.0;

#[derive(Component, Clone, Debug)]
pub struct Hourglass {
    pub id: u32,
    progress: ProgressTimer,
    is_full: bool,
    /// Range (min, max) in seconds the fill duration is drawn from.
    fill_range: (f32, f32),
    /// Total fills since creation.
    pub fills: u32,
}

impl Hourglass {
    /// Create an empty hourglass with a random fill duration.
    ///
    /// `fill_range` is normalized so that min <= max. Both bounds must be
    /// valid durations.
    pub fn new(id: u32, fill_range: (f32, f32), rng: &mut Rng) -> Result<Self, ToyError> {
        let a = check_duration(fill_range.0)?;
        let b = check_duration(fill_range.1)?;
        let fill_range = (a.min(b), a.max(b));
        let duration = roll_duration(fill_range, rng);
        Ok(Hourglass {
            id,
            progress: ProgressTimer::looping(duration)?,
            is_full: false,
            fill_range,
            fills: 0,
        })
    }

    /// Create an hourglass with a fixed first-cycle duration. Later cycles
    /// still draw from `fill_range`.
    pub fn with_duration(
        id: u32,
        duration: f32,
        fill_range: (f32, f32),
    ) -> Result<Self, ToyError> {
        let a = check_duration(fill_range.0)?;
        let b = check_duration(fill_range.1)?;
        Ok(Hourglass {
            id,
            progress: ProgressTimer::looping(duration)?,
            is_full: false,
            fill_range: (a.min(b), a.max(b)),
            fills: 0,
        })
    }

    /// Let `dt` seconds of sand fall. Returns the number of fills completed.
    pub fn advance(&mut self, dt: f32, rng: &mut Rng) -> u32 {
        if self.progress.is_complete() {
            // a bonus fill is being held at 1.0; this tick starts the next cycle
            self.is_full = false;
        }
        let completions = self.progress.advance(dt);
        if completions > 0 {
            self.fills = self.fills.saturating_add(completions);
            self.is_full = false;
            self.reroll(rng);
        }
        completions
    }

    /// Add `amount` percent of sand at once.
    ///
    /// `amount` is clamped into [0, 100]. Returns true if this call filled
    /// the hourglass; it stays full until the next [`advance`](Self::advance).
    pub fn add_fill(&mut self, amount: f32, rng: &mut Rng) -> bool {
        if !amount.is_finite() {
            return false;
        }
        let fraction = amount.clamp(0.0, 100.0) / 100.0;
        if self.progress.bonus_advance(fraction) {
            self.fills = self.fills.saturating_add(1);
            self.is_full = true;
            self.reroll(rng);
            return true;
        }
        false
    }

    pub fn current_fill_percentage(&self) -> f32 {
        self.progress.value() * 100.0
    }

    pub fn is_full(&self) -> bool {
        self.is_full
    }

    pub fn progress(&self) -> &ProgressTimer {
        &self.progress
    }

    pub fn fill_range(&self) -> (f32, f32) {
        self.fill_range
    }

    /// Draw the duration of the next cycle.
    fn reroll(&mut self, rng: &mut Rng) {
        let duration = roll_duration(self.fill_range, rng);
        if let Err(e) = self.progress.set_duration(duration) {
            log::warn!("Hourglass {}: keeping old duration: {}", self.id, e);
        }
    }
}

fn roll_duration((min, max): (f32, f32), rng: &mut Rng) -> f32 {
    min + rng.f32() * (max - min)
}
