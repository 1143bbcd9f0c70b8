//! Normalized progress timer.
//!
//! [`ProgressTimer`] drives a single value from 0.0 to 1.0 linearly over a
//! duration in seconds. It is the building block of every hourglass and
//! replaces the imperative tween objects an animation runtime would use.
//!
//! # Modes
//!
//! - [`ProgressMode::Loop`] – each time the value reaches 1.0 a completion is
//!   counted and the value wraps, carrying the overshoot into the next cycle.
//! - [`ProgressMode::Once`] – the value stops at 1.0 and completes once.
//!
//! # Bonus advance
//!
//! [`ProgressTimer::bonus_advance`] pushes the value forward immediately.
//! Reaching 1.0 this way completes the cycle just like elapsed time does, but
//! in loop mode the value is held at 1.0 until the next
//! [`advance`](ProgressTimer::advance) restarts the cycle. While held, more
//! bonus is ignored, so a burst of bonuses within one tick completes once.

use crate::error::{ToyError, check_duration};

/// Slack used when comparing the value against 1.0, so that deltas summing to
/// exactly the duration complete despite float accumulation.
pub const COMPLETION_EPSILON: f32 = 1e-5;

/// What happens when progress reaches 1.0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ProgressMode {
    /// Wrap to 0 and keep going.
    #[default]
    Loop,
    /// Stay at 1.0.
    Once,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressTimer {
    value: f32,
    duration: f32,
    /// Seconds spent in the current cycle (bonus progress not included).
    elapsed: f32,
    mode: ProgressMode,
    /// Loop mode only: completed by a bonus, waiting for the next advance.
    pending_restart: bool,
    /// Once mode only: the single completion has been reported.
    finished: bool,
}

impl ProgressTimer {
    /// Create a timer at 0.0.
    ///
    /// Fails with [`ToyError::InvalidDuration`] if `duration` is not a finite
    /// number of seconds greater than zero.
    pub fn new(duration: f32, mode: ProgressMode) -> Result<Self, ToyError> {
        let duration = check_duration(duration)?;
        Ok(ProgressTimer {
            value: 0.0,
            duration,
            elapsed: 0.0,
            mode,
            pending_restart: false,
            finished: false,
        })
    }

    pub fn looping(duration: f32) -> Result<Self, ToyError> {
        Self::new(duration, ProgressMode::Loop)
    }

    pub fn once(duration: f32) -> Result<Self, ToyError> {
        Self::new(duration, ProgressMode::Once)
    }

    pub fn value(&self) -> f32 {
        self.value
    }
    pub fn duration(&self) -> f32 {
        self.duration
    }
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
    pub fn mode(&self) -> ProgressMode {
        self.mode
    }

    /// True while the value sits at 1.0 (bonus-completed in loop mode, or
    /// finished in once mode).
    pub fn is_complete(&self) -> bool {
        self.pending_restart || self.finished
    }

    /// Change the duration. The current value is kept; only later advances
    /// run at the new rate.
    pub fn set_duration(&mut self, duration: f32) -> Result<(), ToyError> {
        self.duration = check_duration(duration)?;
        Ok(())
    }

    /// Move the value forward by `dt / duration` and return how many cycles
    /// completed during this call.
    ///
    /// Negative or non-finite `dt` is ignored.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt < 0.0 {
            return 0;
        }
        match self.mode {
            ProgressMode::Once => {
                if self.finished {
                    return 0;
                }
                self.elapsed += dt;
                self.value += dt / self.duration;
                if self.value >= 1.0 - COMPLETION_EPSILON {
                    self.value = 1.0;
                    self.finished = true;
                    return 1;
                }
                0
            }
            ProgressMode::Loop => {
                if self.pending_restart {
                    self.restart();
                }
                self.elapsed += dt;
                self.value += dt / self.duration;
                if !self.value.is_finite() {
                    self.value = 0.0;
                    self.elapsed = 0.0;
                    return u32::MAX;
                }
                if self.value < 1.0 - COMPLETION_EPSILON {
                    return 0;
                }
                // count every whole cycle at once
                let whole = self.value.floor();
                let mut frac = self.value - whole;
                // `as` saturates at u32::MAX.
                let mut completions = whole as u32;
                if frac >= 1.0 - COMPLETION_EPSILON {
                    completions = completions.saturating_add(1);
                    frac = 0.0;
                }
                self.value = frac;
                self.elapsed = frac * self.duration;
                completions
            }
        }
    }

    /// Add `fraction` to the value, clamped to 1.0.
    ///
    /// Returns true if this call completed the cycle. Calls made while the
    /// value is already held at 1.0 return false and change nothing, as do
    /// negative or non-finite fractions.
    pub fn bonus_advance(&mut self, fraction: f32) -> bool {
        if !fraction.is_finite() || fraction <= 0.0 || self.is_complete() {
            return false;
        }
        self.value = (self.value + fraction).min(1.0);
        if self.value >= 1.0 - COMPLETION_EPSILON {
            self.value = 1.0;
            match self.mode {
                ProgressMode::Loop => self.pending_restart = true,
                ProgressMode::Once => self.finished = true,
            }
            return true;
        }
        false
    }

    /// Start a new cycle from 0.0.
    pub fn restart(&mut self) {
        self.value = 0.0;
        self.elapsed = 0.0;
        self.pending_restart = false;
        self.finished = false;
    }
}
