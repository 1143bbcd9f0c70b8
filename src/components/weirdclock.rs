//! The weird clock: every minute it is a different thing o'clock.

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use serde::Serialize;

pub const CLOCK_INTERVAL_SECONDS: f32 = 60.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClockItem {
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const CLOCK_ITEMS: [ClockItem; 5] = [
    ClockItem { name: "frog", emoji: "🐸" },
    ClockItem { name: "pizza", emoji: "🍕" },
    ClockItem { name: "rocket", emoji: "🚀" },
    ClockItem { name: "star", emoji: "⭐" },
    ClockItem { name: "moon", emoji: "🌙" },
];

#[derive(Component, Clone, Debug)]
pub struct WeirdClock {
    pub item: ClockItem,
    pub interval: f32,
    pub interval_elapsed: f32,
}

impl Default for WeirdClock {
    fn default() -> Self {
        WeirdClock {
            item: CLOCK_ITEMS[0],
            interval: CLOCK_INTERVAL_SECONDS,
            interval_elapsed: 0.0,
        }
    }
}

impl WeirdClock {
    /// Count `dt` toward the next minute. Returns true when a new item was
    /// picked (possibly the same one again).
    pub fn advance(&mut self, dt: f32, rng: &mut Rng) -> bool {
        if !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        self.interval_elapsed += dt;
        if self.interval_elapsed < self.interval {
            return false;
        }
        // Minutes skipped during a stall would only be overwritten, so one
        // pick covers them all.
        self.interval_elapsed %= self.interval;
        self.item = CLOCK_ITEMS[rng.usize(0..CLOCK_ITEMS.len())];
        true
    }

    pub fn caption(&self) -> String {
        format!("It's {} {} o'clock", self.item.emoji, self.item.name)
    }
}
