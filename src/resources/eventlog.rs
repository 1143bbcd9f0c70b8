//! Recorded stream of the toy's external events.
//!
//! The observers in [`crate::systems::eventlog`] append one [`LogEntry`] per
//! event that a presentation layer would consume. The headless binary prints
//! them (optionally as JSON lines) and tests use them to assert ordering.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::components::effect::EffectKind;
use crate::components::timeline::Marker;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ToyEvent {
    HourglassFill { id: u32, x: f32, y: f32 },
    RoundComplete { laps: u32 },
    BirdTarget { x: f32, y: f32, rotation: f32 },
    EffectSpawned { id: u32, kind: EffectKind, x: f32, y: f32 },
    EffectComplete { id: u32, kind: EffectKind },
    MarkerAdded { marker: Marker },
    ClockItemChanged { name: &'static str, emoji: &'static str },
    SpeedChanged { multiplier: f32 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogEntry {
    /// World time in seconds when the event was observed.
    pub time: f64,
    #[serde(flatten)]
    pub event: ToyEvent,
}

/// Entries kept by [`EventLog::default`] before the oldest are dropped.
pub const DEFAULT_LOG_LIMIT: usize = 10_000;

/// Bounded event history.
///
/// Nothing drains the log on its own: an embedder that never calls
/// [`drain`](Self::drain) keeps only the newest `limit` entries, and
/// [`dropped`](Self::dropped) counts the rest.
#[derive(Resource, Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    limit: usize,
    dropped: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        EventLog::with_limit(DEFAULT_LOG_LIMIT)
    }
}

impl EventLog {
    /// A log keeping at most `limit` entries (at least one).
    pub fn with_limit(limit: usize) -> Self {
        EventLog {
            entries: VecDeque::new(),
            limit: limit.max(1),
            dropped: 0,
        }
    }

    pub fn push(&mut self, time: f64, event: ToyEvent) {
        if self.entries.len() >= self.limit {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(LogEntry { time, event });
    }

    /// Entries in the order they were recorded, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries evicted because the log was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Take every entry recorded so far, leaving the log empty.
    pub fn drain(&mut self) -> Vec<LogEntry> {
        self.entries.drain(..).collect()
    }

    pub fn count(&self, pred: impl Fn(&ToyEvent) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.event)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain() {
        let mut log = EventLog::default();
        log.push(1.0, ToyEvent::RoundComplete { laps: 1 });
        log.push(2.0, ToyEvent::SpeedChanged { multiplier: 1.5 });
        assert_eq!(log.count(|e| matches!(e, ToyEvent::RoundComplete { .. })), 1);
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
        assert_eq!(log.dropped(), 0);
    }

    #[test]
    fn test_full_log_drops_oldest() {
        let mut log = EventLog::with_limit(3);
        for laps in 1..=5 {
            log.push(f64::from(laps), ToyEvent::RoundComplete { laps });
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.dropped(), 2);
        let kept: Vec<f64> = log.entries().map(|e| e.time).collect();
        assert_eq!(kept, vec![3.0, 4.0, 5.0]);

        log.drain();
        log.push(6.0, ToyEvent::RoundComplete { laps: 6 });
        assert_eq!(log.len(), 1);
        assert_eq!(log.dropped(), 2);
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(EventLog::default().limit(), DEFAULT_LOG_LIMIT);
        assert_eq!(EventLog::with_limit(0).limit(), 1);
    }

    #[test]
    fn test_serializes_flat_with_tag() {
        let entry = LogEntry {
            time: 0.5,
            event: ToyEvent::EffectComplete {
                id: 4,
                kind: EffectKind::Sparkle,
            },
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"time":0.5,"event":"effect_complete","id":4,"kind":"sparkle"}"#);
    }
}
