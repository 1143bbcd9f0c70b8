//! Serpentine timeline track with emoji markers.
//!
//! A [`TimelineTrack`] advances a looping progress value along a fixed path
//! and records [`Marker`]s at the progress they were added.
//!
//! # Path layout
//!
//! The path is `rows` horizontal rows stacked `row_gap` apart, joined by
//! vertical connectors:
//!
//! ```text
//!  row 0   ──────────────►┐
//!                         │ connector 0
//!  row 1   ┌◄─────────────┘
//!          │ connector 1
//!  row 2   └──────────────►┐
//!  ...
//! ```
//!
//! Even rows run left to right, odd rows right to left. Each segment's share
//! of the progress range is proportional to its length, so progress moves at
//! constant speed along the path and every segment has a non-empty range.
//! Horizontal coordinates are in percent of the track width (0..100),
//! vertical coordinates in row-gap units (`row * row_gap`).

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Component;
use fastrand::Rng;
use glam::Vec2;
use serde::Serialize;

use crate::error::{ToyError, check_duration};

/// Upper bound on rows; the segment table is fixed-size.
pub const MAX_ROWS: usize = 16;
pub const MAX_SEGMENTS: usize = MAX_ROWS * 2 - 1;

pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_ROW_WIDTH: f32 = 100.0;
pub const DEFAULT_ROW_GAP: f32 = 50.0;
pub const DEFAULT_DURATION_MINUTES: f32 = 20.0;

/// Symbols offered by the "add emoji" button.
pub const MARKER_SYMBOLS: [&str; 12] = [
    "🌟", "🎈", "🎨", "🎭", "🎪", "🎯", "🎲", "🎮", "🎸", "🎺", "🎨", "🎭",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimelineSegment {
    pub orientation: Orientation,
    /// Point where progress enters the segment.
    pub start: Vec2,
    /// Point where progress leaves the segment.
    pub end: Vec2,
    /// Inclusive progress range covered by this segment.
    pub progress_range: (f32, f32),
}

impl TimelineSegment {
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.progress_range.0 && progress <= self.progress_range.1
    }

    /// Fraction of this segment covered at `progress`, clamped to [0, 1].
    pub fn local(&self, progress: f32) -> f32 {
        let (s, e) = self.progress_range;
        if e - s <= f32::EPSILON {
            return if progress >= e { 1.0 } else { 0.0 };
        }
        ((progress - s) / (e - s)).clamp(0.0, 1.0)
    }

    pub fn point_at(&self, progress: f32) -> Vec2 {
        self.start.lerp(self.end, self.local(progress))
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub id: u32,
    pub symbol: String,
    pub progress_at_creation: f32,
}

#[derive(Component, Clone, Debug)]
pub struct TimelineTrack {
    progress: f32,
    duration_minutes: f32,
    segments: ArrayVec<TimelineSegment, MAX_SEGMENTS>,
    markers: Vec<Marker>,
}

impl TimelineTrack {
    /// Build a track that takes `duration_minutes` per lap.
    ///
    /// `rows` is clamped into `1..=MAX_ROWS`.
    pub fn new(
        duration_minutes: f32,
        rows: usize,
        row_width: f32,
        row_gap: f32,
    ) -> Result<Self, ToyError> {
        let duration_minutes = check_duration(duration_minutes)?;
        if !(row_width.is_finite() && row_width > 0.0 && row_gap.is_finite() && row_gap > 0.0) {
            return Err(ToyError::InvalidConfig(format!(
                "timeline row size must be positive, got {row_width}x{row_gap}"
            )));
        }
        Ok(TimelineTrack {
            progress: 0.0,
            duration_minutes,
            segments: build_segments(rows.clamp(1, MAX_ROWS), row_width, row_gap),
            markers: Vec::new(),
        })
    }

    pub fn with_defaults() -> Self {
        TimelineTrack {
            progress: 0.0,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            segments: build_segments(DEFAULT_ROWS, DEFAULT_ROW_WIDTH, DEFAULT_ROW_GAP),
            markers: Vec::new(),
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn duration_minutes(&self) -> f32 {
        self.duration_minutes
    }

    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Move along the path. A lap takes `duration_minutes`; past 1.0 the
    /// progress wraps without any event.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.progress += dt / (self.duration_minutes * 60.0);
        if self.progress > 1.0 {
            self.progress = self.progress.fract();
        }
    }

    /// Jump to `progress`, clamped to [0, 1].
    pub fn set_progress(&mut self, progress: f32) {
        if progress.is_finite() {
            self.progress = progress.clamp(0.0, 1.0);
        }
    }

    /// Record a marker at the current progress.
    pub fn add_marker(&mut self, id: u32, symbol: impl Into<String>) -> &Marker {
        self.markers.push(Marker {
            id,
            symbol: symbol.into(),
            progress_at_creation: self.progress,
        });
        // just pushed
        &self.markers[self.markers.len() - 1]
    }

    /// Record a marker with a symbol picked from [`MARKER_SYMBOLS`].
    pub fn add_random_marker(&mut self, id: u32, rng: &mut Rng) -> &Marker {
        let symbol = MARKER_SYMBOLS[rng.usize(0..MARKER_SYMBOLS.len())];
        self.add_marker(id, symbol)
    }

    /// Index of the first segment whose range contains `progress`.
    pub fn segment_index_at(&self, progress: f32) -> Option<usize> {
        self.segments.iter().position(|s| s.contains(progress))
    }

    /// Point on the path for `progress`. Values outside [0, 1] are clamped.
    pub fn position_at(&self, progress: f32) -> Vec2 {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        match self.segment_index_at(p) {
            Some(i) => self.segments[i].point_at(p),
            None => self.segments.first().map(|s| s.start).unwrap_or(Vec2::ZERO),
        }
    }

    pub fn marker_position(&self, marker: &Marker) -> Vec2 {
        self.position_at(marker.progress_at_creation)
    }

    /// Portion of segment `index` already covered by the current progress.
    pub fn segment_fill(&self, index: usize) -> f32 {
        self.segments
            .get(index)
            .map(|s| s.local(self.progress))
            .unwrap_or(0.0)
    }
}

fn build_segments(rows: usize, row_width: f32, row_gap: f32) -> ArrayVec<TimelineSegment, MAX_SEGMENTS> {
    let mut shapes: ArrayVec<(Orientation, Vec2, Vec2), MAX_SEGMENTS> = ArrayVec::new();
    for row in 0..rows {
        let y = row as f32 * row_gap;
        let (x0, x1) = if row % 2 == 0 {
            (0.0, row_width)
        } else {
            (row_width, 0.0)
        };
        shapes.push((Orientation::Horizontal, Vec2::new(x0, y), Vec2::new(x1, y)));
        if row + 1 < rows {
            shapes.push((
                Orientation::Vertical,
                Vec2::new(x1, y),
                Vec2::new(x1, y + row_gap),
            ));
        }
    }

    let total: f32 = shapes.iter().map(|(_, a, b)| (*b - *a).length()).sum();
    let mut covered = 0.0;
    let mut segments = ArrayVec::new();
    let last = shapes.len().saturating_sub(1);
    for (i, (orientation, start, end)) in shapes.into_iter().enumerate() {
        let from = covered / total;
        covered += (end - start).length();
        let to = if i == last { 1.0 } else { covered / total };
        segments.push(TimelineSegment {
            orientation,
            start,
            end,
            progress_range: (from, to),
        });
    }
    segments
}
