//! Timeline marker events.

use bevy_ecs::prelude::*;

use crate::components::timeline::Marker;

/// User asked for a marker at the current timeline progress. With no symbol
/// a random one is picked from
/// [`MARKER_SYMBOLS`](crate::components::timeline::MARKER_SYMBOLS).
#[derive(Event, Debug, Clone, Default)]
pub struct AddMarkerEvent {
    pub symbol: Option<String>,
}

impl AddMarkerEvent {
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        AddMarkerEvent {
            symbol: Some(symbol.into()),
        }
    }
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct MarkerAddedEvent {
    pub marker: Marker,
    pub x: f32,
    pub y: f32,
}
