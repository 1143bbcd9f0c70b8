use bevy_ecs::prelude::*;

use crate::components::weirdclock::ClockItem;

/// A minute passed and the weird clock picked its next item.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockItemChangedEvent {
    pub item: ClockItem,
}
