//! Weird clock system.

use bevy_ecs::prelude::*;

use crate::components::weirdclock::WeirdClock;
use crate::events::clock::ClockItemChangedEvent;
use crate::resources::toyrng::ToyRng;
use crate::resources::worldtime::WorldTime;

pub fn weird_clock_system(
    time: Res<WorldTime>,
    mut rng: ResMut<ToyRng>,
    mut query: Query<&mut WeirdClock>,
    mut commands: Commands,
) {
    for mut clock in query.iter_mut() {
        if clock.advance(time.delta, &mut rng.0) {
            log::debug!("{}", clock.caption());
            commands.trigger(ClockItemChangedEvent { item: clock.item });
        }
    }
}
