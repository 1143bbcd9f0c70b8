//! Observers that record external events.
//!
//! Every event a presentation layer would react to is logged through `log`
//! and appended to the [`EventLog`] resource with the world time at which it
//! fired.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::events::bird::{BirdTargetEvent, SpeedChangedEvent};
use crate::events::boardgame::RoundCompleteEvent;
use crate::events::clock::ClockItemChangedEvent;
use crate::events::effect::{EffectCompleteEvent, EffectSpawnedEvent};
use crate::events::hourglass::HourglassFillEvent;
use crate::events::timeline::MarkerAddedEvent;
use crate::resources::eventlog::{EventLog, ToyEvent};
use crate::resources::worldtime::WorldTime;

pub fn record_hourglass_fill(
    trigger: On<HourglassFillEvent>,
    time: Res<WorldTime>,
    mut event_log: ResMut<EventLog>,
) {
    let e = trigger.event();
    log::info!("Hourglass {} filled at ({:.0}, {:.0})", e.id, e.x, e.y);
    event_log.push(
        time.elapsed,
        ToyEvent::HourglassFill {
            id: e.id,
            x: e.x,
            y: e.y,
        },
    );
}

pub fn record_round_complete(
    trigger: On<RoundCompleteEvent>,
    time: Res<WorldTime>,
    mut event_log: ResMut<EventLog>,
) {
    let laps = trigger.event().laps;
    log::info!("Board token finished lap {}", laps);
    event_log.push(time.elapsed, ToyEvent::RoundComplete { laps });
}

pub fn record_bird_target(
    trigger: On<BirdTargetEvent>,
    time: Res<WorldTime>,
    mut event_log: ResMut<EventLog>,
) {
    let e = trigger.event();
    event_log.push(
        time.elapsed,
        ToyEvent::BirdTarget {
            x: e.x,
            y: e.y,
            rotation: e.rotation,
        },
    );
}

pub fn record_effect_spawned(
    trigger: On<EffectSpawnedEvent>,
    time: Res<WorldTime>,
    mut event_log: ResMut<EventLog>,
) {
    let e = trigger.event();
    log::debug!("Effect {} ({:?}) spawned", e.id, e.kind);
    event_log.push(
        time.elapsed,
        ToyEvent::EffectSpawned {
            id: e.id,
            kind: e.kind,
            x: e.x,
            y: e.y,
        },
    );
}

pub fn record_effect_complete(
    trigger: On<EffectCompleteEvent>,
    time: Res<WorldTime>,
    mut event_log: ResMut<EventLog>,
) {
    let e = trigger.event();
    log::debug!("Effect {} ({:?}) complete", e.id, e.kind);
    event_log.push(
        time.elapsed,
        ToyEvent::EffectComplete {
            id: e.id,
            kind: e.kind,
        },
    );
}

pub fn record_marker_added(
    trigger: On<MarkerAddedEvent>,
    time: Res<WorldTime>,
    mut event_log: ResMut<EventLog>,
) {
    event_log.push(
        time.elapsed,
        ToyEvent::MarkerAdded {
            marker: trigger.event().marker.clone(),
        },
    );
}

pub fn record_clock_item_changed(
    trigger: On<ClockItemChangedEvent>,
    time: Res<WorldTime>,
    mut event_log: ResMut<EventLog>,
) {
    let item = trigger.event().item;
    log::info!("It's {} {} o'clock", item.emoji, item.name);
    event_log.push(
        time.elapsed,
        ToyEvent::ClockItemChanged {
            name: item.name,
            emoji: item.emoji,
        },
    );
}

pub fn record_speed_changed(
    trigger: On<SpeedChangedEvent>,
    time: Res<WorldTime>,
    mut event_log: ResMut<EventLog>,
) {
    event_log.push(
        time.elapsed,
        ToyEvent::SpeedChanged {
            multiplier: trigger.event().multiplier,
        },
    );
}
