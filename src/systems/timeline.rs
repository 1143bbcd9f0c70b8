//! Timeline systems: move the progress cursor and drop markers on request.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::timeline::TimelineTrack;
use crate::events::timeline::{AddMarkerEvent, MarkerAddedEvent};
use crate::resources::idgenerator::IdGenerator;
use crate::resources::toyrng::ToyRng;
use crate::resources::worldtime::WorldTime;

pub fn timeline_system(time: Res<WorldTime>, mut query: Query<&mut TimelineTrack>) {
    for mut track in query.iter_mut() {
        track.advance(time.delta);
    }
}

/// Add a marker at the current progress of every timeline.
pub fn add_marker_observer(
    trigger: On<AddMarkerEvent>,
    mut ids: ResMut<IdGenerator>,
    mut rng: ResMut<ToyRng>,
    mut query: Query<&mut TimelineTrack>,
    mut commands: Commands,
) {
    let requested = trigger.event().symbol.as_deref();
    for mut track in query.iter_mut() {
        let id = ids.next_id();
        let marker = match requested {
            Some(symbol) => track.add_marker(id, symbol),
            None => track.add_random_marker(id, &mut rng.0),
        }
        .clone();
        let position = track.marker_position(&marker);
        log::info!(
            "Marker {} {} at {:.1}% of the timeline",
            marker.id,
            marker.symbol,
            marker.progress_at_creation * 100.0
        );
        commands.trigger(MarkerAddedEvent {
            marker,
            x: position.x,
            y: position.y,
        });
    }
}
