//! Board token movement.

use bevy_ecs::prelude::*;

use crate::components::boardtoken::BoardToken;
use crate::components::mapposition::MapPosition;
use crate::events::boardgame::RoundCompleteEvent;
use crate::resources::worldtime::WorldTime;

/// Most lap events one token reports in a frame. A stalled frame reports
/// only its latest laps.
pub const MAX_LAP_EVENTS_PER_FRAME: u32 = 16;

/// Move every token around its board and report each finished lap.
pub fn board_token_system(
    time: Res<WorldTime>,
    mut query: Query<(&mut BoardToken, &mut MapPosition)>,
    mut commands: Commands,
) {
    for (mut token, mut position) in query.iter_mut() {
        let laps = token.advance(time.delta);
        position.pos = token.position();
        // laps already includes the ones finished this frame
        let reported = laps.min(MAX_LAP_EVENTS_PER_FRAME);
        for lap in (token.laps - reported + 1)..=token.laps {
            commands.trigger(RoundCompleteEvent { laps: lap });
        }
    }
}
