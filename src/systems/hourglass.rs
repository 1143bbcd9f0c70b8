//! Hourglass systems.
//!
//! - [`hourglass_fill_system`] lets sand fall in every hourglass each frame
//!   and reports natural fills
//! - [`hourglass_fill_observer`] celebrates every fill with a firework
//!
//! Bonus fills from the bird are applied by
//! [`bird_target_observer`](crate::systems::proximity::bird_target_observer)
//! and reported through the same [`HourglassFillEvent`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::effect::EffectKind;
use crate::components::hourglass::Hourglass;
use crate::components::mapposition::MapPosition;
use crate::events::effect::SpawnEffectEvent;
use crate::events::hourglass::HourglassFillEvent;
use crate::resources::fillspeed::FillSpeed;
use crate::resources::toyrng::ToyRng;
use crate::resources::worldtime::WorldTime;

/// Most fill events a single hourglass reports in one frame. Only a stalled
/// frame can exceed it, and the extra fills are still counted in `fills`.
pub const MAX_FILL_EVENTS_PER_FRAME: u32 = 16;

/// Advance every [`Hourglass`] by the frame delta scaled by [`FillSpeed`].
///
/// Triggers one [`HourglassFillEvent`] per completed cycle, up to
/// [`MAX_FILL_EVENTS_PER_FRAME`].
pub fn hourglass_fill_system(
    time: Res<WorldTime>,
    speed: Res<FillSpeed>,
    mut rng: ResMut<ToyRng>,
    mut query: Query<(Entity, &mut Hourglass, &MapPosition)>,
    mut commands: Commands,
) {
    let dt = time.delta * speed.multiplier.max(0.0);
    for (entity, mut hourglass, position) in query.iter_mut() {
        let fills = hourglass.advance(dt, &mut rng.0);
        if fills > MAX_FILL_EVENTS_PER_FRAME {
            log::debug!(
                "hourglass {} filled {} times in one frame, reporting {}",
                hourglass.id, fills, MAX_FILL_EVENTS_PER_FRAME
            );
        }
        for _ in 0..fills.min(MAX_FILL_EVENTS_PER_FRAME) {
            commands.trigger(HourglassFillEvent {
                id: hourglass.id,
                entity,
                x: position.x(),
                y: position.y(),
            });
        }
    }
}

/// Launch a firework over an hourglass that just filled.
pub fn hourglass_fill_observer(trigger: On<HourglassFillEvent>, mut commands: Commands) {
    let event = trigger.event();
    commands.trigger(SpawnEffectEvent {
        kind: EffectKind::Firework,
        x: event.x,
        y: event.y,
    });
}
