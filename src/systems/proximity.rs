//! Proximity detection and the bird/hourglass interaction.
//!
//! [`is_near`] is the pure radius check. [`bird_target_observer`] is the
//! coordinator's handler for a bird take-off: it scans every hourglass
//! against the bird's destination and, for each one in range, adds a bonus
//! fill and sparkles. All of it happens inside one observer invocation, so
//! nothing else touches an hourglass in between.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::effect::EffectKind;
use crate::components::hourglass::Hourglass;
use crate::components::mapposition::MapPosition;
use crate::events::bird::BirdTargetEvent;
use crate::events::effect::SpawnEffectEvent;
use crate::events::hourglass::HourglassFillEvent;
use crate::resources::toyconfig::ToyConfig;
use crate::resources::toyrng::ToyRng;

/// True if `a` and `b` are at most `radius` apart (Euclidean).
///
/// Symmetric in `a` and `b`. A negative or NaN radius is never near.
pub fn is_near(a: Vec2, b: Vec2, radius: f32) -> bool {
    if !(radius >= 0.0) {
        return false;
    }
    a.distance_squared(b) <= radius * radius
}

/// Nudge every hourglass near the bird's new destination.
///
/// Each hit gets `fill_amount` percent of bonus sand and a sparkle at its
/// position; a hit that fills the hourglass also triggers
/// [`HourglassFillEvent`].
pub fn bird_target_observer(
    trigger: On<BirdTargetEvent>,
    config: Res<ToyConfig>,
    mut rng: ResMut<ToyRng>,
    mut hourglasses: Query<(Entity, &mut Hourglass, &MapPosition)>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let target = Vec2::new(event.x, event.y);
    for (entity, mut hourglass, position) in hourglasses.iter_mut() {
        if !is_near(target, position.pos, config.interaction_radius) {
            continue;
        }
        log::debug!(
            "Bird lands near hourglass {} at ({:.0}, {:.0})",
            hourglass.id,
            position.x(),
            position.y()
        );
        commands.trigger(SpawnEffectEvent {
            kind: EffectKind::Sparkle,
            x: position.x(),
            y: position.y(),
        });
        if hourglass.add_fill(config.fill_amount, &mut rng.0) {
            commands.trigger(HourglassFillEvent {
                id: hourglass.id,
                entity,
                x: position.x(),
                y: position.y(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_near_inside_and_outside() {
        let a = Vec2::new(0.0, 0.0);
        assert!(is_near(a, Vec2::new(30.0, 40.0), 50.0));
        assert!(!is_near(a, Vec2::new(30.0, 40.1), 50.0));
    }

    #[test]
    fn test_is_near_is_symmetric() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -3.0),
            Vec2::new(99.0, 0.5),
            Vec2::new(-70.0, 71.0),
        ];
        for a in points {
            for b in points {
                for r in [0.0, 10.0, 50.0, 100.0] {
                    assert_eq!(is_near(a, b, r), is_near(b, a, r));
                }
            }
        }
    }

    #[test]
    fn test_is_near_same_point_zero_radius() {
        let p = Vec2::new(5.0, 5.0);
        assert!(is_near(p, p, 0.0));
    }

    #[test]
    fn test_is_near_rejects_bad_radius() {
        let p = Vec2::ZERO;
        assert!(!is_near(p, p, -1.0));
        assert!(!is_near(p, p, f32::NAN));
    }
}
