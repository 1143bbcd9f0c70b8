//! Bird flight scheduling.
//!
//! The bird leaves on its first tick and then on every interval tick that
//! finds it sitting. A click makes it leave right away (if it is sitting)
//! and also changes how fast every hourglass fills.
//!
//! Each take-off picks a destination inside the [`PlayArea`], turns the bird
//! toward it, starts a [`TweenPosition`] glide and triggers
//! [`BirdTargetEvent`]. Landing is driven by `flight_time` alone; the glide
//! may still be easing in when the bird is already considered idle.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::bird::{facing_degrees, Bird};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::tween::{Easing, TweenPosition};
use crate::events::bird::{BirdClickedEvent, BirdTargetEvent, SpeedChangedEvent};
use crate::events::viewport::ViewportResizedEvent;
use crate::resources::fillspeed::{FillSpeed, MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER};
use crate::resources::playarea::PlayArea;
use crate::resources::toyrng::ToyRng;
use crate::resources::worldtime::WorldTime;

/// Send the bird to a random point of the play area.
fn launch(
    entity: Entity,
    bird: &mut Bird,
    position: &MapPosition,
    rotation: &mut Rotation,
    area: &PlayArea,
    rng: &mut ToyRng,
    commands: &mut Commands,
) {
    let target = area.random_point(&mut rng.0);
    bird.take_off(target);
    rotation.degrees = facing_degrees(position.pos, target);
    commands.entity(entity).insert(
        TweenPosition::new(position.pos, target, bird.flight_time).with_easing(Easing::CubicOut),
    );
    log::debug!(
        "Bird takes off toward ({:.0}, {:.0}) facing {:.1}°",
        target.x,
        target.y,
        rotation.degrees
    );
    commands.trigger(BirdTargetEvent {
        bird: entity,
        x: target.x,
        y: target.y,
        rotation: rotation.degrees,
    });
}

/// Land birds whose flight is over, then launch on interval ticks.
///
/// The interval counts from the latest take-off. A tick that finds the bird
/// still flying is dropped.
pub fn flight_scheduler_system(
    time: Res<WorldTime>,
    area: Res<PlayArea>,
    mut rng: ResMut<ToyRng>,
    mut query: Query<(Entity, &mut Bird, &MapPosition, &mut Rotation)>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut bird, position, mut rotation) in query.iter_mut() {
        if bird.is_flying() {
            bird.flight_elapsed += dt;
            if bird.flight_elapsed >= bird.flight_time {
                bird.land();
            }
        }

        // Both clocks restart at take-off and add the same deltas, so with
        // interval == flight_time the tick lands on the landing frame.
        let mut tick = !bird.launched;
        bird.interval_elapsed += dt;
        if bird.interval > 0.0 && bird.interval_elapsed >= bird.interval {
            bird.interval_elapsed %= bird.interval;
            tick = true;
        }

        if tick && !bird.is_flying() {
            launch(
                entity,
                &mut bird,
                position,
                &mut rotation,
                &area,
                &mut rng,
                &mut commands,
            );
        }
    }
}

/// A click on the bird: if it is sitting, take off now and pick a new fill
/// speed. Clicks during a flight are ignored.
pub fn bird_clicked_observer(
    _trigger: On<BirdClickedEvent>,
    area: Res<PlayArea>,
    mut rng: ResMut<ToyRng>,
    mut speed: ResMut<FillSpeed>,
    mut query: Query<(Entity, &mut Bird, &MapPosition, &mut Rotation)>,
    mut commands: Commands,
) {
    let mut launched = false;
    for (entity, mut bird, position, mut rotation) in query.iter_mut() {
        if bird.is_flying() {
            log::debug!("Bird clicked mid-flight, ignoring");
            continue;
        }
        launch(
            entity,
            &mut bird,
            position,
            &mut rotation,
            &area,
            &mut rng,
            &mut commands,
        );
        launched = true;
    }
    if !launched {
        return;
    }

    let span = MAX_SPEED_MULTIPLIER - MIN_SPEED_MULTIPLIER;
    speed.multiplier = MIN_SPEED_MULTIPLIER + rng.0.f32() * span;
    log::info!("Fill speed is now x{:.2}", speed.multiplier);
    commands.trigger(SpeedChangedEvent {
        multiplier: speed.multiplier,
    });
}

/// Resize the play area and keep the bird inside it.
///
/// The destination, the glide and the current position are clamped into the
/// new bounds. No new [`BirdTargetEvent`] is triggered.
pub fn viewport_resized_observer(
    trigger: On<ViewportResizedEvent>,
    mut area: ResMut<PlayArea>,
    mut query: Query<(
        &mut Bird,
        &mut MapPosition,
        &mut Rotation,
        Option<&mut TweenPosition>,
    )>,
) {
    let event = trigger.event();
    *area = PlayArea::new(event.w, event.h, area.padding);
    log::info!("Viewport resized to {}x{}", area.w, area.h);

    for (mut bird, mut position, mut rotation, tween) in query.iter_mut() {
        bird.target = area.clamp(bird.target);
        position.pos = area.clamp(position.pos);
        if let Some(mut tween) = tween {
            tween.from = area.clamp(tween.from);
            tween.to = bird.target;
        }
        if bird.is_flying() {
            rotation.degrees = facing_degrees(position.pos, bird.target);
        }
    }
}

