//! World assembly for the toy.
//!
//! - [`build_world`] inserts every resource, registers the observers and
//!   spawns the toys described by a [`ToyConfig`]; the three steps are also
//!   public for tests that want to place their own entities
//! - [`update_schedule`] returns the per-frame schedule
//! - [`tick`] advances one frame
//! - [`teardown`] despawns every toy, leaving observers in place so
//!   [`spawn_toys`] can set the scene up again

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::components::bird::Bird;
use crate::components::boardtoken::{BoardToken, BOARD_CORNERS};
use crate::components::hourglass::Hourglass;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::rotation::Rotation;
use crate::components::timeline::{TimelineTrack, DEFAULT_ROW_GAP, DEFAULT_ROW_WIDTH};
use crate::components::tween::{LoopMode, TweenRotation};
use crate::components::weirdclock::{WeirdClock, CLOCK_INTERVAL_SECONDS};
use crate::error::{check_duration, ToyError};
use crate::resources::effectregistry::EffectRegistry;
use crate::resources::eventlog::EventLog;
use crate::resources::fillspeed::FillSpeed;
use crate::resources::idgenerator::IdGenerator;
use crate::resources::playarea::PlayArea;
use crate::resources::toyconfig::ToyConfig;
use crate::resources::toyrng::ToyRng;
use crate::resources::worldtime::WorldTime;
use crate::systems::boardgame::board_token_system;
use crate::systems::effects::{
    effect_complete_observer, effect_lifetime_system, spawn_effect_observer,
};
use crate::systems::eventlog::{
    record_bird_target, record_clock_item_changed, record_effect_complete, record_effect_spawned,
    record_hourglass_fill, record_marker_added, record_round_complete, record_speed_changed,
};
use crate::systems::flight::{
    bird_clicked_observer, flight_scheduler_system, viewport_resized_observer,
};
use crate::systems::hourglass::{hourglass_fill_observer, hourglass_fill_system};
use crate::systems::proximity::bird_target_observer;
use crate::systems::time::update_world_time;
use crate::systems::timeline::{add_marker_observer, timeline_system};
use crate::systems::tween::{tween_mapposition_system, tween_rotation_system};
use crate::systems::weirdclock::weird_clock_system;

/// Build a ready-to-run world from `config`.
pub fn build_world(config: ToyConfig) -> Result<World, ToyError> {
    let mut world = World::new();
    insert_resources(&mut world, config);
    register_observers(&mut world);
    spawn_toys(&mut world)?;
    Ok(world)
}

/// Insert every resource the systems and observers need.
pub fn insert_resources(world: &mut World, config: ToyConfig) {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(PlayArea::new(
        config.viewport_width,
        config.viewport_height,
        config.padding,
    ));
    world.insert_resource(ToyRng::seeded(config.seed));
    world.insert_resource(IdGenerator::default());
    world.insert_resource(FillSpeed::default());
    world.insert_resource(EffectRegistry::default());
    world.insert_resource(EventLog::default());
    world.insert_resource(config);
}

/// Register every observer as a [`Persistent`] entity.
///
/// The coordinator chain is bird take-off, proximity scan, bonus fill,
/// effects. The `record_*` observers feed the [`EventLog`].
pub fn register_observers(world: &mut World) {
    world.spawn((Observer::new(bird_target_observer), Persistent));
    world.spawn((Observer::new(bird_clicked_observer), Persistent));
    world.spawn((Observer::new(viewport_resized_observer), Persistent));
    world.spawn((Observer::new(hourglass_fill_observer), Persistent));
    world.spawn((Observer::new(spawn_effect_observer), Persistent));
    world.spawn((Observer::new(effect_complete_observer), Persistent));
    world.spawn((Observer::new(add_marker_observer), Persistent));

    world.spawn((Observer::new(record_hourglass_fill), Persistent));
    world.spawn((Observer::new(record_round_complete), Persistent));
    world.spawn((Observer::new(record_bird_target), Persistent));
    world.spawn((Observer::new(record_effect_spawned), Persistent));
    world.spawn((Observer::new(record_effect_complete), Persistent));
    world.spawn((Observer::new(record_marker_added), Persistent));
    world.spawn((Observer::new(record_clock_item_changed), Persistent));
    world.spawn((Observer::new(record_speed_changed), Persistent));
    // Ensure observers exist before any system triggers events.
    world.flush();
}

/// Spawn the hourglasses, the bird, the timeline, the board token and the
/// weird clock according to the [`ToyConfig`] resource.
pub fn spawn_toys(world: &mut World) -> Result<(), ToyError> {
    let config = world.resource::<ToyConfig>().clone();
    let area = *world.resource::<PlayArea>();
    let bird_interval = check_duration(config.bird_interval)?;
    let flight_time = check_duration(config.flight_time)?;

    for _ in 0..config.hourglass_count {
        let id = world.resource_mut::<IdGenerator>().next_id();
        let (hourglass, position) = {
            let mut rng = world.resource_mut::<ToyRng>();
            let hourglass = Hourglass::new(id, config.fill_range(), &mut rng.0)?;
            (hourglass, area.random_point(&mut rng.0))
        };
        log::debug!(
            "Hourglass {} at ({:.0}, {:.0}) fills in {:.1}s",
            id,
            position.x,
            position.y,
            hourglass.progress().duration()
        );
        world.spawn((hourglass, MapPosition::from(position)));
    }

    let (min, max) = area.bounds();
    let nest = (min + max) * 0.5;
    world.spawn((
        Bird::new(nest, bird_interval, flight_time),
        MapPosition::from(nest),
        Rotation::default(),
    ));

    world.spawn(TimelineTrack::new(
        config.timeline_minutes,
        config.timeline_rows as usize,
        DEFAULT_ROW_WIDTH,
        DEFAULT_ROW_GAP,
    )?);

    world.spawn((BoardToken::default(), MapPosition::from(BOARD_CORNERS[0])));

    world.spawn((
        WeirdClock::default(),
        Rotation::default(),
        TweenRotation::new(0.0, 360.0, CLOCK_INTERVAL_SECONDS).with_loop_mode(LoopMode::Loop),
    ));

    log::info!(
        "Spawned {} hourglasses in a {}x{} play area",
        config.hourglass_count,
        area.w,
        area.h
    );
    Ok(())
}

/// The per-frame schedule.
///
/// Hourglasses fall first, so a bonus fill from this frame's take-off is
/// still visible as full until the next frame. Effects are aged last, after
/// everything that can spawn one.
pub fn update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            hourglass_fill_system,
            flight_scheduler_system,
            tween_mapposition_system,
            tween_rotation_system,
            board_token_system,
            weird_clock_system,
            timeline_system,
            effect_lifetime_system,
        )
            .chain(),
    );
    update
}

/// Advance the world by one frame of `dt` seconds.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

/// Despawn every entity that is not [`Persistent`] and forget live effects.
pub fn teardown(world: &mut World) {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, Without<Persistent>>()
        .iter(world)
        .collect();
    let count = entities.len();
    for entity in entities {
        world.despawn(entity);
    }
    world.resource_mut::<EffectRegistry>().clear();
    log::info!("Tore down {} entities", count);
}
