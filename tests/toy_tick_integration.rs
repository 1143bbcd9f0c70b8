//! Toy tick integration tests for tweens, hourglasses, the board token, the
//! weird clock and the timeline, each system run on its own.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use notime::components::boardtoken::{BoardToken, BOARD_CORNERS};
use notime::components::hourglass::Hourglass;
use notime::components::mapposition::MapPosition;
use notime::components::rotation::Rotation;
use notime::components::timeline::TimelineTrack;
use notime::components::tween::{Easing, LoopMode, TweenPosition, TweenRotation};
use notime::components::weirdclock::WeirdClock;
use notime::events::boardgame::RoundCompleteEvent;
use notime::events::clock::ClockItemChangedEvent;
use notime::events::hourglass::HourglassFillEvent;
use notime::resources::fillspeed::FillSpeed;
use notime::resources::toyrng::ToyRng;
use notime::resources::worldtime::WorldTime;
use notime::systems::boardgame::{board_token_system, MAX_LAP_EVENTS_PER_FRAME};
use notime::systems::hourglass::{hourglass_fill_system, MAX_FILL_EVENTS_PER_FRAME};
use notime::systems::time::update_world_time;
use notime::systems::timeline::timeline_system;
use notime::systems::tween::{tween_mapposition_system, tween_rotation_system};
use notime::systems::weirdclock::weird_clock_system;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(FillSpeed::default());
    world.insert_resource(ToyRng::seeded(7));
    world
}

fn tick_tweens(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((tween_mapposition_system, tween_rotation_system));
    schedule.run(world);
}

fn tick_hourglasses(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(hourglass_fill_system);
    schedule.run(world);
}

fn tick_board(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(board_token_system);
    schedule.run(world);
}

fn capture<E: Event + Clone>(world: &mut World) -> Arc<Mutex<Vec<E>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    world.add_observer(move |trigger: On<E>| {
        seen_clone.lock().unwrap().push(trigger.event().clone());
    });
    world.flush();
    seen
}

#[test]
fn tween_position_glides_with_easing() {
    let mut world = make_world();
    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            TweenPosition::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0)
                .with_easing(Easing::CubicOut),
        ))
        .id();

    update_world_time(&mut world, 0.5);
    tick_tweens(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 87.5));
    assert!(approx_eq(pos.pos.y, 0.0));

    update_world_time(&mut world, 1.0);
    tick_tweens(&mut world);
    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 100.0));
    assert!(!world.get::<TweenPosition>(entity).unwrap().playing);
}

#[test]
fn tween_rotation_loops_like_a_clock_hand() {
    let mut world = make_world();
    let entity = world
        .spawn((
            Rotation::default(),
            TweenRotation::new(0.0, 360.0, 60.0).with_loop_mode(LoopMode::Loop),
        ))
        .id();

    update_world_time(&mut world, 75.0);
    tick_tweens(&mut world);

    let rot = world.get::<Rotation>(entity).unwrap();
    assert!(approx_eq(rot.degrees, 90.0));
    assert!(world.get::<TweenRotation>(entity).unwrap().playing);
}

#[test]
fn hourglass_reports_natural_fill() {
    let mut world = make_world();
    let fills = capture::<HourglassFillEvent>(&mut world);
    let entity = world
        .spawn((
            Hourglass::with_duration(3, 10.0, (30.0, 200.0)).unwrap(),
            MapPosition::new(12.0, 34.0),
        ))
        .id();

    update_world_time(&mut world, 10.0);
    tick_hourglasses(&mut world);

    let fills = fills.lock().unwrap();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].id, 3);
    assert_eq!(fills[0].entity, entity);
    assert!(approx_eq(fills[0].x, 12.0));
    assert!(approx_eq(fills[0].y, 34.0));

    let hourglass = world.get::<Hourglass>(entity).unwrap();
    assert!(approx_eq(hourglass.progress().value(), 0.0));
    assert!(!hourglass.is_full());
    let (min, max) = hourglass.fill_range();
    let next = hourglass.progress().duration();
    assert!(next >= min && next <= max);
}

#[test]
fn stalled_frame_fills_are_counted_but_events_are_capped() {
    let mut world = make_world();
    let fills = capture::<HourglassFillEvent>(&mut world);
    let entity = world
        .spawn((
            Hourglass::with_duration(0, 0.5, (30.0, 200.0)).unwrap(),
            MapPosition::new(0.0, 0.0),
        ))
        .id();

    update_world_time(&mut world, 1000.25);
    tick_hourglasses(&mut world);

    let hourglass = world.get::<Hourglass>(entity).unwrap();
    assert_eq!(hourglass.fills, 2000);
    assert!(approx_eq(hourglass.progress().value(), 0.5));
    assert_eq!(fills.lock().unwrap().len(), MAX_FILL_EVENTS_PER_FRAME as usize);
}

#[test]
fn hourglass_fill_rate_follows_fill_speed() {
    let mut world = make_world();
    world.resource_mut::<FillSpeed>().multiplier = 2.0;
    let entity = world
        .spawn((
            Hourglass::with_duration(0, 100.0, (30.0, 200.0)).unwrap(),
            MapPosition::new(0.0, 0.0),
        ))
        .id();

    update_world_time(&mut world, 10.0);
    tick_hourglasses(&mut world);

    let hourglass = world.get::<Hourglass>(entity).unwrap();
    assert!(approx_eq(hourglass.current_fill_percentage(), 20.0));
}

#[test]
fn hourglass_bonus_fill_is_held_until_next_tick() {
    let mut world = make_world();
    let fills = capture::<HourglassFillEvent>(&mut world);
    let mut rng = ToyRng::seeded(1);
    let mut hourglass = Hourglass::with_duration(0, 100.0, (30.0, 200.0)).unwrap();
    hourglass.advance(95.0, &mut rng.0);
    assert!(hourglass.add_fill(10.0, &mut rng.0));
    let entity = world.spawn((hourglass, MapPosition::new(0.0, 0.0))).id();

    let held = world.get::<Hourglass>(entity).unwrap();
    assert!(held.is_full());
    assert!(approx_eq(held.progress().value(), 1.0));

    update_world_time(&mut world, 1.0);
    tick_hourglasses(&mut world);

    let next = world.get::<Hourglass>(entity).unwrap();
    assert!(!next.is_full());
    assert!(next.progress().value() < 0.05);
    // the bonus fill was reported by whoever applied it, not by the tick
    assert!(fills.lock().unwrap().is_empty());
}

#[test]
fn board_token_walks_corners_and_reports_laps() {
    let mut world = make_world();
    let laps = capture::<RoundCompleteEvent>(&mut world);
    let entity = world
        .spawn((BoardToken::default(), MapPosition::from(BOARD_CORNERS[0])))
        .id();

    // one full leg: the token is on the next corner
    update_world_time(&mut world, 2.0);
    tick_board(&mut world);
    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, BOARD_CORNERS[1].x));
    assert!(approx_eq(pos.pos.y, BOARD_CORNERS[1].y));
    assert!(laps.lock().unwrap().is_empty());

    // two laps in one long frame
    update_world_time(&mut world, 14.0);
    tick_board(&mut world);
    let laps = laps.lock().unwrap();
    assert_eq!(laps.len(), 2);
    assert_eq!(laps[0].laps, 1);
    assert_eq!(laps[1].laps, 2);
}

#[test]
fn stalled_board_reports_only_its_latest_laps() {
    let mut world = make_world();
    let laps = capture::<RoundCompleteEvent>(&mut world);
    world.spawn((BoardToken::default(), MapPosition::from(BOARD_CORNERS[0])));

    // 8000 s = 4000 legs = 1000 laps
    update_world_time(&mut world, 8000.0);
    tick_board(&mut world);

    let laps = laps.lock().unwrap();
    assert_eq!(laps.len(), MAX_LAP_EVENTS_PER_FRAME as usize);
    assert_eq!(laps.last().unwrap().laps, 1000);
    assert_eq!(laps[0].laps, 1000 - MAX_LAP_EVENTS_PER_FRAME + 1);
}

#[test]
fn weird_clock_changes_item_every_minute() {
    let mut world = make_world();
    let changes = capture::<ClockItemChangedEvent>(&mut world);
    world.spawn(WeirdClock::default());

    let mut schedule = Schedule::default();
    schedule.add_systems(weird_clock_system);

    for _ in 0..59 {
        update_world_time(&mut world, 1.0);
        schedule.run(&mut world);
    }
    assert!(changes.lock().unwrap().is_empty());

    update_world_time(&mut world, 1.0);
    schedule.run(&mut world);
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[test]
fn timeline_advances_with_world_time() {
    let mut world = make_world();
    let entity = world
        .spawn(TimelineTrack::new(20.0, 8, 100.0, 50.0).unwrap())
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(timeline_system);

    update_world_time(&mut world, 600.0);
    schedule.run(&mut world);

    let track = world.get::<TimelineTrack>(entity).unwrap();
    assert!(approx_eq(track.progress(), 0.5));
}
