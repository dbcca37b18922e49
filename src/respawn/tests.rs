//! Respawn domain: tests for the freeze/reload sequence.

use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use super::{RespawnPhase, RespawnPlugin, RespawnSequencer};
use crate::content::ControllerConfig;
use crate::core::{DeathCount, PlayerDiedEvent, ReloadLevelEvent, TimeControl};
use crate::level::LevelPlugin;
use crate::movement::{AbilityController, ContactKind, Player};

struct FakeClock {
    scale: f32,
    scale_changes: u32,
}

impl FakeClock {
    fn new() -> Self {
        Self {
            scale: 1.0,
            scale_changes: 0,
        }
    }
}

impl TimeControl for FakeClock {
    fn time_scale(&self) -> f32 {
        self.scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.scale_changes += 1;
    }
}

// -----------------------------------------------------------------------------
// Sequencer
// -----------------------------------------------------------------------------

#[test]
fn test_trigger_freezes_time() {
    let mut clock = FakeClock::new();
    let mut sequencer = RespawnSequencer::new(0.5);

    assert!(sequencer.trigger(&mut clock));
    assert_eq!(clock.time_scale(), 0.0);
    assert_eq!(sequencer.phase(), RespawnPhase::Frozen { remaining: 0.5 });
}

#[test]
fn test_reload_after_exact_real_time() {
    let mut clock = FakeClock::new();
    let mut sequencer = RespawnSequencer::new(0.5);
    sequencer.trigger(&mut clock);

    // Real time keeps flowing while the scaled clock is frozen
    assert!(!sequencer.advance(0.25, &mut clock));
    assert_eq!(clock.time_scale(), 0.0);
    assert!(sequencer.advance(0.25, &mut clock));
    assert_eq!(clock.time_scale(), 1.0);
    assert_eq!(sequencer.phase(), RespawnPhase::Reloading);
}

#[test]
fn test_exactly_one_reload_per_death() {
    let mut clock = FakeClock::new();
    let mut sequencer = RespawnSequencer::new(0.125);
    sequencer.trigger(&mut clock);

    let reloads = (0..20)
        .filter(|_| sequencer.advance(0.0625, &mut clock))
        .count();
    assert_eq!(reloads, 1);
    // Freeze and unfreeze only
    assert_eq!(clock.scale_changes, 2);
}

#[test]
fn test_second_death_while_frozen_is_ignored() {
    let mut clock = FakeClock::new();
    let mut sequencer = RespawnSequencer::new(0.5);

    assert!(sequencer.trigger(&mut clock));
    sequencer.advance(0.25, &mut clock);
    assert!(!sequencer.trigger(&mut clock));
    assert_eq!(sequencer.phase(), RespawnPhase::Frozen { remaining: 0.25 });
}

#[test]
fn test_death_during_reload_is_ignored_until_rearmed() {
    let mut clock = FakeClock::new();
    let mut sequencer = RespawnSequencer::new(0.0);
    sequencer.trigger(&mut clock);
    assert!(sequencer.advance(0.0, &mut clock));

    assert!(!sequencer.trigger(&mut clock));
    assert_eq!(clock.time_scale(), 1.0);

    sequencer.rearm();
    assert_eq!(sequencer.phase(), RespawnPhase::Alive);
    assert!(sequencer.trigger(&mut clock));
}

#[test]
fn test_advance_without_death_does_nothing() {
    let mut clock = FakeClock::new();
    let mut sequencer = RespawnSequencer::new(0.5);

    assert!(!sequencer.advance(10.0, &mut clock));
    assert_eq!(clock.scale_changes, 0);
    sequencer.rearm();
    assert_eq!(sequencer.phase(), RespawnPhase::Alive);
}

// -----------------------------------------------------------------------------
// Respawn flow through the ECS
// -----------------------------------------------------------------------------

const FRAME: Duration = Duration::from_millis(100);

#[derive(Resource, Default)]
struct ReloadCount(u32);

fn count_reloads(
    mut reload_events: MessageReader<ReloadLevelEvent>,
    mut count: ResMut<ReloadCount>,
) {
    count.0 += reload_events.read().count() as u32;
}

/// Level and respawn plugins on a manual real clock of 100 ms per frame.
fn create_respawn_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(ControllerConfig {
            respawn_timer: 0.5,
            ..Default::default()
        })
        .init_resource::<DeathCount>()
        .init_resource::<ReloadCount>()
        .add_message::<PlayerDiedEvent>()
        .add_message::<ReloadLevelEvent>()
        .add_plugins((RespawnPlugin, LevelPlugin))
        .add_systems(PostUpdate, count_reloads);
    app.update();
    app
}

fn players(app: &mut App) -> Vec<Entity> {
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.iter(app.world()).collect()
}

/// The level's player with a controller attached.
fn spawned_player(app: &mut App) -> Entity {
    let found = players(app);
    assert_eq!(found.len(), 1);
    let player = found[0];
    app.world_mut()
        .entity_mut(player)
        .insert(AbilityController::new(ControllerConfig::default(), 16.0, 1.0));
    player
}

fn relative_speed(app: &App) -> f32 {
    app.world().resource::<Time<Virtual>>().relative_speed()
}

fn phase(app: &App) -> RespawnPhase {
    app.world().resource::<RespawnSequencer>().phase()
}

fn reloads(app: &App) -> u32 {
    app.world().resource::<ReloadCount>().0
}

#[test]
fn test_fatal_contact_freezes_and_reloads_once() {
    let mut app = create_respawn_app();
    let player = spawned_player(&mut app);

    // Two fatal contacts in the same frame
    for cause in [ContactKind::DeathZone, ContactKind::Enemy] {
        app.world_mut().write_message(PlayerDiedEvent { player, cause });
    }
    app.update();

    assert_eq!(relative_speed(&app), 0.0);
    assert!(app.world().get::<AbilityController>(player).unwrap().is_retired());
    assert_eq!(app.world().resource::<DeathCount>().0, 1);
    assert!(matches!(phase(&app), RespawnPhase::Frozen { .. }));

    // Another death while frozen changes nothing
    app.world_mut().write_message(PlayerDiedEvent {
        player,
        cause: ContactKind::Enemy,
    });

    let mut frames = 0;
    while reloads(&app) == 0 {
        assert!(frames < 20, "level never reloaded");
        assert_eq!(relative_speed(&app), 0.0);
        app.update();
        frames += 1;
    }

    // 0.5 s of real time at 100 ms per frame
    assert!((5..=6).contains(&frames), "reloaded after {} frames", frames);
    assert_eq!(relative_speed(&app), 1.0);
    assert_eq!(app.world().resource::<DeathCount>().0, 1);
    assert!(app.world().get_entity(player).is_err());

    let respawned = players(&mut app);
    assert_eq!(respawned.len(), 1);
    assert_ne!(respawned[0], player);

    for _ in 0..10 {
        app.update();
    }
    assert_eq!(reloads(&app), 1);
    assert_eq!(phase(&app), RespawnPhase::Alive);
}

#[test]
fn test_respawned_player_can_die_again() {
    let mut app = create_respawn_app();
    let player = spawned_player(&mut app);
    app.world_mut().write_message(PlayerDiedEvent {
        player,
        cause: ContactKind::DeathZone,
    });

    while reloads(&app) == 0 {
        app.update();
    }
    app.update();
    assert_eq!(phase(&app), RespawnPhase::Alive);

    let player = spawned_player(&mut app);
    app.world_mut().write_message(PlayerDiedEvent {
        player,
        cause: ContactKind::Enemy,
    });
    app.update();

    assert_eq!(app.world().resource::<DeathCount>().0, 2);
    assert_eq!(relative_speed(&app), 0.0);
}

#[test]
fn test_ground_contact_does_not_start_respawn() {
    let mut app = create_respawn_app();
    let player = spawned_player(&mut app);

    app.world_mut().write_message(PlayerDiedEvent {
        player,
        cause: ContactKind::Ground,
    });
    for _ in 0..10 {
        app.update();
    }

    assert_eq!(relative_speed(&app), 1.0);
    assert_eq!(app.world().resource::<DeathCount>().0, 0);
    assert!(!app.world().get::<AbilityController>(player).unwrap().is_retired());
    assert_eq!(phase(&app), RespawnPhase::Alive);
    assert_eq!(reloads(&app), 0);
}
