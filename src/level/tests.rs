//! Level domain: tests for building and reloading the level.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use super::{LevelEntity, LevelPlugin};
use crate::content::ControllerConfig;
use crate::core::ReloadLevelEvent;
use crate::movement::{ContactKind, ContactTag, Player};

fn create_level_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
        .insert_resource(ControllerConfig::default())
        .add_message::<ReloadLevelEvent>()
        .add_plugins(LevelPlugin);
    app.update();
    app
}

fn level_entities(app: &mut App) -> Vec<Entity> {
    let mut query = app.world_mut().query_filtered::<Entity, With<LevelEntity>>();
    query.iter(app.world()).collect()
}

fn count_tagged(app: &mut App, kind: ContactKind) -> usize {
    let mut query = app.world_mut().query::<&ContactTag>();
    query.iter(app.world()).filter(|tag| tag.0 == kind).count()
}

#[test]
fn test_level_has_every_contact_kind_and_one_player() {
    let mut app = create_level_app();

    let mut players = app.world_mut().query_filtered::<Entity, With<Player>>();
    assert_eq!(players.iter(app.world()).count(), 1);
    assert!(count_tagged(&mut app, ContactKind::Ground) >= 2);
    assert_eq!(count_tagged(&mut app, ContactKind::Enemy), 1);
    assert_eq!(count_tagged(&mut app, ContactKind::DeathZone), 1);
}

#[test]
fn test_several_reloads_in_one_frame_rebuild_once() {
    let mut app = create_level_app();
    let before = level_entities(&mut app);

    for _ in 0..3 {
        app.world_mut().write_message(ReloadLevelEvent);
    }
    app.update();

    let after = level_entities(&mut app);
    assert_eq!(after.len(), before.len());
    // Every old entity is gone
    assert!(before.iter().all(|entity| !after.contains(entity)));

    let mut players = app.world_mut().query_filtered::<Entity, With<Player>>();
    assert_eq!(players.iter(app.world()).count(), 1);
}

#[test]
fn test_no_reload_without_request() {
    let mut app = create_level_app();
    let before = level_entities(&mut app);

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(level_entities(&mut app), before);
}
