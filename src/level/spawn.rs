//! Level domain: test level and player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::level::{GRAVITY, LevelEntity};
use crate::movement::{ContactKind, ContactTag, GameLayer, Player};

const PLAYER_RADIUS: f32 = 16.0;
const PLAYER_SPAWN: Vec2 = Vec2::new(-300.0, -120.0);
const GROUND_TOP: f32 = -180.0;

pub(crate) fn setup_level(mut commands: Commands, config: Res<ControllerConfig>) {
    spawn_level(&mut commands, &config);
}

/// Build the level in its initial state. Every entity carries `LevelEntity`
/// so a reload can tear all of it down.
pub(crate) fn spawn_level(commands: &mut Commands, config: &ControllerConfig) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Two ground strips with a gap over the death zone
    spawn_solid(
        commands,
        ContactKind::Ground,
        ground_color,
        Vec2::new(500.0, 40.0),
        Vec2::new(-200.0, GROUND_TOP - 20.0),
    );
    spawn_solid(
        commands,
        ContactKind::Ground,
        ground_color,
        Vec2::new(300.0, 40.0),
        Vec2::new(300.0, GROUND_TOP - 20.0),
    );

    // Platforms at a comfortable fraction of the single jump height
    let step = (config.single_jump_height(GRAVITY) * 0.7).min(200.0);
    spawn_solid(
        commands,
        ContactKind::Ground,
        platform_color,
        Vec2::new(140.0, 20.0),
        Vec2::new(-120.0, GROUND_TOP + step),
    );
    spawn_solid(
        commands,
        ContactKind::Ground,
        platform_color,
        Vec2::new(140.0, 20.0),
        Vec2::new(120.0, GROUND_TOP + step * 1.8),
    );

    spawn_solid(
        commands,
        ContactKind::Enemy,
        Color::srgb(0.85, 0.2, 0.2),
        Vec2::new(32.0, 32.0),
        Vec2::new(320.0, GROUND_TOP + 16.0),
    );

    // Death zone below the level
    commands.spawn((
        LevelEntity,
        ContactTag(ContactKind::DeathZone),
        Transform::from_xyz(0.0, -500.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(2000.0, 100.0),
        Sensor,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    spawn_player(commands);
}

fn spawn_solid(commands: &mut Commands, kind: ContactKind, color: Color, size: Vec2, at: Vec2) {
    let layer = match kind {
        ContactKind::Ground => GameLayer::Ground,
        ContactKind::Enemy => GameLayer::Enemy,
        ContactKind::DeathZone => GameLayer::Sensor,
    };

    commands.spawn((
        LevelEntity,
        ContactTag(kind),
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(at.x, at.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

fn spawn_player(commands: &mut Commands) {
    commands.spawn((
        // Identity
        (Player, LevelEntity),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::splat(PLAYER_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::circle(PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            Mass(1.0),
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Enemy, GameLayer::Sensor],
            ),
        ),
    ));
}
