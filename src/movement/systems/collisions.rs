//! Movement domain: contact dispatch and probe visualization.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::PlayerDiedEvent;
use crate::movement::controller::AbilityController;
use crate::movement::{ContactKind, ContactTag, Player};

/// Resolve contact starts against tagged colliders and report fatal ones.
pub(crate) fn dispatch_player_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    mut death_events: MessageWriter<PlayerDiedEvent>,
    player_query: Query<Entity, With<Player>>,
    tag_query: Query<&ContactTag>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, other) in pairs {
            if player_query.get(player).is_err() {
                continue;
            }
            let Ok(tag) = tag_query.get(other) else {
                continue;
            };

            match tag.0 {
                // Grounded status comes from the probes, not from contacts
                ContactKind::Ground => trace!("{:?} touched ground {:?}", player, other),
                ContactKind::Enemy | ContactKind::DeathZone => {
                    info!("{:?} hit {:?} ({:?})", player, other, tag.0);
                    death_events.write(PlayerDiedEvent {
                        player,
                        cause: tag.0,
                    });
                }
            }
        }
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) fn draw_ground_probes(
    mut gizmos: Gizmos,
    query: Query<(&Position, &AbilityController)>,
) {
    for (position, controller) in &query {
        if controller.is_retired() {
            continue;
        }

        let sensor = controller.sensor();
        let color = if controller.state().is_grounded {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };
        for origin in sensor.probe_origins(position.0) {
            gizmos.line_2d(origin, origin - Vec2::Y * sensor.ray_distance, color);
        }

        // Commanded ground speed, a tenth of a second ahead
        let heading = Vec2::X * controller.movement_direction() * controller.move_speed() * 0.1;
        gizmos.line_2d(position.0, position.0 + heading, Color::srgb(0.3, 0.6, 0.95));
    }
}
