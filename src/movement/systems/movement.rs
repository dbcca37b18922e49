//! Movement domain: controller setup and the per-tick ability update.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::body::AvianBody;
use crate::movement::controller::AbilityController;
use crate::movement::ground::AvianGroundProbe;
use crate::movement::input::{InputSource, PlayerInputSource};
use crate::movement::{Player, SetupFailed};

/// Attach an `AbilityController` to each newly spawned player, capturing the
/// body's gravity scale as the restore target. A character missing a required
/// collaborator is left without a controller.
pub(crate) fn init_ability_controllers(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    query: Query<
        (
            Entity,
            Has<RigidBody>,
            Option<&Collider>,
            Has<LinearVelocity>,
            Option<&GravityScale>,
        ),
        (With<Player>, Without<AbilityController>, Without<SetupFailed>),
    >,
) {
    for (entity, has_body, collider, has_velocity, gravity_scale) in &query {
        match AbilityController::for_body(&config, has_body, collider, has_velocity, gravity_scale)
        {
            Ok(controller) => {
                info!(
                    "Ability controller attached to {:?}: probe half-width={}, default gravity={}",
                    entity,
                    controller.sensor().half_width,
                    controller.state().default_gravity_scale
                );
                commands.entity(entity).insert(controller);
            }
            Err(e) => {
                error!("{:?}: {}", entity, e);
                commands.entity(entity).insert(SetupFailed);
            }
        }
    }
}

/// Runs in `FixedUpdate` for bound actions and in `Update` for polled keys;
/// `Time` is the matching clock in either schedule.
pub(crate) fn tick_ability_controllers(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    source: Option<ResMut<PlayerInputSource>>,
    mut query: Query<
        (
            Entity,
            &Position,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
            &mut AbilityController,
        ),
        With<Player>,
    >,
) {
    let Some(mut source) = source else {
        return;
    };

    let elapsed = time.delta_secs();
    let sample = source.sample();

    for (entity, position, mut velocity, mut gravity_scale, mass, mut controller) in &mut query {
        let ground_layer = controller.config.ground_layer;
        let probe = AvianGroundProbe::new(&spatial_query, ground_layer, entity);
        let mut body = AvianBody::new(position, &mut *velocity, &mut *gravity_scale, mass);
        controller.tick(&mut body, &probe, sample, elapsed);
    }
}
