//! Movement domain: two-probe ground sensor.

use avian2d::prelude::*;
use bevy::prelude::*;

/// A downward probe into the ground layer.
pub trait GroundProbe {
    /// True if ground geometry lies below `origin` within `max_distance`.
    fn hits_ground(&self, origin: Vec2, max_distance: f32) -> bool;
}

/// Casts one probe at each lateral extreme of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSensor {
    pub half_width: f32,
    pub ray_distance: f32,
}

impl GroundSensor {
    pub fn new(half_width: f32, ray_distance: f32) -> Self {
        Self {
            half_width,
            ray_distance,
        }
    }

    /// Left and right probe origins. They coincide for a zero half-width.
    pub fn probe_origins(&self, position: Vec2) -> [Vec2; 2] {
        let offset = Vec2::new(self.half_width, 0.0);
        [position - offset, position + offset]
    }

    pub fn is_grounded(&self, position: Vec2, probe: &impl GroundProbe) -> bool {
        self.probe_origins(position)
            .iter()
            .any(|&origin| probe.hits_ground(origin, self.ray_distance))
    }
}

/// Ray casts through avian's spatial query, filtered to the ground layer.
pub struct AvianGroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianGroundProbe<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, ground_layer: u32, body: Entity) -> Self {
        let filter =
            SpatialQueryFilter::from_mask(LayerMask(ground_layer)).with_excluded_entities([body]);
        Self {
            spatial_query,
            filter,
        }
    }
}

impl GroundProbe for AvianGroundProbe<'_, '_, '_> {
    fn hits_ground(&self, origin: Vec2, max_distance: f32) -> bool {
        self.spatial_query
            .cast_ray(origin, Dir2::NEG_Y, max_distance, true, &self.filter)
            .is_some()
    }
}
