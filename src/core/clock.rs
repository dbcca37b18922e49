//! Core domain: global time scale control.

use bevy::prelude::*;

/// Control over the global simulation time scale.
///
/// Scaled ticks (fixed physics steps and `Time<Virtual>` deltas) stop advancing
/// at scale `0.0`; unscaled real time is unaffected.
pub trait TimeControl {
    fn time_scale(&self) -> f32;
    fn set_time_scale(&mut self, scale: f32);
}

impl TimeControl for Time<Virtual> {
    fn time_scale(&self) -> f32 {
        self.relative_speed()
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.set_relative_speed(scale);
    }
}
