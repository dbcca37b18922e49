//! Core domain: tests for window setup and time scale control.

use bevy::prelude::*;

use super::{TimeControl, primary_window};

#[test]
fn test_primary_window_size() {
    let window = primary_window();
    assert_eq!(window.resolution.width(), 1280.0);
    assert_eq!(window.resolution.height(), 720.0);
    assert_eq!(window.title, "Skyhop");
}

#[test]
fn test_virtual_time_scale_round_trip() {
    let mut time = Time::<Virtual>::default();
    assert_eq!(time.time_scale(), 1.0);

    time.set_time_scale(0.0);
    assert_eq!(time.time_scale(), 0.0);
    assert_eq!(time.relative_speed(), 0.0);

    time.set_time_scale(1.0);
    assert_eq!(time.relative_speed(), 1.0);
}
