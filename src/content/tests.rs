//! Content domain: tests for config parsing and validation.

use std::path::Path;

use super::ControllerConfig;
use super::loader::{load_controller_config_file, parse_controller_config};
use super::validation::validate_config;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_config() {
    let source = r#"(
        move_speed: 250.0,
        jump_speed: 500.0,
        jump_gravity_scale: 2.5,
        allow_double_jump: false,
        grounded_ray_distance: 18.0,
        ground_layer: 2,
        coyote_time: 0.1,
        dash_speed: 800.0,
        dash_distance: 120.0,
        dash_cooldown: 1.0,
        respawn_timer: 0.25,
        legacy_input: true,
    )"#;

    let config = parse_controller_config(source, "inline").expect("config should parse");
    assert_eq!(config.move_speed, 250.0);
    assert!(!config.allow_double_jump);
    assert_eq!(config.ground_layer, 2);
    assert_eq!(config.dash_distance, 120.0);
    assert!(config.legacy_input);
}

#[test]
fn test_parse_partial_config_keeps_defaults() {
    let config = parse_controller_config("(dash_cooldown: 2.0)", "inline").unwrap();
    let defaults = ControllerConfig::default();

    assert_eq!(config.dash_cooldown, 2.0);
    assert_eq!(config.coyote_time, defaults.coyote_time);
    assert_eq!(config.jump_gravity_scale, 3.0);
    assert_eq!(config.ground_layer, defaults.ground_layer);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_controller_config("(move_speed: fast)", "controller.ron").unwrap_err();
    assert_eq!(err.file, "controller.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("controller.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_controller_config_file(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/controller.ron");
    let config = load_controller_config_file(&path).expect("shipped config should load");
    assert!(validate_config(&config).is_empty());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&ControllerConfig::default()).is_empty());
}

#[test]
fn test_negative_values_are_reported() {
    let config = ControllerConfig {
        dash_cooldown: -1.0,
        coyote_time: f32::NAN,
        ..Default::default()
    };

    let errors = validate_config(&config);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["coyote_time", "dash_cooldown"]);
}

#[test]
fn test_zero_dash_distance_is_accepted() {
    let config = ControllerConfig {
        dash_distance: 0.0,
        dash_cooldown: 0.0,
        ..Default::default()
    };
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_empty_ground_layer_is_reported() {
    let config = ControllerConfig {
        ground_layer: 0,
        ..Default::default()
    };
    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ground_layer");
}

#[test]
fn test_single_jump_height() {
    let config = ControllerConfig {
        jump_speed: 20.0,
        ..Default::default()
    };
    assert_eq!(config.single_jump_height(10.0), 20.0);
    assert!(config.single_jump_height(0.0).is_infinite());
}
