//! Loader for the RON controller config at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerConfig;
use super::validation::validate_config;

pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a controller config from RON source. Missing fields keep their defaults.
pub fn parse_controller_config(
    contents: &str,
    file: &str,
) -> Result<ControllerConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_controller_config_file(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_config(&contents, &file_name)
}

/// Startup system: insert the `ControllerConfig` resource.
pub(crate) fn load_controller_config(mut commands: Commands) {
    let config = match load_controller_config_file(Path::new(CONTROLLER_CONFIG_PATH)) {
        Ok(config) => {
            info!("Loaded controller config from {}", CONTROLLER_CONFIG_PATH);
            config
        }
        Err(e) => {
            warn!("{}; using default controller config", e);
            ControllerConfig::default()
        }
    };

    for error in validate_config(&config) {
        warn!("Controller config: {}", error);
    }

    commands.insert_resource(config);
}
