//! Validation for controller tuning values.

use super::data::ControllerConfig;

/// A tuning value outside its meaningful range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}' {}", self.field, self.message)
    }
}

macro_rules! check_non_negative {
    ($errors:expr, $config:expr, $($field:ident),+ $(,)?) => {
        $(
            let value = $config.$field;
            if !value.is_finite() || value < 0.0 {
                $errors.push(ValidationError {
                    field: stringify!($field),
                    message: format!("must be a finite non-negative number, got {}", value),
                });
            }
        )+
    };
}

/// Check every tuning value. Findings are advisory: degenerate values
/// (a zero dash distance, a zero cooldown) still produce working abilities.
pub fn validate_config(config: &ControllerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_non_negative!(
        errors,
        config,
        move_speed,
        jump_speed,
        jump_gravity_scale,
        grounded_ray_distance,
        coyote_time,
        dash_speed,
        dash_distance,
        dash_cooldown,
        respawn_timer,
    );

    if config.ground_layer == 0 {
        errors.push(ValidationError {
            field: "ground_layer",
            message: "is empty, the character will never be grounded".to_string(),
        });
    }

    errors
}
