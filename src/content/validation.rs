//! Validation of loaded profile values.

use super::data::PlayerProfile;

/// A validation error naming the field and the value that failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' = {} {}", self.field, self.value, self.reason)
    }
}

/// Push an error unless `$value` is finite and satisfies `$ok`.
macro_rules! check_value {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $reason:expr) => {
        let value: f32 = $value;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                value: value.to_string(),
                reason: $reason,
            });
        }
    };
}

/// Validate a player profile.
/// Returns a list of validation errors, empty if the profile is usable.
pub fn validate_profile(profile: &PlayerProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let non_negative = |v: f32| v >= 0.0;
    let positive = |v: f32| v > 0.0;

    let movement = &profile.movement;
    check_value!(errors, "movement.speed", movement.speed, non_negative, "must be non-negative");
    check_value!(
        errors,
        "movement.jump_speed",
        movement.jump_speed,
        non_negative,
        "must be non-negative"
    );
    check_value!(
        errors,
        "movement.rotation_speed",
        movement.rotation_speed,
        non_negative,
        "must be non-negative"
    );
    check_value!(
        errors,
        "movement.ground_tolerance",
        movement.ground_tolerance,
        non_negative,
        "must be non-negative"
    );
    if movement.ground_layers.is_empty() {
        errors.push(ValidationError {
            field: "movement.ground_layers",
            value: "[]".to_string(),
            reason: "must name at least one layer",
        });
    }

    let body = &profile.body;
    check_value!(errors, "body.radius", body.radius, positive, "must be positive");
    check_value!(errors, "body.height", body.height, positive, "must be positive");
    check_value!(
        errors,
        "body.skin_width",
        body.skin_width,
        non_negative,
        "must be non-negative"
    );
    if body.height.is_finite() && body.radius.is_finite() && body.height < 2.0 * body.radius {
        errors.push(ValidationError {
            field: "body.height",
            value: body.height.to_string(),
            reason: "must be at least twice the radius",
        });
    }

    let (x, y, z) = profile.spawn;
    for (field, value) in [("spawn.x", x), ("spawn.y", y), ("spawn.z", z)] {
        check_value!(errors, field, value, |_| true, "must be finite");
    }

    errors
}
