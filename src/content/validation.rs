//! Validation for loaded configuration values.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub reason: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.reason
        )
    }
}

/// Helper macro for checking a numeric condition
macro_rules! check_value {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $ok:expr, $reason:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                reason: $reason.to_string(),
            });
        }
    };
}

/// Validate the controller tuning.
/// Returns a list of validation errors, empty if every value is usable.
pub fn validate_config(config: &ControllerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let source = "ControllerConfig";
    let id = "controller";

    check_value!(
        errors,
        source,
        id,
        "speed",
        config.speed.is_finite() && config.speed > 0.0,
        "must be a positive number"
    );
    check_value!(
        errors,
        source,
        id,
        "jump_force",
        config.jump_force.is_finite() && config.jump_force >= 0.0,
        "must not be negative"
    );
    check_value!(
        errors,
        source,
        id,
        "sliding_down_speed",
        config.sliding_down_speed.is_finite(),
        "must be finite"
    );
    check_value!(
        errors,
        source,
        id,
        "respawn_duration",
        config.respawn_duration.is_finite() && config.respawn_duration > 0.0,
        "must be a positive number of seconds"
    );
    check_value!(
        errors,
        source,
        id,
        "tackle_duration",
        config.tackle_duration.is_finite() && config.tackle_duration > 0.0,
        "must be a positive number of seconds"
    );
    check_value!(
        errors,
        source,
        id,
        "max_jumps_count",
        config.max_jumps_count > 0,
        "must allow at least one jump"
    );
    check_value!(
        errors,
        source,
        id,
        "raycast_distance",
        config.raycast_distance.is_finite() && config.raycast_distance >= 0.0,
        "must not be negative"
    );

    errors
}

/// Validate entity definitions: ids are unique and every entity has hit points.
pub fn validate_entities(entities: &EntityDefs) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, def) in entities.defs.iter().enumerate() {
        check_value!(errors, "Entity", def.id, "hp", def.hp > 0, "must be positive");
        check_value!(
            errors,
            "Entity",
            def.id,
            "id",
            !entities.defs[..index].iter().any(|other| other.id == def.id),
            "is defined more than once"
        );
    }

    errors
}

/// Validate player slots: key names resolve and no slot is listed twice.
pub fn validate_players(players: &PlayerSlots) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, slot) in players.slots.iter().enumerate() {
        let source_id = slot.id.to_string();
        for (field, name) in [
            ("left", &slot.left),
            ("right", &slot.right),
            ("jump", &slot.jump),
            ("attack", &slot.attack),
        ] {
            check_value!(
                errors,
                "PlayerSlot",
                source_id,
                field,
                key_code(name).is_some(),
                format!("unknown key '{}'", name)
            );
        }
        check_value!(
            errors,
            "PlayerSlot",
            source_id,
            "id",
            !players.slots[..index].iter().any(|other| other.id == slot.id),
            "is defined more than once"
        );
    }

    errors
}
