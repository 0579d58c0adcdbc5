//! Content domain: tests for profile parsing, validation and fallback.

use avian3d::prelude::PhysicsLayer;
use std::path::Path;

use super::{
    BodyDef, PlayerProfile, ValidationError, parse_single, resolve_profile, validate_profile,
};
use crate::movement::{GameLayer, MovementSettings};

const SHIPPED_PROFILE: &str = include_str!("../../assets/data/player.ron");

fn field_names(errors: &[ValidationError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field).collect()
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_profile_parses_and_validates() {
    let profile: PlayerProfile = parse_single("player.ron", SHIPPED_PROFILE).unwrap();
    assert!(validate_profile(&profile).is_empty());
    assert_eq!(profile.movement.ground_layers, vec![GameLayer::Ground]);
    assert_eq!(profile.spawn_point().y, 1.5);
}

#[test]
fn test_state_logs_defaults_to_off() {
    let source = r#"(
        schema_version: 1,
        movement: (
            speed: 4.0,
            jump_speed: 6.0,
            rotation_speed: 8.0,
            ground_tolerance: 0.1,
            ground_layers: [Ground, Wall],
        ),
        body: (radius: 0.4, height: 1.8, skin_width: 0.05),
        spawn: (1.0, 2.0, 3.0),
    )"#;
    let profile: PlayerProfile = parse_single("inline", source).unwrap();
    assert!(!profile.movement.state_logs);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<PlayerProfile>("broken.ron", "(schema_version: ").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron: Parse error"));
}

// -----------------------------------------------------------------------------
// Conversion to settings
// -----------------------------------------------------------------------------

#[test]
fn test_ground_layers_fold_into_mask() {
    let mut profile = PlayerProfile::default();
    profile.movement.ground_layers = vec![GameLayer::Ground, GameLayer::Wall];

    let settings = profile.movement.to_settings();
    assert_eq!(
        settings.ground_mask.0,
        GameLayer::Ground.to_bits() | GameLayer::Wall.to_bits()
    );
}

#[test]
fn test_default_profile_matches_default_settings() {
    let settings = PlayerProfile::default().movement.to_settings();
    assert_eq!(settings, MovementSettings::default());
}

#[test]
fn test_segment_length_excludes_caps() {
    let body = BodyDef {
        radius: 0.5,
        height: 2.0,
        skin_width: 0.0,
    };
    assert_eq!(body.segment_length(), 1.0);
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_negative_magnitudes_are_reported() {
    let mut profile = PlayerProfile::default();
    profile.movement.speed = -1.0;
    profile.movement.ground_tolerance = f32::NAN;

    let errors = validate_profile(&profile);
    assert_eq!(
        field_names(&errors),
        vec!["movement.speed", "movement.ground_tolerance"]
    );
}

#[test]
fn test_empty_ground_layers_are_reported() {
    let mut profile = PlayerProfile::default();
    profile.movement.ground_layers.clear();

    let errors = validate_profile(&profile);
    assert_eq!(field_names(&errors), vec!["movement.ground_layers"]);
}

#[test]
fn test_short_capsule_is_reported() {
    let mut profile = PlayerProfile::default();
    profile.body.height = 0.8;

    let errors = validate_profile(&profile);
    assert_eq!(field_names(&errors), vec!["body.height"]);
    assert!(errors[0].to_string().contains("twice the radius"));
}

#[test]
fn test_non_finite_spawn_is_reported() {
    let mut profile = PlayerProfile::default();
    profile.spawn.1 = f32::INFINITY;

    let errors = validate_profile(&profile);
    assert_eq!(field_names(&errors), vec!["spawn.y"]);
}

// -----------------------------------------------------------------------------
// Fallback
// -----------------------------------------------------------------------------

#[test]
fn test_missing_directory_falls_back_to_defaults() {
    let profile = resolve_profile(Path::new("does/not/exist"));
    assert_eq!(profile, PlayerProfile::default());
}

#[test]
fn test_shipped_directory_loads() {
    let profile = resolve_profile(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data"));
    assert!(profile.movement.state_logs);
}
