//! Data definitions for the player profile.
//!
//! These structs mirror assets/data/player.ron and are used for
//! deserialization. Defaults match the built-in tuning so a missing or broken
//! file still yields a playable controller.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{GameLayer, MovementSettings};

/// Movement, body and spawn data for the controlled character.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerProfile {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub body: BodyDef,
    pub spawn: (f32, f32, f32),
}

impl PlayerProfile {
    pub fn spawn_point(&self) -> Vec3 {
        let (x, y, z) = self.spawn;
        Vec3::new(x, y, z)
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            schema_version: 1,
            movement: MovementDef::default(),
            body: BodyDef::default(),
            spawn: (0.0, 1.5, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovementDef {
    /// Planar speed in m/s.
    pub speed: f32,
    pub jump_speed: f32,
    pub rotation_speed: f32,
    pub ground_tolerance: f32,
    pub ground_layers: Vec<GameLayer>,
    #[serde(default)]
    pub state_logs: bool,
}

impl MovementDef {
    pub fn ground_mask(&self) -> LayerMask {
        let bits = self
            .ground_layers
            .iter()
            .fold(0, |mask, layer| mask | layer.to_bits());
        LayerMask(bits)
    }

    pub fn to_settings(&self) -> MovementSettings {
        MovementSettings {
            speed: self.speed,
            jump_speed: self.jump_speed,
            rotation_speed: self.rotation_speed,
            ground_tolerance: self.ground_tolerance,
            ground_mask: self.ground_mask(),
            state_logs: self.state_logs,
        }
    }
}

impl Default for MovementDef {
    fn default() -> Self {
        let settings = MovementSettings::default();
        Self {
            speed: settings.speed,
            jump_speed: settings.jump_speed,
            rotation_speed: settings.rotation_speed,
            ground_tolerance: settings.ground_tolerance,
            ground_layers: vec![GameLayer::Ground],
            state_logs: settings.state_logs,
        }
    }
}

/// Capsule dimensions of the character.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BodyDef {
    pub radius: f32,
    /// Total height including both caps.
    pub height: f32,
    pub skin_width: f32,
}

impl BodyDef {
    /// Length of the capsule's straight section.
    pub fn segment_length(&self) -> f32 {
        (self.height - 2.0 * self.radius).max(0.0)
    }
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 2.0,
            skin_width: 0.08,
        }
    }
}
