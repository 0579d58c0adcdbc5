//! Movement domain: per-controller tuning and the fixed constants of the model.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Gravitational acceleration in m/s². Also the floor for vertical velocity.
pub const GRAVITY: f32 = -20.0;

/// Vertical velocity held while grounded so the probe keeps the surface.
pub const GROUND_STICK_VELOCITY: f32 = -1.0;

/// Rate at which horizontal velocity approaches its target.
pub const MOVE_SMOOTHING: f32 = 5.0;

/// Horizontal speeds at or below this snap to zero.
pub const VELOCITY_SNAP: f32 = 0.01;

/// Grounded characters above this squared speed count as moving.
pub const MOVING_SPEED_SQ: f32 = 0.1;

/// Squared speed required before the character turns toward its motion.
pub const FACING_SPEED_SQ: f32 = 0.01;

/// Conversion for debug readouts.
pub const KMH_PER_MS: f32 = 3.6;

/// Immutable tuning for one controller.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MovementSettings {
    /// Planar speed in m/s.
    pub speed: f32,
    /// Upward velocity set by a jump, in m/s.
    pub jump_speed: f32,
    /// How fast the character turns toward its direction of travel.
    pub rotation_speed: f32,
    /// Extra reach of the ground probe below the capsule.
    pub ground_tolerance: f32,
    /// Layers considered as ground.
    pub ground_mask: LayerMask,
    /// Show the on-screen state readout (dev-tools).
    pub state_logs: bool,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            speed: 18.0 / KMH_PER_MS,
            jump_speed: 8.0,
            rotation_speed: 10.0,
            ground_tolerance: 0.2,
            ground_mask: LayerMask(GameLayer::Ground.to_bits()),
            state_logs: false,
        }
    }
}

impl MovementSettings {
    /// Peak height of a standing jump: h = v² / 2g.
    pub fn jump_height(&self) -> f32 {
        self.jump_speed * self.jump_speed / (2.0 * -GRAVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_speed_is_eighteen_kmh() {
        let settings = MovementSettings::default();
        assert!((settings.speed - 5.0).abs() < 1e-5);
    }

    #[test]
    fn default_mask_targets_ground_layer() {
        let settings = MovementSettings::default();
        assert_eq!(settings.ground_mask.0, GameLayer::Ground.to_bits());
        assert_ne!(settings.ground_mask.0 & GameLayer::Ground.to_bits(), 0);
        assert_eq!(settings.ground_mask.0 & GameLayer::Wall.to_bits(), 0);
    }

    #[test]
    fn jump_height_from_speed() {
        let settings = MovementSettings {
            jump_speed: 8.0,
            ..default()
        };
        assert!((settings.jump_height() - 1.6).abs() < 1e-5);
    }
}
