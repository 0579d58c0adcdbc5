//! Movement domain: discrete movement status and the mutable movement state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::settings::MOVING_SPEED_SQ;

/// Discrete movement state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum MovementStatus {
    #[default]
    Idle,
    Moving,
    Jumping,
    Falling,
    Stunned,
    Eliminated,
}

impl MovementStatus {
    /// Stunned and Eliminated are only left through explicit calls.
    pub fn is_sticky(self) -> bool {
        matches!(self, Self::Stunned | Self::Eliminated)
    }

    /// How strongly input steers horizontal velocity in this state.
    pub fn attenuation(self) -> f32 {
        match self {
            Self::Idle | Self::Moving => 1.0,
            Self::Jumping => 0.8,
            Self::Falling => 0.6,
            Self::Stunned | Self::Eliminated => 0.0,
        }
    }

    /// States from which a jump may start.
    pub fn allows_jump(self) -> bool {
        matches!(self, Self::Idle | Self::Moving)
    }
}

/// Mutable movement state, owned by the controller and read by observers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementState {
    pub status: MovementStatus,
    pub paused: bool,
    pub dead: bool,
    pub grounded: bool,
    pub gravity_suspended: bool,
    /// Signed vertical velocity in m/s (positive = up).
    pub vertical_velocity: f32,
    /// Planar velocity in m/s, `x` maps to world X and `y` to world Z.
    pub horizontal_velocity: Vec2,
    /// Impulse-sourced velocity in m/s.
    pub extra_velocity: Vec3,
    /// Velocity inherited from the last platform in m/s.
    pub ground_velocity: Vec3,
    /// Body currently standing on. Reference only.
    pub ground_body: Option<Entity>,
}

impl MovementState {
    /// Reclassify the status from grounded-ness and velocity.
    /// Sticky statuses are left untouched.
    pub fn classify(&mut self) {
        if self.status.is_sticky() {
            return;
        }

        self.status = if !self.grounded {
            if self.vertical_velocity > 0.0 {
                MovementStatus::Jumping
            } else {
                MovementStatus::Falling
            }
        } else if self.horizontal_velocity.length_squared() > MOVING_SPEED_SQ {
            MovementStatus::Moving
        } else {
            MovementStatus::Idle
        };
    }

    /// Planar velocity lifted into world space.
    pub fn planar_velocity(&self) -> Vec3 {
        Vec3::new(self.horizontal_velocity.x, 0.0, self.horizontal_velocity.y)
    }

    /// Combined velocity of all four contributions.
    pub fn total_velocity(&self) -> Vec3 {
        self.planar_velocity()
            + Vec3::Y * self.vertical_velocity
            + self.ground_velocity
            + self.extra_velocity
    }

    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity.length()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            status: self.status,
            paused: self.paused,
            dead: self.dead,
            grounded: self.grounded,
            gravity_suspended: self.gravity_suspended,
            horizontal_speed: self.horizontal_speed(),
            vertical_velocity: self.vertical_velocity,
            horizontal_velocity: self.horizontal_velocity.to_array(),
            extra_velocity: self.extra_velocity.to_array(),
            ground_velocity: self.ground_velocity.to_array(),
        }
    }

    pub(crate) fn halt(&mut self) {
        self.horizontal_velocity = Vec2::ZERO;
        self.vertical_velocity = 0.0;
    }
}

/// Read-only view of a controller, for animation, HUD and transports.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ControllerSnapshot {
    pub status: MovementStatus,
    pub paused: bool,
    pub dead: bool,
    pub grounded: bool,
    pub gravity_suspended: bool,
    pub horizontal_speed: f32,
    pub vertical_velocity: f32,
    pub horizontal_velocity: [f32; 2],
    pub extra_velocity: [f32; 3],
    pub ground_velocity: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attenuation_per_status() {
        assert_eq!(MovementStatus::Idle.attenuation(), 1.0);
        assert_eq!(MovementStatus::Moving.attenuation(), 1.0);
        assert_eq!(MovementStatus::Jumping.attenuation(), 0.8);
        assert_eq!(MovementStatus::Falling.attenuation(), 0.6);
        assert_eq!(MovementStatus::Stunned.attenuation(), 0.0);
        assert_eq!(MovementStatus::Eliminated.attenuation(), 0.0);
    }

    #[test]
    fn classify_airborne_by_vertical_sign() {
        let mut state = MovementState {
            vertical_velocity: 3.0,
            ..default()
        };
        state.classify();
        assert_eq!(state.status, MovementStatus::Jumping);

        state.vertical_velocity = 0.0;
        state.classify();
        assert_eq!(state.status, MovementStatus::Falling);
    }

    #[test]
    fn classify_grounded_by_speed() {
        let mut state = MovementState {
            grounded: true,
            horizontal_velocity: Vec2::new(0.4, 0.0),
            ..default()
        };
        state.classify();
        assert_eq!(state.status, MovementStatus::Moving);

        state.horizontal_velocity = Vec2::new(0.3, 0.0);
        state.classify();
        assert_eq!(state.status, MovementStatus::Idle);
    }

    #[test]
    fn classify_leaves_sticky_states() {
        for status in [MovementStatus::Stunned, MovementStatus::Eliminated] {
            let mut state = MovementState {
                status,
                grounded: true,
                horizontal_velocity: Vec2::new(4.0, 0.0),
                ..default()
            };
            state.classify();
            assert_eq!(state.status, status);
        }
    }
}
