//! Movement domain: horizontal smoothing, vertical integration and the
//! per-frame displacement built from all velocity contributions.

use bevy::prelude::*;

use crate::movement::resources::CameraBasis;
use crate::movement::settings::{
    GRAVITY, GROUND_STICK_VELOCITY, MOVE_SMOOTHING, MovementSettings, VELOCITY_SNAP,
};
use crate::movement::state::MovementState;

/// Target planar velocity for a move axis, relative to the camera.
/// Any non-zero input asks for full speed.
pub fn planar_target(basis: CameraBasis, axis: Vec2, speed: f32) -> Vec2 {
    let forward = Vec3::new(basis.forward.x, 0.0, basis.forward.z).normalize_or_zero();
    let right = Vec3::new(basis.right.x, 0.0, basis.right.z).normalize_or_zero();

    let direction = forward * axis.y + right * axis.x;
    Vec2::new(direction.x, direction.z).normalize_or_zero() * speed
}

/// Exponentially approach `target`, then snap residual drift to zero.
pub fn smooth_toward(current: Vec2, target: Vec2, attenuation: f32, delta_seconds: f32) -> Vec2 {
    let t = (attenuation * delta_seconds * MOVE_SMOOTHING).clamp(0.0, 1.0);
    let next = current.lerp(target, t);
    if next.length() > VELOCITY_SNAP {
        next
    } else {
        Vec2::ZERO
    }
}

/// Update horizontal velocity from input. Paused controllers steer toward
/// rest; states without control stop dead.
pub fn update_horizontal(
    state: &mut MovementState,
    settings: &MovementSettings,
    axis: Vec2,
    basis: CameraBasis,
    delta_seconds: f32,
) {
    let attenuation = if state.dead {
        0.0
    } else {
        state.status.attenuation()
    };

    if attenuation <= 0.0 {
        state.horizontal_velocity = Vec2::ZERO;
        return;
    }

    let target = if state.paused {
        Vec2::ZERO
    } else {
        planar_target(basis, axis, settings.speed)
    };

    state.horizontal_velocity =
        smooth_toward(state.horizontal_velocity, target, attenuation, delta_seconds);
}

/// Update vertical velocity. A latched jump is consumed here and clears the
/// grounded flag so the same frame cannot re-ground.
pub fn update_vertical(
    state: &mut MovementState,
    settings: &MovementSettings,
    jump_latched: &mut bool,
    delta_seconds: f32,
) {
    if state.grounded && *jump_latched && !state.paused {
        state.grounded = false;
        *jump_latched = false;
        state.vertical_velocity = settings.jump_speed;
    } else if state.grounded && state.vertical_velocity <= 0.0 {
        state.vertical_velocity = if state.gravity_suspended {
            0.0
        } else {
            GROUND_STICK_VELOCITY
        };
    } else if !state.gravity_suspended {
        state.vertical_velocity = (state.vertical_velocity + GRAVITY * delta_seconds).max(GRAVITY);
    }
}

/// Distance covered this frame by all four contributions.
pub fn displacement(state: &MovementState, delta_seconds: f32) -> Vec3 {
    state.total_velocity() * delta_seconds
}
