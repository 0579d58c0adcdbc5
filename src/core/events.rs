//! Core domain: control-surface and observation messages.

use bevy::ecs::message::Message;
use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use crate::movement::MovementStatus;

/// Request routed to the active controller by gadgets, triggers and menus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerCommand {
    AddExtraForce {
        force: Vec3,
        suspend_gravity: bool,
        /// Non-positive means permanent until `ResetExtraForce`.
        duration: f32,
        curve: Option<EaseFunction>,
    },
    ResetExtraForce,
    /// Zero duration stuns until `RecoverFromStun`.
    Stun(f32),
    RecoverFromStun,
    Eliminate,
    Pause(bool),
    Kill,
    Respawn,
}

impl ControllerCommand {
    /// Permanent extra force, as used by springboards.
    pub fn push(force: Vec3) -> Self {
        Self::AddExtraForce {
            force,
            suspend_gravity: false,
            duration: -1.0,
            curve: None,
        }
    }
}

impl Message for ControllerCommand {}

/// Fired whenever a controller's discrete state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementStateChanged {
    pub entity: Entity,
    pub from: MovementStatus,
    pub to: MovementStatus,
}

impl Message for MovementStateChanged {}
