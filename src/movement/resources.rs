//! Movement domain: input and camera resources consumed by the controller.

use bevy::prelude::*;

/// Input sampled once per frame by the input collaborator.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    /// Planar move axis, already deadzoned. `y` is forward.
    pub axis: Vec2,
    pub jump_just_pressed: bool,
}

/// Camera-relative basis used to turn the move axis into a world direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraBasis {
    /// World-aligned basis used when no camera is available.
    pub const WORLD: Self = Self {
        forward: Vec3::NEG_Z,
        right: Vec3::X,
    };

    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            forward: *transform.forward(),
            right: *transform.right(),
        }
    }
}

/// Latest camera basis, if a camera exists.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ViewBasis(pub Option<CameraBasis>);
