//! Movement domain: input and camera sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{CameraBasis, MovementInput, ViewBasis};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y).clamp_length_max(1.0);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
}

/// Without a camera the controller falls back to world axes.
pub(crate) fn sample_camera(
    cameras: Query<&Transform, With<Camera3d>>,
    mut view: ResMut<ViewBasis>,
) {
    view.0 = cameras.iter().next().map(CameraBasis::from_transform);
}
