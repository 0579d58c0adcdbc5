//! Core domain: scene setup and session-level input.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::events::ControllerCommand;
use crate::core::resources::ActiveController;
use crate::movement::PlayerController;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 9.0, 14.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 12.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Escape toggles the active controller's pause flag.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    active: Res<ActiveController>,
    controllers: Query<&PlayerController>,
    mut commands: MessageWriter<ControllerCommand>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    let Some(controller) = active.get().and_then(|entity| controllers.get(entity).ok()) else {
        debug!("Pause toggle ignored: no active controller");
        return;
    };

    let paused = !controller.state().paused;
    info!("Pause: {}", paused);
    commands.write(ControllerCommand::Pause(paused));
}
