//! Debug overlay for tuning the controller by hand.
//!
//! Features:
//! - On-screen state log of the active controller (F3)
//! - Ground probe gizmo, green while grounded and orange while airborne (F4)
//! - Dump the active controller's snapshot as JSON to the log (F5)
//!
//! The state log starts visible when the loaded profile sets `state_logs`.

use bevy::prelude::*;

use crate::content::PlayerProfile;
use crate::core::ActiveController;
use crate::movement::{KMH_PER_MS, PlayerController, ProbeShape};

/// Resource tracking which debug views are visible
#[derive(Resource, Debug)]
pub struct DebugState {
    pub show_state_log: bool,
    pub show_probe: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_state_log: false,
            show_probe: true,
        }
    }
}

/// Marker for the state log text
#[derive(Component, Debug)]
pub struct StateLogOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, (init_debug_state, spawn_state_log).chain())
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    update_state_log,
                    draw_ground_probe.run_if(|state: Res<DebugState>| state.show_probe),
                )
                    .chain(),
            );
    }
}

/// Seed visibility from the loaded profile.
fn init_debug_state(
    mut debug_state: ResMut<DebugState>,
    profile: Option<Res<PlayerProfile>>,
) {
    if let Some(profile) = profile {
        debug_state.show_state_log = profile.movement.state_logs;
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    active: Res<ActiveController>,
    controllers: Query<&PlayerController>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_state_log = !debug_state.show_state_log;
    }
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_probe = !debug_state.show_probe;
    }
    if keyboard.just_pressed(KeyCode::F5) {
        let Some(controller) = active.get().and_then(|entity| controllers.get(entity).ok()) else {
            warn!("No active controller to snapshot");
            return;
        };
        match serde_json::to_string(&controller.snapshot()) {
            Ok(json) => info!("Snapshot: {}", json),
            Err(e) => warn!("Snapshot serialization failed: {}", e),
        }
    }
}

fn update_state_log(
    debug_state: Res<DebugState>,
    active: Res<ActiveController>,
    controllers: Query<&PlayerController>,
    mut overlay: Query<(&mut Text, &mut Visibility), With<StateLogOverlay>>,
) {
    let Ok((mut text, mut visibility)) = overlay.single_mut() else {
        return;
    };

    let controller = active.get().and_then(|entity| controllers.get(entity).ok());
    let Some(controller) = controller.filter(|_| debug_state.show_state_log) else {
        *visibility = Visibility::Hidden;
        return;
    };

    *visibility = Visibility::Inherited;
    let state = controller.state();
    **text = format_state_log(controller);
    if state.paused {
        text.push_str("\n[paused]");
    }
}

/// Text shown by the state log.
pub fn format_state_log(controller: &PlayerController) -> String {
    let state = controller.state();
    let mut log = format!(
        "Speed: {:.1} km/h\nHorizontal: ({:.2}, {:.2})\nVertical: {:.1} km/h\nGrounded: {}\nState: {:?}",
        state.horizontal_speed() * KMH_PER_MS,
        state.horizontal_velocity.x,
        state.horizontal_velocity.y,
        state.vertical_velocity * KMH_PER_MS,
        state.grounded,
        state.status
    );
    if let Some(task) = controller.impulse().active() {
        log.push_str(&format!("\nImpulse: {:.0}%", task.progress() * 100.0));
    }
    log
}

fn draw_ground_probe(
    mut gizmos: Gizmos,
    controllers: Query<(&Transform, &ProbeShape, &PlayerController)>,
) {
    for (transform, probe, controller) in &controllers {
        let color = if controller.state().grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(1.0, 0.6, 0.1)
        };
        let center = probe.center(transform.translation, transform.rotation);
        gizmos.sphere(Isometry3d::from_translation(center), probe.radius, color);
    }
}

fn spawn_state_log(mut commands: Commands) {
    commands.spawn((
        StateLogOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        Visibility::Hidden,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::TickInput;

    #[test]
    fn state_log_reports_speed_in_kmh() {
        let controller = PlayerController::default();
        let log = format_state_log(&controller);
        assert!(log.starts_with("Speed: 0.0 km/h"));
        assert!(log.ends_with("State: Idle"));
    }

    #[test]
    fn state_log_reports_vertical_in_kmh() {
        let mut controller = PlayerController::default();
        controller.tick(&TickInput {
            delta_seconds: 2.0,
            ..default()
        });

        // Falling at the -20 m/s floor.
        let log = format_state_log(&controller);
        assert!(log.contains("\nVertical: -72.0 km/h\n"), "{log}");
    }

    #[test]
    fn state_log_shows_running_impulse() {
        let mut controller = PlayerController::default();
        controller.add_extra_force(Vec3::X * 4.0, false, 1.0, None);
        controller.tick(&TickInput {
            delta_seconds: 0.25,
            ..default()
        });

        let log = format_state_log(&controller);
        assert!(log.ends_with("Impulse: 25%"), "{log}");
    }
}
