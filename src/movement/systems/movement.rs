//! Movement domain: controller tick, control-surface routing and state
//! publishing.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{ActiveController, ControllerCommand, MovementStateChanged};
use crate::movement::{
    GroundProbe, MotionRequest, MovementInput, Player, PlayerController, SpawnPoint, TickInput,
    ViewBasis, orient,
};

/// Apply queued control-surface requests to the active controller.
pub(crate) fn apply_controller_commands(
    mut requests: MessageReader<ControllerCommand>,
    active: Res<ActiveController>,
    mut controllers: Query<(&mut PlayerController, &mut Transform, Option<&SpawnPoint>)>,
) {
    for request in requests.read() {
        let Some(entity) = active.get() else {
            debug!("No active controller, dropping {:?}", request);
            continue;
        };
        let Ok((mut controller, mut transform, spawn)) = controllers.get_mut(entity) else {
            warn!("Active controller {:?} is missing, dropping {:?}", entity, request);
            continue;
        };

        match *request {
            ControllerCommand::AddExtraForce {
                force,
                suspend_gravity,
                duration,
                curve,
            } => {
                controller.add_extra_force(force, suspend_gravity, duration, curve);
            }
            ControllerCommand::ResetExtraForce => controller.reset_extra_force(),
            ControllerCommand::Stun(duration) => controller.stun(duration),
            ControllerCommand::RecoverFromStun => controller.recover_from_stun(),
            ControllerCommand::Eliminate => controller.eliminate(),
            ControllerCommand::Pause(paused) => controller.pause(paused),
            ControllerCommand::Kill => {
                controller.kill();
            }
            ControllerCommand::Respawn => {
                if !controller.respawn() {
                    debug!("Respawn ignored: controller eliminated");
                    continue;
                }
                if let Some(spawn) = spawn {
                    transform.translation = spawn.0;
                }
            }
        }
    }
}

/// Run one controller tick per frame and queue the resulting motion.
pub(crate) fn tick_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    view: Res<ViewBasis>,
    active: Res<ActiveController>,
    mut players: Query<
        (
            Entity,
            &mut PlayerController,
            &GroundProbe,
            &mut Transform,
            &mut MotionRequest,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, probe, mut transform, mut request) in &mut players {
        let driven = active.is(entity);
        let tick = TickInput {
            axis: if driven { input.axis } else { Vec2::ZERO },
            jump_pressed: driven && input.jump_just_pressed,
            camera: view.0,
            position: transform.translation,
            ground: probe.hit,
            tracked_pose: probe.tracked,
            delta_seconds: dt,
        };

        let output = controller.tick(&tick);
        transform.rotation = orient(
            transform.rotation,
            &output,
            controller.settings().rotation_speed,
            dt,
        );
        request.displacement = output.total();
    }
}

pub(crate) fn publish_state_changes(
    mut controllers: Query<(Entity, &mut PlayerController)>,
    mut changes: MessageWriter<MovementStateChanged>,
) {
    for (entity, mut controller) in &mut controllers {
        if let Some((from, to)) = controller.take_transition() {
            info!("{from:?} → {to:?}");
            changes.write(MovementStateChanged { entity, from, to });
        }
    }
}

/// Free the active slot once its controller is gone.
pub(crate) fn release_missing_controller(
    mut active: ResMut<ActiveController>,
    controllers: Query<(), With<PlayerController>>,
) {
    let Some(entity) = active.get() else {
        return;
    };

    if controllers.get(entity).is_err() {
        warn!("Active controller {:?} despawned, releasing", entity);
        active.release(entity);
    }
}
