//! Movement domain: kinematic character controller, plugin wiring and
//! public exports.
//!
//! Each frame runs, in order: input and camera sampling, control-surface
//! requests, the ground probe, the controller tick, collide-and-slide, and
//! state-change publishing.

mod bootstrap;
mod components;
mod controller;
mod dev;
mod ground;
mod impulse;
mod platform;
mod resources;
mod settings;
mod state;
pub(crate) mod systems;
mod velocity;


pub use bootstrap::controller_bundle;
pub use components::{
    GameLayer, Ground, GroundProbe, MotionRequest, Player, SpawnPoint, Wall,
};
pub use controller::{PlayerController, TickInput, TickOutput, orient};
pub use ground::{GroundHit, ProbeShape};
pub use impulse::{ImpulseRequest, ImpulseScheduler, ImpulseTask};
pub use platform::{PlatformAnchor, PlatformCarry, Pose};
pub use resources::{CameraBasis, MovementInput, ViewBasis};
pub use settings::{
    FACING_SPEED_SQ, GRAVITY, GROUND_STICK_VELOCITY, KMH_PER_MS, MOVE_SMOOTHING,
    MOVING_SPEED_SQ, MovementSettings, VELOCITY_SNAP,
};
pub use state::{ControllerSnapshot, MovementState, MovementStatus};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_demo_level;
use crate::movement::systems::{
    apply_controller_commands, apply_motion, probe_ground, publish_state_changes, read_input,
    release_missing_controller, sample_camera, tick_controllers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .init_resource::<ViewBasis>()
            .add_systems(Startup, (spawn_demo_level, spawn_player).chain())
            .add_systems(
                Update,
                (
                    read_input,
                    sample_camera,
                    release_missing_controller,
                    apply_controller_commands,
                    probe_ground,
                    tick_controllers,
                    apply_motion,
                    publish_state_changes,
                )
                    .chain(),
            );
    }
}
