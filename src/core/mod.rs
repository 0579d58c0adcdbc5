//! Core domain: session context, control-surface messages and scene setup.

mod events;
mod resources;
mod systems;

pub use events::{ControllerCommand, MovementStateChanged};
pub use resources::ActiveController;

use bevy::prelude::*;

use crate::core::systems::{setup_camera, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveController>()
            .add_message::<ControllerCommand>()
            .add_message::<MovementStateChanged>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, toggle_pause);
    }
}
