//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{apply_motion, probe_ground};
pub(crate) use input::{read_input, sample_camera};
pub(crate) use movement::{
    apply_controller_commands, publish_state_changes, release_missing_controller,
    tick_controllers,
};
