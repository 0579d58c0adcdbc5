//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::ground::GroundHit;
use crate::movement::platform::Pose;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    /// Layer 0. `PhysicsLayer` needs a default; no collider is placed here.
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Result of this frame's ground probe, written by the probe system and
/// consumed by the controller tick.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundProbe {
    /// Body overlapping the probe sphere, if any.
    pub hit: Option<GroundHit>,
    /// Current pose of the body the controller was tracking last frame.
    pub tracked: Option<Pose>,
}

/// Displacement produced by the controller tick, applied by collide-and-slide.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MotionRequest {
    /// Motion still to apply this frame.
    pub displacement: Vec3,
    /// Motion actually applied last time the request was resolved.
    pub applied: Vec3,
}

/// Where a respawned controller is placed.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec3);
