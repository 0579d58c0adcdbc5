//! Movement domain: player bootstrap from the loaded profile.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::PlayerProfile;
use crate::core::ActiveController;
use crate::movement::{
    GameLayer, GroundProbe, MotionRequest, Player, PlayerController, ProbeShape, SpawnPoint,
};

/// Everything a controlled character needs apart from rendering.
pub fn controller_bundle(profile: &PlayerProfile) -> impl Bundle {
    let settings = profile.movement.to_settings();
    let body = &profile.body;
    let spawn = profile.spawn_point();

    (
        (
            Player,
            PlayerController::new(settings),
            GroundProbe::default(),
            MotionRequest::default(),
            ProbeShape::for_capsule(
                body.radius,
                body.height,
                body.skin_width,
                settings.ground_tolerance,
            ),
            SpawnPoint(spawn),
        ),
        Transform::from_translation(spawn),
        RigidBody::Kinematic,
        Collider::capsule(body.radius, body.segment_length()),
        CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
    )
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    profile: Res<PlayerProfile>,
    mut active: ResMut<ActiveController>,
    existing_player: Query<Entity, With<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let body = &profile.body;
    info!(
        "Spawning player: speed={} m/s, jump={} m/s ({:.2} m), radius={}, height={}",
        profile.movement.speed,
        profile.movement.jump_speed,
        profile.movement.to_settings().jump_height(),
        body.radius,
        body.height
    );

    let entity = commands
        .spawn((
            controller_bundle(&profile),
            Mesh3d(meshes.add(Capsule3d::new(body.radius, body.segment_length()))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.85, 0.8))),
        ))
        .id();

    if !active.claim(entity) {
        warn!(
            "Controller {:?} not registered: {:?} is already active",
            entity,
            active.get()
        );
    }
}
