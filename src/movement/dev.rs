//! Movement domain: demo level for trying the controller by hand.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

/// Yaw rate of the turntable platform in rad/s.
const TURNTABLE_SPEED: f32 = 0.6;

pub(crate) fn spawn_demo_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_material = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let wall_material = materials.add(Color::srgb(0.3, 0.3, 0.4));
    let platform_material = materials.add(Color::srgb(0.5, 0.4, 0.3));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(40.0, 1.0, 40.0))),
        MeshMaterial3d(ground_material.clone()),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(40.0, 1.0, 40.0),
        ground_layers,
    ));

    // Back wall
    commands.spawn((
        Wall,
        Mesh3d(meshes.add(Cuboid::new(20.0, 4.0, 1.0))),
        MeshMaterial3d(wall_material),
        Transform::from_xyz(0.0, 2.0, -10.0),
        RigidBody::Static,
        Collider::cuboid(20.0, 4.0, 1.0),
        wall_layers,
    ));

    // Step, reachable with a standing jump
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(3.0, 1.0, 3.0))),
        MeshMaterial3d(ground_material),
        Transform::from_xyz(-5.0, 0.5, -4.0),
        RigidBody::Static,
        Collider::cuboid(3.0, 1.0, 3.0),
        ground_layers,
    ));

    // Turntable, driven by the physics step rather than a path
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(6.0, 0.5, 6.0))),
        MeshMaterial3d(platform_material),
        Transform::from_xyz(5.0, 0.75, -3.0),
        RigidBody::Kinematic,
        AngularVelocity(Vec3::Y * TURNTABLE_SPEED),
        Collider::cuboid(6.0, 0.5, 6.0),
        ground_layers,
    ));
}
