use bevy::prelude::*;

use crate::abilities::{AbilityState, MovementMode};
use crate::camera::FollowCamera;
use crate::player::{
    CameraController, GravityScale, MovementInput, Player, Velocity, PLAYER_HALF_HEIGHT,
    PLAYER_RADIUS,
};

use super::ARENA_SIZE;

pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Materials
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.5, 0.3),
        ..default()
    });
    let platform_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.55, 0.5),
        ..default()
    });
    let player_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.3, 0.25),
        ..default()
    });

    // Ground
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ARENA_SIZE, ARENA_SIZE))),
        MeshMaterial3d(ground_material),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Platforms to jump, glide and dash between
    let platforms = [
        (800.0, 200.0, -1200.0),
        (-1400.0, 450.0, -2400.0),
        (200.0, 700.0, -3800.0),
        (2200.0, 350.0, -2800.0),
        (-600.0, 950.0, -5200.0),
    ];
    for (x, y, z) in platforms {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(600.0, 60.0, 600.0))),
            MeshMaterial3d(platform_material.clone()),
            Transform::from_xyz(x, y, z),
        ));
    }

    // Sun
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4000.0, 8000.0, 4000.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
    });

    // Player
    commands.spawn((
        Player,
        AbilityState::default(),
        MovementMode::default(),
        Velocity::default(),
        MovementInput::default(),
        GravityScale::default(),
        CameraController::default(),
        Mesh3d(meshes.add(Capsule3d::new(
            PLAYER_RADIUS,
            (PLAYER_HALF_HEIGHT - PLAYER_RADIUS) * 2.0,
        ))),
        MeshMaterial3d(player_material),
        Transform::from_xyz(0.0, PLAYER_HALF_HEIGHT, 0.0),
    ));

    // Follow camera; repositioned behind the player every frame
    commands.spawn((
        FollowCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, PLAYER_HALF_HEIGHT, 400.0)
            .looking_at(Vec3::new(0.0, PLAYER_HALF_HEIGHT, 0.0), Vec3::Y),
    ));
}
