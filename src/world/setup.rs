use bevy::prelude::*;

use crate::config::ShowroomConfig;
use crate::player::{CameraController, Player, PLAYER_HEIGHT};

use super::components::SurfaceCollider;
use super::{ROOM_DEPTH, ROOM_HEIGHT, ROOM_WIDTH, WALL_THICKNESS};

// Table dimensions; the devices rest on the top surface.
pub const TABLE_TOP_HEIGHT: f32 = 0.75;
const TABLE_SIZE: Vec3 = Vec3::new(2.0, 0.04, 0.8);
const TABLE_CENTER: Vec3 = Vec3::new(0.0, TABLE_TOP_HEIGHT - 0.02, -1.5);
const LEG_SIZE: Vec3 = Vec3::new(0.06, TABLE_TOP_HEIGHT - 0.04, 0.06);

pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ShowroomConfig>,
) {
    // Materials
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.35, 0.3),
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.75, 0.7),
        ..default()
    });
    let ceiling_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.9, 0.9),
        ..default()
    });
    let table_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.3, 0.18),
        perceptual_roughness: 0.7,
        ..default()
    });

    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROOM_WIDTH, ROOM_DEPTH))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Ceiling
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROOM_WIDTH, ROOM_DEPTH))),
        MeshMaterial3d(ceiling_material),
        Transform::from_xyz(0.0, ROOM_HEIGHT, 0.0)
            .with_rotation(Quat::from_rotation_x(std::f32::consts::PI)),
    ));

    // Walls: back, front, left, right
    let walls = [
        (
            Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, WALL_THICKNESS),
            Vec3::new(0.0, ROOM_HEIGHT / 2.0, -ROOM_DEPTH / 2.0),
        ),
        (
            Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, WALL_THICKNESS),
            Vec3::new(0.0, ROOM_HEIGHT / 2.0, ROOM_DEPTH / 2.0),
        ),
        (
            Vec3::new(WALL_THICKNESS, ROOM_HEIGHT, ROOM_DEPTH),
            Vec3::new(-ROOM_WIDTH / 2.0, ROOM_HEIGHT / 2.0, 0.0),
        ),
        (
            Vec3::new(WALL_THICKNESS, ROOM_HEIGHT, ROOM_DEPTH),
            Vec3::new(ROOM_WIDTH / 2.0, ROOM_HEIGHT / 2.0, 0.0),
        ),
    ];
    for (size, position) in walls {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(wall_material.clone()),
            SurfaceCollider::body(size / 2.0),
            Transform::from_translation(position),
        ));
    }

    // Table top blocks rays so devices can't be clicked through it
    commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::from_size(TABLE_SIZE))),
            MeshMaterial3d(table_material.clone()),
            SurfaceCollider::body(TABLE_SIZE / 2.0),
            Transform::from_translation(TABLE_CENTER),
        ))
        .with_children(|parent| {
            let leg_mesh = meshes.add(Cuboid::from_size(LEG_SIZE));
            let dx = TABLE_SIZE.x / 2.0 - LEG_SIZE.x;
            let dz = TABLE_SIZE.z / 2.0 - LEG_SIZE.z;
            let dy = -(TABLE_SIZE.y + LEG_SIZE.y) / 2.0;
            for (x, z) in [(-dx, -dz), (dx, -dz), (-dx, dz), (dx, dz)] {
                parent.spawn((
                    Mesh3d(leg_mesh.clone()),
                    MeshMaterial3d(table_material.clone()),
                    Transform::from_xyz(x, dy, z),
                ));
            }
        });

    // Player (Camera)
    let controller = CameraController::default();
    commands.spawn((
        Player,
        controller,
        Camera3d::default(),
        Transform::from_xyz(0.0, PLAYER_HEIGHT, 0.5).with_rotation(controller.rotation()),
    ));

    info!(
        "World ready: {} devices, {} screens",
        config.devices.len(),
        config.screens.len()
    );
}
