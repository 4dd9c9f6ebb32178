use bevy::prelude::*;

use super::components::{Device, DeviceCatalog};
use crate::config::{DeviceConfig, DeviceKind, ShowroomConfig};
use crate::screens::ScreenMaterial;
use crate::world::components::SurfaceCollider;

/// Entities making up one spawned device, with the half extents of each box.
pub struct DeviceParts {
    pub root: Entity,
    pub bodies: Vec<(Entity, Vec3)>,
    pub screens: Vec<(Entity, Vec3)>,
}

pub fn spawn_devices(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut catalog: ResMut<DeviceCatalog>,
    config: Res<ShowroomConfig>,
    screen_material: Res<ScreenMaterial>,
) {
    for (index, device_config) in config.devices.iter().enumerate() {
        let parts = spawn_device(&mut commands, index, device_config);

        let body_material = materials.add(StandardMaterial {
            base_color: body_color(device_config.kind),
            perceptual_roughness: 0.4,
            metallic: 0.6,
            ..default()
        });
        for (entity, half_extents) in &parts.bodies {
            commands.entity(*entity).insert((
                Mesh3d(meshes.add(Cuboid::from_size(*half_extents * 2.0))),
                MeshMaterial3d(body_material.clone()),
            ));
        }
        for (entity, half_extents) in &parts.screens {
            commands.entity(*entity).insert((
                Mesh3d(meshes.add(Cuboid::from_size(*half_extents * 2.0))),
                MeshMaterial3d(screen_material.0.clone()),
            ));
        }

        catalog.register(parts.root, device_config);
    }
}

/// Spawns the collider hierarchy for a device at its resting transform.
pub fn spawn_device(commands: &mut Commands, index: usize, config: &DeviceConfig) -> DeviceParts {
    let mut bodies = Vec::new();
    let mut screens = Vec::new();

    let (root_half, screen_half) = match config.kind {
        DeviceKind::Phone => (Vec3::new(0.0375, 0.005, 0.075), Vec3::new(0.034, 0.001, 0.07)),
        DeviceKind::Tablet => (Vec3::new(0.085, 0.005, 0.12), Vec3::new(0.08, 0.001, 0.113)),
        DeviceKind::Laptop => (Vec3::new(0.16, 0.01, 0.11), Vec3::new(0.15, 0.001, 0.1)),
    };

    let root = commands
        .spawn((
            Device { index },
            Name::new(config.name.clone()),
            SurfaceCollider::body(root_half),
            config.resting_transform(),
            Visibility::default(),
        ))
        .id();
    bodies.push((root, root_half));

    match config.kind {
        DeviceKind::Phone | DeviceKind::Tablet => {
            let screen = commands
                .spawn((
                    SurfaceCollider::screen(screen_half),
                    Transform::from_xyz(0.0, root_half.y + screen_half.y, 0.0),
                    Visibility::default(),
                ))
                .id();
            commands.entity(root).add_child(screen);
            screens.push((screen, screen_half));
        }
        DeviceKind::Laptop => {
            // Lid stands at the back edge of the base, tilted slightly away from the viewer.
            let lid_half = Vec3::new(root_half.x, 0.11, 0.005);
            let lid = commands
                .spawn((
                    SurfaceCollider::body(lid_half),
                    Transform::from_xyz(0.0, root_half.y + lid_half.y, -root_half.z + lid_half.z)
                        .with_rotation(Quat::from_rotation_x(-10f32.to_radians())),
                    Visibility::default(),
                ))
                .id();
            bodies.push((lid, lid_half));

            let lid_screen_half = Vec3::new(screen_half.x, screen_half.z, screen_half.y);
            let screen = commands
                .spawn((
                    SurfaceCollider::screen(lid_screen_half),
                    Transform::from_xyz(0.0, 0.0, lid_half.z + lid_screen_half.z),
                    Visibility::default(),
                ))
                .id();
            commands.entity(lid).add_child(screen);
            commands.entity(root).add_child(lid);
            screens.push((screen, lid_screen_half));
        }
    }

    DeviceParts {
        root,
        bodies,
        screens,
    }
}

fn body_color(kind: DeviceKind) -> Color {
    match kind {
        DeviceKind::Phone => Color::srgb(0.12, 0.12, 0.14),
        DeviceKind::Tablet => Color::srgb(0.55, 0.56, 0.6),
        DeviceKind::Laptop => Color::srgb(0.7, 0.7, 0.72),
    }
}
