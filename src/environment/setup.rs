use bevy::prelude::*;

use super::components::{EnvironmentKind, EnvironmentLight, EnvironmentRoot, EnvironmentState};
use super::light::intensity_to_lumens;
use crate::config::ShowroomConfig;
use crate::world::components::SurfaceCollider;
use crate::world::ROOM_HEIGHT;

/// Cafe light level until the slider is moved while in the cafe.
const CAFE_INITIAL_INTENSITY: f32 = 0.9;

/// A box prop: size, position, color.
type Prop = (Vec3, Vec3, Color);

fn office_props() -> Vec<Prop> {
    vec![
        // Bookshelf against the back wall
        (Vec3::new(2.0, 2.2, 0.4), Vec3::new(-2.5, 1.1, -4.6), Color::srgb(0.35, 0.25, 0.18)),
        // Filing cabinet
        (Vec3::new(0.5, 1.2, 0.6), Vec3::new(3.5, 0.6, -4.4), Color::srgb(0.5, 0.52, 0.55)),
        // Whiteboard
        (Vec3::new(2.4, 1.2, 0.05), Vec3::new(1.5, 1.7, -4.85), Color::srgb(0.95, 0.95, 0.95)),
        // Rug
        (Vec3::new(3.0, 0.01, 2.0), Vec3::new(0.0, 0.005, -1.5), Color::srgb(0.25, 0.3, 0.45)),
    ]
}

fn cafe_props() -> Vec<Prop> {
    vec![
        // Counter
        (Vec3::new(3.0, 1.1, 0.7), Vec3::new(2.5, 0.55, -4.2), Color::srgb(0.55, 0.35, 0.2)),
        // Stools
        (Vec3::new(0.4, 0.75, 0.4), Vec3::new(1.8, 0.375, -3.3), Color::srgb(0.2, 0.2, 0.2)),
        (Vec3::new(0.4, 0.75, 0.4), Vec3::new(3.2, 0.375, -3.3), Color::srgb(0.2, 0.2, 0.2)),
        // Menu board
        (Vec3::new(1.6, 1.0, 0.05), Vec3::new(-2.0, 2.2, -4.85), Color::srgb(0.1, 0.12, 0.1)),
        // Plant pot
        (Vec3::new(0.5, 0.6, 0.5), Vec3::new(-4.0, 0.3, -1.0), Color::srgb(0.3, 0.5, 0.25)),
    ]
}

pub fn init_environment_state(mut commands: Commands) {
    commands.insert_resource(EnvironmentState::default());
}

pub fn setup_environments(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ShowroomConfig>,
    state: Res<EnvironmentState>,
) {
    for (kind, props) in [
        (EnvironmentKind::Office, office_props()),
        (EnvironmentKind::Cafe, cafe_props()),
    ] {
        commands
            .spawn((
                EnvironmentRoot(kind),
                Name::new(format!("{} Environment", kind.name())),
                Transform::default(),
                state.visibility_for(kind),
            ))
            .with_children(|parent| {
                for (size, position, color) in props {
                    parent.spawn((
                        Mesh3d(meshes.add(Cuboid::from_size(size))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: color,
                            ..default()
                        })),
                        SurfaceCollider {
                            enabled: state.is_active(kind),
                            ..SurfaceCollider::body(size / 2.0)
                        },
                        Transform::from_translation(position),
                    ));
                }
            });
    }

    // Office: cool ceiling light above the table
    commands.spawn((
        EnvironmentLight(EnvironmentKind::Office),
        PointLight {
            shadows_enabled: false,
            intensity: intensity_to_lumens(config.initial_light_intensity),
            color: Color::srgb(0.95, 0.97, 1.0),
            range: 20.0,
            ..default()
        },
        Transform::from_xyz(0.0, ROOM_HEIGHT - 0.5, -1.0),
        state.visibility_for(EnvironmentKind::Office),
    ));

    // Cafe: warm light nearer the counter
    commands.spawn((
        EnvironmentLight(EnvironmentKind::Cafe),
        PointLight {
            shadows_enabled: false,
            intensity: intensity_to_lumens(CAFE_INITIAL_INTENSITY),
            color: Color::srgb(1.0, 0.85, 0.65),
            range: 20.0,
            ..default()
        },
        Transform::from_xyz(1.0, ROOM_HEIGHT - 0.6, -2.0),
        state.visibility_for(EnvironmentKind::Cafe),
    ));

    info!("Starting in {} environment", state.current_environment_name());
}
