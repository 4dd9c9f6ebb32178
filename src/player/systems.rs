use bevy::prelude::*;

use super::components::{Player, PLAYER_HEIGHT};
use crate::config::ShowroomConfig;
use crate::world::{ROOM_HALF_DEPTH, ROOM_HALF_WIDTH};

/// Planar direction in camera space from WASD (x = strafe, z = forward is negative).
pub fn movement_input(keyboard_input: &ButtonInput<KeyCode>) -> Vec3 {
    let mut direction = Vec3::ZERO;

    if keyboard_input.pressed(KeyCode::KeyW) {
        direction.z -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) {
        direction.z += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }

    // Normalize diagonal movement
    direction.normalize_or_zero()
}

/// Maps camera-space input onto the floor plane using only the camera's yaw.
pub fn planar_step(rotation: Quat, input: Vec3, distance: f32) -> Vec3 {
    let forward = rotation * Vec3::NEG_Z;
    let forward_flat = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let right_flat = Vec3::new(-forward_flat.z, 0.0, forward_flat.x);

    (forward_flat * -input.z + right_flat * input.x) * distance
}

pub fn player_movement(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    config: Res<ShowroomConfig>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    let input = movement_input(&keyboard_input);
    if input != Vec3::ZERO {
        let step = planar_step(transform.rotation, input, config.move_speed * time.delta_secs());
        transform.translation += step;
    }

    // Keep player inside room at eye height
    transform.translation.y = PLAYER_HEIGHT;
    transform.translation.x = transform.translation.x.clamp(-ROOM_HALF_WIDTH, ROOM_HALF_WIDTH);
    transform.translation.z = transform.translation.z.clamp(-ROOM_HALF_DEPTH, ROOM_HALF_DEPTH);
}
