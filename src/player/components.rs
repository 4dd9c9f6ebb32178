use bevy::prelude::*;

/// Marker component for the player entity, which is also the camera.
#[derive(Component)]
pub struct Player;

/// Camera controller for first-person mouse look.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraController {
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            pitch: -0.45, // Looking down towards the table
            yaw: 0.0,     // Facing -Z
        }
    }
}

impl CameraController {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Applies a mouse delta, clamping pitch to `pitch_limit` radians.
    pub fn look(&mut self, delta: Vec2, sensitivity: f32, pitch_limit: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch -= delta.y * sensitivity;
        self.pitch = self.pitch.clamp(-pitch_limit, pitch_limit);
    }
}

// Eye height above the floor
pub const PLAYER_HEIGHT: f32 = 1.6;
