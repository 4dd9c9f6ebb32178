use bevy::{input::mouse::MouseMotion, prelude::*, window::CursorGrabMode};

use crate::config::ShowroomConfig;
use crate::player::{CameraController, Player};

/// Key toggling between a free cursor and a confined one.
pub const CURSOR_TOGGLE_KEY: KeyCode = KeyCode::Escape;

pub fn is_grabbed(window: &Window) -> bool {
    window.cursor_options.grab_mode != CursorGrabMode::None
}

/// Starts with a visible cursor so the HUD buttons are usable.
pub fn release_cursor(mut windows: Query<&mut Window>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

pub fn toggle_cursor_grab(keyboard_input: Res<ButtonInput<KeyCode>>, mut windows: Query<&mut Window>) {
    if !keyboard_input.just_pressed(CURSOR_TOGGLE_KEY) {
        return;
    }
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    match window.cursor_options.grab_mode {
        CursorGrabMode::None => {
            window.cursor_options.grab_mode = CursorGrabMode::Confined;
            window.cursor_options.visible = false;
            debug!("Cursor locked");
        }
        _ => {
            window.cursor_options.grab_mode = CursorGrabMode::None;
            window.cursor_options.visible = true;
            debug!("Cursor released");
        }
    }
}

/// Mouse look while the secondary button is held or the cursor is locked.
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    config: Res<ShowroomConfig>,
    mut query: Query<(&mut Transform, &mut CameraController), With<Player>>,
    windows: Query<&Window>,
) {
    let grabbed = windows.get_single().map(is_grabbed).unwrap_or(false);

    if !grabbed && !mouse_input.pressed(MouseButton::Right) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, mut controller)) = query.get_single_mut() else {
        mouse_motion.clear();
        return;
    };

    let pitch_limit = config.pitch_limit_radians();
    for event in mouse_motion.read() {
        controller.look(event.delta, config.mouse_sensitivity, pitch_limit);
    }

    // Apply rotation
    transform.rotation = controller.rotation();
}

pub fn center_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    // Only center cursor when it's grabbed and window is focused
    if is_grabbed(&window) && window.focused {
        let center = Vec2::new(window.width() / 2.0, window.height() / 2.0);
        window.set_cursor_position(Some(center));
    }
}
