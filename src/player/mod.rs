pub mod components;
pub mod systems;

use bevy::prelude::*;

pub use components::{CameraController, Player, PLAYER_HEIGHT};

use crate::game_state::AppState;
use systems::player_movement;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, player_movement.run_if(in_state(AppState::InGame)));
    }
}
