pub mod components;
pub mod crosshair;
pub mod interaction;
pub mod raycast;
pub mod setup;

use bevy::prelude::*;

pub use interaction::LookingAt;

use crate::devices::systems::handle_pickup_click;
use crate::game_state::{AppState, InteractionSet};
use crosshair::{setup_crosshair, update_crosshair_color};
use interaction::{route_screen_click, update_looking_at};
use setup::setup_world;

// Room dimensions
pub const ROOM_WIDTH: f32 = 10.0;
pub const ROOM_DEPTH: f32 = 10.0;
pub const ROOM_HEIGHT: f32 = 4.0;
pub const WALL_THICKNESS: f32 = 0.2;

// Room bounds for collision (slightly less than actual size to account for walls)
pub const ROOM_HALF_WIDTH: f32 = 4.6;
pub const ROOM_HALF_DEPTH: f32 = 4.6;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LookingAt>()
            .add_systems(OnEnter(AppState::InGame), (setup_world, setup_crosshair))
            .add_systems(Update, update_looking_at.in_set(InteractionSet::Hover))
            .add_systems(
                Update,
                route_screen_click
                    .before(handle_pickup_click)
                    .in_set(InteractionSet::Interact),
            )
            .add_systems(Update, update_crosshair_color.in_set(InteractionSet::Feedback));
    }
}
