pub mod components;
pub mod pickup;
pub mod setup;
pub mod systems;

use bevy::prelude::*;

pub use components::{Device, DeviceCatalog};
pub use pickup::{PickupPhase, PickupSession};

use crate::game_state::{AppState, InteractionSet};
use crate::screens::init_screen_material;
use crate::world::setup::setup_world;
use setup::spawn_devices;
use systems::{
    animate_pickup, capture_resting_poses, exit_on_setup_error, handle_pickup_click,
    handle_return_key, init_pickup_session, verify_scene,
};

pub struct DevicesPlugin;

impl Plugin for DevicesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeviceCatalog>()
            .add_systems(
                OnEnter(AppState::InGame),
                (
                    init_pickup_session,
                    spawn_devices.after(init_screen_material),
                    capture_resting_poses,
                    verify_scene.pipe(exit_on_setup_error).after(setup_world),
                )
                    .chain(),
            )
            .add_systems(Update, handle_pickup_click.in_set(InteractionSet::Interact))
            .add_systems(Update, handle_return_key.in_set(InteractionSet::Return))
            .add_systems(Update, animate_pickup.in_set(InteractionSet::Animate));
    }
}
