pub mod components;
pub mod styles;
pub mod systems;

use bevy::prelude::*;

use crate::environment::{light::apply_light_intensity, switch_environment};
use crate::game_state::{AppState, InteractionSet};
use crate::screens::apply_screen_appearance;
use systems::*;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), setup_hud)
            .add_systems(
                Update,
                (
                    button_interaction,
                    handle_environment_click.before(switch_environment),
                    handle_light_step_click.before(apply_light_intensity),
                )
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                (
                    update_device_status,
                    update_screen_name.after(apply_screen_appearance),
                    update_environment_status,
                    update_environment_button,
                    update_light_widgets,
                )
                    .in_set(InteractionSet::Feedback),
            );
    }
}
