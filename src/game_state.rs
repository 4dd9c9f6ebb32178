use bevy::prelude::*;

use crate::config::ShowroomConfig;

/// Main application states controlling game flow.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Config is loaded and validated before the scene exists.
    #[default]
    Loading,
    InGame,
}

/// Per-frame ordering of the interaction pipeline while in game.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionSet {
    /// Cast the center ray and record the hover target.
    Hover,
    /// Route clicks to the screen deck and the pickup controller.
    Interact,
    /// Handle the return-device key.
    Return,
    /// Advance the pickup animation.
    Animate,
    /// Visual feedback and HUD text.
    Feedback,
}

pub fn configure_interaction_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            InteractionSet::Hover,
            InteractionSet::Interact,
            InteractionSet::Return,
            InteractionSet::Animate,
            InteractionSet::Feedback,
        )
            .chain()
            .run_if(in_state(AppState::InGame)),
    );
}

/// Loads the config at startup and enters the game, or exits on a bad config.
pub fn load_config(
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    match ShowroomConfig::load() {
        Ok(config) => {
            commands.insert_resource(config);
            next_state.set(AppState::InGame);
        }
        Err(err) => {
            error!("Failed to load config: {}", err);
            exit.send(AppExit::error());
        }
    }
}
