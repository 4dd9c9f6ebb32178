mod camera;
mod config;
mod devices;
mod environment;
mod error;
mod game_state;
mod hud;
mod player;
mod screens;
mod world;

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::PresentMode,
};

use camera::CameraPlugin;
use devices::DevicesPlugin;
use environment::EnvironmentPlugin;
use game_state::{configure_interaction_sets, load_config, AppState};
use hud::HudPlugin;
use player::PlayerPlugin;
use screens::ScreensPlugin;
use world::WorldPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Device Showroom".to_string(),
                present_mode: PresentMode::AutoNoVsync,
                ..default()
            }),
            ..default()
        }),
    )
    .add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        LogDiagnosticsPlugin::default(),
    ))
    .init_state::<AppState>()
    .add_systems(Startup, load_config);

    configure_interaction_sets(&mut app);

    app.add_plugins((
        WorldPlugin,
        PlayerPlugin,
        CameraPlugin,
        DevicesPlugin,
        ScreensPlugin,
        EnvironmentPlugin,
        HudPlugin,
    ))
    .run();
}
