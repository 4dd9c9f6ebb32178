use bevy::prelude::*;

/// Text showing the pickup session status.
#[derive(Component)]
pub struct DeviceStatusText;

/// Text naming the active environment.
#[derive(Component)]
pub struct EnvironmentStatusText;

/// Button that toggles the environment.
#[derive(Component)]
pub struct EnvironmentButton;

/// Label inside the environment button.
#[derive(Component)]
pub struct EnvironmentButtonLabel;

/// Text showing the light slider value.
#[derive(Component)]
pub struct LightLabel;

/// Filled part of the light slider track.
#[derive(Component)]
pub struct LightSliderFill;

/// Button that moves the light slider by the given number of steps.
#[derive(Component)]
pub struct LightStepButton(pub i32);

/// Text naming the current screen of the deck.
#[derive(Component)]
pub struct ScreenNameText;
