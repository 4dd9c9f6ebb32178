use bevy::prelude::*;

use super::components::*;
use super::styles::*;
use crate::devices::{DeviceCatalog, PickupSession};
use crate::environment::{EnvironmentState, LightSlider, SwitchEnvironment};
use crate::screens::ScreenDeck;

pub const INSTRUCTIONS: &str = "Controls:\n\
    WASD - Move\n\
    Right Click - Look around\n\
    Left Click - Interact / pick up\n\
    R - Return device\n\
    Tab - Switch environment\n\
    [ / ] - Light intensity\n\
    ESC - Toggle cursor lock";

const SLIDER_WIDTH: f32 = 120.0;

pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            justify_content: JustifyContent::SpaceBetween,
            padding: UiRect::all(Val::Px(16.0)),
            ..default()
        })
        .with_children(|parent| {
            // Left column: device status, screen, controls
            parent
                .spawn((
                    Node {
                        justify_content: JustifyContent::SpaceBetween,
                        ..panel_style()
                    },
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        DeviceStatusText,
                        Text::new(""),
                        button_text_style(),
                        TextColor(LABEL_TEXT_COLOR),
                    ));
                    parent.spawn((
                        ScreenNameText,
                        Text::new(""),
                        label_text_style(),
                        TextColor(LABEL_TEXT_COLOR),
                    ));
                    parent.spawn((
                        Text::new(INSTRUCTIONS),
                        label_text_style(),
                        TextColor(Color::srgb(0.75, 0.75, 0.75)),
                        Node {
                            margin: UiRect::top(Val::Px(12.0)),
                            ..default()
                        },
                    ));
                });

            // Right column: environment and light controls
            parent
                .spawn((
                    Node {
                        align_self: AlignSelf::FlexStart,
                        ..panel_style()
                    },
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        EnvironmentStatusText,
                        Text::new(""),
                        button_text_style(),
                        TextColor(LABEL_TEXT_COLOR),
                    ));

                    parent
                        .spawn((
                            EnvironmentButton,
                            Button,
                            button_style(),
                            BackgroundColor(NORMAL_BUTTON),
                        ))
                        .with_children(|parent| {
                            parent.spawn((
                                EnvironmentButtonLabel,
                                Text::new(""),
                                button_text_style(),
                                TextColor(BUTTON_TEXT_COLOR),
                            ));
                        });

                    parent.spawn((
                        LightLabel,
                        Text::new(""),
                        label_text_style(),
                        TextColor(LABEL_TEXT_COLOR),
                    ));

                    // Slider row: [-] track [+]
                    parent
                        .spawn(Node {
                            align_items: AlignItems::Center,
                            column_gap: Val::Px(8.0),
                            ..default()
                        })
                        .with_children(|parent| {
                            spawn_step_button(parent, -1, "-");
                            parent
                                .spawn((
                                    Node {
                                        width: Val::Px(SLIDER_WIDTH),
                                        height: Val::Px(8.0),
                                        ..default()
                                    },
                                    BackgroundColor(SLIDER_TRACK),
                                ))
                                .with_children(|parent| {
                                    parent.spawn((
                                        LightSliderFill,
                                        Node {
                                            width: Val::Percent(0.0),
                                            height: Val::Percent(100.0),
                                            ..default()
                                        },
                                        BackgroundColor(SLIDER_FILL),
                                    ));
                                });
                            spawn_step_button(parent, 1, "+");
                        });
                });
        });
}

fn spawn_step_button(parent: &mut ChildBuilder, steps: i32, label: &str) {
    parent
        .spawn((
            LightStepButton(steps),
            Button,
            small_button_style(),
            BackgroundColor(NORMAL_BUTTON),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                button_text_style(),
                TextColor(BUTTON_TEXT_COLOR),
            ));
        });
}

pub fn button_interaction(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut color) in interaction_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *color = PRESSED_BUTTON.into();
            }
            Interaction::Hovered => {
                *color = HOVERED_BUTTON.into();
            }
            Interaction::None => {
                *color = NORMAL_BUTTON.into();
            }
        }
    }
}

pub fn handle_environment_click(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<EnvironmentButton>)>,
    mut events: EventWriter<SwitchEnvironment>,
) {
    for interaction in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            events.send(SwitchEnvironment);
        }
    }
}

pub fn handle_light_step_click(
    interaction_query: Query<(&Interaction, &LightStepButton), Changed<Interaction>>,
    mut slider: ResMut<LightSlider>,
) {
    for (interaction, button) in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            slider.nudge(button.0);
        }
    }
}

pub fn update_device_status(
    session: Res<PickupSession>,
    catalog: Res<DeviceCatalog>,
    mut texts: Query<&mut Text, With<DeviceStatusText>>,
) {
    let status = session.status_text(&catalog);
    for mut text in texts.iter_mut() {
        if text.0 != status {
            text.0 = status.clone();
        }
    }
}

pub fn update_screen_name(deck: Res<ScreenDeck>, mut texts: Query<&mut Text, With<ScreenNameText>>) {
    if !deck.is_changed() {
        return;
    }
    let label = if deck.is_empty() {
        "Screen: none".to_string()
    } else {
        format!(
            "Screen: {} ({}/{})",
            deck.current_name(),
            deck.current_index() + 1,
            deck.len()
        )
    };
    for mut text in texts.iter_mut() {
        text.0 = label.clone();
    }
}

pub fn update_environment_status(
    state: Res<EnvironmentState>,
    mut texts: Query<&mut Text, With<EnvironmentStatusText>>,
) {
    if !state.is_changed() {
        return;
    }
    for mut text in texts.iter_mut() {
        text.0 = state.status_label();
    }
}

pub fn update_environment_button(
    state: Res<EnvironmentState>,
    mut texts: Query<&mut Text, With<EnvironmentButtonLabel>>,
) {
    if !state.is_changed() {
        return;
    }
    for mut text in texts.iter_mut() {
        text.0 = state.switch_label();
    }
}

pub fn update_light_widgets(
    slider: Res<LightSlider>,
    mut labels: Query<&mut Text, With<LightLabel>>,
    mut fills: Query<&mut Node, With<LightSliderFill>>,
) {
    if !slider.is_changed() {
        return;
    }
    for mut text in labels.iter_mut() {
        text.0 = slider.label();
    }
    for mut node in fills.iter_mut() {
        node.width = Val::Percent(slider.fraction() * 100.0);
    }
}
