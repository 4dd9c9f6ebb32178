use bevy::prelude::*;

pub const NORMAL_BUTTON: Color = Color::srgb(0.15, 0.15, 0.15);
pub const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
pub const PRESSED_BUTTON: Color = Color::srgb(0.35, 0.65, 0.35);

pub const BUTTON_TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const LABEL_TEXT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const PANEL_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

pub const SLIDER_TRACK: Color = Color::srgb(0.3, 0.3, 0.3);
pub const SLIDER_FILL: Color = Color::srgb(0.95, 0.8, 0.35);

pub fn panel_style() -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(8.0),
        padding: UiRect::all(Val::Px(12.0)),
        ..default()
    }
}

pub fn button_style() -> Node {
    Node {
        width: Val::Px(180.0),
        height: Val::Px(40.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn small_button_style() -> Node {
    Node {
        width: Val::Px(32.0),
        height: Val::Px(32.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn button_text_style() -> TextFont {
    TextFont {
        font_size: 18.0,
        ..default()
    }
}

pub fn label_text_style() -> TextFont {
    TextFont {
        font_size: 16.0,
        ..default()
    }
}
