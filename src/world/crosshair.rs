use bevy::prelude::*;

use super::interaction::{screen_click_allowed, LookingAt};
use crate::config::{srgba, ShowroomConfig};
use crate::devices::PickupSession;

/// Marker for the dot whose color reflects the hover target.
#[derive(Component)]
pub struct CrosshairDot;

pub fn setup_crosshair(mut commands: Commands, config: Res<ShowroomConfig>) {
    // Crosshair container (centered on screen)
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            position_type: PositionType::Absolute,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                CrosshairDot,
                Node {
                    width: Val::Px(6.0),
                    height: Val::Px(6.0),
                    ..default()
                },
                BackgroundColor(srgba(config.crosshair_normal)),
            ));
        });
}

/// Highlights the crosshair while a click would advance the screen under it.
pub fn update_crosshair_color(
    looking_at: Res<LookingAt>,
    session: Res<PickupSession>,
    config: Res<ShowroomConfig>,
    mut dots: Query<&mut BackgroundColor, With<CrosshairDot>>,
) {
    if !looking_at.is_changed() && !session.is_changed() {
        return;
    }
    let clickable =
        looking_at.is_screen() && screen_click_allowed(session.phase(), looking_at.device);
    let color = if clickable {
        srgba(config.crosshair_interactable)
    } else {
        srgba(config.crosshair_normal)
    };
    for mut background in dots.iter_mut() {
        if background.0 != color {
            background.0 = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::components::SurfaceKind;

    fn test_app(looking_at: LookingAt) -> (App, Entity) {
        let config = ShowroomConfig::default();
        let mut app = App::new();
        app.insert_resource(config.clone())
            .insert_resource(looking_at)
            .insert_resource(PickupSession::new(3.0))
            .add_systems(Update, update_crosshair_color);
        let dot = app
            .world_mut()
            .spawn((CrosshairDot, BackgroundColor(srgba(config.crosshair_normal))))
            .id();
        (app, dot)
    }

    fn dot_color(app: &App, dot: Entity) -> Color {
        app.world().get::<BackgroundColor>(dot).unwrap().0
    }

    #[test]
    fn dot_turns_interactable_over_screen() {
        let config = ShowroomConfig::default();
        let (mut app, dot) = test_app(LookingAt {
            kind: Some(SurfaceKind::Screen),
            device: Some(0),
            ..default()
        });

        app.update();
        assert_eq!(dot_color(&app, dot), srgba(config.crosshair_interactable));

        app.world_mut().resource_mut::<LookingAt>().kind = Some(SurfaceKind::Body);
        app.update();
        assert_eq!(dot_color(&app, dot), srgba(config.crosshair_normal));
    }

    #[test]
    fn other_screens_stay_plain_while_holding() {
        let config = ShowroomConfig::default();
        let (mut app, dot) = test_app(LookingAt {
            kind: Some(SurfaceKind::Screen),
            device: Some(0),
            ..default()
        });

        // Hold device 1.
        let mut catalog = crate::devices::DeviceCatalog::default();
        for (index, device) in config.devices.iter().enumerate() {
            let entity = app.world_mut().spawn_empty().id();
            catalog.register(entity, device);
            catalog.capture_resting(index, &device.resting_transform());
        }
        {
            let mut session = app.world_mut().resource_mut::<PickupSession>();
            session.begin(1, &catalog).unwrap();
            session.advance(1.0);
            assert!(session.is_holding());
        }

        app.update();
        assert_eq!(dot_color(&app, dot), srgba(config.crosshair_normal));

        app.world_mut().resource_mut::<LookingAt>().device = Some(1);
        app.update();
        assert_eq!(dot_color(&app, dot), srgba(config.crosshair_interactable));
    }
}
