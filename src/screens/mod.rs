pub mod deck;

use bevy::prelude::*;

pub use deck::{ScreenDeck, ScreenFlash, Slide};

use crate::config::{srgb, ShowroomConfig};
use crate::game_state::{AppState, InteractionSet};

/// Request to show the next screen of the deck.
#[derive(Event, Debug, Clone, Copy)]
pub struct AdvanceScreen;

/// Material shared by every device screen surface.
#[derive(Resource)]
pub struct ScreenMaterial(pub Handle<StandardMaterial>);

pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AdvanceScreen>()
            .init_resource::<ScreenFlash>()
            .add_systems(
                OnEnter(AppState::InGame),
                (init_screen_deck, init_screen_material).chain(),
            )
            .add_systems(
                Update,
                (tick_screen_flash, advance_screens, apply_screen_appearance)
                    .chain()
                    .in_set(InteractionSet::Feedback),
            );
    }
}

pub fn init_screen_deck(
    mut commands: Commands,
    config: Res<ShowroomConfig>,
    asset_server: Option<Res<AssetServer>>,
) {
    let slides = config
        .screens
        .iter()
        .map(|screen| Slide {
            name: screen.name.clone(),
            tint: srgb(screen.tint),
            image: screen
                .image
                .as_ref()
                .zip(asset_server.as_ref())
                .map(|(path, server)| server.load(path.clone())),
        })
        .collect::<Vec<_>>();

    if slides.is_empty() {
        warn!("Screen deck is empty; screen clicks will do nothing");
    }
    commands.insert_resource(ScreenDeck::new(slides, config.screen_cooldown));
}

pub fn init_screen_material(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    deck: Res<ScreenDeck>,
) {
    let (base_color, texture) = match deck.current() {
        Some(slide) => (slide.tint, slide.image.clone()),
        None => (Color::BLACK, None),
    };
    let handle = materials.add(StandardMaterial {
        base_color,
        base_color_texture: texture,
        unlit: true,
        ..default()
    });
    commands.insert_resource(ScreenMaterial(handle));
}

/// Applies queued advance requests to the deck, starting the flash on success.
pub fn advance_screens(
    time: Res<Time>,
    config: Res<ShowroomConfig>,
    mut events: EventReader<AdvanceScreen>,
    mut deck: ResMut<ScreenDeck>,
    mut flash: ResMut<ScreenFlash>,
) {
    for _ in events.read() {
        match deck.advance(time.elapsed_secs()) {
            Ok(index) => {
                flash.trigger(config.flash_duration);
                info!(
                    "Switched to: {} ({}/{})",
                    deck.current_name(),
                    index + 1,
                    deck.len()
                );
            }
            Err(rejected) => debug!("Screen advance rejected: {}", rejected),
        }
    }
}

pub fn tick_screen_flash(time: Res<Time>, mut flash: ResMut<ScreenFlash>) {
    if flash.is_active() {
        flash.tick(time.delta_secs());
    }
}

/// Shows the current slide, or the flash color while feedback is active.
pub fn apply_screen_appearance(
    deck: Res<ScreenDeck>,
    flash: Res<ScreenFlash>,
    config: Res<ShowroomConfig>,
    screen_material: Option<Res<ScreenMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !deck.is_changed() && !flash.is_changed() {
        return;
    }
    let Some(screen_material) = screen_material else {
        return;
    };
    let Some(material) = materials.get_mut(&screen_material.0) else {
        return;
    };

    if let Some(slide) = deck.current() {
        material.base_color_texture = slide.image.clone();
        material.base_color = if flash.is_active() {
            srgb(config.flash_color)
        } else {
            slide.tint
        };
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<AdvanceScreen>()
            .init_resource::<Time>()
            .init_resource::<ScreenFlash>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(ShowroomConfig::default())
            .add_systems(Startup, (init_screen_deck, init_screen_material).chain())
            .add_systems(
                Update,
                (tick_screen_flash, advance_screens, apply_screen_appearance).chain(),
            );
        app
    }

    fn click_after(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.world_mut().send_event(AdvanceScreen);
        app.update();
    }

    fn screen_color(app: &App) -> Color {
        let handle = app.world().resource::<ScreenMaterial>().0.clone();
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(&handle)
            .unwrap()
            .base_color
    }

    #[test]
    fn click_sequence_honours_cooldown() {
        let mut app = test_app();
        app.update();
        assert_eq!(app.world().resource::<ScreenDeck>().current_index(), 0);

        click_after(&mut app, 1.0);
        assert_eq!(app.world().resource::<ScreenDeck>().current_index(), 1);

        click_after(&mut app, 0.1);
        assert_eq!(app.world().resource::<ScreenDeck>().current_index(), 1);

        click_after(&mut app, 0.6);
        let deck = app.world().resource::<ScreenDeck>();
        assert_eq!(deck.current_index(), 2);
        assert_eq!(deck.current_name(), "Settings Page");
    }

    #[test]
    fn accepted_click_flashes_then_reverts() {
        let config = ShowroomConfig::default();
        let mut app = test_app();
        app.update();

        // The flash starts after this frame's tick, so the screen shows the flash color.
        click_after(&mut app, 1.0);
        assert_eq!(screen_color(&app), srgb(config.flash_color));

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.2));
        app.update();
        assert_eq!(screen_color(&app), srgb(config.screens[1].tint));
    }
}
