pub mod components;
pub mod light;
pub mod setup;

use bevy::prelude::*;

pub use components::{
    EnvironmentKind, EnvironmentLight, EnvironmentRoot, EnvironmentState, SwitchEnvironment,
};
pub use light::LightSlider;

use crate::game_state::AppState;
use crate::world::components::SurfaceCollider;
use light::{apply_light_intensity, handle_light_keys, init_light_slider, sync_slider_to_active_light};
use setup::{init_environment_state, setup_environments};

/// Key that toggles between office and cafe.
pub const SWITCH_KEY: KeyCode = KeyCode::Tab;

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SwitchEnvironment>()
            .add_systems(
                OnEnter(AppState::InGame),
                (init_environment_state, init_light_slider, setup_environments).chain(),
            )
            .add_systems(
                Update,
                (
                    handle_switch_key,
                    switch_environment,
                    apply_environment,
                    sync_slider_to_active_light,
                    handle_light_keys,
                    apply_light_intensity,
                )
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

pub fn handle_switch_key(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<SwitchEnvironment>,
) {
    if keyboard_input.just_pressed(SWITCH_KEY) {
        events.send(SwitchEnvironment);
    }
}

pub fn switch_environment(
    mut events: EventReader<SwitchEnvironment>,
    mut state: ResMut<EnvironmentState>,
) {
    for _ in events.read() {
        let active = state.switch();
        info!("Switched to {} Environment", active.name());
    }
}

/// Shows the active environment's props and light, hiding the other pair.
/// Props of the hidden environment stop catching interaction rays.
pub fn apply_environment(
    state: Res<EnvironmentState>,
    mut roots: Query<(Entity, &EnvironmentRoot, &mut Visibility)>,
    mut lights: Query<(&EnvironmentLight, &mut Visibility), Without<EnvironmentRoot>>,
    children: Query<&Children>,
    mut colliders: Query<&mut SurfaceCollider>,
) {
    if !state.is_changed() {
        return;
    }
    for (entity, root, mut visibility) in roots.iter_mut() {
        visibility.set_if_neq(state.visibility_for(root.0));

        let enabled = state.is_active(root.0);
        for descendant in children.iter_descendants(entity) {
            if let Ok(mut collider) = colliders.get_mut(descendant) {
                collider.enabled = enabled;
            }
        }
    }
    for (light, mut visibility) in lights.iter_mut() {
        visibility.set_if_neq(state.visibility_for(light.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::raycast::cast_ray;
    use light::intensity_to_lumens;

    fn test_app() -> (App, [Entity; 5]) {
        let mut app = App::new();
        app.add_event::<SwitchEnvironment>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(EnvironmentState::default())
            .insert_resource(LightSlider::new(1.2, 3.0, 0.1))
            .add_systems(
                Update,
                (
                    switch_environment,
                    apply_environment,
                    sync_slider_to_active_light,
                    handle_light_keys,
                    apply_light_intensity,
                )
                    .chain(),
            );

        let world = app.world_mut();
        let office = world
            .spawn((EnvironmentRoot(EnvironmentKind::Office), Visibility::Inherited))
            .id();
        let cafe = world
            .spawn((EnvironmentRoot(EnvironmentKind::Cafe), Visibility::Hidden))
            .id();
        let office_light = world
            .spawn((
                EnvironmentLight(EnvironmentKind::Office),
                PointLight {
                    intensity: intensity_to_lumens(1.2),
                    ..default()
                },
                Visibility::Inherited,
            ))
            .id();
        let cafe_light = world
            .spawn((
                EnvironmentLight(EnvironmentKind::Cafe),
                PointLight {
                    intensity: intensity_to_lumens(0.9),
                    ..default()
                },
                Visibility::Hidden,
            ))
            .id();
        // Cafe counter two metres straight ahead of a camera at the origin.
        let counter = world
            .spawn((
                SurfaceCollider::body(Vec3::splat(0.5)),
                GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -2.0)),
            ))
            .id();
        world.entity_mut(cafe).add_child(counter);
        app.update();
        (app, [office, cafe, office_light, cafe_light, counter])
    }

    fn hit_ahead(app: &mut App) -> Option<Entity> {
        let world = app.world_mut();
        let mut colliders = world.query::<(Entity, &GlobalTransform, &SurfaceCollider)>();
        cast_ray(Vec3::ZERO, Vec3::NEG_Z, 5.0, colliders.iter(world)).map(|hit| hit.entity)
    }

    fn visibility(app: &App, entity: Entity) -> Visibility {
        *app.world().get::<Visibility>(entity).unwrap()
    }

    #[test]
    fn two_switches_restore_original_state() {
        let (mut app, [office, cafe, office_light, cafe_light, _]) = test_app();

        app.world_mut().send_event(SwitchEnvironment);
        app.update();
        assert!(!app.world().resource::<EnvironmentState>().is_in_office());
        assert_eq!(visibility(&app, office), Visibility::Hidden);
        assert_eq!(visibility(&app, cafe), Visibility::Inherited);
        assert_eq!(visibility(&app, office_light), Visibility::Hidden);
        assert_eq!(visibility(&app, cafe_light), Visibility::Inherited);

        app.world_mut().send_event(SwitchEnvironment);
        app.update();
        assert!(app.world().resource::<EnvironmentState>().is_in_office());
        assert_eq!(visibility(&app, office), Visibility::Inherited);
        assert_eq!(visibility(&app, cafe), Visibility::Hidden);
        assert_eq!(visibility(&app, office_light), Visibility::Inherited);
        assert_eq!(visibility(&app, cafe_light), Visibility::Hidden);
    }

    #[test]
    fn hidden_environment_props_do_not_block_rays() {
        let (mut app, [.., counter]) = test_app();
        assert!(!app.world().get::<SurfaceCollider>(counter).unwrap().enabled);
        assert_eq!(hit_ahead(&mut app), None);

        app.world_mut().send_event(SwitchEnvironment);
        app.update();
        assert_eq!(hit_ahead(&mut app), Some(counter));

        app.world_mut().send_event(SwitchEnvironment);
        app.update();
        assert_eq!(hit_ahead(&mut app), None);
    }

    #[test]
    fn slider_drives_only_the_active_light() {
        let (mut app, [_, _, office_light, cafe_light, _]) = test_app();

        app.world_mut().resource_mut::<LightSlider>().set(2.0);
        app.update();
        let office = app.world().get::<PointLight>(office_light).unwrap().intensity;
        let cafe = app.world().get::<PointLight>(cafe_light).unwrap().intensity;
        assert_eq!(office, intensity_to_lumens(2.0));
        assert_eq!(cafe, intensity_to_lumens(0.9));
    }

    #[test]
    fn switching_resyncs_slider_from_new_light() {
        let (mut app, _) = test_app();

        app.world_mut().send_event(SwitchEnvironment);
        app.update();
        let value = app.world().resource::<LightSlider>().value();
        assert!((value - 0.9).abs() < 1e-5, "value={value}");
    }
}
