use bevy::prelude::*;

use super::components::{SurfaceCollider, SurfaceKind};
use super::raycast::{cast_ray, owning_device};
use crate::config::ShowroomConfig;
use crate::devices::{Device, PickupPhase, PickupSession};
use crate::player::Player;
use crate::screens::AdvanceScreen;

/// Resource tracking what the player is currently looking at.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct LookingAt {
    pub entity: Option<Entity>,
    pub kind: Option<SurfaceKind>,
    /// Device owning the hovered collider, if any.
    pub device: Option<usize>,
}

impl LookingAt {
    pub fn is_screen(&self) -> bool {
        self.kind == Some(SurfaceKind::Screen)
    }
}

/// True while the cursor is over a HUD button, so world clicks are suppressed.
pub fn pointer_over_ui(buttons: &Query<&Interaction, With<Button>>) -> bool {
    buttons
        .iter()
        .any(|interaction| *interaction != Interaction::None)
}

/// Whether a click on a screen owned by `owner` should advance the deck.
///
/// A held device only responds to its own screen; otherwise any screen of a
/// device still resting on the table responds.
pub fn screen_click_allowed(phase: PickupPhase, owner: Option<usize>) -> bool {
    let Some(owner) = owner else {
        return false;
    };
    match phase {
        PickupPhase::Held { device } => owner == device,
        PickupPhase::Animating { device, .. } => owner != device,
        PickupPhase::Idle => true,
    }
}

/// System to raycast from camera center and detect what player is looking at.
pub fn update_looking_at(
    mut looking_at: ResMut<LookingAt>,
    config: Res<ShowroomConfig>,
    camera_query: Query<&GlobalTransform, With<Player>>,
    colliders: Query<(Entity, &GlobalTransform, &SurfaceCollider)>,
    parents: Query<&Parent>,
    devices: Query<&Device>,
) {
    let Ok(camera_transform) = camera_query.get_single() else {
        return;
    };

    let hit = cast_ray(
        camera_transform.translation(),
        camera_transform.forward().as_vec3(),
        config.interaction_range,
        colliders.iter(),
    );

    let next = LookingAt {
        entity: hit.map(|hit| hit.entity),
        kind: hit.map(|hit| hit.kind),
        device: hit.and_then(|hit| owning_device(hit.entity, &parents, &devices)),
    };
    // Change detection fires only when the hover target changes.
    if looking_at.set_if_neq(next) {
        if let Some(entity) = looking_at.entity {
            debug!("Looking at {:?} ({:?})", entity, looking_at.kind);
        }
    }
}

/// Left click on a screen surface advances the screen deck.
pub fn route_screen_click(
    mouse_input: Res<ButtonInput<MouseButton>>,
    looking_at: Res<LookingAt>,
    session: Res<PickupSession>,
    buttons: Query<&Interaction, With<Button>>,
    mut advance_events: EventWriter<AdvanceScreen>,
) {
    if !mouse_input.just_pressed(MouseButton::Left) || pointer_over_ui(&buttons) {
        return;
    }
    if !looking_at.is_screen() {
        return;
    }

    if screen_click_allowed(session.phase(), looking_at.device) {
        if session.is_holding() {
            info!("Interacted with held device screen");
        } else {
            info!("Clicked device screen on table");
        }
        advance_events.send(AdvanceScreen);
    } else {
        debug!(
            "Screen click on device {:?} ignored while {}",
            looking_at.device,
            session.phase().label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hover_app() -> App {
        let mut app = App::new();
        app.init_resource::<LookingAt>()
            .insert_resource(ShowroomConfig::default())
            .add_systems(Update, update_looking_at);
        app.world_mut().spawn((Player, GlobalTransform::IDENTITY));
        app
    }

    #[test]
    fn screen_hit_resolves_owning_device() {
        let mut app = hover_app();
        let world = app.world_mut();
        let root = world
            .spawn((
                Device { index: 2 },
                SurfaceCollider::body(Vec3::new(0.2, 0.2, 0.02)),
                GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -1.0)),
            ))
            .id();
        let lid = world.spawn(GlobalTransform::default()).id();
        let screen = world
            .spawn((
                SurfaceCollider::screen(Vec3::new(0.15, 0.15, 0.005)),
                GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -0.97)),
            ))
            .id();
        world.entity_mut(lid).add_child(screen);
        world.entity_mut(root).add_child(lid);

        app.update();
        let looking_at = *app.world().resource::<LookingAt>();
        assert_eq!(looking_at.entity, Some(screen));
        assert!(looking_at.is_screen());
        assert_eq!(looking_at.device, Some(2));
    }

    #[test]
    fn targets_beyond_interaction_range_are_ignored() {
        let mut app = hover_app();
        app.world_mut().spawn((
            SurfaceCollider::screen(Vec3::splat(0.5)),
            GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -10.0)),
        ));

        app.update();
        let looking_at = *app.world().resource::<LookingAt>();
        assert_eq!(looking_at, LookingAt::default());
    }

    #[test]
    fn held_device_only_answers_its_own_screen() {
        let phase = PickupPhase::Held { device: 1 };
        assert!(screen_click_allowed(phase, Some(1)));
        assert!(!screen_click_allowed(phase, Some(0)));
        assert!(!screen_click_allowed(phase, None));
    }

    #[test]
    fn resting_screens_answer_when_nothing_is_held() {
        assert!(screen_click_allowed(PickupPhase::Idle, Some(2)));
        assert!(!screen_click_allowed(PickupPhase::Idle, None));
    }

    #[test]
    fn animating_device_is_not_a_resting_screen() {
        let phase = PickupPhase::Animating {
            device: 0,
            timer: 0.4,
        };
        assert!(!screen_click_allowed(phase, Some(0)));
        assert!(screen_click_allowed(phase, Some(1)));
    }

    #[test]
    fn click_on_held_screen_sends_advance() {
        let mut app = App::new();
        app.add_event::<AdvanceScreen>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(LookingAt {
                entity: None,
                kind: Some(SurfaceKind::Screen),
                device: Some(2),
            })
            .insert_resource(PickupSession::new(3.0))
            .add_systems(Update, route_screen_click);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let events = app.world().resource::<Events<AdvanceScreen>>();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn click_on_body_sends_nothing() {
        let mut app = App::new();
        app.add_event::<AdvanceScreen>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(LookingAt {
                entity: None,
                kind: Some(SurfaceKind::Body),
                device: Some(0),
            })
            .insert_resource(PickupSession::new(3.0))
            .add_systems(Update, route_screen_click);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert!(app.world().resource::<Events<AdvanceScreen>>().is_empty());
    }
}
