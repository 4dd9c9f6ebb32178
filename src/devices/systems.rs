use bevy::prelude::*;

use super::components::{Device, DeviceCatalog};
use super::pickup::{interpolated_pose, PickupPhase, PickupSession};
use crate::config::ShowroomConfig;
use crate::error::ShowroomError;
use crate::player::Player;
use crate::world::components::{SurfaceCollider, SurfaceKind};
use crate::world::interaction::pointer_over_ui;
use crate::world::raycast::{cast_ray, owning_device};

/// Key that puts the held device back on the table.
pub const RETURN_KEY: KeyCode = KeyCode::KeyR;

pub fn init_pickup_session(mut commands: Commands, config: Res<ShowroomConfig>) {
    commands.insert_resource(PickupSession::new(config.pickup_speed));
}

/// Snapshot each device's spawn transform as its resting pose.
pub fn capture_resting_poses(
    mut catalog: ResMut<DeviceCatalog>,
    devices: Query<(&Device, &Transform)>,
) {
    for (device, transform) in devices.iter() {
        if catalog.capture_resting(device.index, transform) {
            debug!(
                "Captured resting pose for device {} at {:?}",
                device.index, transform.translation
            );
        }
    }
}

/// Fails setup when the camera or any device pose is missing.
pub fn verify_scene(
    catalog: Res<DeviceCatalog>,
    config: Res<ShowroomConfig>,
    camera_query: Query<(), (With<Player>, With<Camera3d>)>,
) -> Result<(), ShowroomError> {
    if camera_query.is_empty() {
        return Err(ShowroomError::MissingDependency("player camera"));
    }
    if catalog.is_empty() {
        return Err(ShowroomError::MissingDependency("devices"));
    }
    if catalog.len() != config.devices.len() {
        return Err(ShowroomError::InvalidConfig(format!(
            "spawned {} devices but {} are configured",
            catalog.len(),
            config.devices.len()
        )));
    }
    for index in 0..catalog.len() {
        catalog.resting(index)?;
    }
    info!("Scene ready with {} devices", catalog.len());
    Ok(())
}

/// Logs a setup failure and exits the app.
pub fn exit_on_setup_error(In(result): In<Result<(), ShowroomError>>, mut exit: EventWriter<AppExit>) {
    if let Err(err) = result {
        error!("Scene setup failed: {}", err);
        exit.send(AppExit::error());
    }
}

/// Primary click on a device within range starts the pickup animation.
pub fn handle_pickup_click(
    mouse_input: Res<ButtonInput<MouseButton>>,
    config: Res<ShowroomConfig>,
    catalog: Res<DeviceCatalog>,
    mut session: ResMut<PickupSession>,
    camera_query: Query<&GlobalTransform, With<Player>>,
    colliders: Query<(Entity, &GlobalTransform, &SurfaceCollider)>,
    parents: Query<&Parent>,
    devices: Query<&Device>,
    buttons: Query<&Interaction, With<Button>>,
) {
    if !mouse_input.just_pressed(MouseButton::Left) || pointer_over_ui(&buttons) {
        return;
    }
    // Busy sessions ignore clicks without touching the ray query.
    if !session.is_idle() {
        debug!("Pickup ignored while {}", session.phase().label());
        return;
    }
    let Ok(camera_transform) = camera_query.get_single() else {
        return;
    };

    let Some(hit) = cast_ray(
        camera_transform.translation(),
        camera_transform.forward().as_vec3(),
        config.pickup_range,
        colliders.iter(),
    ) else {
        return;
    };
    let Some(index) = owning_device(hit.entity, &parents, &devices) else {
        return;
    };

    match session.begin(index, &catalog) {
        Ok(()) => info!(
            "Starting pickup animation for {}",
            catalog.get(index).map_or("?", |slot| slot.name.as_str())
        ),
        Err(err) if err.is_ignorable() => debug!("Pickup ignored: {}", err),
        Err(err) => warn!("Pickup rejected: {}", err),
    }
}

/// Advances the animation and, on completion, parents the device to the camera.
pub fn animate_pickup(
    time: Res<Time>,
    mut commands: Commands,
    catalog: Res<DeviceCatalog>,
    mut session: ResMut<PickupSession>,
    camera_query: Query<(Entity, &Transform), With<Player>>,
    mut transforms: Query<&mut Transform, Without<Player>>,
    mut colliders: Query<&mut SurfaceCollider>,
    children: Query<&Children>,
) {
    let PickupPhase::Animating { device, .. } = session.phase() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    // Resolve the device before advancing so a bad slot never reaches Held.
    let (slot, resting) = match (catalog.get(device), catalog.resting(device)) {
        (Ok(slot), Ok(resting)) => (slot, resting),
        (Err(err), _) | (_, Err(err)) => {
            warn!("Abandoning pickup: {}", err);
            session.cancel();
            return;
        }
    };
    let Ok(mut transform) = transforms.get_mut(slot.entity) else {
        warn!("Abandoning pickup: {} has no transform", slot.name);
        session.cancel();
        return;
    };
    let Some(step) = session.advance(time.delta_secs()) else {
        return;
    };

    if !step.finished {
        *transform = interpolated_pose(resting, &slot.held, camera_transform, step.t);
        return;
    }

    // Snap to the exact held pose under the camera.
    commands.entity(camera).add_child(slot.entity);
    *transform = slot.held;

    if let Ok(mut collider) = colliders.get_mut(slot.entity) {
        collider.enabled = false;
    }
    for descendant in children.iter_descendants(slot.entity) {
        if let Ok(mut collider) = colliders.get_mut(descendant) {
            if collider.kind == SurfaceKind::Screen {
                collider.enabled = true;
            }
        }
    }

    info!("Picked up {}", slot.name);
}

/// Return key puts the held device back at its resting pose.
pub fn handle_return_key(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    catalog: Res<DeviceCatalog>,
    mut session: ResMut<PickupSession>,
    mut transforms: Query<&mut Transform, With<Device>>,
    mut colliders: Query<&mut SurfaceCollider, With<Device>>,
) {
    if !keyboard_input.just_pressed(RETURN_KEY) {
        return;
    }
    if let Err(err) = return_device(
        &mut commands,
        &catalog,
        &mut session,
        &mut transforms,
        &mut colliders,
    ) {
        if err.is_ignorable() {
            debug!("Return ignored: {}", err);
        } else {
            warn!("Return failed: {}", err);
        }
    }
}

fn return_device(
    commands: &mut Commands,
    catalog: &DeviceCatalog,
    session: &mut PickupSession,
    transforms: &mut Query<&mut Transform, With<Device>>,
    colliders: &mut Query<&mut SurfaceCollider, With<Device>>,
) -> Result<(), ShowroomError> {
    let index = session.current_index().ok_or(ShowroomError::InvalidStateTransition {
        from: session.phase().label(),
        requested: "return a device",
    })?;
    let resting = catalog.resting(index)?;
    let device = session
        .current_device(catalog)
        .ok_or(ShowroomError::InvalidDeviceIndex {
            index,
            len: catalog.len(),
        })?;
    let name = session.current_device_name(catalog).to_string();
    session.release()?;

    commands.entity(device).remove_parent();
    if let Ok(mut transform) = transforms.get_mut(device) {
        *transform = resting.to_transform();
    }
    if let Ok(mut collider) = colliders.get_mut(device) {
        collider.enabled = true;
    }

    info!("Returned {}", name);
    Ok(())
}
