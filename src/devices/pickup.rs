use bevy::prelude::*;

use super::components::{DeviceCatalog, RestingPose};
use crate::error::ShowroomError;

/// Lifecycle of the single pickup session: Idle -> Animating -> Held -> Idle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PickupPhase {
    #[default]
    Idle,
    Animating { device: usize, timer: f32 },
    Held { device: usize },
}

impl PickupPhase {
    pub fn label(&self) -> &'static str {
        match self {
            PickupPhase::Idle => "idle",
            PickupPhase::Animating { .. } => "animating",
            PickupPhase::Held { .. } => "holding",
        }
    }
}

/// One frame of pickup animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    pub device: usize,
    /// Eased interpolation factor in [0, 1].
    pub t: f32,
    pub finished: bool,
}

/// Which device, if any, is being picked up or held.
#[derive(Resource, Debug)]
pub struct PickupSession {
    phase: PickupPhase,
    /// Multiplier on frame time; 3.0 completes the animation in a third of a second.
    speed: f32,
}

impl PickupSession {
    pub fn new(speed: f32) -> Self {
        Self {
            phase: PickupPhase::Idle,
            speed,
        }
    }

    pub fn phase(&self) -> PickupPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == PickupPhase::Idle
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.phase, PickupPhase::Held { .. })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, PickupPhase::Animating { .. })
    }

    /// Index of the held device; `None` while idle or still animating.
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            PickupPhase::Held { device } => Some(device),
            _ => None,
        }
    }

    pub fn current_device_name<'a>(&self, catalog: &'a DeviceCatalog) -> &'a str {
        self.current_index()
            .and_then(|index| catalog.get(index).ok())
            .map_or("None", |slot| slot.name.as_str())
    }

    pub fn current_device(&self, catalog: &DeviceCatalog) -> Option<Entity> {
        self.current_index()
            .and_then(|index| catalog.get(index).ok())
            .map(|slot| slot.entity)
    }

    /// Starts animating `index` towards the camera. Re-entrant calls are refused.
    pub fn begin(&mut self, index: usize, catalog: &DeviceCatalog) -> Result<(), ShowroomError> {
        if !self.is_idle() {
            return Err(ShowroomError::InvalidStateTransition {
                from: self.phase.label(),
                requested: "pick up a device",
            });
        }
        catalog.resting(index)?;

        self.phase = PickupPhase::Animating {
            device: index,
            timer: 0.0,
        };
        Ok(())
    }

    /// Advances the animation timer; the step with `finished` set moves the session to Held.
    pub fn advance(&mut self, delta_secs: f32) -> Option<AnimationStep> {
        let PickupPhase::Animating { device, timer } = self.phase else {
            return None;
        };

        let timer = timer + delta_secs * self.speed;
        let finished = timer >= 1.0;
        let t = ease_in_out(timer.clamp(0.0, 1.0));

        self.phase = if finished {
            PickupPhase::Held { device }
        } else {
            PickupPhase::Animating { device, timer }
        };

        Some(AnimationStep { device, t, finished })
    }

    /// Drops an in-flight animation, leaving the device wherever it was last placed.
    pub fn cancel(&mut self) {
        if self.is_animating() {
            self.phase = PickupPhase::Idle;
        }
    }

    /// Ends a hold, returning the index of the device to put back.
    pub fn release(&mut self) -> Result<usize, ShowroomError> {
        match self.phase {
            PickupPhase::Held { device } => {
                self.phase = PickupPhase::Idle;
                Ok(device)
            }
            other => Err(ShowroomError::InvalidStateTransition {
                from: other.label(),
                requested: "return a device",
            }),
        }
    }

    pub fn status_text(&self, catalog: &DeviceCatalog) -> String {
        match self.phase {
            PickupPhase::Held { .. } => format!(
                "Holding: {}\n(Press R to return)",
                self.current_device_name(catalog)
            ),
            PickupPhase::Animating { .. } => "Picking up device...".to_string(),
            PickupPhase::Idle => format!(
                "Click device to pick up\n({})",
                catalog.names().join(", ")
            ),
        }
    }
}

/// Ease-in-out curve with zero slope at both ends.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// World transform of a device part-way between its resting pose and the held pose
/// under the camera's current transform.
pub fn interpolated_pose(
    resting: RestingPose,
    held: &Transform,
    camera: &Transform,
    t: f32,
) -> Transform {
    let target_translation = camera.transform_point(held.translation);
    let target_rotation = camera.rotation * held.rotation;

    Transform {
        translation: resting.translation.lerp(target_translation, t),
        rotation: resting.rotation.lerp(target_rotation, t),
        scale: Vec3::ONE.lerp(held.scale, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowroomConfig;

    fn catalog_with_poses() -> DeviceCatalog {
        let config = ShowroomConfig::default();
        let mut world = World::new();
        let mut catalog = DeviceCatalog::default();
        for device in &config.devices {
            let entity = world.spawn_empty().id();
            let index = catalog.register(entity, device);
            catalog.capture_resting(index, &device.resting_transform());
        }
        catalog
    }

    #[test]
    fn pickup_walks_through_all_phases() {
        let catalog = catalog_with_poses();
        let mut session = PickupSession::new(3.0);

        session.begin(1, &catalog).unwrap();
        assert!(session.is_animating());
        assert_eq!(session.current_index(), None);
        assert!(matches!(
            session.phase(),
            PickupPhase::Animating { device: 1, .. }
        ));

        let step = session.advance(0.1).unwrap();
        assert!(!step.finished);
        assert!(step.t > 0.0 && step.t < 1.0);

        let step = session.advance(0.5).unwrap();
        assert!(step.finished);
        assert_eq!(step.t, 1.0);
        assert!(session.is_holding());
        assert_eq!(session.current_device_name(&catalog), "iPad");
        assert_eq!(
            session.current_device(&catalog),
            Some(catalog.get(1).unwrap().entity)
        );

        assert_eq!(session.release().unwrap(), 1);
        assert!(session.is_idle());
        assert_eq!(session.current_device_name(&catalog), "None");
        assert_eq!(session.current_device(&catalog), None);
    }

    #[test]
    fn pickup_is_refused_while_busy() {
        let catalog = catalog_with_poses();
        let mut session = PickupSession::new(3.0);
        session.begin(0, &catalog).unwrap();

        let err = session.begin(2, &catalog).unwrap_err();
        assert!(err.is_ignorable());
        assert!(matches!(
            session.phase(),
            PickupPhase::Animating { device: 0, .. }
        ));

        session.advance(1.0);
        let before = session.phase();
        assert!(session.begin(2, &catalog).is_err());
        assert_eq!(session.phase(), before);
    }

    #[test]
    fn return_is_refused_unless_holding() {
        let catalog = catalog_with_poses();
        let mut session = PickupSession::new(3.0);
        assert!(session.release().unwrap_err().is_ignorable());

        session.begin(0, &catalog).unwrap();
        assert!(session.release().unwrap_err().is_ignorable());
        assert!(session.is_animating());
    }

    #[test]
    fn invalid_and_uninitialized_devices_are_rejected() {
        let config = ShowroomConfig::default();
        let mut world = World::new();
        let mut catalog = DeviceCatalog::default();
        catalog.register(world.spawn_empty().id(), &config.devices[0]);

        let mut session = PickupSession::new(3.0);
        assert!(matches!(
            session.begin(7, &catalog),
            Err(ShowroomError::InvalidDeviceIndex { index: 7, len: 1 })
        ));
        assert!(matches!(
            session.begin(0, &catalog),
            Err(ShowroomError::UninitializedDevice(0))
        ));
        assert!(session.is_idle());
    }

    #[test]
    fn cancel_only_drops_an_animation() {
        let catalog = catalog_with_poses();
        let mut session = PickupSession::new(3.0);
        session.begin(0, &catalog).unwrap();
        session.cancel();
        assert!(session.is_idle());

        session.begin(0, &catalog).unwrap();
        session.advance(1.0);
        session.cancel();
        assert!(session.is_holding());
    }

    #[test]
    fn advance_is_inert_when_not_animating() {
        let mut session = PickupSession::new(3.0);
        assert!(session.advance(0.5).is_none());
        assert!(session.is_idle());
    }

    #[test]
    fn status_text_tracks_phase() {
        let catalog = catalog_with_poses();
        let mut session = PickupSession::new(3.0);
        assert_eq!(
            session.status_text(&catalog),
            "Click device to pick up\n(iPhone, iPad, Laptop)"
        );
        session.begin(2, &catalog).unwrap();
        assert_eq!(session.status_text(&catalog), "Picking up device...");
        session.advance(1.0);
        assert_eq!(
            session.status_text(&catalog),
            "Holding: Laptop\n(Press R to return)"
        );
    }

    #[test]
    fn easing_curve_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out(0.1) < 0.1);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn interpolation_follows_live_camera() {
        let resting = RestingPose {
            translation: Vec3::new(0.0, 0.75, -1.5),
            rotation: Quat::IDENTITY,
        };
        let held = Transform::from_xyz(0.0, 0.0, -0.5).with_scale(Vec3::splat(2.0));
        let camera = Transform::from_xyz(3.0, 1.6, 0.0);

        let start = interpolated_pose(resting, &held, &camera, 0.0);
        assert_eq!(start.translation, resting.translation);
        assert_eq!(start.scale, Vec3::ONE);

        let end = interpolated_pose(resting, &held, &camera, 1.0);
        assert!((end.translation - Vec3::new(3.0, 1.6, -0.5)).length() < 1e-5);
        assert_eq!(end.scale, Vec3::splat(2.0));

        let turned = camera.with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let end = interpolated_pose(resting, &held, &turned, 1.0);
        // Camera now faces -X, so the held offset lands to its left in world space.
        assert!((end.translation - Vec3::new(2.5, 1.6, 0.0)).length() < 1e-5);
    }
}
