use bevy::prelude::*;

use super::components::{SurfaceCollider, SurfaceKind};
use crate::devices::Device;

/// Nearest collider struck by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
    pub kind: SurfaceKind,
}

/// Ray against an oriented box, returning the entry distance along `direction`.
///
/// `direction` must be normalized; the box is `half_extents` around the local
/// origin of `transform`, which may carry rotation and non-uniform scale.
pub fn ray_box_distance(
    origin: Vec3,
    direction: Vec3,
    transform: &GlobalTransform,
    half_extents: Vec3,
) -> Option<f32> {
    let world_to_local = transform.affine().inverse();
    let local_origin = world_to_local.transform_point3(origin);
    let local_dir = world_to_local.transform_vector3(direction);

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = local_origin[axis];
        let d = local_dir[axis];
        let h = half_extents[axis];

        if d.abs() < f32::EPSILON {
            // Parallel to this slab
            if o < -h || o > h {
                return None;
            }
            continue;
        }

        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));

        if t_min > t_max {
            return None;
        }
    }

    if t_max < 0.0 {
        return None;
    }

    // Local parameter equals world distance since the affine map is linear in t.
    Some(t_min.max(0.0))
}

/// Nearest enabled collider hit within `max_distance`.
pub fn cast_ray<'a>(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    colliders: impl IntoIterator<Item = (Entity, &'a GlobalTransform, &'a SurfaceCollider)>,
) -> Option<RayHit> {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }

    let mut closest: Option<RayHit> = None;
    for (entity, transform, collider) in colliders {
        if !collider.enabled {
            continue;
        }
        let Some(distance) = ray_box_distance(origin, direction, transform, collider.half_extents)
        else {
            continue;
        };
        if distance > max_distance {
            continue;
        }
        if closest.map_or(true, |hit| distance < hit.distance) {
            closest = Some(RayHit {
                entity,
                distance,
                kind: collider.kind,
            });
        }
    }
    closest
}

/// Walks up the hierarchy from `entity` to the first ancestor (or itself) that is a device.
pub fn owning_device(
    entity: Entity,
    parents: &Query<&Parent>,
    devices: &Query<&Device>,
) -> Option<usize> {
    let mut current = entity;
    loop {
        if let Ok(device) = devices.get(current) {
            return Some(device.index);
        }
        current = parents.get(current).ok()?.get();
    }
}
