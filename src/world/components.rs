use bevy::prelude::*;

/// What a collider represents when struck by the interaction ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Solid geometry; blocks rays but is not itself clickable.
    Body,
    /// A device screen that advances the screen deck when clicked.
    Screen,
}

/// Oriented box collider centered on the entity's origin.
#[derive(Component, Debug, Clone, Copy)]
pub struct SurfaceCollider {
    pub half_extents: Vec3,
    pub kind: SurfaceKind,
    pub enabled: bool,
}

impl SurfaceCollider {
    pub fn new(half_extents: Vec3, kind: SurfaceKind) -> Self {
        Self {
            half_extents,
            kind,
            enabled: true,
        }
    }

    pub fn body(half_extents: Vec3) -> Self {
        Self::new(half_extents, SurfaceKind::Body)
    }

    pub fn screen(half_extents: Vec3) -> Self {
        Self::new(half_extents, SurfaceKind::Screen)
    }
}
