use bevy::prelude::*;

use crate::config::DeviceConfig;
use crate::error::ShowroomError;

/// Root of a pickable device prop. Its own collider is the primary collider.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Device {
    pub index: usize,
}

/// World pose of a device on the table, captured once after spawning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestingPose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl RestingPose {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
        }
    }

    /// Unparented world transform with unit scale.
    pub fn to_transform(self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.rotation,
            scale: Vec3::ONE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeviceSlot {
    pub name: String,
    pub entity: Entity,
    pub resting: Option<RestingPose>,
    /// Camera-local transform once held.
    pub held: Transform,
}

/// Every device in the scene, addressed by index.
#[derive(Resource, Debug, Default)]
pub struct DeviceCatalog {
    slots: Vec<DeviceSlot>,
}

impl DeviceCatalog {
    pub fn register(&mut self, entity: Entity, config: &DeviceConfig) -> usize {
        self.slots.push(DeviceSlot {
            name: config.name.clone(),
            entity,
            resting: None,
            held: config.held_transform(),
        });
        self.slots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&DeviceSlot, ShowroomError> {
        self.slots.get(index).ok_or(ShowroomError::InvalidDeviceIndex {
            index,
            len: self.slots.len(),
        })
    }

    pub fn resting(&self, index: usize) -> Result<RestingPose, ShowroomError> {
        self.get(index)?
            .resting
            .ok_or(ShowroomError::UninitializedDevice(index))
    }

    /// Records the resting pose for `index`; later calls keep the first capture.
    pub fn capture_resting(&mut self, index: usize, transform: &Transform) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.resting.is_none() => {
                slot.resting = Some(RestingPose::from_transform(transform));
                true
            }
            _ => false,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.slots.iter().map(|slot| slot.name.as_str()).collect()
    }
}
