use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ShowroomError;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "SHOWROOM_CONFIG";

/// Config file looked up in the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "showroom.json";

/// Shape of the prop spawned for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Phone,
    Tablet,
    Laptop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub name: String,
    pub kind: DeviceKind,
    /// World position on the table before any pickup.
    pub resting_position: [f32; 3],
    /// Yaw on the table, in degrees.
    #[serde(default)]
    pub resting_yaw: f32,
    /// Camera-local offset while held.
    pub held_position: [f32; 3],
    /// Camera-local euler angles (X, Y, Z) in degrees, applied Z then X then Y.
    pub held_rotation: [f32; 3],
    pub held_scale: [f32; 3],
}

impl DeviceConfig {
    pub fn resting_transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.resting_position))
            .with_rotation(Quat::from_rotation_y(self.resting_yaw.to_radians()))
    }

    /// Target local transform under the camera once the pickup completes.
    pub fn held_transform(&self) -> Transform {
        let [x, y, z] = self.held_rotation;
        Transform {
            translation: Vec3::from_array(self.held_position),
            rotation: Quat::from_euler(
                EulerRot::YXZ,
                y.to_radians(),
                x.to_radians(),
                z.to_radians(),
            ),
            scale: Vec3::from_array(self.held_scale),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub name: String,
    /// Linear sRGB tint shown on the device screens.
    pub tint: [f32; 3],
    /// Optional image under `assets/` used as the screen texture.
    #[serde(default)]
    pub image: Option<String>,
}

/// Tunables for the whole scene. Every field has a default so partial files work.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomConfig {
    pub devices: Vec<DeviceConfig>,
    pub screens: Vec<ScreenConfig>,
    pub pickup_speed: f32,
    pub pickup_range: f32,
    pub interaction_range: f32,
    pub screen_cooldown: f32,
    pub flash_duration: f32,
    pub flash_color: [f32; 3],
    pub initial_light_intensity: f32,
    pub max_light_intensity: f32,
    pub light_step: f32,
    pub crosshair_normal: [f32; 4],
    pub crosshair_interactable: [f32; 4],
    pub mouse_sensitivity: f32,
    /// Vertical look limit in degrees.
    pub pitch_limit: f32,
    pub move_speed: f32,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            devices: vec![
                DeviceConfig {
                    name: "iPhone".to_string(),
                    kind: DeviceKind::Phone,
                    resting_position: [-0.6, 0.755, -1.5],
                    resting_yaw: 10.0,
                    held_position: [0.0, -0.03, -0.35],
                    held_rotation: [80.0, -5.0, 3.0],
                    held_scale: [1.2, 1.2, 1.2],
                },
                DeviceConfig {
                    name: "iPad".to_string(),
                    kind: DeviceKind::Tablet,
                    resting_position: [0.0, 0.755, -1.5],
                    resting_yaw: 0.0,
                    held_position: [0.0, -0.04, -0.5],
                    held_rotation: [85.0, -3.0, 2.0],
                    held_scale: [1.0, 1.0, 1.0],
                },
                DeviceConfig {
                    name: "Laptop".to_string(),
                    kind: DeviceKind::Laptop,
                    resting_position: [0.6, 0.76, -1.5],
                    resting_yaw: -10.0,
                    held_position: [0.0, -0.15, -0.6],
                    held_rotation: [20.0, 0.0, 0.0],
                    held_scale: [0.8, 0.8, 0.8],
                },
            ],
            screens: vec![
                ScreenConfig {
                    name: "Main Page".to_string(),
                    tint: [0.95, 0.95, 0.98],
                    image: None,
                },
                ScreenConfig {
                    name: "Feature Page".to_string(),
                    tint: [0.55, 0.75, 0.95],
                    image: None,
                },
                ScreenConfig {
                    name: "Settings Page".to_string(),
                    tint: [0.6, 0.9, 0.6],
                    image: None,
                },
            ],
            pickup_speed: 3.0,
            pickup_range: 3.0,
            interaction_range: 5.0,
            screen_cooldown: 0.5,
            flash_duration: 0.15,
            flash_color: [0.0, 1.0, 1.0],
            initial_light_intensity: 1.2,
            max_light_intensity: 3.0,
            light_step: 0.1,
            crosshair_normal: [1.0, 1.0, 1.0, 0.7],
            crosshair_interactable: [1.0, 0.92, 0.016, 1.0],
            mouse_sensitivity: 0.003,
            pitch_limit: 60.0,
            move_speed: 5.0,
        }
    }
}

impl ShowroomConfig {
    /// Loads the config named by `SHOWROOM_CONFIG`, then `showroom.json`, then defaults.
    pub fn load() -> Result<Self, ShowroomError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_path(Path::new(&path));
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::from_path(path)
        } else {
            info!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ShowroomError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ShowroomError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents).map_err(|err| match err {
            ShowroomError::ConfigParse { source, .. } => ShowroomError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ShowroomError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|source| ShowroomError::ConfigParse {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShowroomError> {
        if self.devices.is_empty() {
            return Err(ShowroomError::InvalidConfig(
                "at least one device is required".to_string(),
            ));
        }
        let non_negative = [
            ("pickup_speed", self.pickup_speed),
            ("pickup_range", self.pickup_range),
            ("interaction_range", self.interaction_range),
            ("screen_cooldown", self.screen_cooldown),
            ("flash_duration", self.flash_duration),
            ("light_step", self.light_step),
            ("move_speed", self.move_speed),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ShowroomError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if self.pickup_speed == 0.0 {
            return Err(ShowroomError::InvalidConfig(
                "pickup_speed must be positive".to_string(),
            ));
        }
        if !(self.max_light_intensity > 0.0 && self.max_light_intensity.is_finite()) {
            return Err(ShowroomError::InvalidConfig(
                "max_light_intensity must be positive".to_string(),
            ));
        }
        // Look clamps pitch to +/- this many degrees.
        if !(self.pitch_limit > 0.0 && self.pitch_limit <= 90.0) {
            return Err(ShowroomError::InvalidConfig(format!(
                "pitch_limit must be in (0, 90] degrees, got {}",
                self.pitch_limit
            )));
        }
        Ok(())
    }

    pub fn pitch_limit_radians(&self) -> f32 {
        self.pitch_limit.to_radians()
    }
}

pub fn srgb(rgb: [f32; 3]) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}

pub fn srgba(rgba: [f32; 4]) -> Color {
    Color::srgba(rgba[0], rgba[1], rgba[2], rgba[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ShowroomConfig::default();
        assert!(config.validate().is_ok());
        let names: Vec<&str> = config.devices.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["iPhone", "iPad", "Laptop"]);
        assert_eq!(config.screens.len(), 3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ShowroomConfig::from_json(r#"{ "screen_cooldown": 0.25 }"#).unwrap();
        assert_eq!(config.screen_cooldown, 0.25);
        assert_eq!(config.pickup_range, 3.0);
        assert_eq!(config.devices.len(), 3);
    }

    #[test]
    fn device_kind_parses_lowercase() {
        let json = r#"{
            "devices": [{
                "name": "Pager",
                "kind": "phone",
                "resting_position": [0.0, 1.0, 0.0],
                "held_position": [0.0, 0.0, -0.4],
                "held_rotation": [90.0, 0.0, 0.0],
                "held_scale": [1.0, 1.0, 1.0]
            }]
        }"#;
        let config = ShowroomConfig::from_json(json).unwrap();
        assert_eq!(config.devices[0].kind, DeviceKind::Phone);
        assert_eq!(config.devices[0].resting_yaw, 0.0);
    }

    #[test]
    fn empty_device_list_is_rejected() {
        let err = ShowroomConfig::from_json(r#"{ "devices": [] }"#).unwrap_err();
        assert!(matches!(err, ShowroomError::InvalidConfig(_)));
    }

    #[test]
    fn negative_range_is_rejected() {
        let err = ShowroomConfig::from_json(r#"{ "pickup_range": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ShowroomError::InvalidConfig(_)));
    }

    #[test]
    fn pitch_limit_outside_range_is_rejected() {
        for json in [
            r#"{ "pitch_limit": -10 }"#,
            r#"{ "pitch_limit": 0 }"#,
            r#"{ "pitch_limit": 120 }"#,
        ] {
            let err = ShowroomConfig::from_json(json).unwrap_err();
            assert!(matches!(err, ShowroomError::InvalidConfig(_)), "{json}");
        }
        let mut config = ShowroomConfig::default();
        config.pitch_limit = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ShowroomConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ShowroomError::ConfigParse { .. }));
    }

    #[test]
    fn held_rotation_applies_x_tilt() {
        let device = DeviceConfig {
            name: "Slab".to_string(),
            kind: DeviceKind::Tablet,
            resting_position: [0.0; 3],
            resting_yaw: 0.0,
            held_position: [0.0, 0.0, -0.5],
            held_rotation: [90.0, 0.0, 0.0],
            held_scale: [1.0; 3],
        };
        let held = device.held_transform();
        // Screen normal (+Y) turns towards the viewer (+Z).
        let normal = held.rotation * Vec3::Y;
        assert!((normal - Vec3::Z).length() < 1e-5);
    }
}
