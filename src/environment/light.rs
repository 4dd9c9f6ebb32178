use bevy::prelude::*;

use super::components::{EnvironmentLight, EnvironmentState};
use crate::config::ShowroomConfig;

/// Point light lumens per unit of slider value.
pub const LUMENS_PER_UNIT: f32 = 1_500_000.0;

pub const LIGHT_DOWN_KEY: KeyCode = KeyCode::BracketLeft;
pub const LIGHT_UP_KEY: KeyCode = KeyCode::BracketRight;

pub fn intensity_to_lumens(value: f32) -> f32 {
    value * LUMENS_PER_UNIT
}

pub fn lumens_to_intensity(lumens: f32) -> f32 {
    lumens / LUMENS_PER_UNIT
}

/// Slider value driving the active environment's light.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightSlider {
    value: f32,
    max: f32,
    step: f32,
}

impl LightSlider {
    pub fn new(value: f32, max: f32, step: f32) -> Self {
        Self {
            value: value.clamp(0.0, max),
            max,
            step,
        }
    }

    pub fn from_config(config: &ShowroomConfig) -> Self {
        Self::new(
            config.initial_light_intensity,
            config.max_light_intensity,
            config.light_step,
        )
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(0.0, self.max);
    }

    /// Moves the value by `steps` increments.
    pub fn nudge(&mut self, steps: i32) {
        self.set(self.value + self.step * steps as f32);
    }

    /// Filled portion of the slider in [0, 1].
    pub fn fraction(&self) -> f32 {
        self.value / self.max
    }

    pub fn label(&self) -> String {
        format!("Light Intensity: {:.1}", self.value)
    }
}

pub fn init_light_slider(mut commands: Commands, config: Res<ShowroomConfig>) {
    commands.insert_resource(LightSlider::from_config(&config));
}

pub fn handle_light_keys(keyboard_input: Res<ButtonInput<KeyCode>>, mut slider: ResMut<LightSlider>) {
    if keyboard_input.just_pressed(LIGHT_DOWN_KEY) {
        slider.nudge(-1);
    }
    if keyboard_input.just_pressed(LIGHT_UP_KEY) {
        slider.nudge(1);
    }
}

/// Writes the slider value to the light of the active environment.
pub fn apply_light_intensity(
    slider: Res<LightSlider>,
    state: Res<EnvironmentState>,
    mut lights: Query<(&EnvironmentLight, &mut PointLight)>,
) {
    if !slider.is_changed() {
        return;
    }
    let lumens = intensity_to_lumens(slider.value());
    for (light, mut point_light) in lights.iter_mut() {
        if light.0 == state.active() && point_light.intensity != lumens {
            point_light.intensity = lumens;
            info!("Light intensity changed to: {:.1}", slider.value());
        }
    }
}

/// After a switch, the slider picks up the newly active light's intensity.
pub fn sync_slider_to_active_light(
    state: Res<EnvironmentState>,
    mut slider: ResMut<LightSlider>,
    lights: Query<(&EnvironmentLight, &PointLight)>,
) {
    if !state.is_changed() || state.is_added() {
        return;
    }
    if let Some((_, point_light)) = lights.iter().find(|(light, _)| light.0 == state.active()) {
        slider.set(lumens_to_intensity(point_light.intensity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clamps_to_range() {
        let mut slider = LightSlider::new(1.2, 3.0, 0.5);
        slider.nudge(10);
        assert_eq!(slider.value(), 3.0);
        slider.nudge(-10);
        assert_eq!(slider.value(), 0.0);
        assert_eq!(LightSlider::new(9.0, 3.0, 0.1).value(), 3.0);
    }

    #[test]
    fn label_has_one_decimal() {
        let slider = LightSlider::new(1.24, 3.0, 0.1);
        assert_eq!(slider.label(), "Light Intensity: 1.2");
    }

    #[test]
    fn lumens_round_trip() {
        assert!((lumens_to_intensity(intensity_to_lumens(0.9)) - 0.9).abs() < 1e-6);
    }
}
