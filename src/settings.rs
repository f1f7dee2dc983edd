use bevy::prelude::*;
use serde::Deserialize;

const SETTINGS_PATH: &str = "assets/settings.json";

/// Host-side movement tuning. The ability state machine's own constants
/// live next to it in `abilities::state`; these numbers shape the body it
/// drives.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    pub max_walk_speed: f32,
    pub max_fly_speed: f32,
    pub acceleration: f32,
    pub braking_deceleration: f32,
    /// How much of the acceleration is available while falling.
    pub air_control: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    /// Orient-to-movement turn rate, degrees per second.
    pub rotation_rate: f32,
    pub mouse_sensitivity: f32,
    pub camera_boom_length: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            max_walk_speed: 500.0,
            max_fly_speed: 600.0,
            acceleration: 2000.0,
            braking_deceleration: 2000.0,
            air_control: 0.55,
            jump_velocity: 700.0,
            gravity: 980.0,
            rotation_rate: 500.0,
            mouse_sensitivity: 0.003,
            camera_boom_length: 400.0,
        }
    }
}

impl MovementSettings {
    /// Read overrides from disk when present; a missing file is not worth
    /// a warning, a malformed one is.
    pub fn load() -> Self {
        let Ok(text) = std::fs::read_to_string(SETTINGS_PATH) else {
            return Self::default();
        };
        match serde_json::from_str(&text) {
            Ok(settings) => {
                info!("Loaded movement settings from {SETTINGS_PATH}");
                settings
            }
            Err(err) => {
                warn!("Ignoring malformed {SETTINGS_PATH}: {err}");
                Self::default()
            }
        }
    }
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(MovementSettings::load());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_with_defaults() {
        let settings: MovementSettings =
            serde_json::from_str(r#"{ "max_walk_speed": 650.0 }"#).unwrap();
        assert_eq!(settings.max_walk_speed, 650.0);
        assert_eq!(
            settings.jump_velocity,
            MovementSettings::default().jump_velocity
        );
    }

    #[test]
    fn test_empty_settings_are_the_defaults() {
        let settings: MovementSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.max_fly_speed, 600.0);
        assert_eq!(settings.air_control, 0.55);
    }
}
