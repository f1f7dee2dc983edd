use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Velocity in world units per second.
#[derive(Component, Default)]
pub struct Velocity(pub Vec3);

/// Control input accumulated over a frame; consumed and cleared by the
/// movement system.
#[derive(Component, Default)]
pub struct MovementInput(pub Vec3);

/// Gravity multiplier on the body; gentle fall pulls it below 1.
#[derive(Component)]
pub struct GravityScale(pub f32);

impl Default for GravityScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Control rotation driven by look input; the boom camera and the movement
/// basis both read it.
#[derive(Component, Default)]
pub struct CameraController {
    pub pitch: f32,
    pub yaw: f32,
}

// Body constants (world units are centimeters)
pub const PLAYER_MASS: f32 = 100.0;
pub const PLAYER_RADIUS: f32 = 42.0;
pub const PLAYER_HALF_HEIGHT: f32 = 96.0;
pub const GROUND_LEVEL: f32 = 0.0;

// Mouse look constants
pub const PITCH_LIMIT: f32 = 1.5; // ~86 degrees, just under 90
