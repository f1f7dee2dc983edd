use bevy::prelude::*;

/// Movement mode of the character body.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementMode {
    /// Grounded movement.
    #[default]
    Normal,
    /// Airborne under gravity.
    Falling,
    /// Gliding; gravity does not apply, thrust comes from the abilities.
    Flying,
}

/// Motion capabilities the ability state machine drives each frame.
///
/// One implementation per backend: `BevyMotionDriver` borrows the player's
/// components in-game, and the tests use a recording mock.
pub trait MotionDriver {
    fn movement_mode(&self) -> MovementMode;
    fn set_movement_mode(&mut self, mode: MovementMode);

    /// Multiplier over the body's gravity.
    fn set_gravity_scale(&mut self, scale: f32);

    /// Accumulate control input for this frame, `direction * scale`.
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);

    /// Instant velocity change; when `velocity_change` is false the impulse
    /// is scaled by the body's mass.
    fn add_impulse(&mut self, impulse: Vec3, velocity_change: bool);

    /// Launch the body upward. Charge accounting stays with the caller.
    fn commit_jump(&mut self);
    fn release_jump(&mut self);

    /// Unit vector of the current look rotation.
    fn look_direction(&self) -> Vec3;

    /// Yaw of the control rotation, radians.
    fn control_yaw(&self) -> f32;

    /// The character body's facing direction.
    fn forward_vector(&self) -> Vec3;

    fn add_yaw_input(&mut self, delta: f32);
    fn add_pitch_input(&mut self, delta: f32);
}
