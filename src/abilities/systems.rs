use bevy::{input::mouse::MouseMotion, prelude::*, window::CursorGrabMode};

use crate::player::{
    CameraController, GravityScale, MovementInput, Player, Velocity, PITCH_LIMIT, PLAYER_MASS,
};
use crate::settings::MovementSettings;

use super::driver::{MotionDriver, MovementMode};
use super::state::AbilityState;

/// Discrete ability actions gathered for one frame.
#[derive(Event, Debug, Clone, Copy)]
pub enum AbilityInput {
    Move(Vec2),
    Look(Vec2),
    JumpPressed,
    JumpReleased,
    DashPressed,
    GlidePressed,
    GlideReleased,
}

/// Translate keyboard and mouse state into ability actions.
pub fn gather_ability_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window>,
    mut events: EventWriter<AbilityInput>,
) {
    let mut direction = Vec2::ZERO;
    if keyboard_input.pressed(KeyCode::KeyW) {
        direction.y += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) {
        direction.y -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if direction != Vec2::ZERO {
        // Normalize diagonal movement
        events.send(AbilityInput::Move(direction.normalize()));
    }

    if keyboard_input.just_pressed(KeyCode::Space) {
        events.send(AbilityInput::JumpPressed);
    }
    if keyboard_input.just_released(KeyCode::Space) {
        events.send(AbilityInput::JumpReleased);
    }
    if keyboard_input.just_pressed(KeyCode::ShiftLeft) {
        events.send(AbilityInput::DashPressed);
    }
    if keyboard_input.just_pressed(KeyCode::KeyF) {
        events.send(AbilityInput::GlidePressed);
    }
    if keyboard_input.just_released(KeyCode::KeyF) {
        events.send(AbilityInput::GlideReleased);
    }

    // Only process mouse look when cursor is grabbed
    let Ok(window) = windows.get_single() else {
        return;
    };
    if window.cursor_options.grab_mode == CursorGrabMode::None {
        mouse_motion.clear();
        return;
    }

    let mut look = Vec2::ZERO;
    for event in mouse_motion.read() {
        look += event.delta;
    }
    if look != Vec2::ZERO {
        events.send(AbilityInput::Look(look));
    }
}

/// Motion driver over the player's components.
pub struct BevyMotionDriver<'a> {
    pub velocity: &'a mut Velocity,
    pub mode: &'a mut MovementMode,
    pub gravity: &'a mut GravityScale,
    pub pending: &'a mut MovementInput,
    pub controller: &'a mut CameraController,
    pub transform: &'a Transform,
    pub settings: &'a MovementSettings,
}

impl MotionDriver for BevyMotionDriver<'_> {
    fn movement_mode(&self) -> MovementMode {
        *self.mode
    }

    fn set_movement_mode(&mut self, mode: MovementMode) {
        *self.mode = mode;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity.0 = scale;
    }

    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending.0 += direction * scale;
    }

    fn add_impulse(&mut self, impulse: Vec3, velocity_change: bool) {
        let delta = if velocity_change {
            impulse
        } else {
            impulse / PLAYER_MASS
        };
        self.velocity.0 += delta;
    }

    fn commit_jump(&mut self) {
        self.velocity.0.y = self.settings.jump_velocity;
        *self.mode = MovementMode::Falling;
    }

    fn release_jump(&mut self) {
        // The launch is an instantaneous velocity change; nothing to unwind.
    }

    fn look_direction(&self) -> Vec3 {
        Quat::from_euler(EulerRot::YXZ, self.controller.yaw, self.controller.pitch, 0.0)
            * Vec3::NEG_Z
    }

    fn control_yaw(&self) -> f32 {
        self.controller.yaw
    }

    fn forward_vector(&self) -> Vec3 {
        self.transform.forward().as_vec3()
    }

    fn add_yaw_input(&mut self, delta: f32) {
        self.controller.yaw -= delta * self.settings.mouse_sensitivity;
    }

    fn add_pitch_input(&mut self, delta: f32) {
        // Clamp pitch to prevent flipping
        self.controller.pitch = (self.controller.pitch - delta * self.settings.mouse_sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// Dispatch the frame's ability actions, then advance the state machine.
pub fn drive_abilities(
    time: Res<Time>,
    settings: Res<MovementSettings>,
    mut events: EventReader<AbilityInput>,
    mut query: Query<
        (
            &mut AbilityState,
            &mut Velocity,
            &mut MovementMode,
            &mut GravityScale,
            &mut MovementInput,
            &mut CameraController,
            &Transform,
        ),
        With<Player>,
    >,
) {
    let Ok((mut state, mut velocity, mut mode, mut gravity, mut pending, mut controller, transform)) =
        query.get_single_mut()
    else {
        return;
    };

    let mut driver = BevyMotionDriver {
        velocity: &mut *velocity,
        mode: &mut *mode,
        gravity: &mut *gravity,
        pending: &mut *pending,
        controller: &mut *controller,
        transform,
        settings: &settings,
    };

    for event in events.read() {
        match *event {
            AbilityInput::Move(input) => state.move_input(input, &mut driver),
            AbilityInput::Look(input) => state.look_input(input, &mut driver),
            AbilityInput::JumpPressed => state.jump_pressed(&mut driver),
            AbilityInput::JumpReleased => state.jump_released(&mut driver),
            AbilityInput::DashPressed => state.dash_pressed(&mut driver),
            AbilityInput::GlidePressed => state.glide_pressed(&mut driver),
            AbilityInput::GlideReleased => state.glide_released(&mut driver),
        }
    }

    state.tick(time.delta_secs(), &mut driver);
}
