use bevy::prelude::*;

use super::driver::{MotionDriver, MovementMode};

// Ability tuning
pub const MAX_JUMPS: u32 = 3;
pub const JUMP_RECHARGE_TIME: f32 = 3.0;
pub const HARD_JUMP_TIME: f32 = 1.0;
pub const GENTLE_FALL_GRAVITY_SCALE: f32 = 0.15;
pub const DASH_COOLDOWN: f32 = 5.0;
pub const DASH_IMPULSE: f32 = 100_000.0;
pub const GLIDE_DIVE_THRESHOLD: f32 = -0.5;
pub const GLIDE_BRAKE_FACTOR: f32 = 0.75;

/// Accumulated look angles while gliding. Written by the look handler,
/// currently read by nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlyingDirection {
    pub pitch: f32,
    pub yaw: f32,
}

/// Per-character ability state: jump charges, hold-to-gentle-fall, glide
/// thrust and dash cooldown. Mutated only by its own tick and handlers.
#[derive(Component, Clone, Debug)]
pub struct AbilityState {
    /// True from jump press until release.
    pub is_jumping: bool,
    /// Seconds the current jump has been held.
    pub jump_held_time: f32,
    pub remaining_jumps: u32,
    pub jump_recharge_timer: f32,
    /// Counts down after a dash; a new dash needs it strictly negative.
    pub dash_timer: f32,
    pub glide_speed: f32,
    pub flying_direction: FlyingDirection,
}

impl Default for AbilityState {
    fn default() -> Self {
        Self {
            is_jumping: false,
            jump_held_time: 0.0,
            remaining_jumps: MAX_JUMPS,
            jump_recharge_timer: 0.0,
            dash_timer: 0.0,
            glide_speed: 0.0,
            flying_direction: FlyingDirection::default(),
        }
    }
}

impl AbilityState {
    /// Advance timers and glide thrust by one frame. Step order matters:
    /// the glide step reads state the earlier steps may have changed.
    pub fn tick(&mut self, dt: f32, driver: &mut dyn MotionDriver) {
        if self.is_jumping {
            self.jump_held_time += dt;
            if self.jump_held_time >= HARD_JUMP_TIME {
                driver.set_gravity_scale(GENTLE_FALL_GRAVITY_SCALE);
            }
        }

        self.dash_timer -= dt;

        if self.remaining_jumps < MAX_JUMPS {
            self.jump_recharge_timer += dt;
            if self.jump_recharge_timer >= JUMP_RECHARGE_TIME {
                self.remaining_jumps += 1;
                self.jump_recharge_timer = 0.0;
            }
        }

        if driver.movement_mode() == MovementMode::Flying {
            let look = driver.look_direction();

            // Diving steeper than the threshold builds speed, anything
            // shallower bleeds it off.
            if look.y < GLIDE_DIVE_THRESHOLD {
                self.glide_speed += look.y.abs() * dt;
            } else {
                self.glide_speed -= GLIDE_BRAKE_FACTOR * look.y.abs() * dt;
            }

            if self.glide_speed < 0.0 {
                self.glide_speed = 0.0;
            }
            if self.glide_speed > 0.0 {
                driver.add_movement_input(look, self.glide_speed);
            }
        }
    }

    /// Whether the hard-jump window is still open.
    pub fn can_jump(&self) -> bool {
        self.jump_held_time < HARD_JUMP_TIME
    }

    pub fn jump_pressed(&mut self, driver: &mut dyn MotionDriver) {
        if self.remaining_jumps == 0 {
            return;
        }
        if !self.is_jumping {
            self.is_jumping = true;
        }
        if self.can_jump() {
            driver.commit_jump();
        }
    }

    /// Releasing is what spends the charge; the held timer and gravity
    /// treatment reset with it.
    pub fn jump_released(&mut self, driver: &mut dyn MotionDriver) {
        self.is_jumping = false;
        self.remaining_jumps = self.remaining_jumps.saturating_sub(1);
        self.jump_held_time = 0.0;
        driver.set_gravity_scale(1.0);
        driver.release_jump();
    }

    pub fn glide_pressed(&self, driver: &mut dyn MotionDriver) {
        driver.set_movement_mode(MovementMode::Flying);
    }

    pub fn glide_released(&mut self, driver: &mut dyn MotionDriver) {
        driver.set_movement_mode(MovementMode::Falling);
        self.glide_speed = 0.0;
    }

    pub fn dash_pressed(&mut self, driver: &mut dyn MotionDriver) {
        if self.dash_timer < 0.0 {
            let forward = driver.forward_vector();
            driver.add_impulse(forward * DASH_IMPULSE, false);
            self.dash_timer = DASH_COOLDOWN;
        }
    }

    /// Ground/air steering. While flying the glide thrust in `tick` takes
    /// over and stick input is ignored.
    pub fn move_input(&self, input: Vec2, driver: &mut dyn MotionDriver) {
        if driver.movement_mode() == MovementMode::Flying {
            return;
        }

        let yaw = Quat::from_rotation_y(driver.control_yaw());
        let forward = yaw * Vec3::NEG_Z;
        let right = yaw * Vec3::X;

        driver.add_movement_input(forward, input.y);
        driver.add_movement_input(right, input.x);
    }

    pub fn look_input(&mut self, input: Vec2, driver: &mut dyn MotionDriver) {
        driver.add_yaw_input(input.x);
        driver.add_pitch_input(input.y);

        self.flying_direction.yaw += input.x;
        self.flying_direction.pitch += input.y;
    }
}
