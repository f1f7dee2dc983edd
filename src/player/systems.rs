use bevy::prelude::*;

use crate::abilities::MovementMode;
use crate::settings::MovementSettings;

use super::components::{
    GravityScale, MovementInput, Player, Velocity, GROUND_LEVEL, PLAYER_HALF_HEIGHT,
};

/// Turn the accumulated control input into horizontal velocity.
pub fn apply_movement(
    time: Res<Time>,
    settings: Res<MovementSettings>,
    mut query: Query<(&mut Velocity, &mut MovementInput, &MovementMode), With<Player>>,
) {
    let Ok((mut velocity, mut input, mode)) = query.get_single_mut() else {
        return;
    };

    // Control input saturates at unit length; extra thrust scale does not
    // push past the mode's speed cap.
    let control = std::mem::take(&mut input.0).clamp_length_max(1.0);
    let dt = time.delta_secs();

    if *mode == MovementMode::Flying {
        // Thrust-driven flight; with no thrust the body hovers.
        velocity.0 = control * settings.max_fly_speed;
        return;
    }

    let mut horizontal = Vec3::new(velocity.0.x, 0.0, velocity.0.z);
    let planar = Vec3::new(control.x, 0.0, control.z);
    let speed = horizontal.length();

    if speed > settings.max_walk_speed {
        // Over the movement cap (dash burst). Airborne momentum is kept;
        // the ground bleeds the excess off.
        if *mode == MovementMode::Normal {
            let braked = (speed - settings.braking_deceleration * dt).max(settings.max_walk_speed);
            horizontal *= braked / speed;
        }
    } else if planar != Vec3::ZERO {
        let control_scale = if *mode == MovementMode::Falling {
            settings.air_control
        } else {
            1.0
        };
        horizontal += planar * settings.acceleration * control_scale * dt;
        horizontal = horizontal.clamp_length_max(settings.max_walk_speed);
    } else if *mode == MovementMode::Normal && speed > 0.0 {
        let braked = (speed - settings.braking_deceleration * dt).max(0.0);
        horizontal *= braked / speed;
    }

    velocity.0.x = horizontal.x;
    velocity.0.z = horizontal.z;
}

pub fn apply_gravity(
    time: Res<Time>,
    settings: Res<MovementSettings>,
    mut query: Query<(&Transform, &mut Velocity, &GravityScale, &MovementMode), With<Player>>,
) {
    let Ok((transform, mut velocity, gravity_scale, mode)) = query.get_single_mut() else {
        return;
    };

    if *mode == MovementMode::Flying {
        return;
    }

    let is_grounded = transform.translation.y <= GROUND_LEVEL + PLAYER_HALF_HEIGHT + 0.01;
    if !is_grounded {
        velocity.0.y -= settings.gravity * gravity_scale.0 * time.delta_secs();
    }
}

pub fn apply_velocity(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut Velocity, &mut MovementMode), With<Player>>,
) {
    let Ok((mut transform, mut velocity, mut mode)) = query.get_single_mut() else {
        return;
    };

    transform.translation += velocity.0 * time.delta_secs();

    // Ground collision
    if transform.translation.y < GROUND_LEVEL + PLAYER_HALF_HEIGHT {
        transform.translation.y = GROUND_LEVEL + PLAYER_HALF_HEIGHT;
        if velocity.0.y < 0.0 {
            velocity.0.y = 0.0;
        }
        if *mode == MovementMode::Falling {
            *mode = MovementMode::Normal;
        }
    }
}

/// Turn the character toward its direction of travel.
pub fn orient_to_movement(
    time: Res<Time>,
    settings: Res<MovementSettings>,
    mut query: Query<(&mut Transform, &Velocity), With<Player>>,
) {
    let Ok((mut transform, velocity)) = query.get_single_mut() else {
        return;
    };

    let horizontal = Vec3::new(velocity.0.x, 0.0, velocity.0.z);
    if horizontal.length_squared() < 1.0 {
        return;
    }

    let target = (-horizontal.x).atan2(-horizontal.z);
    let (current, ..) = transform.rotation.to_euler(EulerRot::YXZ);
    let max_step = settings.rotation_rate.to_radians() * time.delta_secs();
    transform.rotation = Quat::from_rotation_y(turn_toward(current, target, max_step));
}

/// Step a yaw angle toward a target along the shorter arc, at most
/// `max_step` radians.
fn turn_toward(current: f32, target: f32, max_step: f32) -> f32 {
    use std::f32::consts::{PI, TAU};

    let mut delta = (target - current).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    current + delta.clamp(-max_step, max_step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_turn_toward_reaches_close_targets() {
        assert!((turn_toward(0.0, 0.1, 1.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_turn_toward_clamps_to_max_step() {
        assert!((turn_toward(0.0, PI - 0.1, 0.5) - 0.5).abs() < 1e-6);
        assert!((turn_toward(0.0, -(PI - 0.1), 0.5) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_turn_toward_takes_the_short_way_around() {
        // From just below +pi to just above -pi is a small positive step
        // across the seam, not a near-full negative sweep.
        let stepped = turn_toward(3.0, -3.0, 1.0);
        assert!((stepped - (3.0 + (2.0 * PI - 6.0))).abs() < 1e-5);
    }
}
