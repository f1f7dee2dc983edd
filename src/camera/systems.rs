use bevy::{prelude::*, window::CursorGrabMode};

use crate::player::{CameraController, Player, PLAYER_HALF_HEIGHT};
use crate::settings::MovementSettings;

/// Marker component for the follow camera.
#[derive(Component)]
pub struct FollowCamera;

pub fn grab_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::Confined;
    window.cursor_options.visible = false;
}

pub fn toggle_cursor_grab(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        let Ok(mut window) = windows.get_single_mut() else {
            return;
        };
        match window.cursor_options.grab_mode {
            CursorGrabMode::None => {
                window.cursor_options.grab_mode = CursorGrabMode::Confined;
                window.cursor_options.visible = false;
            }
            _ => {
                window.cursor_options.grab_mode = CursorGrabMode::None;
                window.cursor_options.visible = true;
            }
        }
    }
}

/// Boom camera: hangs behind a pivot above the player's center along the
/// control rotation and looks back at it.
pub fn update_camera(
    settings: Res<MovementSettings>,
    player: Query<(&Transform, &CameraController), (With<Player>, Without<FollowCamera>)>,
    mut camera: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok((player_transform, controller)) = player.get_single() else {
        return;
    };
    let Ok(mut camera_transform) = camera.get_single_mut() else {
        return;
    };

    let pivot = player_transform.translation + Vec3::Y * PLAYER_HALF_HEIGHT * 0.5;
    let rotation = Quat::from_euler(EulerRot::YXZ, controller.yaw, controller.pitch, 0.0);

    camera_transform.translation = pivot + rotation * Vec3::Z * settings.camera_boom_length;
    camera_transform.look_at(pivot, Vec3::Y);
}
