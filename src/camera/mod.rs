pub mod systems;

use bevy::prelude::*;

pub use systems::FollowCamera;

use crate::player::systems::orient_to_movement;
use systems::{grab_cursor, toggle_cursor_grab, update_camera};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, grab_cursor).add_systems(
            Update,
            (toggle_cursor_grab, update_camera.after(orient_to_movement)),
        );
    }
}
