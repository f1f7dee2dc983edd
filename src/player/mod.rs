pub mod components;
pub mod systems;

use bevy::prelude::*;

pub use components::{
    CameraController, GravityScale, MovementInput, Player, Velocity, GROUND_LEVEL, PITCH_LIMIT,
    PLAYER_HALF_HEIGHT, PLAYER_MASS, PLAYER_RADIUS,
};

use crate::abilities::systems::drive_abilities;
use systems::{apply_gravity, apply_movement, apply_velocity, orient_to_movement};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_movement, apply_gravity, apply_velocity, orient_to_movement)
                .chain()
                .after(drive_abilities),
        );
    }
}
