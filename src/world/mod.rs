pub mod setup;

use bevy::prelude::*;

use setup::setup_world;

// Arena dimensions (world units are centimeters)
pub const ARENA_SIZE: f32 = 20_000.0;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_world);
    }
}
