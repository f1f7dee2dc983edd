pub mod driver;
pub mod state;
pub mod systems;

use bevy::prelude::*;

pub use driver::{MotionDriver, MovementMode};
pub use state::AbilityState;

use systems::{drive_abilities, gather_ability_input, AbilityInput};

pub struct AbilitiesPlugin;

impl Plugin for AbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AbilityInput>()
            .add_systems(Update, (gather_ability_input, drive_abilities).chain());
    }
}
