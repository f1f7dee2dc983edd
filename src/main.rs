mod abilities;
mod camera;
mod player;
mod settings;
mod world;

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::PresentMode,
};

use abilities::AbilitiesPlugin;
use camera::CameraPlugin;
use player::PlayerPlugin;
use settings::SettingsPlugin;
use world::WorldPlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Updraft".to_string(),
                    present_mode: PresentMode::AutoNoVsync,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ))
        .add_plugins((
            SettingsPlugin,
            WorldPlugin,
            AbilitiesPlugin,
            PlayerPlugin,
            CameraPlugin,
        ))
        .run();
}
