//! Core domain: camera, world gravity and the physics clock.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics steps per second (0.02 s per step)
pub const PHYSICS_HZ: f64 = 50.0;

/// World gravity in pixels per second squared
pub const GRAVITY: f32 = 1200.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
