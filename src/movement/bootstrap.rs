//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterAnimation, CharacterController, GameLayer, MovementTuning, Player};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    info!(
        "Spawning player: speed={}, smooth_time={}, jump_impulse={}, ladder_exit={:?}",
        tuning.horizontal_speed, tuning.smooth_time, tuning.jump_impulse, tuning.ladder_exit
    );

    commands.spawn(player_bundle(&tuning, Vec2::ZERO));
}

/// Everything a controllable player needs, standing at `position`.
pub(crate) fn player_bundle(tuning: &MovementTuning, position: Vec2) -> impl Bundle {
    (
        // Identity & Movement
        (
            Player,
            CharacterController::new(tuning.clone()),
            CharacterAnimation::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Mass(1.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollidingEntities::default(),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    )
}
