//! Movement domain: debug-only test room and probe gizmos.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterController, GameLayer, Ladder, PassableGround};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ladder_color = Color::srgba(0.7, 0.6, 0.3, 0.6);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1200.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -300.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1200.0, 40.0),
        ground_layers,
    ));

    // Passable platform (S + Space to drop through)
    commands.spawn((
        PassableGround,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(300.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(-250.0, -140.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(300.0, 16.0),
        ground_layers,
    ));

    // Ledge reached by the ladder
    commands.spawn((
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(260.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(320.0, 20.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(260.0, 16.0),
        ground_layers,
    ));

    // Ladder from the floor to just above the ledge (hold K to climb)
    commands.spawn((
        Ladder,
        Sprite {
            color: ladder_color,
            custom_size: Some(Vec2::new(32.0, 340.0)),
            ..default()
        },
        Transform::from_xyz(200.0, -110.0, -0.5),
        RigidBody::Static,
        Collider::rectangle(32.0, 340.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers,
    ));
}

/// Draw the ladder exit probe while climbing.
pub(crate) fn draw_ladder_probe(mut gizmos: Gizmos, query: Query<&CharacterController>) {
    for controller in &query {
        if let Some(probe) = controller.last_ladder_probe() {
            gizmos.line_2d(probe.origin, probe.end(), Color::srgb(1.0, 0.0, 1.0));
        }
    }
}
