//! Movement domain: ladder and passable-platform zone notifications.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{Ladder, PassableGround, Player, ZoneEvent, ZoneKind, ZonePhase};

/// A zone notification addressed to one character.
#[derive(Debug, Clone, Copy)]
pub struct ZoneMessage {
    pub entity: Entity,
    pub event: ZoneEvent,
}

impl Message for ZoneMessage {}

/// Translate avian overlap state into zone messages for the controllers.
pub(crate) fn collect_zone_events(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut zone_events: MessageWriter<ZoneMessage>,
    player_query: Query<(Entity, &CollidingEntities), With<Player>>,
    fresh_trigger_query: Query<(), (With<Player>, Added<Sensor>)>,
    ladder_query: Query<&GlobalTransform, With<Ladder>>,
    platform_query: Query<&GlobalTransform, With<PassableGround>>,
) {
    let zone_of = |entity: Entity| -> Option<(ZoneKind, Vec2)> {
        if let Ok(transform) = ladder_query.get(entity) {
            return Some((ZoneKind::Ladder, transform.translation().truncate()));
        }
        if let Ok(transform) = platform_query.get(entity) {
            return Some((ZoneKind::PassableGround, transform.translation().truncate()));
        }
        None
    };

    let mut edges = Vec::new();
    for event in collision_start_events.read() {
        edges.push((ZonePhase::Enter, event.collider1, event.collider2));
    }
    for event in collision_end_events.read() {
        edges.push((ZonePhase::Exit, event.collider1, event.collider2));
    }

    for (phase, collider1, collider2) in edges {
        let pairs = [(collider1, collider2), (collider2, collider1)];
        for (player_entity, zone_entity) in pairs {
            if player_query.get(player_entity).is_err() {
                continue;
            }
            // Becoming a sensor ends every touching pair at once, including
            // the platform we are about to fall through
            if phase == ZonePhase::Exit && fresh_trigger_query.contains(player_entity) {
                continue;
            }
            let Some((zone, position)) = zone_of(zone_entity) else {
                continue;
            };
            zone_events.write(ZoneMessage {
                entity: player_entity,
                event: ZoneEvent {
                    phase,
                    zone,
                    position,
                },
            });
        }
    }

    // Ladders are polled every step while overlapping
    for (player_entity, colliding) in &player_query {
        for &other in colliding.iter() {
            let Ok(transform) = ladder_query.get(other) else {
                continue;
            };
            zone_events.write(ZoneMessage {
                entity: player_entity,
                event: ZoneEvent {
                    phase: ZonePhase::Stay,
                    zone: ZoneKind::Ladder,
                    position: transform.translation().truncate(),
                },
            });
        }
    }
}
