//! Movement domain: fixed-step controller driver.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::systems::body::{AvianBody, BodySnapshot};
use crate::movement::systems::zones::ZoneMessage;
use crate::movement::{
    CharacterAnimation, CharacterController, Contact, GameLayer, MovementInput, PLAYER_SIZE,
    Player,
};

/// Contacts touching `entity`, normals pointing toward it. Sensor overlaps are skipped.
fn gather_contacts(
    entity: Entity,
    collisions: &Collisions,
    layer_query: &Query<&CollisionLayers>,
    sensor_query: &Query<(), With<Sensor>>,
) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for pair in collisions.collisions_with(entity) {
        if !pair.is_touching() {
            continue;
        }

        // Manifold normals point from collider1 to collider2
        let (other, sign) = if pair.collider1 == entity {
            (pair.collider2, -1.0)
        } else {
            (pair.collider1, 1.0)
        };

        if sensor_query.get(other).is_ok() {
            continue;
        }

        let ground_layer = layer_query
            .get(other)
            .is_ok_and(|layers| layers.memberships.has_all(GameLayer::Ground));

        for manifold in &pair.manifolds {
            contacts.push(Contact::new(manifold.normal * sign, ground_layer));
        }
    }

    contacts
}

pub(crate) fn run_controllers(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    collisions: Collisions,
    mut zone_events: MessageReader<ZoneMessage>,
    layer_query: Query<&CollisionLayers>,
    sensor_query: Query<(), With<Sensor>>,
    mut query: Query<
        (
            Entity,
            &mut CharacterController,
            &mut CharacterAnimation,
            &mut LinearVelocity,
            &RigidBody,
            &mut Transform,
            &Collider,
            &ComputedMass,
            Has<Sensor>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let messages: Vec<ZoneMessage> = zone_events.read().copied().collect();

    for (
        entity,
        mut controller,
        mut animation,
        velocity,
        rigid_body,
        transform,
        collider,
        mass,
        is_sensor,
    ) in &mut query
    {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => PLAYER_SIZE / 2.0,
        };

        let snapshot = BodySnapshot {
            velocity: velocity.0,
            rigid_body: *rigid_body,
            position: transform.translation.truncate(),
            half_extents,
            inverse_mass: mass.inverse(),
            is_sensor,
        };
        let contacts = gather_contacts(entity, &collisions, &layer_query, &sensor_query);
        let mut body = AvianBody::new(entity, &spatial_query, snapshot, contacts);

        for message in messages.iter().filter(|m| m.entity == entity) {
            controller.handle_zone_event(message.event, &mut body, &*input);
        }
        controller.fixed_tick(dt, &mut body, &*input, &mut *animation);

        body.write_back(&mut commands, velocity, transform);
    }
}
