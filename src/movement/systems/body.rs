//! Movement domain: avian2d rigid body exposed to the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyMode, Bounds, Contact, GameLayer, PhysicsBody};

/// Component values read at the start of a physics step.
pub(crate) struct BodySnapshot {
    pub velocity: Vec2,
    pub rigid_body: RigidBody,
    pub position: Vec2,
    pub half_extents: Vec2,
    pub inverse_mass: f32,
    pub is_sensor: bool,
}

/// Buffers the controller's writes and applies them once the step is done.
pub(crate) struct AvianBody<'q, 'w, 's> {
    entity: Entity,
    spatial_query: &'q SpatialQuery<'w, 's>,
    contacts: Vec<Contact>,
    velocity: Vec2,
    mode: BodyMode,
    trigger: bool,
    position: Vec2,
    half_extents: Vec2,
    inverse_mass: f32,
    mode_changed: bool,
    trigger_changed: bool,
    position_changed: bool,
}

impl<'q, 'w, 's> AvianBody<'q, 'w, 's> {
    pub(crate) fn new(
        entity: Entity,
        spatial_query: &'q SpatialQuery<'w, 's>,
        snapshot: BodySnapshot,
        contacts: Vec<Contact>,
    ) -> Self {
        let mode = match snapshot.rigid_body {
            RigidBody::Kinematic => BodyMode::Kinematic,
            _ => BodyMode::Simulated,
        };
        Self {
            entity,
            spatial_query,
            contacts,
            velocity: snapshot.velocity,
            mode,
            trigger: snapshot.is_sensor,
            position: snapshot.position,
            half_extents: snapshot.half_extents,
            inverse_mass: snapshot.inverse_mass,
            mode_changed: false,
            trigger_changed: false,
            position_changed: false,
        }
    }

    /// Flush buffered writes. Components are only touched when the step
    /// actually changed them, so avian's change-driven syncs stay quiet.
    pub(crate) fn write_back(
        self,
        commands: &mut Commands,
        mut velocity: Mut<LinearVelocity>,
        mut transform: Mut<Transform>,
    ) {
        velocity.set_if_neq(LinearVelocity(self.velocity));

        if self.position_changed {
            transform.translation.x = self.position.x;
            transform.translation.y = self.position.y;
        }

        // RigidBody is immutable, so a mode switch replaces the component
        if self.mode_changed {
            let rigid_body = match self.mode {
                BodyMode::Simulated => RigidBody::Dynamic,
                BodyMode::Kinematic => RigidBody::Kinematic,
            };
            commands.entity(self.entity).insert(rigid_body);
        }

        if self.trigger_changed {
            if self.trigger {
                commands.entity(self.entity).insert(Sensor);
            } else {
                commands.entity(self.entity).remove::<Sensor>();
            }
        }
    }
}

impl PhysicsBody for AvianBody<'_, '_, '_> {
    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass;
    }

    fn body_mode(&self) -> BodyMode {
        self.mode
    }

    fn set_body_mode(&mut self, mode: BodyMode) {
        self.mode_changed |= self.mode != mode;
        self.mode = mode;
    }

    fn is_trigger(&self) -> bool {
        self.trigger
    }

    fn set_trigger(&mut self, trigger: bool) {
        self.trigger_changed |= self.trigger != trigger;
        self.trigger = trigger;
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            center: self.position,
            extents: self.half_extents,
        }
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.position_changed = true;
    }

    fn cast_ground_ray(&self, origin: Vec2, direction: Dir2, distance: f32) -> bool {
        // Filter to only hit Ground layer entities, never ourselves
        let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground)
            .with_excluded_entities([self.entity]);

        self.spatial_query
            .cast_ray(origin, direction, distance, true, &ground_filter)
            .is_some()
    }
}
