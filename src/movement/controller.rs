//! Movement domain: the character movement state machine.
//!
//! The controller never talks to the engine directly. Each physics step it is
//! handed a [`PhysicsBody`], an [`InputSampler`] and an [`AnimationSink`];
//! each frame it receives latched input edges and the frame delta. Zone
//! overlaps reach it as [`ZoneEvent`]s.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::{
    Bounds, Contact, Facing, InputEdges, InputLatch, LadderProbe, MovementTuning, RepairAction,
    VelocitySmoother, classify_grounded, ground_layer_contacts,
};

/// Whether the body is moved by the solver or only by the velocity we give it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    #[default]
    Simulated,
    Kinematic,
}

/// Physics queries and commands the controller needs from its body.
pub trait PhysicsBody {
    /// Contacts touching the body this step.
    fn contacts(&self) -> &[Contact];
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Additive impulse, integrated by the physics step that follows.
    fn apply_impulse(&mut self, impulse: Vec2);
    fn body_mode(&self) -> BodyMode;
    fn set_body_mode(&mut self, mode: BodyMode);
    /// Whether the character's own collider is a non-solid trigger.
    fn is_trigger(&self) -> bool;
    fn set_trigger(&mut self, trigger: bool);
    fn bounds(&self) -> Bounds;
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    /// Ray cast against ground-layer geometry only.
    fn cast_ground_ray(&self, origin: Vec2, direction: Dir2, distance: f32) -> bool;
}

/// Per-step analog input.
pub trait InputSampler {
    /// Horizontal axis in [-1, 1]
    fn horizontal_axis(&self) -> f32;
    /// Vertical axis in [-1, 1], only read while climbing
    fn vertical_axis(&self) -> f32;
    fn climb_held(&self) -> bool;
}

/// Receives the visual state driven by movement.
pub trait AnimationSink {
    fn set_moving(&mut self, moving: bool);
    fn set_facing(&mut self, facing: Facing);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Ladder,
    PassableGround,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZonePhase {
    Enter,
    Stay,
    Exit,
}

/// Overlap notification between the character and a tagged zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneEvent {
    pub phase: ZonePhase,
    pub zone: ZoneKind,
    /// World position of the zone's transform
    pub position: Vec2,
}

/// Externally observable movement state. Exactly one holds per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    Grounded,
    Airborne,
    DropThrough,
    LadderClimb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ControlMode {
    #[default]
    Free,
    Dropping,
    Climbing,
}

#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    tuning: MovementTuning,
    latch: InputLatch,
    smoother: VelocitySmoother,
    mode: ControlMode,
    grounded: bool,
    facing: Facing,
    repair: RepairAction,
    last_probe: Option<LadderProbe>,
}

impl CharacterController {
    pub fn new(tuning: MovementTuning) -> Self {
        let repair = RepairAction::new(tuning.repair_duration);
        Self {
            tuning,
            latch: InputLatch::default(),
            smoother: VelocitySmoother::default(),
            mode: ControlMode::Free,
            grounded: false,
            facing: Facing::default(),
            repair,
            last_probe: None,
        }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    pub fn movement_state(&self) -> MovementState {
        match self.mode {
            ControlMode::Climbing => MovementState::LadderClimb,
            ControlMode::Dropping => MovementState::DropThrough,
            ControlMode::Free if self.grounded => MovementState::Grounded,
            ControlMode::Free => MovementState::Airborne,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Busy while a repair is requested or counting down.
    pub fn is_repairing(&self) -> bool {
        self.latch.repair_pending()
    }

    /// The probe cast on the most recent climbing step.
    pub fn last_ladder_probe(&self) -> Option<LadderProbe> {
        self.last_probe
    }

    /// Frame clock: latch this frame's input edges.
    pub fn record_input(&mut self, edges: InputEdges) {
        self.latch.record(edges);
    }

    /// Frame clock: advance the repair countdown.
    pub fn tick_logic(&mut self, delta: Duration) {
        if self.repair.tick(delta) {
            self.latch.clear_repair();
            debug!("Repair finished");
        }
    }

    /// Physics clock: run one fixed step.
    pub fn fixed_tick(
        &mut self,
        dt: f32,
        body: &mut impl PhysicsBody,
        input: &impl InputSampler,
        animation: &mut impl AnimationSink,
    ) {
        if self.mode == ControlMode::Climbing {
            self.climb(body, input);
            return;
        }

        self.grounded = classify_grounded(body.contacts());

        if self.mode == ControlMode::Free && self.grounded && self.latch.fall_pending() {
            body.set_velocity(Vec2::ZERO);
            body.set_trigger(true);
            self.mode = ControlMode::Dropping;
            info!("Dropping through platform");
        }
        let dropping = self.mode == ControlMode::Dropping;

        let velocity = body.velocity();
        let speed = if dropping {
            0.0
        } else {
            self.tuning.horizontal_speed
        };
        let target = Vec2::new(input.horizontal_axis().clamp(-1.0, 1.0) * speed, velocity.y);
        body.set_velocity(
            self.smoother
                .approach(velocity, target, self.tuning.smooth_time, dt),
        );

        let abs_x = velocity.x.abs();
        if abs_x > self.tuning.move_deadzone {
            self.facing = Facing::from_sign(velocity.x);
            animation.set_facing(self.facing);
        }
        animation.set_moving(!dropping && abs_x > self.tuning.move_deadzone);

        // Jump and fall stay latched until a non-dropping step consumes them
        if dropping {
            return;
        }

        if self.grounded && self.latch.jump_pending() {
            self.grounded = false;
            body.apply_impulse(Vec2::Y * self.tuning.jump_impulse);
            debug!("Jump impulse {}", self.tuning.jump_impulse);
        }

        if self.latch.repair_pending() && self.repair.start() {
            debug!("Repair started");
        }

        self.latch.consume_jump_and_fall();
    }

    /// Feed a zone overlap notification into the state machine.
    pub fn handle_zone_event(
        &mut self,
        event: ZoneEvent,
        body: &mut impl PhysicsBody,
        input: &impl InputSampler,
    ) {
        match (event.zone, event.phase) {
            (ZoneKind::Ladder, ZonePhase::Stay) => {
                if self.mode == ControlMode::Free && input.climb_held() {
                    self.enter_ladder(event.position, body);
                }
            }
            (ZoneKind::PassableGround, ZonePhase::Exit) => {
                if self.mode == ControlMode::Dropping {
                    body.set_trigger(false);
                    self.mode = ControlMode::Free;
                    info!("Cleared passable platform, collider solid again");
                }
            }
            _ => {}
        }
    }

    fn enter_ladder(&mut self, ladder_position: Vec2, body: &mut impl PhysicsBody) {
        let position = body.position();
        body.set_position(Vec2::new(
            ladder_position.x,
            position.y + self.tuning.ladder_entry_nudge,
        ));
        body.set_body_mode(BodyMode::Kinematic);
        body.set_velocity(Vec2::ZERO);
        self.grounded = false;
        self.mode = ControlMode::Climbing;
        info!("Grabbed ladder at x={}", ladder_position.x);
    }

    fn climb(&mut self, body: &mut impl PhysicsBody, input: &impl InputSampler) {
        let vertical = input.vertical_axis().clamp(-1.0, 1.0);
        body.set_velocity(Vec2::new(0.0, vertical * self.tuning.ladder_speed));

        let probe = LadderProbe::from_bounds(body.bounds(), self.tuning.ladder_probe_distance);
        self.last_probe = Some(probe);
        let probe_hit = body.cast_ground_ray(probe.origin, Dir2::NEG_Y, probe.distance);
        let ground_contacts = ground_layer_contacts(body.contacts());

        if self.tuning.ladder_exit.should_exit(ground_contacts, probe_hit) {
            body.set_body_mode(BodyMode::Simulated);
            self.mode = ControlMode::Free;
            self.last_probe = None;
            info!(
                "Left ladder (ground contacts={}, probe hit={})",
                ground_contacts, probe_hit
            );
        }
    }
}
