//! Movement domain: character controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod contacts;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod ladder;
mod latch;
mod repair;
mod resources;
mod smoothing;
mod systems;


pub use bootstrap::PLAYER_SIZE;
pub use components::{CharacterAnimation, Facing, GameLayer, Ladder, PassableGround, Player};
pub use contacts::{Contact, classify_grounded, ground_layer_contacts};
pub use controller::{
    AnimationSink, BodyMode, CharacterController, InputSampler, MovementState, PhysicsBody,
    ZoneEvent, ZoneKind, ZonePhase,
};
pub use ladder::{Bounds, LadderExitPolicy, LadderProbe};
pub use latch::{InputEdges, InputLatch};
pub use repair::RepairAction;
pub use resources::{MovementInput, MovementTuning};
pub use smoothing::{VelocitySmoother, smooth_damp};
pub use systems::ZoneMessage;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_animation, collect_zone_events, latch_input, read_input, run_controllers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CharacterControlPlugin)
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input.before(latch_input), apply_animation.after(latch_input)),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::draw_ladder_probe);
    }
}

/// Controller stepping without keyboard, sprites or spawning. Whoever adds it
/// drives `MovementInput` and spawns the characters.
pub struct CharacterControlPlugin;

impl Plugin for CharacterControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<ZoneMessage>()
            // Frame clock: latch input, run the repair countdown
            .add_systems(Update, latch_input)
            // Physics clock: zone notifications, then the controller step
            .add_systems(FixedUpdate, (collect_zone_events, run_controllers).chain());
    }
}
