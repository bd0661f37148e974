//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ladder landings)
    Ground,
    /// Player character
    Player,
    /// Sensors (ladders, triggers) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for one-way platforms the player can drop through
#[derive(Component, Debug)]
pub struct PassableGround;

/// Marker for ladder sensor volumes
#[derive(Component, Debug)]
pub struct Ladder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn from_sign(x: f32) -> Self {
        if x > 0.0 { Facing::Right } else { Facing::Left }
    }
}

/// Animation-facing outputs of the controller.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharacterAnimation {
    pub moving: bool,
    pub facing: Facing,
}
