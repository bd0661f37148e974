//! Movement domain: Bevy systems bridging the engine and the controller.

pub(crate) mod animation;
pub(crate) mod body;
pub(crate) mod input;
pub(crate) mod physics;
pub(crate) mod zones;

pub(crate) use animation::apply_animation;
pub(crate) use input::{latch_input, read_input};
pub(crate) use physics::run_controllers;
pub(crate) use zones::collect_zone_events;
pub use zones::ZoneMessage;
