//! Content domain: data-driven controller tuning.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use loader::{load_controller_tuning, parse_controller_tuning};

use std::path::Path;

use bevy::prelude::*;

use crate::movement::MovementTuning;

pub const CONTROLLER_TUNING_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match load_controller_tuning(Path::new(CONTROLLER_TUNING_PATH)) {
            Ok(tuning) => {
                info!("Loaded controller tuning from {}", CONTROLLER_TUNING_PATH);
                tuning
            }
            Err(e) => {
                warn!("{}; using default controller tuning", e);
                MovementTuning::default()
            }
        };
        app.insert_resource(tuning);
    }
}
