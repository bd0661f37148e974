//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::LadderExitPolicy;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal run speed at full axis deflection
    pub horizontal_speed: f32,
    /// Time constant of the velocity smoothing, in seconds
    pub smooth_time: f32,
    /// Upward impulse applied on jump
    pub jump_impulse: f32,
    /// Horizontal speed below which facing and the moving flag are left alone
    pub move_deadzone: f32,
    pub ladder_speed: f32,
    /// Length of the downward ground probe used to leave a ladder
    pub ladder_probe_distance: f32,
    /// Upward nudge applied when grabbing a ladder
    pub ladder_entry_nudge: f32,
    pub ladder_exit: LadderExitPolicy,
    /// Seconds the repair action stays busy
    pub repair_duration: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            horizontal_speed: 320.0,
            smooth_time: 0.05,
            jump_impulse: 480.0,
            move_deadzone: 0.1,
            ladder_speed: 160.0,
            ladder_probe_distance: 12.0,
            ladder_entry_nudge: 16.0,
            ladder_exit: LadderExitPolicy::default(),
            repair_duration: 0.1,
        }
    }
}

impl MovementTuning {
    /// Check that every value is usable by the controller.
    pub fn validate(&self) -> Result<(), String> {
        let non_negative = [
            ("horizontal_speed", self.horizontal_speed),
            ("jump_impulse", self.jump_impulse),
            ("move_deadzone", self.move_deadzone),
            ("ladder_speed", self.ladder_speed),
            ("ladder_probe_distance", self.ladder_probe_distance),
            ("ladder_entry_nudge", self.ladder_entry_nudge),
            ("repair_duration", self.repair_duration),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and >= 0, got {value}"));
            }
        }

        if !self.smooth_time.is_finite() || self.smooth_time <= 0.0 || self.smooth_time > 1.0 {
            return Err(format!(
                "smooth_time must be in (0, 1], got {}",
                self.smooth_time
            ));
        }

        Ok(())
    }
}

/// Raw input sampled once per frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub down_held: bool,
    pub climb_held: bool,
    pub repair_just_pressed: bool,
}
