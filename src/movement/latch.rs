//! Movement domain: edge latch bridging the frame and physics clocks.
//!
//! Input is sampled every rendered frame but consumed on the fixed physics
//! step. Each latch is sticky: recording ORs into it and only the code path
//! that acts on a request clears it, so a one-frame press survives any
//! number of frames between physics steps.

use crate::movement::MovementInput;

/// Requests raised by one frame of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub jump: bool,
    pub repair: bool,
    pub fall: bool,
}

impl From<&MovementInput> for InputEdges {
    fn from(input: &MovementInput) -> Self {
        Self {
            jump: input.jump_just_pressed,
            repair: input.repair_just_pressed,
            // Down + jump held together requests a drop through the platform
            fall: input.jump_held && input.down_held,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    jump: bool,
    repair: bool,
    fall: bool,
}

impl InputLatch {
    /// OR a frame's edges into the latch. A pending request is never dropped here.
    pub fn record(&mut self, edges: InputEdges) {
        self.jump |= edges.jump;
        self.repair |= edges.repair;
        self.fall |= edges.fall;
    }

    pub fn jump_pending(&self) -> bool {
        self.jump
    }

    pub fn fall_pending(&self) -> bool {
        self.fall
    }

    pub fn repair_pending(&self) -> bool {
        self.repair
    }

    /// Clear jump and fall after a physics step acted on them, returning what was pending.
    pub fn consume_jump_and_fall(&mut self) -> (bool, bool) {
        let pending = (self.jump, self.fall);
        self.jump = false;
        self.fall = false;
        pending
    }

    /// Only the repair action's completion clears this.
    pub fn clear_repair(&mut self) {
        self.repair = false;
    }
}
