//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use serde::Deserialize;

use crate::movement::MovementTuning;

/// Schema version this build understands for controller.ron
pub const CONTROLLER_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Controller tuning (controller.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ControllerFile {
    pub schema_version: u32,
    pub player: MovementTuning,
}
