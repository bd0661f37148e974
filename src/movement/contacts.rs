//! Movement domain: contact sampling and ground classification.

use bevy::prelude::*;

/// A contact counts as ground when its normal's vertical component exceeds this
/// (roughly 25 degrees from straight up).
pub const GROUND_NORMAL_THRESHOLD: f32 = 0.9;

/// One contact point touching the character this physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Surface normal, pointing toward the character
    pub normal: Vec2,
    /// Whether the other collider sits on the ground layer
    pub ground_layer: bool,
}

impl Contact {
    pub fn new(normal: Vec2, ground_layer: bool) -> Self {
        Self {
            normal,
            ground_layer,
        }
    }
}

/// Recomputed from scratch every step; no hysteresis.
pub fn classify_grounded(contacts: &[Contact]) -> bool {
    contacts
        .iter()
        .any(|contact| contact.normal.y > GROUND_NORMAL_THRESHOLD)
}

/// Number of contacts against ground-layer geometry.
pub fn ground_layer_contacts(contacts: &[Contact]) -> usize {
    contacts.iter().filter(|contact| contact.ground_layer).count()
}
