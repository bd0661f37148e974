//! Movement domain: sprite presentation of the controller outputs.

use bevy::prelude::*;

use crate::movement::{AnimationSink, CharacterAnimation, CharacterController, Facing};

const IDLE_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const MOVING_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
const REPAIR_COLOR: Color = Color::srgb(0.95, 0.75, 0.3);

impl AnimationSink for CharacterAnimation {
    fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }
}

pub(crate) fn apply_animation(
    mut query: Query<(&CharacterAnimation, &CharacterController, &mut Sprite)>,
) {
    for (animation, controller, mut sprite) in &mut query {
        // Sheet art faces left
        sprite.flip_x = animation.facing == Facing::Right;
        sprite.color = if controller.is_repairing() {
            REPAIR_COLOR
        } else if animation.moving {
            MOVING_COLOR
        } else {
            IDLE_COLOR
        };
    }
}
