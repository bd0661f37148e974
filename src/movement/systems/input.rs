//! Movement domain: input sampling and latching on the frame clock.

use bevy::prelude::*;

use crate::movement::{CharacterController, InputEdges, InputSampler, MovementInput};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (ladder climbing)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.down_held = keyboard.pressed(KeyCode::KeyS);
    input.climb_held = keyboard.pressed(KeyCode::KeyK);
    input.repair_just_pressed = keyboard.just_pressed(KeyCode::KeyR);
}

/// Record this frame's edges into every controller and advance repair timers.
pub(crate) fn latch_input(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut controllers: Query<&mut CharacterController>,
) {
    let edges = InputEdges::from(&*input);
    for mut controller in &mut controllers {
        controller.record_input(edges);
        controller.tick_logic(time.delta());
    }
}

impl InputSampler for MovementInput {
    fn horizontal_axis(&self) -> f32 {
        self.axis.x
    }

    fn vertical_axis(&self) -> f32 {
        self.axis.y
    }

    fn climb_held(&self) -> bool {
        self.climb_held
    }
}
