//! Movement domain: critically damped velocity smoothing.

use bevy::prelude::*;

/// Smallest usable time constant; anything at or below this snaps within a step.
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Move `current` toward `target` as a critically damped spring.
///
/// `rate` is the spring's own velocity and must be carried between calls.
/// The result never passes `target`.
pub fn smooth_damp(current: f32, target: f32, rate: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Pade approximation of exp(-x)
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*rate + omega * change) * dt;
    *rate = (*rate - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *rate = (output - target) / dt;
    }

    output
}

/// Persistent smoothing accumulator for a 2D velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocitySmoother {
    rate: Vec2,
}

impl VelocitySmoother {
    /// Approach `target` from the body's current (unsmoothed) velocity.
    pub fn approach(&mut self, current: Vec2, target: Vec2, smooth_time: f32, dt: f32) -> Vec2 {
        Vec2::new(
            smooth_damp(current.x, target.x, &mut self.rate.x, smooth_time, dt),
            smooth_damp(current.y, target.y, &mut self.rate.y, smooth_time, dt),
        )
    }
}
