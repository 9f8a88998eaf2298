// Default handler: running and jumping

use anyhow::anyhow;

use crate::core::math;
use crate::engine::control::{AfterUpdateStatus, ControlHandler, HandlerResult};
use crate::game::characters::Character;

/// Bottom-of-stack handler translating input into movement.
///
/// Always activates and never finishes, so a character with this handler at
/// index 0 can never run out of handlers.
#[derive(Debug, Default)]
pub struct LocomotionHandler {
    frames_active: u64,
}

impl LocomotionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames spent in control of the character
    pub fn frames_active(&self) -> u64 {
        self.frames_active
    }
}

impl ControlHandler<Character> for LocomotionHandler {
    fn name(&self) -> &str {
        "locomotion"
    }

    fn update(&mut self, ctx: &mut Character) -> HandlerResult {
        let dt = ctx.delta_time;
        if !dt.is_finite() || dt < 0.0 {
            return Err(anyhow!("invalid frame delta {dt} for {}", ctx.name).into());
        }

        self.frames_active += 1;

        let horizontal = ctx.input.axis.horizontal();
        let acceleration = if ctx.grounded {
            ctx.stats.ground_acceleration
        } else {
            ctx.stats.air_acceleration
        };

        let target_speed = ctx.input.axis.x * ctx.stats.run_speed;
        ctx.velocity.x = math::approach(ctx.velocity.x, target_speed, acceleration * dt);
        ctx.face(horizontal);

        if ctx.input.jump_pressed && ctx.grounded {
            ctx.velocity.y = ctx.stats.jump_velocity;
            ctx.grounded = false;
        }

        Ok(AfterUpdateStatus::Continue)
    }
}
